use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("upstream completion call failed: {0}")]
    Upstream(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("relay misconfigured: {0}")]
    Config(String),
}
