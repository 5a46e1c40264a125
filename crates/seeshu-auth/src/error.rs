use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing credential: {0}")]
    MissingCredentials(&'static str),

    #[error("authentication failed: {0}")]
    AuthFailed(String),
}
