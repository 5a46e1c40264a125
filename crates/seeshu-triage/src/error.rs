use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoughAnalysisError {
    #[error("cough sample is empty")]
    EmptySample,
}
