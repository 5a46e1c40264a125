use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no record found for id: {id}")]
    NotFound { id: String },
}
