use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentationError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type DocumentationResult<T> = Result<T, DocumentationError>;
