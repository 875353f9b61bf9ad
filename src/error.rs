use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store validation failed: {0}")]
    StoreValidation(String),

    #[error("Git operation failed: {0}")]
    GitOperation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
