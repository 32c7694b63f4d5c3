use thiserror::Error;

#[derive(Error, Debug)]
pub enum TixError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Input error: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, TixError>;
