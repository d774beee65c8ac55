use thiserror::Error;

#[derive(Error, Debug)]
pub enum WikiRagError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Backend returned status {0}")]
    StatusError(u16),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    ConfigError(#[from] serde_yaml::Error),

    #[error("Storage error: {0}")]
    StorageError(#[from] rusqlite::Error),

    #[error("Storage lock poisoned")]
    LockPoisoned,

    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

impl From<&str> for WikiRagError {
    fn from(error: &str) -> Self {
        WikiRagError::RuntimeError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WikiRagError>;
