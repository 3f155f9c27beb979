use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    /// No stored todo matches the requested id. Holds the id as received.
    #[error("Todo with ID {0} not found")]
    NotFound(String),

    #[error("{0}")]
    OperationFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TodoError>;
