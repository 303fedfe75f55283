use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConicError {
    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ConicError>;
