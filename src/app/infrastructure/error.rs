use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Front matter error: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    #[error("Unknown direction: {0:?}")]
    UnknownDirection(String),

    #[error("Settings writer is no longer running")]
    WriterClosed,
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
