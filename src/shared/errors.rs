//! Error handling for the application

use thiserror::Error;

/// Processing-related errors
#[derive(Error, Debug, Clone)]
pub enum ProcessingError {
    #[error("Workload failed: {0}")]
    WorkloadFailed(String),

    #[error("Invalid processor state: {0}")]
    InvalidState(String),
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Processing error: {0}")]
    ProcessingError(String),

    #[error("Unknown error")]
    Unknown,
}

impl From<ProcessingError> for AppError {
    fn from(err: ProcessingError) -> Self {
        AppError::ProcessingError(err.to_string())
    }
}
