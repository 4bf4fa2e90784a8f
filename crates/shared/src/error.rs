//! Error types for Pinnwand

use pinnwand_adapter::FixtureError;
use pinnwand_domain::{ReportError, RepositoryError};
use pinnwand_usecase::GeneratorError;
use thiserror::Error;

/// General Pinnwand error type
#[derive(Debug, Error)]
pub enum PinnwandError {
    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Command line arguments that do not fit the requested action
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PinnwandError>;
