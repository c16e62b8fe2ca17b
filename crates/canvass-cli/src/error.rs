//! CLI error types

use thiserror::Error;

/// CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(#[from] canvass_api::ApiError),

    #[error("Bootstrap error: {0}")]
    Bootstrap(#[from] canvass_session::BootstrapError),

    #[error("Submission error: {0}")]
    Submission(#[from] canvass_engine::SubmissionError),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
