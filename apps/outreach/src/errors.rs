use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type shared by both pipelines.
///
/// Recoverable conditions (empty candidate list, missing contact) never become an
/// `AppError`; they are absorbed by the workflow and turned into a terminal draft.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input file '{}' does not exist. {}", .path.display(), .hint)]
    MissingInput { path: PathBuf, hint: String },

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn missing_input(path: impl Into<PathBuf>, hint: impl Into<String>) -> Self {
        AppError::MissingInput {
            path: path.into(),
            hint: hint.into(),
        }
    }
}
