//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::model::QuestionError;
use quiz_core::{GradeError, StoreError};

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Grade(#[from] GradeError),
}

impl SessionError {
    /// True for the one user-facing failure: submitting nothing.
    #[must_use]
    pub fn is_no_selection(&self) -> bool {
        matches!(self, SessionError::Grade(GradeError::NoSelection))
    }
}

/// Errors emitted while reading a question file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed question file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question #{index} is invalid: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: QuestionError,
    },
}
