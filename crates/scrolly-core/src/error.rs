//! Error type shared by every layer of the story pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Broad category of a [`ScrollyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A story or step field failed validation.
    Validation,
    /// The data source was unreachable, returned an error, or returned a
    /// malformed response.
    Fetch,
    /// Anything that was not anticipated.
    Internal,
}

impl ErrorKind {
    /// Machine-readable code for this kind.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Validation => "validation_error",
            Self::Fetch => "fetch_error",
            Self::Internal => "internal_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A user-actionable error.
///
/// Every error carries the operation that was in progress (`action`), a short
/// description of what went wrong (`message`) and, where remediation is
/// known, a `hint`. The three parts are shown verbatim in the page's error
/// region.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message} ({action})")]
pub struct ScrollyError {
    /// Error category.
    pub kind: ErrorKind,
    /// What operation was in progress.
    pub action: String,
    /// What is wrong.
    pub message: String,
    /// How to fix it, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ScrollyError {
    /// Creates an error of any kind from its parts.
    #[must_use]
    pub fn new(kind: ErrorKind, action: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            action: action.into(),
            message: message.into(),
            hint: None,
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, action, message)
    }

    /// Creates a data-source error.
    #[must_use]
    pub fn fetch(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Fetch, action, message)
    }

    /// Wraps an unexpected error so it still carries the action in progress.
    #[must_use]
    pub fn internal(action: impl Into<String>, source: &dyn std::error::Error) -> Self {
        Self::new(ErrorKind::Internal, action, source.to_string())
    }

    /// Attaches a remediation hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
