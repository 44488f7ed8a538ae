//! Error contract shared by model, registry and service layers.
//!
//! # Responsibility
//! - Name the two failure kinds a caller can trigger.
//! - Keep "no data" out of the error path: aggregates return `Option`.
//!
//! # Invariants
//! - A call that fails leaves every collection it touches unchanged.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RecordResult<T> = Result<T, RecordError>;

/// Caller-facing failure for roster mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A value passed in does not satisfy its required role, e.g. an id
    /// that does not name a known student or course.
    InvalidArgument(String),
    /// The call is well-typed but conflicts with current ownership, e.g.
    /// grading an enrollment owned by another student.
    InvalidState(String),
}

impl RecordError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::InvalidState(message) => write!(f, "invalid state: {message}"),
        }
    }
}

impl Error for RecordError {}

#[cfg(test)]
mod tests {
    use super::RecordError;

    #[test]
    fn display_prefixes_error_kind() {
        let err = RecordError::invalid_state("enrollment does not belong to this student");
        assert_eq!(
            err.to_string(),
            "invalid state: enrollment does not belong to this student"
        );

        let err = RecordError::invalid_argument("unknown course");
        assert!(err.to_string().starts_with("invalid argument:"));
    }
}
