//! Unified error handling for Arkgen Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with user-actionable suggestions for the CLI.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Arkgen Core operations.
///
/// Wraps all possible errors that can occur when using arkgen-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum ArkgenError {
    /// Errors from the domain layer (business logic violations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ArkgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in arkgen".into(),
                "Please file an issue with the command you ran".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type ArkgenResult<T> = Result<T, ArkgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_validation_maps_to_validation_category() {
        let err = ArkgenError::from(DomainError::InvalidName {
            name: "".into(),
            reason: "empty".into(),
        });
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn internal_errors_suggest_reporting() {
        let err = ArkgenError::Internal {
            message: "x".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("bug")));
    }
}
