//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A filesystem operation failed outside the per-entry outcome recording
    /// (e.g. an adapter fault surfaced through a port).
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Template rendering failed for a reason other than an unbound
    /// parameter (those are `DomainError::UnboundParameter`).
    #[error("template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// The catalog has no template for a plan entry.
    #[error("catalog is missing template '{template}'")]
    TemplateMissing { template: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::RenderingFailed { reason } => vec![
                format!("Rendering failed: {reason}"),
                "This is likely a bug in arkgen, please report it".into(),
            ],
            Self::TemplateMissing { template } => vec![
                format!("No built-in template for '{template}'"),
                "This is a bug in arkgen, please report it".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::TemplateMissing { .. } => ErrorCategory::NotFound,
        }
    }
}
