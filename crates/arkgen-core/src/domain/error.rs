//! Domain error types.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The raw artifact name is empty or contains only delimiters.
    /// Rejected before planning begins; nothing is written.
    #[error("invalid artifact name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// A template placeholder has no entry in the parameter binding.
    ///
    /// This indicates a defect: the built-in templates and the binding
    /// builder disagree on parameter names. Never substituted silently.
    #[error("template '{template}' references unbound parameter '{parameter}'")]
    UnboundParameter { template: String, parameter: String },

    /// A template body references a placeholder that is not in the spec's
    /// declared parameter list.
    #[error("template '{template}' body uses undeclared parameter '{parameter}'")]
    UndeclaredParameter { template: String, parameter: String },

    /// Two plan entries resolve to the same path.
    #[error("duplicate path in tree plan: {path}")]
    DuplicatePath { path: String },

    /// Plan entries must be relative to the output root.
    #[error("absolute paths not allowed in tree plan: {path}")]
    AbsolutePathNotAllowed { path: String },

    /// No built-in template exists for the requested id.
    #[error("no template registered for '{template}'")]
    UnknownTemplate { template: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, .. } => vec![
                format!("'{name}' cannot be used as an artifact name"),
                "Use words separated by underscores, e.g. custom_button".into(),
                "The name must contain at least one letter or digit".into(),
            ],
            Self::UnboundParameter { template, .. } | Self::UndeclaredParameter { template, .. } => {
                vec![
                    format!("The built-in template '{template}' is inconsistent"),
                    "This is a bug in arkgen, please report it".into(),
                ]
            }
            Self::DuplicatePath { path } => vec![
                format!("The plan lists '{path}' more than once"),
                "This is a bug in arkgen, please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } => ErrorCategory::Validation,
            Self::UnknownTemplate { .. } => ErrorCategory::NotFound,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
