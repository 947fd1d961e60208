//! Core domain layer for arkgen.
//!
//! This module contains pure business logic with no I/O whatsoever. All
//! filesystem, rendering, and prompting concerns are handled via ports
//! (traits) defined in the application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **No external crates**: only std + thiserror + serde derives
//! - **Immutable values**: domain objects are `Clone` + `PartialEq`

pub mod artifact;
pub mod error;
pub mod name;
pub mod outcome;
pub mod path;
pub mod plan;
pub mod template;

// Re-exports for convenience
pub use artifact::ArtifactKind;
pub use error::{DomainError, ErrorCategory};
pub use name::CanonicalIdentifier;
pub use outcome::{Failure, FailureKind, Outcome, PathOutcome, RunSummary, SkipReason};
pub use path::RelativePath;
pub use plan::{PlanEntry, TreePlan};
pub use template::{
    PARAM_PASCAL_NAME, PARAM_PROJECT_NAME, PARAM_PROJECT_NAME_LOWER, ParameterBinding, TemplateId,
    TemplateSpec, substitute,
};
