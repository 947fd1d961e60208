//! Application layer for arkgen.
//!
//! This layer contains:
//! - **Service**: use case orchestration ([`ScaffoldService`])
//! - **Planner / Materializer**: the plan and write phases of a run
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod materializer;
pub mod planner;
pub mod ports;
pub mod service;

pub use error::ApplicationError;
pub use planner::plan;
pub use service::ScaffoldService;
