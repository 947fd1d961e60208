//! Arkgen Core - scaffolding engine for HarmonyOS NEXT artifacts.
//!
//! This crate provides the domain and application layers for the `arkgen`
//! scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           arkgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Layer               │
//! │  (ScaffoldService: plan + materialize)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Renderer, Catalog, Policy) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    arkgen-adapters (Infrastructure)     │
//! │ (LocalFilesystem, SimpleRenderer, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (CanonicalIdentifier, TreePlan, Outcome)│
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use arkgen_core::{
//!     application::{ScaffoldService, ports::AlwaysOverwrite},
//!     domain::ArtifactKind,
//! };
//!
//! // With injected adapters (catalog, renderer, filesystem):
//! # fn demo(service: ScaffoldService) -> arkgen_core::error::ArkgenResult<()> {
//! let summary = service.generate(
//!     ArtifactKind::Component,
//!     "custom_button",
//!     Some("src/main/ets/components".into()),
//!     &AlwaysOverwrite,
//! )?;
//! assert_eq!(summary.created(), 1);
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService,
        ports::{
            AbortOnConflict, AlwaysOverwrite, AlwaysSkip, ConflictChoice, ConflictPolicy,
            Filesystem, TemplateCatalog, TemplateRenderer,
        },
    };
    pub use crate::domain::{
        ArtifactKind, CanonicalIdentifier, Outcome, ParameterBinding, RelativePath, RunSummary,
        TemplateId, TemplateSpec, TreePlan,
    };
    pub use crate::error::{ArkgenError, ArkgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
