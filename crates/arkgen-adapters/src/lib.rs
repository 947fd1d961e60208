//! Infrastructure adapters for arkgen.
//!
//! This crate implements the ports defined in `arkgen-core::application::ports`.
//! It contains all external dependencies and I/O operations, plus the built-in
//! ArkTS template catalog.

pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use builtin_templates::BuiltinCatalog;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
