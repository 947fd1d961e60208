//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `arkgen-adapters` crate provides implementations; the conflict
//! policy is supplied by the caller (CLI prompt, scripted rule, test
//! closure).

use std::path::Path;

use crate::domain::{ParameterBinding, TemplateId, TemplateSpec};
use crate::error::ArkgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `arkgen_adapters::filesystem::LocalFilesystem` (production)
/// - `arkgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// The engine's side effects are confined to directory creation and file
/// writes under the output root: there is deliberately no `remove`, `move`,
/// or content `read` on this port. Existence checks are the only reads.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ArkgenResult<()>;

    /// Write content to a file, replacing any previous content. The
    /// implementation must close the handle on every exit path.
    fn write_file(&self, path: &Path, content: &str) -> ArkgenResult<()>;

    /// Check if the path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if the path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// Implemented by `arkgen_adapters::renderer::SimpleRenderer`. Pure
/// transformation: no disk or process side effects.
pub trait TemplateRenderer: Send + Sync {
    /// Render a template spec with a parameter binding into final text,
    /// byte-for-byte as it will be written to disk.
    fn render(&self, spec: &TemplateSpec, binding: &ParameterBinding) -> ArkgenResult<String>;
}

/// Port for the built-in template catalog.
///
/// Template specs are process-wide immutable constants loaded once at
/// startup; the catalog only resolves ids to specs.
pub trait TemplateCatalog: Send + Sync {
    fn get(&self, id: TemplateId) -> ArkgenResult<&TemplateSpec>;
}

// ── Conflict policy ───────────────────────────────────────────────────────────

/// What to do when a planned file path already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictChoice {
    /// Replace the existing file's content.
    Overwrite,
    /// Leave the existing file untouched and continue.
    Skip,
    /// Halt the remaining plan entries immediately. Files already written
    /// in this run are not rolled back.
    Abort,
}

/// Caller-supplied decision function resolving file-exists conflicts.
///
/// The materializer never performs I/O-based prompting itself — the
/// decision (what to do) is separated from the mechanism (how to ask), so
/// non-interactive and test-harness callers never simulate a terminal.
pub trait ConflictPolicy {
    fn resolve(&self, path: &Path) -> ConflictChoice;
}

/// Closures are policies: `|_| ConflictChoice::Skip`.
impl<F> ConflictPolicy for F
where
    F: Fn(&Path) -> ConflictChoice,
{
    fn resolve(&self, path: &Path) -> ConflictChoice {
        self(path)
    }
}

/// Non-interactive policy: always replace existing files.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOverwrite;

impl ConflictPolicy for AlwaysOverwrite {
    fn resolve(&self, _path: &Path) -> ConflictChoice {
        ConflictChoice::Overwrite
    }
}

/// Non-interactive policy: never touch existing files.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysSkip;

impl ConflictPolicy for AlwaysSkip {
    fn resolve(&self, _path: &Path) -> ConflictChoice {
        ConflictChoice::Skip
    }
}

/// Policy for build scripts that must not proceed past any conflict.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbortOnConflict;

impl ConflictPolicy for AbortOnConflict {
    fn resolve(&self, _path: &Path) -> ConflictChoice {
        ConflictChoice::Abort
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn stock_policies_answer_as_named() {
        let p = PathBuf::from("x");
        assert_eq!(AlwaysOverwrite.resolve(&p), ConflictChoice::Overwrite);
        assert_eq!(AlwaysSkip.resolve(&p), ConflictChoice::Skip);
        assert_eq!(AbortOnConflict.resolve(&p), ConflictChoice::Abort);
    }

    #[test]
    fn closures_implement_the_policy_trait() {
        let policy = |_: &Path| ConflictChoice::Skip;
        assert_eq!(policy.resolve(Path::new("y")), ConflictChoice::Skip);
    }
}
