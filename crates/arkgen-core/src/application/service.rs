//! Scaffolding service - the driving port the CLI (and tests) call into.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::application::materializer::materialize;
use crate::application::planner;
use crate::application::ports::{ConflictPolicy, Filesystem, TemplateCatalog, TemplateRenderer};
use crate::domain::{ArtifactKind, RunSummary, TreePlan};
use crate::error::ArkgenResult;

/// Orchestrates one scaffolding run: normalize, plan, render, materialize.
///
/// Owns its driven ports behind trait objects so the CLI wires real adapters
/// and tests wire in-memory ones without touching this type.
pub struct ScaffoldService {
    catalog: Box<dyn TemplateCatalog>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    pub fn new(
        catalog: Box<dyn TemplateCatalog>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            catalog,
            renderer,
            filesystem,
        }
    }

    /// Compute the plan for a run without touching the filesystem.
    ///
    /// This is the whole of `--dry-run`: the returned plan lists every path
    /// the run would create.
    #[instrument(skip(self), fields(kind = %kind))]
    pub fn plan(
        &self,
        kind: ArtifactKind,
        raw_name: &str,
        output_root: Option<PathBuf>,
    ) -> ArkgenResult<TreePlan> {
        let root = output_root.unwrap_or_else(|| default_root(kind, raw_name));
        Ok(planner::plan(kind, root, raw_name)?)
    }

    /// Plan and materialize one artifact.
    ///
    /// Name validation and template rendering complete before any path is
    /// touched; conflicts on existing files are resolved by `policy`.
    #[instrument(skip(self, policy), fields(kind = %kind))]
    pub fn generate(
        &self,
        kind: ArtifactKind,
        raw_name: &str,
        output_root: Option<PathBuf>,
        policy: &dyn ConflictPolicy,
    ) -> ArkgenResult<RunSummary> {
        let plan = self.plan(kind, raw_name, output_root)?;
        let summary = materialize(
            &plan,
            self.catalog.as_ref(),
            self.renderer.as_ref(),
            self.filesystem.as_ref(),
            policy,
        )?;
        info!(
            created = summary.created(),
            overwritten = summary.overwritten(),
            skipped = summary.skipped(),
            failed = summary.failed(),
            aborted = summary.aborted,
            "run finished"
        );
        Ok(summary)
    }
}

/// Where artifacts land when the caller gives no explicit path: components
/// and pages in their conventional folders, projects in a new directory
/// named after the project itself.
fn default_root(kind: ArtifactKind, raw_name: &str) -> PathBuf {
    match kind.default_output_dir() {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(raw_name.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roots_follow_artifact_conventions() {
        assert_eq!(
            default_root(ArtifactKind::Component, "x"),
            PathBuf::from("components")
        );
        assert_eq!(default_root(ArtifactKind::Page, "x"), PathBuf::from("pages"));
        assert_eq!(
            default_root(ArtifactKind::Project, " MyApp "),
            PathBuf::from("MyApp")
        );
    }
}
