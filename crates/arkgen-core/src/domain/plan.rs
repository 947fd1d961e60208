//! Tree plans: the full set of paths to materialize in one run.
//!
//! A [`TreePlan`] is pure data produced by the planner before any I/O occurs,
//! so the set of created paths is inspectable and assertable up front rather
//! than interleaved with the writes.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{
    error::DomainError, path::RelativePath, template::ParameterBinding, template::TemplateId,
};

/// One entry of a tree plan.
///
/// Directories are listed separately from files so the materializer can
/// create the full skeleton even for empty leaf directories (some target
/// ecosystems require empty directories to exist, e.g. a resources folder
/// with no seed file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanEntry {
    /// A directory to create (with all missing ancestors), no content.
    Directory { path: RelativePath },
    /// A file to render from `template` and write.
    File {
        path: RelativePath,
        template: TemplateId,
    },
}

impl PlanEntry {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::Directory { path } | Self::File { path, .. } => path,
        }
    }
}

/// Ordered sequence of entries computed for one invocation, plus the single
/// parameter binding shared by every file in the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreePlan {
    root: PathBuf,
    binding: ParameterBinding,
    entries: Vec<PlanEntry>,
}

impl TreePlan {
    pub fn new(root: impl Into<PathBuf>, binding: ParameterBinding) -> Self {
        Self {
            root: root.into(),
            binding,
            entries: Vec::new(),
        }
    }

    pub fn add_directory(&mut self, path: RelativePath) {
        self.entries.push(PlanEntry::Directory { path });
    }

    pub fn add_file(&mut self, path: RelativePath, template: TemplateId) {
        self.entries.push(PlanEntry::File { path, template });
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn binding(&self) -> &ParameterBinding {
        &self.binding
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Absolute (root-joined) path of an entry.
    pub fn resolve(&self, entry: &PlanEntry) -> PathBuf {
        self.root.join(entry.path().as_path())
    }

    pub fn files(&self) -> impl Iterator<Item = (&RelativePath, TemplateId)> {
        self.entries.iter().filter_map(|e| match e {
            PlanEntry::File { path, template } => Some((path, *template)),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &RelativePath> {
        self.entries.iter().filter_map(|e| match e {
            PlanEntry::Directory { path } => Some(path),
            _ => None,
        })
    }

    /// Check plan invariants: non-empty, no duplicate paths.
    ///
    /// Relative-path safety is already guaranteed by [`RelativePath`].
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path().to_string();
            if !seen.insert(path.clone()) {
                return Err(DomainError::DuplicatePath { path });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_with(paths: &[&str]) -> TreePlan {
        let mut plan = TreePlan::new("out", ParameterBinding::new());
        for p in paths {
            plan.add_directory(RelativePath::from(*p));
        }
        plan
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let plan = plan_with(&["a", "b", "a"]);
        assert!(matches!(
            plan.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn distinct_paths_validate() {
        assert!(plan_with(&["a", "b", "c"]).validate().is_ok());
    }

    #[test]
    fn resolve_joins_root() {
        let mut plan = TreePlan::new("out/app", ParameterBinding::new());
        plan.add_file(RelativePath::from("Index.ets"), TemplateId::IndexPage);
        let entry = &plan.entries()[0];
        assert_eq!(plan.resolve(entry), PathBuf::from("out/app/Index.ets"));
    }

    #[test]
    fn files_and_directories_iterators_partition_entries() {
        let mut plan = TreePlan::new("out", ParameterBinding::new());
        plan.add_directory(RelativePath::from("pages"));
        plan.add_file(RelativePath::from("pages/Index.ets"), TemplateId::IndexPage);
        assert_eq!(plan.directories().count(), 1);
        assert_eq!(plan.files().count(), 1);
        assert_eq!(plan.entry_count(), 2);
    }
}
