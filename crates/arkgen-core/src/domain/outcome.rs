//! Materialization outcomes and the per-run summary.

use std::path::PathBuf;

use serde::Serialize;

/// Why a planned path was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// The path already exists and the conflict policy (or directory
    /// semantics) chose to keep it.
    AlreadyExists,
}

/// What went wrong for a single entry. Recorded, not thrown: sibling
/// entries continue to be processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    /// A planned directory path is occupied by a non-directory entry.
    PathConflict,
    /// Underlying I/O fault: permission denied, disk full, invalid path.
    Io,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn path_conflict(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::PathConflict,
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Io,
            message: message.into(),
        }
    }
}

/// The recorded result of attempting to create one planned path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Created,
    Overwritten,
    Skipped(SkipReason),
    Failed(Failure),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// One path with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathOutcome {
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Aggregated result of one materialization run.
///
/// Sufficient for a caller to print a human-readable report or fail a build
/// script on any `Failed` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Total entries the plan contained (not all necessarily processed if
    /// the run was aborted).
    pub planned: usize,
    /// Processed entries in plan order.
    pub outcomes: Vec<PathOutcome>,
    /// The conflict policy answered `Abort`; remaining entries were never
    /// processed and files already written were not rolled back.
    pub aborted: bool,
}

impl RunSummary {
    pub fn new(planned: usize) -> Self {
        Self {
            planned,
            outcomes: Vec::with_capacity(planned),
            aborted: false,
        }
    }

    pub fn record(&mut self, path: PathBuf, outcome: Outcome) {
        self.outcomes.push(PathOutcome { path, outcome });
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.outcome)).count()
    }

    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Created))
    }

    pub fn overwritten(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Overwritten))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(Outcome::is_failure)
    }

    /// Zero-exit contract for a wrapping CLI: no failures and not aborted.
    pub fn is_clean(&self) -> bool {
        !self.aborted && self.failed() == 0
    }
}
