//! Plan materialization - the only place in the engine that touches disk.
//!
//! Processing is ordered and sequential, matching plan order, so summaries
//! and logs read in the order the tree was laid out. All file contents are
//! rendered before the first filesystem call: a broken template or missing
//! parameter aborts with zero paths touched, never a half-written tree.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::application::ports::{ConflictChoice, ConflictPolicy, Filesystem, TemplateCatalog, TemplateRenderer};
use crate::domain::{Failure, Outcome, PlanEntry, RunSummary, SkipReason, TreePlan};
use crate::error::ArkgenResult;

/// Execute a plan against a filesystem.
///
/// Per-entry faults (occupied paths, I/O errors) are recorded as `Failed`
/// outcomes and processing continues with the remaining entries; only
/// pre-render errors and a policy `Abort` stop the run. `Abort` leaves
/// already-written files in place — there is no rollback.
pub fn materialize(
    plan: &TreePlan,
    catalog: &dyn TemplateCatalog,
    renderer: &dyn TemplateRenderer,
    filesystem: &dyn Filesystem,
    policy: &dyn ConflictPolicy,
) -> ArkgenResult<RunSummary> {
    let work = render_all(plan, catalog, renderer)?;

    // The root itself is not a plan entry; single-file plans have no
    // directory entries at all, so it is created here.
    filesystem.create_dir_all(plan.root())?;

    let mut summary = RunSummary::new(plan.entry_count());

    for item in work {
        let (path, outcome) = match item {
            WorkItem::Directory { path } => {
                let outcome = create_directory(filesystem, &path);
                (path, outcome)
            }
            WorkItem::File { path, content } => {
                match write_file(filesystem, policy, &path, &content) {
                    Some(outcome) => (path, outcome),
                    None => {
                        warn!(path = %path.display(), "run aborted on conflict");
                        summary.aborted = true;
                        break;
                    }
                }
            }
        };
        if let Outcome::Failed(failure) = &outcome {
            warn!(path = %path.display(), ?failure, "entry failed");
        } else {
            debug!(path = %path.display(), ?outcome, "entry processed");
        }
        summary.record(path, outcome);
    }

    Ok(summary)
}

/// One plan entry with its root-resolved path and, for files, the rendered
/// content. Pairing content with its path here means the write loop cannot
/// take a body out of step with its entry.
enum WorkItem {
    Directory { path: PathBuf },
    File { path: PathBuf, content: String },
}

/// Render every file entry's content up front, in plan order.
fn render_all(
    plan: &TreePlan,
    catalog: &dyn TemplateCatalog,
    renderer: &dyn TemplateRenderer,
) -> ArkgenResult<Vec<WorkItem>> {
    plan.entries()
        .iter()
        .map(|entry| {
            let path = plan.resolve(entry);
            match entry {
                PlanEntry::Directory { .. } => Ok(WorkItem::Directory { path }),
                PlanEntry::File { template, .. } => {
                    let spec = catalog.get(*template)?;
                    let content = renderer.render(spec, plan.binding())?;
                    Ok(WorkItem::File { path, content })
                }
            }
        })
        .collect()
}

fn create_directory(filesystem: &dyn Filesystem, path: &Path) -> Outcome {
    if filesystem.is_dir(path) {
        return Outcome::Skipped(SkipReason::AlreadyExists);
    }
    if filesystem.exists(path) {
        return Outcome::Failed(Failure::path_conflict(format!(
            "{} exists and is not a directory",
            path.display()
        )));
    }
    match filesystem.create_dir_all(path) {
        Ok(()) => Outcome::Created,
        Err(err) => Outcome::Failed(Failure::io(err.to_string())),
    }
}

/// Write one planned file, consulting the policy if the path is occupied.
/// `None` means the policy chose to abort the run.
fn write_file(
    filesystem: &dyn Filesystem,
    policy: &dyn ConflictPolicy,
    path: &Path,
    content: &str,
) -> Option<Outcome> {
    if filesystem.is_dir(path) {
        return Some(Outcome::Failed(Failure::path_conflict(format!(
            "{} exists and is a directory",
            path.display()
        ))));
    }

    if !filesystem.exists(path) {
        return Some(match filesystem.write_file(path, content) {
            Ok(()) => Outcome::Created,
            Err(err) => Outcome::Failed(Failure::io(err.to_string())),
        });
    }

    match policy.resolve(path) {
        ConflictChoice::Overwrite => Some(match filesystem.write_file(path, content) {
            Ok(()) => Outcome::Overwritten,
            Err(err) => Outcome::Failed(Failure::io(err.to_string())),
        }),
        ConflictChoice::Skip => Some(Outcome::Skipped(SkipReason::AlreadyExists)),
        ConflictChoice::Abort => None,
    }
}
