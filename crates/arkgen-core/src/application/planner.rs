//! Tree planning - turns an artifact request into an ordered [`TreePlan`].
//!
//! Planning is pure: it normalizes the raw name, fixes the parameter
//! binding, and lays out every directory and file the run will touch.
//! Nothing here reads or writes the filesystem.

use std::path::PathBuf;

use tracing::debug;

use crate::domain::{
    ArtifactKind, CanonicalIdentifier, DomainError, ParameterBinding, RelativePath, TemplateId,
    TreePlan, PARAM_PASCAL_NAME, PARAM_PROJECT_NAME, PARAM_PROJECT_NAME_LOWER,
};

/// Directories of the HarmonyOS project skeleton, in creation order.
/// Parents precede children so materialization never depends on
/// `create_dir_all` recursion for correctness, only for convenience.
const PROJECT_DIRS: &[&str] = &[
    "AppScope",
    "src/main/ets/entryability",
    "src/main/ets/pages",
    "src/main/ets/components",
    "src/main/ets/viewmodels",
    "src/main/ets/services",
    "src/main/ets/models",
    "src/main/ets/utils",
    "src/main/resources/base/element",
    "src/main/resources/base/media",
    "src/main/resources/rawfile",
];

/// Files of the HarmonyOS project skeleton and the templates that fill them.
const PROJECT_FILES: &[(&str, TemplateId)] = &[
    ("src/main/ets/entryability/EntryAbility.ets", TemplateId::EntryAbility),
    ("src/main/ets/pages/Index.ets", TemplateId::IndexPage),
    ("AppScope/app.json5", TemplateId::AppManifest),
    ("src/main/module.json5", TemplateId::ModuleManifest),
    ("src/main/ets/utils/Logger.ets", TemplateId::LoggerUtil),
];

/// Build the full tree plan for one artifact.
///
/// The raw name is normalized here so every caller gets the same
/// validation; a bad name fails before any plan exists. The returned plan
/// is already validated against duplicate paths.
pub fn plan(kind: ArtifactKind, root: PathBuf, raw_name: &str) -> Result<TreePlan, DomainError> {
    let canonical = CanonicalIdentifier::normalize(raw_name)?;
    let binding = binding_for(kind, raw_name, &canonical);

    let mut plan = TreePlan::new(root, binding);
    match kind {
        ArtifactKind::Component => {
            plan.add_file(single_file(kind, &canonical), TemplateId::Component);
        }
        ArtifactKind::Page => {
            plan.add_file(single_file(kind, &canonical), TemplateId::Page);
        }
        ArtifactKind::Project => {
            for dir in PROJECT_DIRS {
                plan.add_directory(RelativePath::from(*dir));
            }
            for (path, template) in PROJECT_FILES {
                plan.add_file(RelativePath::from(*path), *template);
            }
        }
    }

    plan.validate()?;
    debug!(
        kind = %kind,
        name = %canonical,
        entries = plan.entry_count(),
        "tree plan ready"
    );
    Ok(plan)
}

/// The parameter binding every template in the run is rendered with.
///
/// Project runs additionally carry the trimmed raw name verbatim and its
/// lowercase form, used by the app manifest and logger templates.
fn binding_for(
    kind: ArtifactKind,
    raw_name: &str,
    canonical: &CanonicalIdentifier,
) -> ParameterBinding {
    let binding = ParameterBinding::new().with(PARAM_PASCAL_NAME, canonical.as_str());
    if kind == ArtifactKind::Project {
        let trimmed = raw_name.trim();
        binding
            .with(PARAM_PROJECT_NAME, trimmed)
            .with(PARAM_PROJECT_NAME_LOWER, trimmed.to_lowercase())
    } else {
        binding
    }
}

fn single_file(kind: ArtifactKind, canonical: &CanonicalIdentifier) -> RelativePath {
    RelativePath::from(format!("{canonical}.{}", kind.file_extension()).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlanEntry;
    use std::path::Path;

    #[test]
    fn component_plan_is_one_pascal_named_file() {
        let plan = plan(ArtifactKind::Component, PathBuf::from("components"), "user_card")
            .expect("valid name");
        assert_eq!(plan.entry_count(), 1);
        match &plan.entries()[0] {
            PlanEntry::File { path, template } => {
                assert_eq!(path.as_path(), Path::new("UserCard.ets"));
                assert_eq!(*template, TemplateId::Component);
            }
            other => panic!("expected file entry, got {other:?}"),
        }
        assert_eq!(plan.binding().get(PARAM_PASCAL_NAME), Some("UserCard"));
        assert_eq!(plan.binding().get(PARAM_PROJECT_NAME), None);
    }

    #[test]
    fn page_plan_uses_the_page_template() {
        let plan = plan(ArtifactKind::Page, PathBuf::from("pages"), "settings").expect("valid");
        match &plan.entries()[0] {
            PlanEntry::File { template, .. } => assert_eq!(*template, TemplateId::Page),
            other => panic!("expected file entry, got {other:?}"),
        }
    }

    #[test]
    fn project_plan_lays_out_the_full_skeleton() {
        let plan = plan(ArtifactKind::Project, PathBuf::from("MyApp"), "MyApp").expect("valid");
        assert_eq!(plan.directories().count(), PROJECT_DIRS.len());
        assert_eq!(plan.files().count(), PROJECT_FILES.len());

        let files: Vec<_> = plan
            .files()
            .map(|(path, _)| path.as_path().to_string_lossy().into_owned())
            .collect();
        assert!(files.contains(&"src/main/ets/entryability/EntryAbility.ets".to_string()));
        assert!(files.contains(&"AppScope/app.json5".to_string()));
    }

    #[test]
    fn project_binding_carries_all_three_name_forms() {
        let plan = plan(ArtifactKind::Project, PathBuf::from("out"), " my_app ").expect("valid");
        let binding = plan.binding();
        assert_eq!(binding.get(PARAM_PASCAL_NAME), Some("MyApp"));
        assert_eq!(binding.get(PARAM_PROJECT_NAME), Some("my_app"));
        assert_eq!(binding.get(PARAM_PROJECT_NAME_LOWER), Some("my_app"));
    }

    #[test]
    fn parent_directories_precede_children() {
        let plan = plan(ArtifactKind::Project, PathBuf::from("out"), "App").expect("valid");
        let dirs: Vec<_> = plan.directories().map(|p| p.as_path().to_path_buf()).collect();
        for (i, dir) in dirs.iter().enumerate() {
            if let Some(parent) = dir.parent() {
                if parent.as_os_str().is_empty() {
                    continue;
                }
                if let Some(pos) = dirs.iter().position(|d| d.as_path() == parent) {
                    assert!(pos < i, "{} listed before its parent", dir.display());
                }
            }
        }
    }

    #[test]
    fn invalid_name_fails_before_any_plan_exists() {
        let err = plan(ArtifactKind::Component, PathBuf::from("c"), "___").unwrap_err();
        assert!(matches!(err, DomainError::InvalidName { .. }));
    }
}
