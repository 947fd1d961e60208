//! End-to-end engine tests: service + builtin catalog + renderer against the
//! in-memory (and occasionally real) filesystem.

use std::path::{Path, PathBuf};

use arkgen_adapters::{BuiltinCatalog, LocalFilesystem, MemoryFilesystem, SimpleRenderer};
use arkgen_core::domain::FailureKind;
use arkgen_core::prelude::*;

fn service_with(fs: MemoryFilesystem) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(BuiltinCatalog::new()),
        Box::new(SimpleRenderer::new()),
        Box::new(fs),
    )
}

#[test]
fn component_generation_creates_one_pascal_named_file() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone());

    let summary = service
        .generate(
            ArtifactKind::Component,
            "custom_button",
            Some(PathBuf::from("components")),
            &AlwaysSkip,
        )
        .unwrap();

    assert_eq!(summary.created(), 1);
    assert!(summary.is_clean());

    let content = fs
        .read_file(Path::new("components/CustomButton.ets"))
        .expect("file should exist");
    assert!(content.contains("export struct CustomButton {"));
    assert!(content.contains("[CustomButton] aboutToAppear"));
    assert!(!content.contains("{{"));
}

#[test]
fn second_run_with_skip_policy_is_idempotent() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone());
    let run = || {
        service.generate(
            ArtifactKind::Component,
            "custom_button",
            Some(PathBuf::from("components")),
            &AlwaysSkip,
        )
    };

    run().unwrap();
    fs.seed_file("components/CustomButton.ets", "edited by hand");
    let second = run().unwrap();

    assert_eq!(second.created(), 0);
    assert_eq!(second.skipped(), 1);
    assert!(second.is_clean());
    assert_eq!(
        fs.read_file(Path::new("components/CustomButton.ets")).as_deref(),
        Some("edited by hand"),
    );
}

#[test]
fn overwrite_policy_replaces_existing_content() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone());
    fs.seed_file("pages/Settings.ets", "stale");

    let summary = service
        .generate(
            ArtifactKind::Page,
            "settings",
            Some(PathBuf::from("pages")),
            &AlwaysOverwrite,
        )
        .unwrap();

    assert_eq!(summary.overwritten(), 1);
    let content = fs.read_file(Path::new("pages/Settings.ets")).unwrap();
    assert!(content.contains("struct Settings {"));
    assert!(content.contains("router.back()"));
}

#[test]
fn abort_policy_stops_without_rolling_back() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone());

    // First run lays down the project; EntryAbility.ets is the first file
    // entry, so a second aborting run stops there.
    service
        .generate(ArtifactKind::Project, "MyApp", None, &AlwaysSkip)
        .unwrap();
    let summary = service
        .generate(ArtifactKind::Project, "MyApp", None, &AbortOnConflict)
        .unwrap();

    assert!(summary.aborted);
    assert!(!summary.is_clean());
    // Directory entries were processed before the first file conflict.
    assert_eq!(summary.outcomes.len(), 11);
    assert!(summary.outcomes.iter().all(|o| !o.outcome.is_failure()));
    // Nothing was deleted.
    assert!(fs.exists(Path::new("MyApp/src/main/ets/pages/Index.ets")));
}

#[test]
fn project_generation_lays_out_the_full_skeleton() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone());

    let summary = service
        .generate(ArtifactKind::Project, "MyApp", None, &AlwaysSkip)
        .unwrap();

    assert!(summary.is_clean());
    assert_eq!(summary.created(), 16);

    for dir in [
        "MyApp/src/main/ets/viewmodels",
        "MyApp/src/main/resources/base/media",
        "MyApp/src/main/resources/rawfile",
    ] {
        assert!(fs.is_dir(Path::new(dir)), "missing directory {dir}");
    }

    let manifest = fs.read_file(Path::new("MyApp/AppScope/app.json5")).unwrap();
    assert!(manifest.contains("\"bundleName\": \"com.example.myapp\""));

    let logger = fs
        .read_file(Path::new("MyApp/src/main/ets/utils/Logger.ets"))
        .unwrap();
    assert!(logger.contains("TAG: string = 'MyApp'"));

    let ability = fs
        .read_file(Path::new("MyApp/src/main/ets/entryability/EntryAbility.ets"))
        .unwrap();
    assert!(ability.contains("loadContent('pages/Index'"));
}

#[test]
fn rerunning_a_project_over_itself_stays_clean_with_skip() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone());

    service
        .generate(ArtifactKind::Project, "MyApp", None, &AlwaysSkip)
        .unwrap();
    let second = service
        .generate(ArtifactKind::Project, "MyApp", None, &AlwaysSkip)
        .unwrap();

    assert!(second.is_clean());
    assert_eq!(second.created(), 0);
    // 11 directories + 5 files, all already present.
    assert_eq!(second.skipped(), 16);
}

#[test]
fn file_occupied_by_directory_is_a_conflict_and_siblings_continue() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone());
    // Occupy a planned file path with a directory.
    fs.seed_dir("MyApp/AppScope/app.json5");

    let summary = service
        .generate(ArtifactKind::Project, "MyApp", None, &AlwaysSkip)
        .unwrap();

    assert_eq!(summary.failed(), 1);
    assert!(!summary.aborted);
    assert!(!summary.is_clean());
    // The rest of the skeleton still materialized.
    assert!(fs.exists(Path::new("MyApp/src/main/module.json5")));
}

#[test]
fn directory_blocked_by_file_is_a_conflict_and_siblings_continue() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone());
    // Occupy a planned directory path with a file.
    fs.seed_file("MyApp/AppScope", "not a directory");

    let summary = service
        .generate(ArtifactKind::Project, "MyApp", None, &AlwaysSkip)
        .unwrap();

    let appscope = summary
        .outcomes
        .iter()
        .find(|o| o.path == Path::new("MyApp/AppScope"))
        .expect("AppScope entry processed");
    assert!(matches!(
        &appscope.outcome,
        Outcome::Failed(f) if f.kind == FailureKind::PathConflict
    ));
    assert!(!summary.is_clean());
    assert!(!summary.aborted);
    // The rest of the skeleton still materialized.
    assert!(fs.exists(Path::new("MyApp/src/main/module.json5")));
    assert!(fs.is_dir(Path::new("MyApp/src/main/ets/pages")));
}

#[test]
fn closure_policies_see_the_conflicting_path() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone());
    fs.seed_file("pages/Home.ets", "keep me");

    let calls = std::cell::Cell::new(0usize);
    let policy = |path: &Path| {
        assert!(path.ends_with("Home.ets"));
        calls.set(calls.get() + 1);
        ConflictChoice::Skip
    };
    let summary = service
        .generate(ArtifactKind::Page, "home", Some(PathBuf::from("pages")), &policy)
        .unwrap();

    assert_eq!(summary.skipped(), 1);
    assert_eq!(calls.get(), 1);
}

#[test]
fn path_traversal_name_is_rejected_before_any_write() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone());

    let err = service
        .generate(
            ArtifactKind::Component,
            "../evil",
            Some(PathBuf::from("out/components")),
            &AlwaysSkip,
        )
        .unwrap_err();

    assert!(matches!(err, ArkgenError::Domain(_)));
    assert!(fs.list_files().is_empty());
    assert!(!fs.exists(Path::new("out/evil.ets")));
}

#[test]
fn invalid_name_fails_before_any_write() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone());

    let err = service
        .generate(ArtifactKind::Component, "   ", None, &AlwaysSkip)
        .unwrap_err();

    assert!(matches!(err, ArkgenError::Domain(_)));
    assert!(fs.list_files().is_empty());
    assert!(!fs.is_dir(Path::new("components")));
}

#[test]
fn dry_run_plan_lists_paths_without_touching_the_filesystem() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone());

    let plan = service
        .plan(ArtifactKind::Project, "demo_app", None)
        .unwrap();

    assert_eq!(plan.root(), Path::new("demo_app"));
    assert_eq!(plan.entry_count(), 16);
    assert!(fs.list_files().is_empty());
}

#[test]
fn default_output_dirs_apply_when_no_path_given() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone());

    service
        .generate(ArtifactKind::Component, "user_card", None, &AlwaysSkip)
        .unwrap();
    service
        .generate(ArtifactKind::Page, "user_detail", None, &AlwaysSkip)
        .unwrap();

    assert!(fs.exists(Path::new("components/UserCard.ets")));
    assert!(fs.exists(Path::new("pages/UserDetail.ets")));
}

#[test]
fn local_filesystem_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("out");
    let service = ScaffoldService::new(
        Box::new(BuiltinCatalog::new()),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    let summary = service
        .generate(
            ArtifactKind::Component,
            "list_item",
            Some(root.clone()),
            &AlwaysSkip,
        )
        .unwrap();

    assert!(summary.is_clean());
    let content = std::fs::read_to_string(root.join("ListItem.ets")).unwrap();
    assert!(content.contains("export struct ListItem {"));
}
