//! Implementation of the `arkgen component` / `page` / `project` commands.
//!
//! Responsibility: translate CLI arguments into a service call and display
//! results. No scaffolding logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use arkgen_adapters::{BuiltinCatalog, LocalFilesystem, SimpleRenderer};
use arkgen_core::{
    application::{
        ScaffoldService,
        ports::{AlwaysOverwrite, AlwaysSkip, ConflictPolicy},
    },
    domain::{ArtifactKind, TreePlan},
};

use crate::{
    cli::{GenerateArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::PromptPolicy,
};

/// Execute one generation subcommand.
///
/// Dispatch sequence:
/// 1. Resolve the output root (flag > config > built-in convention)
/// 2. Early-exit with the planned paths if `--dry-run`
/// 3. Pick the conflict policy from flags / terminal state
/// 4. Run the scaffold service and print the per-path report
/// 5. Fail the process if any entry failed or the run was aborted
#[instrument(skip_all, fields(kind = %kind, name = %args.name))]
pub fn execute(
    kind: ArtifactKind,
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = args.path.clone().or_else(|| configured_root(kind, &config));
    let service = build_service()?;

    debug!(root = ?root, force = args.force, skip = args.skip_existing, "generation requested");

    if args.dry_run {
        let plan = service.plan(kind, &args.name, root)?;
        return show_plan(&plan, &output);
    }

    let policy = select_policy(&args, &global);
    let json_mode = output.format() == OutputFormat::Json;
    if !json_mode {
        output.header(&format!("Generating {kind} '{}'...", args.name))?;
    }

    let summary = service.generate(kind, &args.name, root, policy.as_ref())?;
    info!(
        created = summary.created(),
        skipped = summary.skipped(),
        failed = summary.failed(),
        "generation finished"
    );

    output.report_summary(&summary)?;

    if !summary.is_clean() {
        return Err(CliError::GenerationIncomplete {
            failed: summary.failed(),
            aborted: summary.aborted,
        });
    }

    if !json_mode {
        show_next_steps(kind, &summary, &args.name, &output)?;
    }
    Ok(())
}

fn build_service() -> CliResult<ScaffoldService> {
    // A spec/body mismatch in the embedded templates is a packaging defect;
    // catch it before planning anything.
    BuiltinCatalog::validate_all()?;
    Ok(ScaffoldService::new(
        Box::new(BuiltinCatalog::new()),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    ))
}

/// Output root from the config file, when the user set one for this kind.
fn configured_root(kind: ArtifactKind, config: &AppConfig) -> Option<PathBuf> {
    match kind {
        ArtifactKind::Component => config.defaults.components_dir.clone(),
        ArtifactKind::Page => config.defaults.pages_dir.clone(),
        ArtifactKind::Project => config.defaults.projects_dir.clone(),
    }
}

/// Flags beat interactivity; without flags, prompt only when a real
/// terminal is attached, otherwise keep existing files untouched.
fn select_policy(args: &GenerateArgs, global: &GlobalArgs) -> Box<dyn ConflictPolicy> {
    if args.force {
        Box::new(AlwaysOverwrite)
    } else if args.skip_existing {
        Box::new(AlwaysSkip)
    } else if !global.quiet && PromptPolicy::available() {
        Box::new(PromptPolicy::new())
    } else {
        Box::new(AlwaysSkip)
    }
}

fn show_plan(plan: &TreePlan, output: &OutputManager) -> CliResult<()> {
    output.info(&format!(
        "Dry run: {} path(s) would be created under {}",
        plan.entry_count(),
        plan.root().display(),
    ))?;
    for entry in plan.entries() {
        output.print(&format!("  {}", plan.resolve(entry).display()))?;
    }
    Ok(())
}

/// Post-generation guidance, mirroring what each artifact needs next.
fn show_next_steps(
    kind: ArtifactKind,
    summary: &arkgen_core::domain::RunSummary,
    raw_name: &str,
    output: &OutputManager,
) -> CliResult<()> {
    if summary.created() == 0 && summary.overwritten() == 0 {
        return Ok(());
    }

    output.print("")?;
    output.print("Next steps:")?;
    match kind {
        ArtifactKind::Component => {
            output.print("  1. Import the component where you need it:")?;
            output.print("     import { <Name> } from '../components/<Name>';")?;
            output.print("  2. Use it inside a build() method")?;
        }
        ArtifactKind::Page => {
            output.print("  1. Register the page in src/main/resources/base/profile/main_pages.json")?;
            output.print("  2. Implement the page's business logic")?;
        }
        ArtifactKind::Project => {
            output.print("  1. Open DevEco Studio")?;
            output.print("  2. Select File > Open")?;
            output.print(&format!("  3. Choose the project directory: {}", raw_name.trim()))?;
            output.print("  4. Start building your HarmonyOS NEXT app")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn generate_args(force: bool, skip: bool) -> GenerateArgs {
        GenerateArgs {
            name: "x".into(),
            path: None,
            force,
            skip_existing: skip,
            dry_run: false,
        }
    }

    fn quiet_global() -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        }
    }

    #[test]
    fn force_selects_overwrite() {
        use std::path::Path;
        let policy = select_policy(&generate_args(true, false), &quiet_global());
        assert_eq!(
            policy.resolve(Path::new("x")),
            arkgen_core::application::ports::ConflictChoice::Overwrite
        );
    }

    #[test]
    fn quiet_without_flags_selects_skip() {
        use std::path::Path;
        let policy = select_policy(&generate_args(false, false), &quiet_global());
        assert_eq!(
            policy.resolve(Path::new("x")),
            arkgen_core::application::ports::ConflictChoice::Skip
        );
    }

    #[test]
    fn configured_root_picks_the_matching_directory() {
        let mut config = AppConfig::default();
        config.defaults.pages_dir = Some(PathBuf::from("src/main/ets/pages"));

        assert_eq!(
            configured_root(ArtifactKind::Page, &config),
            Some(PathBuf::from("src/main/ets/pages"))
        );
        assert_eq!(configured_root(ArtifactKind::Component, &config), None);
    }
}
