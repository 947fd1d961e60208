//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "arkgen",
    bin_name = "arkgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} HarmonyOS NEXT artifact scaffolding",
    long_about = "Arkgen generates ArkTS components, pages and whole \
                  HarmonyOS NEXT project skeletons from built-in templates.",
    after_help = "EXAMPLES:\n\
        \x20 arkgen component custom_button\n\
        \x20 arkgen page user_detail --path src/main/ets/pages\n\
        \x20 arkgen project MyApp\n\
        \x20 arkgen completions bash > /usr/share/bash-completion/completions/arkgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a custom component file.
    #[command(
        visible_alias = "comp",
        about = "Generate a custom component",
        after_help = "EXAMPLES:\n\
            \x20 arkgen component custom_button\n\
            \x20 arkgen component user_card --path src/main/ets/components\n\
            \x20 arkgen component my_list --force"
    )]
    Component(GenerateArgs),

    /// Generate a page file.
    #[command(
        visible_alias = "pg",
        about = "Generate a page",
        after_help = "EXAMPLES:\n\
            \x20 arkgen page home_page\n\
            \x20 arkgen page user_detail --path src/main/ets/pages\n\
            \x20 arkgen page settings --dry-run"
    )]
    Page(GenerateArgs),

    /// Generate a full project skeleton.
    #[command(
        visible_alias = "proj",
        about = "Generate a project skeleton",
        after_help = "EXAMPLES:\n\
            \x20 arkgen project MyApp\n\
            \x20 arkgen project my_app --path ./workspace/my_app\n\
            \x20 arkgen project MyApp --skip-existing"
    )]
    Project(GenerateArgs),

    /// Initialise an arkgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 arkgen init          # default location\n\
            \x20 arkgen init --force  # overwrite existing config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 arkgen completions bash > ~/.local/share/bash-completion/completions/arkgen\n\
            \x20 arkgen completions zsh  > ~/.zfunc/_arkgen\n\
            \x20 arkgen completions fish > ~/.config/fish/completions/arkgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── component / page / project ────────────────────────────────────────────────

/// Arguments shared by the three generation subcommands.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Artifact name. Snake case is converted to PascalCase for file and
    /// struct names (`custom_button` becomes `CustomButton.ets`).
    #[arg(value_name = "NAME", help = "Artifact name (e.g. custom_button, MyApp)")]
    pub name: String,

    /// Override the output directory.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        help = "Output directory (default: components/, pages/, or ./<name>)"
    )]
    pub path: Option<PathBuf>,

    /// Overwrite existing files without prompting.
    #[arg(
        short = 'f',
        long = "force",
        conflicts_with = "skip_existing",
        help = "Overwrite existing files without prompting"
    )]
    pub force: bool,

    /// Keep existing files without prompting.
    #[arg(
        long = "skip-existing",
        help = "Keep existing files without prompting"
    )]
    pub skip_existing: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `arkgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `arkgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
