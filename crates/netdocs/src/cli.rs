//! Clap derive structures for the `netdocs` CLI.
//!
//! Also compiled by `build.rs` for man page generation, so this module may
//! only depend on clap and clap_complete.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// netdocs -- public and private network documentation from one source
#[derive(Debug, Parser)]
#[command(
    name = "netdocs",
    version,
    about = "Generate public and private network documentation",
    long_about = "Renders HTML documentation for a home network from one JSON document.\n\n\
        The public tree is redacted and verified: if any sensitive value survives,\n\
        nothing public is written. The private tree keeps full detail.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Settings file (default: platform config dir / netdocs.toml)
    #[arg(long, short = 'S', env = "NETDOCS_SETTINGS", global = true)]
    pub settings: Option<PathBuf>,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render, verify and write the documentation trees
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Render and verify without writing anything
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared Arguments ─────────────────────────────────────────────────

/// Input and output locations; each overrides the settings file.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Network configuration document (JSON)
    #[arg(long, short = 'c', env = "NETDOCS_NETWORK")]
    pub config: Option<PathBuf>,

    /// Public output directory
    #[arg(long, env = "NETDOCS_PUBLIC_DIR")]
    pub public_dir: Option<PathBuf>,

    /// Private output directory
    #[arg(long, env = "NETDOCS_PRIVATE_DIR")]
    pub private_dir: Option<PathBuf>,
}

/// Audience selection. Neither flag means both.
#[derive(Debug, Args)]
pub struct AudienceArgs {
    /// Only the public (redacted) tree
    #[arg(long, conflicts_with = "private")]
    pub public: bool,

    /// Only the private (full detail) tree
    #[arg(long)]
    pub private: bool,
}

// ── Command Arguments ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub audience: AudienceArgs,

    /// Commit, push and upload the public tree after generation
    #[arg(long)]
    pub deploy: bool,

    /// Run the screenshot command before generation
    #[arg(long)]
    pub screenshots: bool,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub audience: AudienceArgs,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
