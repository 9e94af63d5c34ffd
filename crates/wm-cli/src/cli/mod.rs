//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "wm",
    bin_name = "wm",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "WM - CLI scaffolding tool",
    after_help = "EXAMPLES:\n\
        \x20 wm template init -t go-file -n MyProj -a \"Adrian\"\n\
        \x20 wm template init -n MyProj --from ./my-template\n\
        \x20 wm template list\n\
        \x20 wm completions bash > /usr/share/bash-completion/completions/wm",
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
    /// Manage project templates.
    #[command(
        subcommand,
        about = "Manage project templates",
        after_help = "EXAMPLES:\n\
            \x20 wm template init -t go-file -n MyProj\n\
            \x20 wm template list"
    )]
    Template(TemplateCommands),

    /// Run the WM API.
    #[command(about = "Run the WM API")]
    Run,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 wm completions bash > ~/.local/share/bash-completion/completions/wm\n\
            \x20 wm completions zsh  > ~/.zfunc/_wm\n\
            \x20 wm completions fish > ~/.config/fish/completions/wm.fish"
    )]
    Completions(CompletionsArgs),
}

/// Subcommands for `wm template`.
#[derive(Debug, Subcommand)]
pub enum TemplateCommands {
    /// Generate a project from a template.
    #[command(about = "Generate a project from a template")]
    Init(InitArgs),

    /// List templates available in the local store, defaults, and bundle.
    #[command(visible_alias = "ls", about = "List available templates")]
    List,
}

// ── template init ─────────────────────────────────────────────────────────────

/// Arguments for `wm template init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Name of the project to generate; also the destination directory.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Template to resolve.
    #[arg(
        short = 't',
        long = "template",
        value_name = "TEMPLATE",
        default_value = "go-file",
        help = "Template name"
    )]
    pub template: String,

    /// Author written into generated files.
    #[arg(
        short = 'a',
        long = "author",
        value_name = "AUTHOR",
        default_value = "Author",
        help = "Author name"
    )]
    pub author: String,

    /// Explicit template directory; skips the search locations entirely.
    /// Remote clone is not implemented.
    #[arg(
        long = "from",
        value_name = "PATH",
        help = "Local template directory (remote clone not implemented)"
    )]
    pub from: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `wm completions`.
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
