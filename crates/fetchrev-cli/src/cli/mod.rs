//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use fetchrev_core::domain::{RepoAddress, Revision, VcsKind};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "fetchrev",
    bin_name = "fetchrev",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Check out any repository at a revision, whatever VCS hosts it",
    long_about = "fetchrev clones a git, Mercurial, Bazaar or Subversion repository \
                  at a tag or revision. It discovers which transport the server \
                  speaks by probing each candidate scheme in turn.",
    after_help = "EXAMPLES:\n\
        \x20 fetchrev clone github.com/acme/widget --tag v1.2.0 --root deps\n\
        \x20 fetchrev clone hg.example.org/lib --vcs hg --tag 1.0\n\
        \x20 fetchrev detect svn.example.org/trunk --vcs svn\n\
        \x20 fetchrev completions bash > /usr/share/bash-completion/completions/fetchrev",
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
    /// Clone a repository at a revision.
    #[command(
        visible_alias = "c",
        about = "Clone a repository at a revision",
        after_help = "EXAMPLES:\n\
            \x20 fetchrev clone github.com/acme/widget --tag v1.2.0\n\
            \x20 fetchrev clone launchpad.net/foo --vcs bzr --tag 42 --root vendor"
    )]
    Clone(CloneArgs),

    /// Find the transport scheme a repository answers on.
    #[command(
        about = "Detect the transport scheme of a repository",
        after_help = "EXAMPLES:\n\
            \x20 fetchrev detect github.com/acme/widget\n\
            \x20 fetchrev detect hg.example.org/lib --vcs hg"
    )]
    Detect(DetectArgs),

    /// Move an existing working copy to another revision.
    #[command(
        about = "Update a working copy to a revision",
        after_help = "EXAMPLES:\n\
            \x20 fetchrev update deps/widget --tag v1.3.0\n\
            \x20 fetchrev update vendor/trunk --vcs svn --tag 1204"
    )]
    Update(UpdateArgs),

    /// Show the registered VCS backends.
    #[command(
        visible_alias = "ls",
        about = "List supported version-control systems",
        after_help = "EXAMPLES:\n\
            \x20 fetchrev backends\n\
            \x20 fetchrev backends --format json"
    )]
    Backends(BackendsArgs),

    /// Initialise a fetchrev configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 fetchrev init           # default location\n\
            \x20 fetchrev init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 fetchrev completions bash > ~/.local/share/bash-completion/completions/fetchrev\n\
            \x20 fetchrev completions zsh  > ~/.zfunc/_fetchrev\n\
            \x20 fetchrev completions fish > ~/.config/fish/completions/fetchrev.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the fetchrev configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 fetchrev config get defaults.vcs\n\
            \x20 fetchrev config list"
    )]
    Config(ConfigCommands),
}

// ── clone ─────────────────────────────────────────────────────────────────────

/// Arguments for `fetchrev clone`.
#[derive(Debug, Args)]
pub struct CloneArgs {
    /// Repository address without a scheme, e.g. `github.com/acme/widget`.
    #[arg(value_name = "REPO", help = "Repository address (no scheme)")]
    pub repo: RepoAddress,

    /// Version-control system hosting the repository.
    #[arg(
        long = "vcs",
        value_name = "VCS",
        help = "VCS kind: git, hg, bzr or svn (default from config)"
    )]
    pub vcs: Option<VcsKind>,

    /// Tag, revision or commit to check out.
    #[arg(
        short = 't',
        long = "tag",
        visible_alias = "rev",
        value_name = "REV",
        allow_negative_numbers = true,
        help = "Tag or revision to check out"
    )]
    pub tag: Revision,

    /// Directory the clone is created in.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Directory to clone into (default from config)"
    )]
    pub root: Option<PathBuf>,
}

// ── detect ────────────────────────────────────────────────────────────────────

/// Arguments for `fetchrev detect`.
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Repository address without a scheme.
    #[arg(value_name = "REPO", help = "Repository address (no scheme)")]
    pub repo: RepoAddress,

    /// Version-control system hosting the repository.
    #[arg(long = "vcs", value_name = "VCS", help = "VCS kind: git, hg, bzr or svn")]
    pub vcs: Option<VcsKind>,
}

// ── update ────────────────────────────────────────────────────────────────────

/// Arguments for `fetchrev update`.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Existing working copy.
    #[arg(value_name = "DIR", help = "Working copy to update")]
    pub dir: PathBuf,

    /// Version-control system of the working copy.
    #[arg(long = "vcs", value_name = "VCS", help = "VCS kind: git, hg, bzr or svn")]
    pub vcs: Option<VcsKind>,

    /// Tag or revision to move to.
    #[arg(
        short = 't',
        long = "tag",
        visible_alias = "rev",
        value_name = "REV",
        allow_negative_numbers = true,
        help = "Tag or revision to update to"
    )]
    pub tag: Revision,
}

// ── backends ──────────────────────────────────────────────────────────────────

/// Arguments for `fetchrev backends`.
#[derive(Debug, Args)]
pub struct BackendsArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `backends` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One tag per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `fetchrev init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `fetchrev completions`.
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

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `fetchrev config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.vcs`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
