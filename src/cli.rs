//! CLI argument definitions using clap with subcommand architecture

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Language-tagged fixture corpus inspector
#[derive(Parser, Debug)]
#[command(name = "fixture-corpus")]
#[command(about = "Enumerate and check a corpus of language-tagged source fixtures")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Corpus root (the `languages` directory)
    #[arg(long, value_name = "DIR", env = "FIXTURE_CORPUS_ROOT", global = true)]
    pub root: Option<PathBuf>,

    /// Use the fixtures built into this binary; takes precedence over `--root`
    #[arg(long, global = true)]
    pub bundled: bool,

    /// Configuration file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List supported language identifiers and their extensions
    Languages,

    /// List fixtures in the corpus
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show one fixture's metadata or raw content
    Show(ShowArgs),

    /// Check directory names, extensions, encoding and syntax
    #[command(visible_alias = "c")]
    Check(CheckArgs),

    /// Write the bundled fixtures to a directory
    Export(ExportArgs),
}

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list fixtures of this language
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Fixture path relative to the corpus root, e.g. `cpp/valid.cpp`
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Print the raw fixture bytes instead of metadata
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Only check fixtures of this language
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,

    /// Skip parsing with the reference grammars
    #[arg(long)]
    pub no_syntax: bool,

    /// Accept empty fixture files
    #[arg(long)]
    pub allow_empty: bool,

    /// Maximum syntax issues reported per file
    #[arg(long, value_name = "N")]
    pub max_issues: Option<usize>,
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Destination corpus root
    #[arg(value_name = "DEST")]
    pub dest: PathBuf,

    /// Overwrite existing fixture files
    #[arg(long)]
    pub force: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// TOON format
    Toon,
    /// Pretty-printed JSON
    Json,
}
