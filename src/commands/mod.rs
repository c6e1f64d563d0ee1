//! Command modules for the fixture-corpus CLI
//!
//! Each module implements one top-level command:
//! - `languages` - Supported language identifiers
//! - `list` - Enumerate fixtures
//! - `show` - One fixture's metadata or bytes
//! - `check` - Structural and syntax validation
//! - `export` - Write the bundled corpus to disk
//!
//! All command handlers take their `Args` struct from `cli.rs` and a shared
//! `CommandContext`.

pub mod check;
pub mod export;
pub mod languages;
pub mod list;
pub mod show;

pub use check::run_check;
pub use export::run_export;
pub use languages::run_languages;
pub use list::run_list;
pub use show::run_show;

use std::path::PathBuf;

use tracing::debug;

use crate::bundled;
use crate::cli::{Cli, OutputFormat};
use crate::config::CorpusConfig;
use crate::corpus::Corpus;
use crate::error::{CorpusError, Result};
use crate::lang::Lang;

/// Default corpus root when neither the CLI nor the config names one
pub const DEFAULT_ROOT: &str = "languages";

/// Where fixtures come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusSource {
    /// Fixtures compiled into the binary
    Bundled,
    /// A `languages` directory on disk
    Directory(PathBuf),
}

/// Shared context passed to all command handlers
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Output format (text, toon, or json)
    pub format: OutputFormat,
    /// Show verbose output
    pub verbose: bool,
    pub source: CorpusSource,
    pub config: CorpusConfig,
}

impl CommandContext {
    /// Resolve the corpus source: `--bundled` > `--root` > config > `./languages`
    pub fn from_cli(cli: &Cli, config: CorpusConfig) -> Self {
        let source = if cli.bundled {
            CorpusSource::Bundled
        } else if let Some(root) = &cli.root {
            CorpusSource::Directory(root.clone())
        } else if let Some(root) = config.resolved_root() {
            CorpusSource::Directory(root)
        } else {
            CorpusSource::Directory(PathBuf::from(DEFAULT_ROOT))
        };

        Self {
            format: cli.format,
            verbose: cli.verbose,
            source,
            config,
        }
    }

    /// Load the corpus this invocation works on
    pub fn open_corpus(&self) -> Result<Corpus> {
        match &self.source {
            CorpusSource::Bundled => Ok(bundled::corpus()),
            CorpusSource::Directory(root) => {
                debug!("opening corpus at {}", root.display());
                Corpus::open_with(root, &self.config.load_options()?)
            }
        }
    }

    /// Resolve a `--lang` argument, honoring configured aliases
    pub fn parse_lang(&self, name: &str) -> Result<Lang> {
        self.config
            .load_options()?
            .resolve_dir(name)
            .ok_or_else(|| CorpusError::UnknownLanguage {
                name: name.to_string(),
            })
    }

    /// Render a JSON value in the requested machine format, or fall back to `text`
    pub fn render(&self, value: &serde_json::Value, text: impl FnOnce() -> String) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(text()),
            OutputFormat::Toon => Ok(format!("{}\n", encode_toon(value))),
            OutputFormat::Json => {
                let json =
                    serde_json::to_string_pretty(value).map_err(|e| CorpusError::Serialization {
                        message: format!("JSON serialization failed: {}", e),
                    })?;
                Ok(format!("{}\n", json))
            }
        }
    }
}

/// Encode a JSON value as TOON using the rtoon library
pub fn encode_toon(value: &serde_json::Value) -> String {
    rtoon::encode_default(value).unwrap_or_else(|e| format!("TOON encoding error: {}", e))
}

/// Serialize any value into JSON for rendering
pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| CorpusError::Serialization {
        message: format!("JSON serialization failed: {}", e),
    })
}

/// Format a byte count for text output
pub(crate) fn format_bytes(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    }
}
