//! fixture-corpus configuration management.
//!
//! Configuration is read from the first file that exists:
//! - the path given with `--config`
//! - `./fixture-corpus.toml`
//! - `~/.config/fixture-corpus/config.toml` (platform config dir on Windows/macOS)
//!
//! A missing file means defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::corpus::LoadOptions;
use crate::error::{CorpusError, Result};
use crate::fs_utils;
use crate::lang::Lang;
use crate::syntax::DEFAULT_MAX_ISSUES;
use crate::validate::CheckOptions;

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "fixture-corpus.toml";

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CorpusConfig {
    /// Corpus location and directory aliases
    #[serde(default)]
    pub corpus: CorpusSection,

    /// Defaults for `check`
    #[serde(default)]
    pub check: CheckSection,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// File the configuration was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CorpusSection {
    /// Corpus root; relative paths resolve against the config file's directory
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Directory name -> language identifier, e.g. `"c++" = "cpp"`
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSection {
    #[serde(default = "default_true")]
    pub syntax: bool,

    #[serde(default)]
    pub allow_empty: bool,

    #[serde(default = "default_max_issues")]
    pub max_issues_per_file: usize,
}

fn default_true() -> bool {
    true
}

fn default_max_issues() -> usize {
    DEFAULT_MAX_ISSUES
}

impl Default for CheckSection {
    fn default() -> Self {
        Self {
            syntax: true,
            allow_empty: false,
            max_issues_per_file: DEFAULT_MAX_ISSUES,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl CorpusConfig {
    /// Load configuration, honoring an explicit path first.
    ///
    /// An explicit path that does not exist is an error; the implicit
    /// locations are simply skipped.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(CorpusError::ConfigError {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            return Self::load_from(path);
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::load_from(&local);
        }

        if let Some(user) = fs_utils::get_config_base_dir().map(|d| d.join("config.toml")) {
            if user.exists() {
                return Self::load_from(&user);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| CorpusError::ConfigError {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        let mut config = Self::parse(&content)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse configuration text and validate aliases
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| CorpusError::ConfigError {
            message: format!("Failed to parse config: {}", e),
        })?;
        config.load_options()?;
        Ok(config)
    }

    /// Corpus root from the config, resolved against the config file's directory
    pub fn resolved_root(&self) -> Option<PathBuf> {
        let root = self.corpus.root.as_ref()?;
        if root.is_absolute() {
            return Some(root.clone());
        }
        let base = self
            .source
            .as_ref()
            .and_then(|p| p.parent())
            .filter(|p| !p.as_os_str().is_empty());
        Some(match base {
            Some(base) => base.join(root),
            None => root.clone(),
        })
    }

    /// Corpus loading options with aliases resolved to languages
    pub fn load_options(&self) -> Result<LoadOptions> {
        let mut aliases = BTreeMap::new();
        for (name, target) in &self.corpus.aliases {
            let lang = Lang::from_dir_name(target).map_err(|_| CorpusError::ConfigError {
                message: format!("alias '{}' points at unknown language '{}'", name, target),
            })?;
            aliases.insert(name.to_lowercase(), lang);
        }
        Ok(LoadOptions { aliases })
    }

    /// Default check options
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            syntax: self.check.syntax,
            allow_empty: self.check.allow_empty,
            max_issues_per_file: self.check.max_issues_per_file,
            lang: None,
        }
    }
}
