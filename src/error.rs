//! Error types and exit codes for fixture-corpus

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Main error type for corpus operations
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Unknown language directory: {name}")]
    UnknownLanguage { name: String },

    #[error("Unsupported language for extension: {extension}")]
    UnsupportedExtension { extension: String },

    #[error("Failed to read {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Fixture is not valid UTF-8: {path}")]
    NotUtf8 { path: String },

    #[error("Failed to parse file: {message}")]
    ParseFailure { message: String },

    #[error("Refusing to overwrite existing file: {path}")]
    AlreadyExists { path: String },

    #[error("Corpus check failed with {errors} error(s)")]
    ValidationFailed { errors: usize, report: String },

    #[error("Serialization failed: {message}")]
    Serialization { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CorpusError {
    /// Convert error to the process exit code:
    /// - 0: Success
    /// - 1: File not found / IO error
    /// - 2: Unknown language or extension, undecodable fixture
    /// - 3: Parse failure
    /// - 4: Corpus check found errors
    /// - 5: Configuration error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::from(1),
            Self::NotADirectory { .. } => ExitCode::from(1),
            Self::ReadFailure { .. } => ExitCode::from(1),
            Self::WriteFailure { .. } => ExitCode::from(1),
            Self::AlreadyExists { .. } => ExitCode::from(1),
            Self::Serialization { .. } => ExitCode::from(1),
            Self::Io(_) => ExitCode::from(1),
            Self::UnknownLanguage { .. } => ExitCode::from(2),
            Self::UnsupportedExtension { .. } => ExitCode::from(2),
            Self::NotUtf8 { .. } => ExitCode::from(2),
            Self::ParseFailure { .. } => ExitCode::from(3),
            Self::ValidationFailed { .. } => ExitCode::from(4),
            Self::ConfigError { .. } => ExitCode::from(5),
        }
    }

    /// Output that belongs on stdout even though the command failed
    pub fn stdout_output(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed { report, .. } => Some(report),
            _ => None,
        }
    }
}

/// Result type alias for corpus operations
pub type Result<T> = std::result::Result<T, CorpusError>;
