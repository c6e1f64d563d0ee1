//! Fixture files: raw source blobs tagged with the language of their directory

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{CorpusError, Result};
use crate::lang::Lang;

/// Role of a fixture, derived from its file stem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureKind {
    /// `valid.*` and friends: must parse cleanly
    Valid,
    /// `invalid.*`: deliberately broken source
    Invalid,
    /// `comprehensive.*`: exercises many constructs, must parse cleanly
    Comprehensive,
    /// Any other name
    Sample,
}

impl FixtureKind {
    /// Classify a file stem by naming convention
    pub fn from_stem(stem: &str) -> Self {
        let stem = stem.to_lowercase();
        if stem.starts_with("invalid") || stem.ends_with("invalid") {
            Self::Invalid
        } else if stem.ends_with("valid") {
            Self::Valid
        } else if stem.starts_with("comprehensive") {
            Self::Comprehensive
        } else {
            Self::Sample
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Comprehensive => "comprehensive",
            Self::Sample => "sample",
        }
    }

    /// What the reference grammar should make of a fixture of this kind
    pub fn expectation(&self) -> ParseExpectation {
        match self {
            Self::Invalid => ParseExpectation::Errors,
            _ => ParseExpectation::Clean,
        }
    }
}

/// Expected outcome of parsing a fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseExpectation {
    Clean,
    Errors,
}

/// A single fixture file
#[derive(Debug, Clone)]
pub struct FixtureFile {
    path: PathBuf,
    relative_path: PathBuf,
    lang: Lang,
    content: Vec<u8>,
}

impl FixtureFile {
    /// Create a fixture.
    ///
    /// `relative_path` is relative to the corpus root (`<lang>/<file>`);
    /// `path` is where the bytes came from.
    pub fn new(
        path: impl Into<PathBuf>,
        relative_path: impl Into<PathBuf>,
        lang: Lang,
        content: Vec<u8>,
    ) -> Self {
        Self {
            path: path.into(),
            relative_path: relative_path.into(),
            lang,
            content,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Language tag of the directory the fixture lives in
    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// File name, e.g. `valid.cpp`
    pub fn name(&self) -> &str {
        self.relative_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    pub fn stem(&self) -> &str {
        self.relative_path
            .file_stem()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    pub fn extension(&self) -> Option<&str> {
        self.relative_path.extension().and_then(|e| e.to_str())
    }

    /// Language implied by the extension alone, if any
    pub fn extension_lang(&self) -> Option<Lang> {
        self.extension().and_then(|ext| Lang::from_extension(ext).ok())
    }

    pub fn kind(&self) -> FixtureKind {
        FixtureKind::from_stem(self.stem())
    }

    pub fn expectation(&self) -> ParseExpectation {
        self.kind().expectation()
    }

    /// Raw bytes, exactly as stored
    pub fn bytes(&self) -> &[u8] {
        &self.content
    }

    /// Content as UTF-8 text
    pub fn text(&self) -> Result<&str> {
        std::str::from_utf8(&self.content).map_err(|_| CorpusError::NotUtf8 {
            path: self.relative_path.display().to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Number of lines, counting a trailing line without a newline
    pub fn line_count(&self) -> usize {
        if self.content.is_empty() {
            return 0;
        }
        let newlines = self.content.iter().filter(|&&b| b == b'\n').count();
        if self.content.ends_with(b"\n") {
            newlines
        } else {
            newlines + 1
        }
    }

    /// Serializable metadata without the content
    pub fn summary(&self) -> FixtureSummary {
        FixtureSummary {
            path: self.relative_path.display().to_string(),
            lang: self.lang,
            kind: self.kind(),
            bytes: self.len(),
            lines: self.line_count(),
        }
    }
}

/// Fixture metadata for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureSummary {
    pub path: String,
    pub lang: Lang,
    pub kind: FixtureKind,
    pub bytes: usize,
    pub lines: usize,
}
