//! Corpus validation
//!
//! Sanity checks on fixture data:
//! - directory names belong to the closed set of [`Lang`] identifiers
//! - file extensions agree with the directory's language
//! - every fixture is UTF-8 text and, unless allowed, non-empty
//! - fixtures parse cleanly under the reference grammar, except `invalid.*`
//!   fixtures which must not
//!
//! Layout oddities (stray files, nested directories, empty language
//! directories) are reported as warnings.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::corpus::Corpus;
use crate::error::Result;
use crate::fixture::{FixtureFile, ParseExpectation};
use crate::lang::Lang;
use crate::syntax::{check_source, SyntaxReport, DEFAULT_MAX_ISSUES};

/// Options for a validation run
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Parse fixtures with their reference grammar
    pub syntax: bool,
    /// Accept zero-byte fixtures
    pub allow_empty: bool,
    /// Cap on syntax issues recorded per fixture
    pub max_issues_per_file: usize,
    /// Only check this language's directory; layout checks are skipped
    pub lang: Option<Lang>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            syntax: true,
            allow_empty: false,
            max_issues_per_file: DEFAULT_MAX_ISSUES,
            lang: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// Which check produced an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    UnknownLanguageDir,
    StrayFile,
    NestedDirectory,
    EmptyLanguageDir,
    MissingExtension,
    ExtensionMismatch,
    NotUtf8,
    EmptyFixture,
    UnexpectedSyntaxErrors,
    ExpectedSyntaxErrors,
}

impl Check {
    pub fn severity(&self) -> Severity {
        match self {
            Self::StrayFile | Self::NestedDirectory | Self::EmptyLanguageDir => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::UnknownLanguageDir => "unknown_language_dir",
            Self::StrayFile => "stray_file",
            Self::NestedDirectory => "nested_directory",
            Self::EmptyLanguageDir => "empty_language_dir",
            Self::MissingExtension => "missing_extension",
            Self::ExtensionMismatch => "extension_mismatch",
            Self::NotUtf8 => "not_utf8",
            Self::EmptyFixture => "empty_fixture",
            Self::UnexpectedSyntaxErrors => "unexpected_syntax_errors",
            Self::ExpectedSyntaxErrors => "expected_syntax_errors",
        }
    }
}

/// A single finding
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub check: Check,
    pub severity: Severity,
    /// Path relative to the corpus root
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syntax: Option<SyntaxReport>,
}

impl Issue {
    fn new(check: Check, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            check,
            severity: check.severity(),
            path: path.into(),
            message: message.into(),
            syntax: None,
        }
    }
}

/// Outcome of validating a corpus
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub root: String,
    pub files_checked: usize,
    /// Fixture count per language directory
    pub languages: BTreeMap<String, usize>,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// True when no error-severity issue was found
    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Issues reported against one relative path
    pub fn issues_for<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Issue> + 'a {
        self.issues.iter().filter(move |i| i.path == path)
    }
}

/// Runs the corpus checks
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: CheckOptions,
}

impl Validator {
    pub fn new(options: CheckOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Validate every fixture and the layout of `corpus`
    pub fn run(&self, corpus: &Corpus) -> Result<ValidationReport> {
        let filtered;
        let corpus = match self.options.lang {
            Some(lang) => {
                filtered = corpus.filter_lang(lang);
                &filtered
            }
            None => corpus,
        };

        let mut issues = Vec::new();

        for dir in corpus.unknown_dirs() {
            let name = dir.display().to_string();
            issues.push(Issue::new(
                Check::UnknownLanguageDir,
                name.clone(),
                format!(
                    "'{}' is not a known language identifier (expected one of: {})",
                    name,
                    Lang::ALL.map(|l| l.name()).join(", ")
                ),
            ));
        }
        for file in corpus.stray_files() {
            issues.push(Issue::new(
                Check::StrayFile,
                file.display().to_string(),
                "file is not inside a language directory",
            ));
        }
        for dir in corpus.nested_dirs() {
            issues.push(Issue::new(
                Check::NestedDirectory,
                dir.display().to_string(),
                "nested directories are not part of the corpus",
            ));
        }

        let mut languages = BTreeMap::new();
        for lang in corpus.languages() {
            let count = corpus.fixtures(lang).len();
            languages.insert(lang.name().to_string(), count);
            if count == 0 {
                issues.push(Issue::new(
                    Check::EmptyLanguageDir,
                    lang.name(),
                    "language directory contains no fixtures",
                ));
            }
        }

        let fixtures: Vec<&FixtureFile> = corpus.iter().collect();
        let per_fixture = fixtures
            .par_iter()
            .map(|fixture| self.check_fixture(fixture))
            .collect::<Result<Vec<_>>>()?;
        issues.extend(per_fixture.into_iter().flatten());

        let report = ValidationReport {
            root: corpus.root().display().to_string(),
            files_checked: fixtures.len(),
            languages,
            issues,
        };
        info!(
            "checked {} fixture(s): {} error(s), {} warning(s)",
            report.files_checked,
            report.error_count(),
            report.warning_count()
        );
        Ok(report)
    }

    /// All per-file checks for one fixture
    pub fn check_fixture(&self, fixture: &FixtureFile) -> Result<Vec<Issue>> {
        let path = fixture.relative_path().display().to_string();
        let lang = fixture.lang();
        let mut issues = Vec::new();

        match fixture.extension() {
            None => issues.push(Issue::new(
                Check::MissingExtension,
                path.clone(),
                format!("file has no extension; {} expects one of: {}", lang, lang.extensions().join(", ")),
            )),
            Some(ext) if !lang.accepts_extension(ext) => {
                let implied = fixture
                    .extension_lang()
                    .map(|l| format!(" (looks like {})", l))
                    .unwrap_or_default();
                issues.push(Issue::new(
                    Check::ExtensionMismatch,
                    path.clone(),
                    format!(".{} does not belong in the {} directory{}", ext, lang, implied),
                ));
            }
            Some(_) => {}
        }

        if fixture.is_empty() && !self.options.allow_empty {
            issues.push(Issue::new(Check::EmptyFixture, path.clone(), "fixture is empty"));
        }

        let Ok(source) = fixture.text() else {
            issues.push(Issue::new(
                Check::NotUtf8,
                path,
                "fixture is not valid UTF-8 source text",
            ));
            return Ok(issues);
        };

        if !self.options.syntax {
            return Ok(issues);
        }

        debug!("parsing {} as {}", path, lang);
        let report = check_source(lang, source, self.options.max_issues_per_file)?;
        match (fixture.expectation(), report.is_clean()) {
            (ParseExpectation::Clean, false) => {
                let first = report
                    .issues
                    .first()
                    .map(|i| format!(", first at {}:{}", i.line, i.column))
                    .unwrap_or_default();
                let mut issue = Issue::new(
                    Check::UnexpectedSyntaxErrors,
                    path,
                    format!(
                        "{} syntax error(s) under the {} grammar{}",
                        report.error_count,
                        lang.display_name(),
                        first
                    ),
                );
                issue.syntax = Some(report);
                issues.push(issue);
            }
            (ParseExpectation::Errors, true) => issues.push(Issue::new(
                Check::ExpectedSyntaxErrors,
                path,
                format!(
                    "deliberately invalid fixture parses cleanly under the {} grammar",
                    lang.display_name()
                ),
            )),
            _ => {}
        }

        Ok(issues)
    }
}
