//! Syntax checking against each language's reference tree-sitter grammar
//!
//! Only error locations are taken from the tree; no other information is
//! extracted from fixtures.

use serde::Serialize;
use tree_sitter::{Node, Parser};

use crate::error::{CorpusError, Result};
use crate::fixture::FixtureFile;
use crate::lang::Lang;

/// Default cap on recorded issues per file
pub const DEFAULT_MAX_ISSUES: usize = 10;

/// What kind of problem the grammar reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxIssueKind {
    /// Input the grammar could not fit anywhere (`ERROR` node)
    Unexpected,
    /// A token the grammar had to invent to recover (`MISSING` node)
    Missing,
}

/// One syntax problem, 1-based position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxIssue {
    pub kind: SyntaxIssueKind,
    pub line: usize,
    pub column: usize,
    /// Grammar node kind; for `Missing`, the token that was expected
    pub node: String,
}

/// Result of parsing one source text
#[derive(Debug, Clone, Serialize)]
pub struct SyntaxReport {
    pub lang: Lang,
    /// Total number of problems, including those past the cap
    pub error_count: usize,
    pub issues: Vec<SyntaxIssue>,
}

impl SyntaxReport {
    pub fn is_clean(&self) -> bool {
        self.error_count == 0
    }

    /// Whether `issues` holds fewer entries than `error_count`
    pub fn is_truncated(&self) -> bool {
        self.issues.len() < self.error_count
    }
}

/// Parse `source` with the grammar for `lang` and collect every error and missing node
pub fn check_source(lang: Lang, source: &str, max_issues: usize) -> Result<SyntaxReport> {
    let mut parser = Parser::new();
    parser
        .set_language(&lang.tree_sitter_language())
        .map_err(|e| CorpusError::ParseFailure {
            message: format!("Failed to set language for {}: {:?}", lang.name(), e),
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| CorpusError::ParseFailure {
            message: format!("Parser returned no tree for {} source", lang.name()),
        })?;

    let mut error_count = 0;
    let mut issues = Vec::new();
    let mut stack: Vec<Node> = vec![tree.root_node()];

    while let Some(node) = stack.pop() {
        let kind = if node.is_error() {
            Some(SyntaxIssueKind::Unexpected)
        } else if node.is_missing() {
            Some(SyntaxIssueKind::Missing)
        } else {
            None
        };

        if let Some(kind) = kind {
            error_count += 1;
            if issues.len() < max_issues {
                let pos = node.start_position();
                issues.push(SyntaxIssue {
                    kind,
                    line: pos.row + 1,
                    column: pos.column + 1,
                    node: node.kind().to_string(),
                });
            }
            // errors nested inside an ERROR node belong to the same problem
            continue;
        }

        if !node.has_error() {
            continue;
        }

        let mut cursor = node.walk();
        let children: Vec<Node> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }

    Ok(SyntaxReport {
        lang,
        error_count,
        issues,
    })
}

/// Check a fixture's text with the grammar of its directory language
pub fn check_fixture(fixture: &FixtureFile, max_issues: usize) -> Result<SyntaxReport> {
    let source = fixture.text()?;
    check_source(fixture.lang(), source, max_issues)
}
