//! fixture-corpus: language-tagged source fixtures
//!
//! A fixture corpus is a directory tree rooted at a `languages` folder with one
//! subdirectory per language. This library enumerates such a tree, exposes
//! each file's raw bytes together with the language tag of its directory, and
//! checks the corpus for structural problems and syntax errors using
//! tree-sitter reference grammars.
//!
//! # Supported Languages
//!
//! - C, C++, C#
//! - Go, Rust, Swift
//! - Java, Kotlin
//! - JavaScript, TypeScript, PHP
//! - Python, Ruby
//!
//! # Example
//!
//! ```no_run
//! use fixture_corpus::{Corpus, Lang, Validator};
//!
//! let corpus = Corpus::open("tests/resources/languages")?;
//! for fixture in corpus.fixtures(Lang::Cpp) {
//!     println!("{} ({} bytes)", fixture.relative_path().display(), fixture.len());
//! }
//!
//! let report = Validator::default().run(&corpus)?;
//! assert!(report.is_ok());
//! # Ok::<(), fixture_corpus::CorpusError>(())
//! ```

pub mod bundled;
pub mod cli;
pub mod commands;
pub mod config;
pub mod corpus;
pub mod error;
pub mod fixture;
pub mod fs_utils;
pub mod lang;
pub mod syntax;
pub mod validate;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use config::CorpusConfig;
pub use corpus::{Corpus, LoadOptions};
pub use error::{CorpusError, Result};
pub use fixture::{FixtureFile, FixtureKind, FixtureSummary, ParseExpectation};
pub use lang::Lang;
pub use syntax::{check_fixture, check_source, SyntaxIssue, SyntaxIssueKind, SyntaxReport};
pub use validate::{Check, CheckOptions, Issue, Severity, ValidationReport, Validator};
