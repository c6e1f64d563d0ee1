//! Language identifiers and tree-sitter grammar loading
//!
//! The set of languages is closed: every corpus directory must be named after
//! one of the [`Lang`] identifiers below.

use std::fmt;
use std::path::Path;

use serde::Serialize;
use tree_sitter::Language;

use crate::error::{CorpusError, Result};

/// Languages a fixture corpus may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    C,
    Cpp,
    CSharp,
    Go,
    Java,
    JavaScript,
    Kotlin,
    Php,
    Python,
    Ruby,
    Rust,
    Swift,
    TypeScript,
}

impl Lang {
    /// Every supported language, in canonical order
    pub const ALL: [Lang; 13] = [
        Self::C,
        Self::Cpp,
        Self::CSharp,
        Self::Go,
        Self::Java,
        Self::JavaScript,
        Self::Kotlin,
        Self::Php,
        Self::Python,
        Self::Ruby,
        Self::Rust,
        Self::Swift,
        Self::TypeScript,
    ];

    /// Resolve a corpus directory name to its language
    pub fn from_dir_name(name: &str) -> Result<Self> {
        let lowered = name.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.name() == lowered)
            .ok_or_else(|| CorpusError::UnknownLanguage {
                name: name.to_string(),
            })
    }

    /// Detect language from file path extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| CorpusError::UnsupportedExtension {
                extension: "none".to_string(),
            })?;

        Self::from_extension(ext)
    }

    /// Detect language from file extension string
    ///
    /// `.h` is ambiguous between C and C++ and resolves to C here; use
    /// [`Lang::accepts_extension`] when the directory is already known.
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "c" | "h" => Ok(Self::C),
            "cpp" | "cc" | "cxx" | "hpp" | "hxx" | "hh" => Ok(Self::Cpp),
            "cs" => Ok(Self::CSharp),
            "go" => Ok(Self::Go),
            "java" => Ok(Self::Java),
            "js" | "mjs" | "cjs" => Ok(Self::JavaScript),
            "kt" | "kts" => Ok(Self::Kotlin),
            "php" => Ok(Self::Php),
            "py" | "pyi" => Ok(Self::Python),
            "rb" => Ok(Self::Ruby),
            "rs" => Ok(Self::Rust),
            "swift" => Ok(Self::Swift),
            "ts" | "mts" | "cts" => Ok(Self::TypeScript),
            _ => Err(CorpusError::UnsupportedExtension {
                extension: ext.to_string(),
            }),
        }
    }

    /// Get the canonical name of the language, which is also its directory name
    pub fn name(&self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::CSharp => "csharp",
            Self::Go => "go",
            Self::Java => "java",
            Self::JavaScript => "javascript",
            Self::Kotlin => "kotlin",
            Self::Php => "php",
            Self::Python => "python",
            Self::Ruby => "ruby",
            Self::Rust => "rust",
            Self::Swift => "swift",
            Self::TypeScript => "typescript",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Cpp => "C++",
            Self::CSharp => "C#",
            Self::Go => "Go",
            Self::Java => "Java",
            Self::JavaScript => "JavaScript",
            Self::Kotlin => "Kotlin",
            Self::Php => "PHP",
            Self::Python => "Python",
            Self::Ruby => "Ruby",
            Self::Rust => "Rust",
            Self::Swift => "Swift",
            Self::TypeScript => "TypeScript",
        }
    }

    /// Get common file extensions for this language
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::C => &["c", "h"],
            Self::Cpp => &["cpp", "cc", "cxx", "hpp", "hxx", "hh"],
            Self::CSharp => &["cs"],
            Self::Go => &["go"],
            Self::Java => &["java"],
            Self::JavaScript => &["js", "mjs", "cjs"],
            Self::Kotlin => &["kt", "kts"],
            Self::Php => &["php"],
            Self::Python => &["py", "pyi"],
            Self::Ruby => &["rb"],
            Self::Rust => &["rs"],
            Self::Swift => &["swift"],
            Self::TypeScript => &["ts", "mts", "cts"],
        }
    }

    /// Whether a file with this extension belongs in this language's directory
    pub fn accepts_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        if self.extensions().contains(&ext.as_str()) {
            return true;
        }
        // C headers are routinely shared with C++ sources
        matches!(self, Self::Cpp) && ext == "h"
    }

    /// Get the tree-sitter Language used as the reference grammar
    pub fn tree_sitter_language(&self) -> Language {
        match self {
            Self::C => tree_sitter_c::LANGUAGE.into(),
            Self::Cpp => tree_sitter_cpp::LANGUAGE.into(),
            Self::CSharp => tree_sitter_c_sharp::LANGUAGE.into(),
            Self::Go => tree_sitter_go::LANGUAGE.into(),
            Self::Java => tree_sitter_java::LANGUAGE.into(),
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Self::Kotlin => tree_sitter_kotlin_ng::LANGUAGE.into(),
            Self::Php => tree_sitter_php::LANGUAGE_PHP.into(),
            Self::Python => tree_sitter_python::LANGUAGE.into(),
            Self::Ruby => tree_sitter_ruby::LANGUAGE.into(),
            Self::Rust => tree_sitter_rust::LANGUAGE.into(),
            Self::Swift => tree_sitter_swift::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
