//! Fixtures compiled into the crate
//!
//! One or two reference samples per language ship inside the binary so a
//! corpus can be recreated anywhere with [`export`].

use std::path::{Path, PathBuf};

use tracing::info;

use crate::corpus::Corpus;
use crate::error::{CorpusError, Result};
use crate::fixture::FixtureFile;
use crate::fs_utils::write_atomic;
use crate::lang::Lang;

/// Virtual root used for bundled fixtures
pub const BUNDLED_ROOT: &str = "<bundled>/languages";

const FIXTURES: &[(Lang, &str, &[u8])] = &[
    (
        Lang::C,
        "valid.c",
        include_bytes!("../corpus/languages/c/valid.c"),
    ),
    (
        Lang::Cpp,
        "comprehensive.cpp",
        include_bytes!("../corpus/languages/cpp/comprehensive.cpp"),
    ),
    (
        Lang::Cpp,
        "valid.cpp",
        include_bytes!("../corpus/languages/cpp/valid.cpp"),
    ),
    (
        Lang::CSharp,
        "valid.cs",
        include_bytes!("../corpus/languages/csharp/valid.cs"),
    ),
    (
        Lang::Go,
        "comprehensive.go",
        include_bytes!("../corpus/languages/go/comprehensive.go"),
    ),
    (
        Lang::Go,
        "valid.go",
        include_bytes!("../corpus/languages/go/valid.go"),
    ),
    (
        Lang::Java,
        "comprehensive.java",
        include_bytes!("../corpus/languages/java/comprehensive.java"),
    ),
    (
        Lang::Java,
        "valid.java",
        include_bytes!("../corpus/languages/java/valid.java"),
    ),
    (
        Lang::JavaScript,
        "comprehensive.js",
        include_bytes!("../corpus/languages/javascript/comprehensive.js"),
    ),
    (
        Lang::JavaScript,
        "valid.js",
        include_bytes!("../corpus/languages/javascript/valid.js"),
    ),
    (
        Lang::Kotlin,
        "valid.kt",
        include_bytes!("../corpus/languages/kotlin/valid.kt"),
    ),
    (
        Lang::Php,
        "comprehensive.php",
        include_bytes!("../corpus/languages/php/comprehensive.php"),
    ),
    (
        Lang::Php,
        "valid.php",
        include_bytes!("../corpus/languages/php/valid.php"),
    ),
    (
        Lang::Python,
        "comprehensive.py",
        include_bytes!("../corpus/languages/python/comprehensive.py"),
    ),
    (
        Lang::Ruby,
        "valid.rb",
        include_bytes!("../corpus/languages/ruby/valid.rb"),
    ),
    (
        Lang::Rust,
        "valid.rs",
        include_bytes!("../corpus/languages/rust/valid.rs"),
    ),
    (
        Lang::Swift,
        "valid.swift",
        include_bytes!("../corpus/languages/swift/valid.swift"),
    ),
    (
        Lang::TypeScript,
        "valid.ts",
        include_bytes!("../corpus/languages/typescript/valid.ts"),
    ),
];

/// The bundled fixtures, in corpus order
pub fn fixtures() -> Vec<FixtureFile> {
    FIXTURES
        .iter()
        .map(|(lang, name, content)| {
            let relative = Path::new(lang.name()).join(name);
            FixtureFile::new(
                Path::new(BUNDLED_ROOT).join(&relative),
                relative,
                *lang,
                content.to_vec(),
            )
        })
        .collect()
}

/// The bundled fixtures as a corpus
pub fn corpus() -> Corpus {
    Corpus::from_fixtures(BUNDLED_ROOT, fixtures())
}

/// Write the bundled corpus under `dest` as `<dest>/<lang>/<file>`.
///
/// Existing files are left alone and reported as [`CorpusError::AlreadyExists`]
/// unless `overwrite` is set. Returns the written paths.
pub fn export(dest: &Path, overwrite: bool) -> Result<Vec<PathBuf>> {
    let fixtures = fixtures();

    if !overwrite {
        if let Some(existing) = fixtures
            .iter()
            .map(|f| dest.join(f.relative_path()))
            .find(|p| p.exists())
        {
            return Err(CorpusError::AlreadyExists {
                path: existing.display().to_string(),
            });
        }
    }

    let mut written = Vec::with_capacity(fixtures.len());
    for fixture in &fixtures {
        let target = dest.join(fixture.relative_path());
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        write_atomic(&target, fixture.bytes()).map_err(|source| CorpusError::WriteFailure {
            path: target.clone(),
            source,
        })?;
        written.push(target);
    }

    info!("exported {} fixture(s) to {}", written.len(), dest.display());
    Ok(written)
}
