//! Corpus enumeration
//!
//! A corpus root holds one directory per language, each holding fixture
//! files:
//!
//! ```text
//! languages/
//!   c/valid.c
//!   cpp/valid.cpp
//!   cpp/comprehensive.cpp
//! ```
//!
//! Anything that does not fit this shape (unknown directory names, files
//! directly under the root, nested directories) is recorded rather than
//! loaded so that `validate` can report it. Symlinked language directories
//! and fixtures are followed.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use ignore::WalkBuilder;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{CorpusError, Result};
use crate::fixture::FixtureFile;
use crate::fs_utils::normalize_path;
use crate::lang::Lang;

/// Options controlling how a corpus directory is read
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Extra directory names mapped onto a language (keys are lowercase)
    pub aliases: BTreeMap<String, Lang>,
}

impl LoadOptions {
    /// Resolve a directory name to a language, honoring aliases
    pub fn resolve_dir(&self, name: &str) -> Option<Lang> {
        Lang::from_dir_name(name)
            .ok()
            .or_else(|| self.aliases.get(&name.to_lowercase()).copied())
    }
}

/// A loaded fixture corpus, grouped by language
#[derive(Debug, Clone)]
pub struct Corpus {
    root: PathBuf,
    groups: BTreeMap<Lang, Vec<FixtureFile>>,
    unknown_dirs: Vec<PathBuf>,
    stray_files: Vec<PathBuf>,
    nested_dirs: Vec<PathBuf>,
}

impl Corpus {
    /// Load the corpus rooted at `root` with default options
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(root, &LoadOptions::default())
    }

    /// Load the corpus rooted at `root`
    pub fn open_with(root: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let root = root.as_ref();
        if !root.exists() {
            return Err(CorpusError::FileNotFound {
                path: root.display().to_string(),
            });
        }
        if !root.is_dir() {
            return Err(CorpusError::NotADirectory {
                path: root.display().to_string(),
            });
        }
        let root = root
            .canonicalize()
            .map(|p| normalize_path(&p))
            .map_err(|source| CorpusError::ReadFailure {
                path: root.to_path_buf(),
                source,
            })?;

        let mut groups: BTreeMap<Lang, Vec<FixtureFile>> = BTreeMap::new();
        let mut unknown_dirs = Vec::new();
        let mut stray_files = Vec::new();
        let mut nested_dirs = Vec::new();
        let mut pending: Vec<(PathBuf, PathBuf, Lang)> = Vec::new();

        let walker = WalkBuilder::new(&root)
            .max_depth(Some(2))
            .follow_links(true)
            .hidden(true)
            .parents(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for entry in walker {
            let entry = entry.map_err(|e| CorpusError::ReadFailure {
                path: walk_error_path(&e).unwrap_or(&root).to_path_buf(),
                source: std::io::Error::other(e),
            })?;
            let depth = entry.depth();
            if depth == 0 {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(&root).unwrap_or(path).to_path_buf();

            match depth {
                1 if path.is_dir() => {
                    let name = entry.file_name().to_string_lossy();
                    match options.resolve_dir(&name) {
                        Some(lang) => {
                            debug!("language directory {} -> {}", name, lang);
                            groups.entry(lang).or_default();
                        }
                        None => {
                            warn!("skipping unknown language directory {}", relative.display());
                            unknown_dirs.push(relative);
                        }
                    }
                }
                1 => {
                    warn!("file outside any language directory: {}", relative.display());
                    stray_files.push(relative);
                }
                _ => {
                    let dir_name = relative
                        .components()
                        .next()
                        .map(|c| c.as_os_str().to_string_lossy().to_string())
                        .unwrap_or_default();
                    let Some(lang) = options.resolve_dir(&dir_name) else {
                        continue;
                    };
                    if path.is_dir() {
                        warn!("nested directory ignored: {}", relative.display());
                        nested_dirs.push(relative);
                    } else {
                        pending.push((path.to_path_buf(), relative, lang));
                    }
                }
            }
        }

        let fixtures = pending
            .into_par_iter()
            .map(|(path, relative, lang)| {
                let content = std::fs::read(&path).map_err(|source| CorpusError::ReadFailure {
                    path: path.clone(),
                    source,
                })?;
                Ok(FixtureFile::new(path, relative, lang, content))
            })
            .collect::<Result<Vec<_>>>()?;

        for fixture in fixtures {
            groups.entry(fixture.lang()).or_default().push(fixture);
        }
        for group in groups.values_mut() {
            group.sort_by(|a, b| a.relative_path().cmp(b.relative_path()));
        }

        let corpus = Self {
            root,
            groups,
            unknown_dirs,
            stray_files,
            nested_dirs,
        };
        debug!(
            "loaded {} fixture(s) in {} language(s) from {}",
            corpus.len(),
            corpus.groups.len(),
            corpus.root.display()
        );
        Ok(corpus)
    }

    /// Build a corpus from fixtures already in memory
    pub fn from_fixtures(root: impl Into<PathBuf>, fixtures: Vec<FixtureFile>) -> Self {
        let mut groups: BTreeMap<Lang, Vec<FixtureFile>> = BTreeMap::new();
        for fixture in fixtures {
            groups.entry(fixture.lang()).or_default().push(fixture);
        }
        for group in groups.values_mut() {
            group.sort_by(|a, b| a.relative_path().cmp(b.relative_path()));
        }
        Self {
            root: root.into(),
            groups,
            unknown_dirs: Vec::new(),
            stray_files: Vec::new(),
            nested_dirs: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Languages that have a directory in this corpus, in canonical order
    pub fn languages(&self) -> impl Iterator<Item = Lang> + '_ {
        self.groups.keys().copied()
    }

    /// Fixtures of one language, sorted by path. Empty if the language is absent.
    pub fn fixtures(&self, lang: Lang) -> &[FixtureFile] {
        self.groups.get(&lang).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every fixture, grouped by language then sorted by path
    pub fn iter(&self) -> impl Iterator<Item = &FixtureFile> {
        self.groups.values().flatten()
    }

    /// Look up a fixture by its path relative to the root; `.` components are ignored
    pub fn get(&self, relative_path: impl AsRef<Path>) -> Option<&FixtureFile> {
        let wanted: PathBuf = relative_path
            .as_ref()
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();
        self.iter().find(|f| f.relative_path() == wanted.as_path())
    }

    /// Look up a fixture by language and file name
    pub fn find(&self, lang: Lang, name: &str) -> Option<&FixtureFile> {
        self.fixtures(lang).iter().find(|f| f.name() == name)
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Directories directly under the root whose name is not a known language
    pub fn unknown_dirs(&self) -> &[PathBuf] {
        &self.unknown_dirs
    }

    /// Files directly under the root
    pub fn stray_files(&self) -> &[PathBuf] {
        &self.stray_files
    }

    /// Directories inside a language directory
    pub fn nested_dirs(&self) -> &[PathBuf] {
        &self.nested_dirs
    }

    /// A copy of this corpus restricted to one language
    pub fn filter_lang(&self, lang: Lang) -> Self {
        let mut groups = BTreeMap::new();
        if let Some(group) = self.groups.get(&lang) {
            groups.insert(lang, group.clone());
        }
        Self {
            root: self.root.clone(),
            groups,
            unknown_dirs: Vec::new(),
            stray_files: Vec::new(),
            nested_dirs: Vec::new(),
        }
    }
}

/// Path of the entry a walk error is about, if the error carries one
fn walk_error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            walk_error_path(err)
        }
        ignore::Error::Partial(errs) => errs.iter().find_map(walk_error_path),
        _ => None,
    }
}
