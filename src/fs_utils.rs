//! Cross-platform filesystem utilities
//!
//! - `normalize_path`: Strips Windows `\\?\` prefix from canonicalized paths
//! - `atomic_rename` / `write_atomic`: Atomic file replacement (Windows requires explicit delete)
//! - `get_config_base_dir`: Platform-appropriate configuration directory

use std::io;
use std::path::{Path, PathBuf};

/// Normalize Windows paths by removing the `\\?\` prefix if present.
///
/// On Windows, `Path::canonicalize()` returns paths with the extended-length path prefix
/// (`\\?\C:\...`), which breaks prefix stripping against user-supplied roots and
/// looks confusing in reports. No-op on Unix.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use fixture_corpus::fs_utils::normalize_path;
///
/// let path = PathBuf::from("/home/user/languages");
/// assert_eq!(normalize_path(&path), path);
/// ```
pub fn normalize_path(path: &Path) -> PathBuf {
    #[cfg(windows)]
    {
        let s = path.to_string_lossy();
        // Handle UNC paths: \\?\UNC\server\share -> \\server\share
        if let Some(stripped) = s.strip_prefix(r"\\?\UNC\") {
            return PathBuf::from(format!(r"\\{}", stripped));
        }
        // Handle local paths: \\?\C:\path -> C:\path
        if let Some(stripped) = s.strip_prefix(r"\\?\") {
            return PathBuf::from(stripped);
        }
    }
    path.to_path_buf()
}

/// Cross-platform atomic rename that handles Windows file replacement.
///
/// On Unix, `fs::rename` atomically replaces the target if it exists.
/// On Windows, `fs::rename` fails if the target exists, so the target is deleted first.
pub fn atomic_rename(src: &Path, dst: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        if dst.exists() {
            std::fs::remove_file(dst)?;
        }
    }
    std::fs::rename(src, dst)
}

/// Write `contents` to `dst` through a sibling temp file and an atomic rename.
///
/// Readers never observe a half-written file.
pub fn write_atomic(dst: &Path, contents: &[u8]) -> io::Result<()> {
    let file_name = dst
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "destination has no file name"))?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp = dst.with_file_name(tmp_name);

    std::fs::write(&tmp, contents)?;
    if let Err(e) = atomic_rename(&tmp, dst) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

/// Get platform-appropriate configuration directory for fixture-corpus.
///
/// - **Windows**: `%APPDATA%\fixture-corpus`
/// - **Unix**: `$XDG_CONFIG_HOME/fixture-corpus` or `~/.config/fixture-corpus`
/// - **Fallback**: None when no home directory can be determined
pub fn get_config_base_dir() -> Option<PathBuf> {
    #[cfg(not(windows))]
    {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            if !xdg_config.is_empty() {
                return Some(PathBuf::from(xdg_config).join("fixture-corpus"));
            }
        }
    }
    dirs::config_dir().map(|dir| dir.join("fixture-corpus"))
}
