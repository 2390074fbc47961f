//! Discovery and management of the `.ward/` directory.
//!
//! The `.ward/` directory holds the config file and the bed file. It is
//! found by walking up the directory tree from the working directory, so
//! the `ward` binary works from anywhere inside a ward checkout. The
//! `WARD_DIR` environment variable overrides discovery entirely.

use std::path::{Path, PathBuf};

use crate::config::ConfigError;

/// The name of the ward metadata directory.
const WARD_DIR_NAME: &str = ".ward";

/// The environment variable that overrides ward directory discovery.
const WARD_DIR_ENV: &str = "WARD_DIR";

/// Walks up the directory tree from `start` looking for a `.ward/`
/// directory.
///
/// The `WARD_DIR` environment variable is checked first; it wins when it
/// points at an existing directory. Returns `None` if the filesystem root
/// is reached without finding one.
pub fn find_ward_dir(start: &Path) -> Option<PathBuf> {
    if let Ok(env_dir) = std::env::var(WARD_DIR_ENV) {
        let env_path = PathBuf::from(&env_dir);
        if env_path.is_dir() {
            return Some(env_path);
        }
    }

    let start = start.canonicalize().ok()?;
    let mut current = start.as_path();
    loop {
        let candidate = current.join(WARD_DIR_NAME);
        if candidate.is_dir() {
            return Some(candidate);
        }
        match current.parent() {
            Some(parent) if parent != current => current = parent,
            _ => break,
        }
    }
    None
}

/// Like [`find_ward_dir`], but converts `None` into
/// [`ConfigError::WardDirNotFound`].
pub fn find_ward_dir_or_error(start: &Path) -> Result<PathBuf, ConfigError> {
    find_ward_dir(start).ok_or(ConfigError::WardDirNotFound)
}

/// Ensures a `.ward/` directory exists at the given path, creating it
/// (and any parents) if needed.
///
/// If `path` is not itself named `.ward`, a `.ward/` subdirectory is
/// created under it. Returns the path to the `.ward/` directory.
pub fn ensure_ward_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    let ward_dir = if path.ends_with(WARD_DIR_NAME) {
        path.to_path_buf()
    } else {
        path.join(WARD_DIR_NAME)
    };
    std::fs::create_dir_all(&ward_dir)?;
    Ok(ward_dir)
}
