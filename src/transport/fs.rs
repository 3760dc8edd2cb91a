use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::errors::SelectionError;
use crate::types::EntryName;

/// Names of every entry directly under `dir`, in enumeration order.
///
/// Files and subdirectories are both listed; nothing below the first level is
/// visited and symlinks are reported without being followed. A `dir` that is
/// missing, unreadable, or not a directory is `SourceUnavailable`.
pub fn list_entry_names(dir: &Path) -> Result<Vec<EntryName>, SelectionError> {
    let unavailable = |source| SelectionError::SourceUnavailable {
        path: dir.to_path_buf(),
        source,
    };
    let mut names = Vec::new();
    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry.map_err(|err| unavailable(io::Error::from(err)))?;
        if entry.depth() == 0 {
            if !entry.path().is_dir() {
                return Err(unavailable(io::Error::new(
                    io::ErrorKind::NotADirectory,
                    "path exists and is not a directory",
                )));
            }
            continue;
        }
        names.push(entry.file_name().to_os_string());
    }
    debug!(dir = %dir.display(), entries = names.len(), "listed source directory");
    Ok(names)
}

/// True if `name` ends with `suffix` (exact, case-sensitive, on the raw name bytes).
pub fn has_suffix(name: &OsStr, suffix: &str) -> bool {
    name.as_encoded_bytes().ends_with(suffix.as_bytes())
}

/// Create `dir` if it is absent. Returns `true` when the directory was created.
///
/// Only the last path segment is created; a missing parent is an error.
pub fn ensure_dir(dir: &Path) -> Result<bool, SelectionError> {
    let unavailable = |source| SelectionError::TargetUnavailable {
        path: dir.to_path_buf(),
        source,
    };
    match fs::metadata(dir) {
        Ok(metadata) if metadata.is_dir() => Ok(false),
        Ok(_) => Err(unavailable(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "path exists and is not a directory",
        ))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            fs::create_dir(dir).map_err(unavailable)?;
            debug!(dir = %dir.display(), "created target directory");
            Ok(true)
        }
        Err(err) => Err(unavailable(err)),
    }
}

/// Rename `source_dir/name` to `target_dir/name` and return the destination.
///
/// An existing destination is replaced according to the platform's rename rules.
pub fn relocate(
    source_dir: &Path,
    target_dir: &Path,
    name: &OsStr,
) -> Result<PathBuf, SelectionError> {
    let from = source_dir.join(name);
    let to = target_dir.join(name);
    if fs::symlink_metadata(&to).is_ok() {
        warn!(path = %to.display(), "destination already exists and will be replaced");
    }
    match fs::rename(&from, &to) {
        Ok(()) => {
            debug!(from = %from.display(), to = %to.display(), "moved entry");
            Ok(to)
        }
        Err(source) => Err(SelectionError::Move { from, to, source }),
    }
}
