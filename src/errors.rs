use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for listing, sampling, and relocation failures.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// The source directory is missing, unreadable, or not a directory.
    #[error("source directory '{}' is unavailable", path.display())]
    SourceUnavailable {
        /// Configured source directory.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },
    /// Fewer suffix-matching entries exist than were requested.
    #[error("sample larger than population: requested {requested}, found {available}")]
    InsufficientPopulation {
        /// Number of matching entries found.
        available: usize,
        /// Number of entries requested.
        requested: usize,
    },
    /// The target directory could not be created or is not a directory.
    #[error("target directory '{}' is unavailable", path.display())]
    TargetUnavailable {
        /// Configured target directory.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },
    /// Renaming one sampled entry failed; earlier moves are kept.
    #[error("failed to move '{}' to '{}'", from.display(), to.display())]
    Move {
        /// Entry path in the source directory.
        from: PathBuf,
        /// Destination path in the target directory.
        to: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },
}
