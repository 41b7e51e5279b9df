use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building or extracting an archive.
///
/// Each variant carries the filesystem path it concerns, so callers can
/// correlate a failure with the file or entry that caused it. Most variants
/// are reported per item and do not stop a run; [`ArchiveError::PathTraversal`]
/// and [`ArchiveError::DirectoryCreation`] abort extraction.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// A directory's contents could not be enumerated during traversal.
    #[error("failed to list directory {path}: {source}")]
    Listing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file could not be opened for reading or writing.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file or the archive stream could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file or the archive stream could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An entry's resolved destination escapes the extraction root.
    #[error("entry {name:?} is outside of the extraction root")]
    PathTraversal { name: String },

    /// Ancestor directories required by an entry could not be created.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
