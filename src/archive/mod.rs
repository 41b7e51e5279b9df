//! Streaming tar.gz archiving and extraction.
//!
//! [`Archiver`] walks file trees and writes one entry per regular file into a
//! gzip-compressed tar stream; [`Extractor`] reads such a stream entry by
//! entry and materializes files under a destination root, refusing entries
//! that would land outside it. Both run single-pass over the stream and
//! report per-item results as [`Outcome`]s, leaving the continue-on-error
//! policy to the caller.

mod extract;
mod paths;
mod writer;

pub use extract::Extractor;
pub use paths::entry_name;
pub use writer::Archiver;

use std::path::PathBuf;

use crate::error::ArchiveError;

/// Result of processing one file (archiving) or one entry (extraction),
/// produced in traversal/stream order.
#[derive(Debug)]
pub struct Outcome {
    /// The on-disk path the item concerns.
    pub path: PathBuf,
    pub result: Result<(), ArchiveError>,
}
