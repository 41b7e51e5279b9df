use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use super::Outcome;
use super::paths::join_checked;
use crate::error::ArchiveError;
use crate::io::copy_stream;

/// Streaming archive reader.
///
/// Reads a gzip-compressed tar stream sequentially and materializes each
/// regular-file entry under a destination root. Entries whose name would
/// resolve outside the root are refused.
pub struct Extractor {
    root: PathBuf,
}

impl Extractor {
    /// Create an extractor rooted at `root`, which must already exist.
    ///
    /// The root is canonicalized once up front so the containment check
    /// compares symlink-free absolute paths.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, ArchiveError> {
        let root = root.as_ref();
        let root = root.canonicalize().map_err(|source| ArchiveError::Open {
            path: root.to_path_buf(),
            source,
        })?;
        Ok(Self { root })
    }

    /// The canonical destination root all extracted files land under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read entries from `source` until none remain, writing each regular
    /// file under the root.
    ///
    /// Returns per-entry outcomes in stream order. A failure writing one
    /// entry is recorded and the loop advances; an entry escaping the root,
    /// a failed directory creation, or a corrupt stream aborts the run.
    /// Existing files are overwritten, so duplicate names resolve to the
    /// last entry. Non-file entries are skipped.
    pub fn extract<R: Read>(&self, source: R) -> Result<Vec<Outcome>, ArchiveError> {
        let mut archive = tar::Archive::new(GzDecoder::new(source));
        let mut outcomes = Vec::new();
        let entries = archive.entries().map_err(|source| ArchiveError::Read {
            path: self.root.clone(),
            source,
        })?;
        for entry in entries {
            let mut entry = entry.map_err(|source| ArchiveError::Read {
                path: self.root.clone(),
                source,
            })?;
            if !entry.header().entry_type().is_file() {
                continue;
            }
            let name = entry
                .path()
                .map_err(|source| ArchiveError::Read {
                    path: self.root.clone(),
                    source,
                })?
                .into_owned();
            let dest = join_checked(&self.root, &name)?;
            self.create_parents(&dest)?;
            let result = write_entry(&mut entry, &dest);
            outcomes.push(Outcome { path: dest, result });
        }
        Ok(outcomes)
    }

    /// Create the destination's missing ancestors, if any.
    ///
    /// Already-existing directories are fine; only a parent that cannot be
    /// created (permissions, a file squatting on the name) is an error.
    fn create_parents(&self, dest: &Path) -> Result<(), ArchiveError> {
        if let Some(parent) = dest.parent() {
            if parent != self.root && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| ArchiveError::DirectoryCreation {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        Ok(())
    }
}

fn write_entry<R: Read>(entry: &mut tar::Entry<'_, R>, dest: &Path) -> Result<(), ArchiveError> {
    let mut file = File::create(dest).map_err(|source| ArchiveError::Open {
        path: dest.to_path_buf(),
        source,
    })?;
    copy_stream(entry, &mut file).map_err(|source| ArchiveError::Write {
        path: dest.to_path_buf(),
        source,
    })?;
    Ok(())
}
