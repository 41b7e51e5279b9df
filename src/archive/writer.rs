use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use walkdir::WalkDir;

use super::Outcome;
use super::paths::entry_name;
use crate::error::ArchiveError;

/// Streaming archive writer.
///
/// Wraps the sink in a gzip encoder at maximum compression and a tar builder;
/// regular files are appended one at a time in traversal order. The sink is
/// typically stdout, so nothing here requires seeking.
pub struct Archiver<W: Write> {
    builder: tar::Builder<GzEncoder<W>>,
}

impl<W: Write> Archiver<W> {
    pub fn new(sink: W) -> Self {
        let encoder = GzEncoder::new(sink, Compression::best());
        Self {
            builder: tar::Builder::new(encoder),
        }
    }

    /// Walk `root` and append every regular file beneath it as one entry.
    ///
    /// A regular-file root is appended directly; directories contribute no
    /// entries of their own. Child order is whatever the directory listing
    /// yields. Failures are collected per item in traversal order instead of
    /// aborting the walk, so one unreadable subtree does not stop its
    /// siblings; the caller decides what to do with the failed ones.
    pub fn append_tree(&mut self, root: &Path) -> Vec<Outcome> {
        let mut outcomes = Vec::new();
        for entry in WalkDir::new(root) {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    let path = entry.into_path();
                    let result = self.append_file(&path);
                    outcomes.push(Outcome { path, result });
                }
                Ok(_) => {}
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.to_path_buf());
                    let source = err
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
                    outcomes.push(Outcome {
                        path: path.clone(),
                        result: Err(ArchiveError::Listing { path, source }),
                    });
                }
            }
        }
        outcomes
    }

    fn append_file(&mut self, path: &Path) -> Result<(), ArchiveError> {
        let mut file = File::open(path).map_err(|source| ArchiveError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let metadata = file.metadata().map_err(|source| ArchiveError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut header = tar::Header::new_gnu();
        header.set_metadata(&metadata);
        self.builder
            .append_data(&mut header, entry_name(path), &mut file)
            .map_err(|source| ArchiveError::Write {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Write the tar footer and the gzip trailer, returning the sink.
    ///
    /// Must be called after all roots have been appended; dropping the
    /// archiver without finishing leaves the stream truncated.
    pub fn finish(self) -> io::Result<W> {
        self.builder.into_inner()?.finish()
    }
}
