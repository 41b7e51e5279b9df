//! # tarpipe
//!
//! A streaming archiver built for pipes.
//!
//! Given paths, tarpipe walks them and streams a gzip-compressed tar archive
//! to standard output; given nothing, it reads such an archive from standard
//! input and extracts it into the current directory. Both directions are
//! single-pass with bounded memory, so archives larger than RAM flow through
//! a pipe without trouble.
//!
//! Extraction validates every entry name against the destination root, so an
//! archive carrying `../` entries cannot write outside it.
//!
//! ## Example
//!
//! ```no_run
//! use tarpipe::{Archiver, Extractor};
//!
//! fn main() -> anyhow::Result<()> {
//!     // Archive a directory tree into an in-memory buffer.
//!     let mut archiver = Archiver::new(Vec::new());
//!     for outcome in archiver.append_tree("data".as_ref()) {
//!         if let Err(err) = outcome.result {
//!             eprintln!("skipping {}: {err}", outcome.path.display());
//!         }
//!     }
//!     let bytes = archiver.finish()?;
//!
//!     // Extract it somewhere else.
//!     let extractor = Extractor::new("restored")?;
//!     extractor.extract(std::io::Cursor::new(bytes))?;
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod cli;
pub mod error;
pub mod io;

pub use archive::{Archiver, Extractor, Outcome};
pub use cli::{Cli, Mode};
pub use error::ArchiveError;
