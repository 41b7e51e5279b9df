//! Main entry point for the tarpipe CLI application.
//!
//! With path arguments this binary streams a compressed archive of those
//! paths to standard output; with none it reads an archive from standard
//! input and extracts it into the destination directory.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use tarpipe::{Archiver, Cli, Extractor, Mode, Outcome};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.mode() {
        Mode::Archive(paths) => archive(&cli, &paths),
        Mode::Extract => extract(&cli),
    }
}

/// Archive every given path onto stdout.
///
/// Unreadable files and directories are reported and skipped; the archive
/// still gets a valid footer as long as the sink keeps accepting bytes.
fn archive(cli: &Cli, paths: &[PathBuf]) -> Result<()> {
    let stdout = io::stdout().lock();
    let mut archiver = Archiver::new(stdout);
    for path in paths {
        report(cli, &archiver.append_tree(path));
    }
    let mut stdout = archiver.finish().context("failed to finalize archive")?;
    stdout.flush()?;
    Ok(())
}

/// Extract the archive on stdin into the destination directory.
fn extract(cli: &Cli) -> Result<()> {
    let destination = cli.destination();
    let extractor = Extractor::new(&destination)
        .with_context(|| format!("cannot extract into {}", destination.display()))?;
    let stdin = io::stdin().lock();
    let outcomes = extractor.extract(stdin)?;
    report(cli, &outcomes);
    Ok(())
}

/// Print one diagnostic per failed item. Best-effort failures do not affect
/// the exit status; only errors propagated to `main` do.
fn report(cli: &Cli, outcomes: &[Outcome]) {
    if cli.quiet {
        return;
    }
    for outcome in outcomes {
        if let Err(err) = &outcome.result {
            eprintln!("tarpipe: skipping {}: {err}", outcome.path.display());
        }
    }
}
