use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tarpipe")]
#[command(version)]
#[command(about = "Stream files into a compressed archive on stdout, or extract one from stdin", long_about = None)]
#[command(after_help = "Examples:\n  \
  tarpipe src docs > backup.tar.gz      archive src and docs to backup.tar.gz\n  \
  tarpipe notes.txt | ssh host tarpipe  archive notes.txt and extract it remotely\n  \
  tarpipe < backup.tar.gz               extract backup.tar.gz into the current directory\n  \
  tarpipe -d /tmp/out < backup.tar.gz   extract into /tmp/out")]
pub struct Cli {
    /// Files or directories to archive (extract mode when none are given)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Extract into DIR instead of the current directory
    #[arg(short = 'd', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Quiet mode, suppress per-file skip messages
    #[arg(short = 'q')]
    pub quiet: bool,
}

/// What a single invocation does, derived once from the argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Archive the given paths to stdout.
    Archive(Vec<PathBuf>),
    /// Extract an archive read from stdin.
    Extract,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.paths.is_empty() {
            Mode::Extract
        } else {
            Mode::Archive(self.paths.clone())
        }
    }

    /// Destination directory for extraction.
    pub fn destination(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_select_archive_mode() {
        let cli = Cli::parse_from(["tarpipe", "a.txt", "dir"]);
        assert_eq!(
            cli.mode(),
            Mode::Archive(vec![PathBuf::from("a.txt"), PathBuf::from("dir")])
        );
    }

    #[test]
    fn no_paths_select_extract_mode() {
        let cli = Cli::parse_from(["tarpipe"]);
        assert_eq!(cli.mode(), Mode::Extract);
        assert_eq!(cli.destination(), PathBuf::from("."));
    }

    #[test]
    fn extract_directory_flag() {
        let cli = Cli::parse_from(["tarpipe", "-d", "/tmp/out"]);
        assert_eq!(cli.mode(), Mode::Extract);
        assert_eq!(cli.destination(), PathBuf::from("/tmp/out"));
    }
}
