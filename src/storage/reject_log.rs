//! Reject log storage
//!
//! Rejected lines are written to a plain text file, one per line, as
//! `<original line> - <reasons>`. The file is truncated at the start of every
//! load so it only ever reflects the latest run.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Text file holding the rejected lines of the latest load
pub struct RejectLog {
    path: PathBuf,
}

impl RejectLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates (or truncates) the log and returns a buffered writer over it
    pub fn create(&self) -> io::Result<BufWriter<File>> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        Ok(BufWriter::new(file))
    }

    /// Reads every line of the log
    ///
    /// Returns `None` when the file doesn't exist.
    pub fn read_lines(&self) -> io::Result<Option<Vec<String>>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        let lines = BufReader::new(file).lines().collect::<io::Result<Vec<_>>>()?;
        Ok(Some(lines))
    }
}
