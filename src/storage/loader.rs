//! Inventory loading
//!
//! Streams an input file through the parser and validator, keeping accepted
//! records in memory (up to a fixed capacity) and writing every rejection to
//! the reject log.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::reject_log::RejectLog;
use crate::domain::{InventoryRecord, Validation, Validator};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not open file '{}'", .0.display())]
    InputNotFound(PathBuf),

    #[error("Input file is empty: '{}'", .0.display())]
    InputEmpty(PathBuf),

    #[error("Could not read file '{}': {}", .path.display(), .source)]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write reject log '{}': {}", .path.display(), .source)]
    RejectLogUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// I/O failure while streaming lines, split by which side failed
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    #[error("write failed: {0}")]
    Write(#[source] io::Error),
}

/// Result of a completed load
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Accepted records, in input order
    pub accepted: Vec<InventoryRecord>,

    /// Number of lines written to the reject log
    pub rejected: usize,

    /// True when capacity was reached with input lines still unread
    pub truncated: bool,
}

/// Feeds lines through a validator into an accepted list and a reject sink
pub struct InventoryLoader {
    validator: Validator,
    capacity: usize,
}

impl InventoryLoader {
    pub fn new(validator: Validator, capacity: usize) -> Self {
        Self { validator, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Loads `input`, recreating `reject_log` first
    pub fn load_file(&self, input: &Path, reject_log: &RejectLog) -> Result<LoadReport, LoadError> {
        let log_error = |source: io::Error| LoadError::RejectLogUnwritable {
            path: reject_log.path().to_path_buf(),
            source,
        };
        let read_error = |source: io::Error| LoadError::InputUnreadable {
            path: input.to_path_buf(),
            source,
        };

        let mut sink = reject_log.create().map_err(log_error)?;

        let file = match File::open(input) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(LoadError::InputNotFound(input.to_path_buf()));
            }
            Err(e) => return Err(read_error(e)),
        };

        if file.metadata().map_err(read_error)?.len() == 0 {
            return Err(LoadError::InputEmpty(input.to_path_buf()));
        }

        let report = self
            .load_lines(BufReader::new(file), &mut sink)
            .map_err(|e| match e {
                StreamError::Read(source) => read_error(source),
                StreamError::Write(source) => log_error(source),
            })?;

        tracing::info!(
            input = %input.display(),
            accepted = report.accepted.len(),
            rejected = report.rejected,
            truncated = report.truncated,
            "inventory loaded"
        );

        Ok(report)
    }

    /// Processes lines from `reader`, writing one log line per rejection to `sink`
    ///
    /// Whitespace-only lines are skipped. Once `capacity` records are accepted
    /// nothing else is processed; the report is marked truncated if any
    /// non-blank line remains.
    ///
    /// Bytes that aren't valid UTF-8 are replaced rather than failing the
    /// load, so such a line is rejected by the field checks like any other.
    pub fn load_lines<R: BufRead, W: Write>(&self, mut reader: R, sink: &mut W) -> Result<LoadReport, StreamError> {
        let mut report = LoadReport::default();
        let mut buf = Vec::new();
        let mut line_num = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).map_err(StreamError::Read)? == 0 {
                break;
            }
            line_num += 1;
            let line = String::from_utf8_lossy(&buf);

            if line.trim().is_empty() {
                continue;
            }

            if report.accepted.len() >= self.capacity {
                tracing::warn!(line = line_num, capacity = self.capacity, "capacity reached, remaining lines skipped");
                report.truncated = true;
                break;
            }

            match self.validator.process_line(&line) {
                Validation::Accepted(record) => {
                    tracing::debug!(line = line_num, id = record.id(), "accepted");
                    report.accepted.push(record);
                }
                Validation::Rejected(rejection) => {
                    tracing::debug!(line = line_num, reasons = %rejection.reason_text().trim_end(), "rejected");
                    writeln!(sink, "{}", rejection.log_line()).map_err(StreamError::Write)?;
                    report.rejected += 1;
                }
            }
        }

        sink.flush().map_err(StreamError::Write)?;
        Ok(report)
    }
}
