//! Structured run logging
//!
//! Appends one JSON Lines record per analysis run for later inspection.

use crate::diagnostics::DiagnosticSet;
use crate::models::{FileError, FileReport};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A single log entry representing one analysis run
#[derive(Debug, Serialize, Deserialize)]
pub struct RunLogEntry {
    /// Unix timestamp of when the run started writing its record
    pub timestamp: u64,
    /// ISO 8601 formatted date string
    pub datetime: String,
    pub files_scanned: usize,
    pub total_findings: usize,
    pub read_errors: usize,
    pub parse_errors: usize,
    pub findings: Vec<FindingLogEntry>,
}

/// Log entry for a single finding
#[derive(Debug, Serialize, Deserialize)]
pub struct FindingLogEntry {
    pub code: String,
    pub path: String,
    pub line: usize,
    pub message: String,
}

impl RunLogEntry {
    pub fn from_run(reports: &[FileReport], diagnostics: &DiagnosticSet) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let timestamp = now.as_secs();

        let read_errors = reports
            .iter()
            .filter(|r| matches!(r.error, Some(FileError::Read(_))))
            .count();
        let parse_errors = reports
            .iter()
            .filter(|r| matches!(r.error, Some(FileError::Parse(_))))
            .count();

        let findings: Vec<FindingLogEntry> = diagnostics
            .iter()
            .map(|f| FindingLogEntry {
                code: f.code.to_string(),
                path: f.path.clone(),
                line: f.line,
                message: f.message.clone(),
            })
            .collect();

        Self {
            timestamp,
            datetime: format_datetime(timestamp),
            files_scanned: reports.len(),
            total_findings: findings.len(),
            read_errors,
            parse_errors,
            findings,
        }
    }
}

/// Logger that appends run records to a file
pub struct RunLogger {
    writer: BufWriter<File>,
    log_path: String,
}

impl RunLogger {
    /// Open the log for appending, creating it (and parent directories) if
    /// needed.
    pub fn new(log_path: &Path) -> std::io::Result<Self> {
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(log_path)?;

        Ok(Self {
            writer: BufWriter::new(file),
            log_path: log_path.to_string_lossy().to_string(),
        })
    }

    /// Append one run record as a JSON line.
    pub fn log(&mut self, entry: &RunLogEntry) -> std::io::Result<()> {
        let json = serde_json::to_string(entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()
    }

    pub fn log_path(&self) -> &str {
        &self.log_path
    }
}

/// Format a unix timestamp as an ISO 8601 datetime string
fn format_datetime(timestamp: u64) -> String {
    let d = UNIX_EPOCH + Duration::from_secs(timestamp);
    let datetime: chrono::DateTime<chrono::Utc> = chrono::DateTime::from(d);
    datetime.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
