//! Core data models for pystyle

use rustpython_ast::Stmt;
use thiserror::Error;

/// One reported rule violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub path: String,
    /// 1-based physical line number
    pub line: usize,
    /// Stable short identifier, e.g. "S001"
    pub code: &'static str,
    pub message: String,
}

impl Finding {
    pub fn new(path: &str, line: usize, code: &'static str, message: String) -> Self {
        Self {
            path: path.to_string(),
            line,
            code,
            message,
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: Line {}: {} {}",
            self.path, self.line, self.code, self.message
        )
    }
}

/// File-level failure taxonomy
#[derive(Debug, Error)]
pub enum FileError {
    /// The file could not be read as text; analysis of it is abandoned.
    #[error("failed to read file: {0}")]
    Read(String),
    /// The syntax tree could not be built; the file degrades to
    /// lexical-rules-only.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result of analyzing a single file
#[derive(Debug, Default)]
pub struct FileReport {
    pub path: String,
    pub findings: Vec<Finding>,
    pub error: Option<FileError>,
}

impl FileReport {
    pub fn new(path: String) -> Self {
        Self {
            path,
            findings: Vec::new(),
            error: None,
        }
    }

    pub fn with_error(path: String, error: FileError) -> Self {
        Self {
            path,
            findings: Vec::new(),
            error: Some(error),
        }
    }
}

/// Context passed to a line rule for one physical line
pub struct LineContext<'a> {
    pub path: &'a str,
    /// 1-based line number of `line` within `lines`
    pub lineno: usize,
    pub line: &'a str,
    /// The full ordered line sequence, for rules that look backward
    pub lines: &'a [&'a str],
}

/// Context passed to a tree rule at one statement node
pub struct TreeContext<'a> {
    pub stmt: &'a Stmt,
    pub path: &'a str,
    pub source: &'a str,
}
