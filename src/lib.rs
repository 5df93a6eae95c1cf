//! pystyle: a style and convention checker for Python source files
//!
//! Scans a file or a directory tree, applies a fixed catalog of independent
//! rules to each `.py` file (line-oriented lexical rules and
//! syntax-tree-oriented structural rules), and produces a deterministically
//! ordered list of diagnostics.

pub mod diagnostics;
pub mod logging;
pub mod models;
pub mod rules;
pub mod scan;
pub mod utils;

use models::{FileError, FileReport, LineContext, TreeContext};
use rayon::prelude::*;
use rules::{LINE_RULES, TREE_RULES};
use rustpython_ast::Stmt;
use rustpython_parser::{parse, Mode};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const SOURCE_EXTENSION: &str = "py";

/// Analyze a single file on disk.
pub fn analyze_file(file_path: &Path) -> FileReport {
    let path_str = file_path.to_string_lossy().to_string();

    let source = match std::fs::read_to_string(file_path) {
        Ok(s) => s,
        Err(e) => return FileReport::with_error(path_str, FileError::Read(e.to_string())),
    };

    analyze_source(&path_str, &source)
}

/// Analyze raw source text: every line rule over every physical line, then
/// every tree rule over the parsed module. A parse failure degrades the
/// file to lexical findings only and is surfaced on the report.
pub fn analyze_source(path: &str, source: &str) -> FileReport {
    let mut report = FileReport::new(path.to_string());
    let lines: Vec<&str> = source.lines().collect();

    for (idx, &line) in lines.iter().enumerate() {
        let ctx = LineContext {
            path,
            lineno: idx + 1,
            line,
            lines: &lines,
        };
        for rule in LINE_RULES.iter() {
            if let Some(finding) = rule.check(&ctx) {
                report.findings.push(finding);
            }
        }
    }

    match parse(source, Mode::Module, path) {
        Ok(rustpython_ast::Mod::Module(module)) => {
            for stmt in &module.body {
                check_stmt_recursive(stmt, path, source, &mut report);
            }
        }
        Ok(_) => {}
        Err(e) => report.error = Some(FileError::Parse(e.to_string())),
    }

    report
}

fn check_stmt_recursive(stmt: &Stmt, path: &str, source: &str, report: &mut FileReport) {
    let ctx = TreeContext { stmt, path, source };

    for rule in TREE_RULES.iter() {
        report.findings.extend(rule.check(&ctx));
    }

    // Recursively visit nested statements in document order.
    match stmt {
        Stmt::ClassDef(class_def) => {
            for s in &class_def.body {
                check_stmt_recursive(s, path, source, report);
            }
        }
        Stmt::FunctionDef(func) => {
            for s in &func.body {
                check_stmt_recursive(s, path, source, report);
            }
        }
        Stmt::AsyncFunctionDef(func) => {
            for s in &func.body {
                check_stmt_recursive(s, path, source, report);
            }
        }
        Stmt::If(if_stmt) => {
            for s in &if_stmt.body {
                check_stmt_recursive(s, path, source, report);
            }
            for s in &if_stmt.orelse {
                check_stmt_recursive(s, path, source, report);
            }
        }
        Stmt::While(while_stmt) => {
            for s in &while_stmt.body {
                check_stmt_recursive(s, path, source, report);
            }
            for s in &while_stmt.orelse {
                check_stmt_recursive(s, path, source, report);
            }
        }
        Stmt::For(for_stmt) => {
            for s in &for_stmt.body {
                check_stmt_recursive(s, path, source, report);
            }
            for s in &for_stmt.orelse {
                check_stmt_recursive(s, path, source, report);
            }
        }
        Stmt::AsyncFor(for_stmt) => {
            for s in &for_stmt.body {
                check_stmt_recursive(s, path, source, report);
            }
            for s in &for_stmt.orelse {
                check_stmt_recursive(s, path, source, report);
            }
        }
        Stmt::With(with_stmt) => {
            for s in &with_stmt.body {
                check_stmt_recursive(s, path, source, report);
            }
        }
        Stmt::AsyncWith(with_stmt) => {
            for s in &with_stmt.body {
                check_stmt_recursive(s, path, source, report);
            }
        }
        Stmt::Try(try_stmt) => {
            for s in &try_stmt.body {
                check_stmt_recursive(s, path, source, report);
            }
            for handler in &try_stmt.handlers {
                if let rustpython_ast::ExceptHandler::ExceptHandler(h) = handler {
                    for s in &h.body {
                        check_stmt_recursive(s, path, source, report);
                    }
                }
            }
            for s in &try_stmt.orelse {
                check_stmt_recursive(s, path, source, report);
            }
            for s in &try_stmt.finalbody {
                check_stmt_recursive(s, path, source, report);
            }
        }
        _ => {}
    }
}

/// Whether a path carries the analyzed source extension.
pub fn has_source_extension(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == SOURCE_EXTENSION)
}

/// Collect the Python files under a path: a `.py` file yields itself, a
/// directory yields every `.py` file beneath it. Nothing else is analyzed.
pub fn collect_python_files(root: &Path) -> Vec<PathBuf> {
    if root.is_file() {
        if has_source_extension(root) {
            vec![root.to_path_buf()]
        } else {
            Vec::new()
        }
    } else if root.is_dir() {
        WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file() && has_source_extension(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect()
    } else {
        Vec::new()
    }
}

/// Analyze files in parallel. Rules are pure and files independent, so the
/// final ordering comes from the aggregator's sort, not arrival order.
pub fn analyze_files(files: &[PathBuf]) -> Vec<FileReport> {
    files.par_iter().map(|file| analyze_file(file)).collect()
}
