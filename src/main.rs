//! pystyle CLI

use clap::Parser;
use colored::*;
use pystyle::diagnostics::DiagnosticSet;
use pystyle::logging::{RunLogEntry, RunLogger};
use pystyle::{analyze_files, collect_python_files, has_source_extension, rules};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "pystyle")]
#[command(version, about = "A style and convention checker for Python source files")]
struct Args {
    /// File or directory to analyze
    path: Option<PathBuf>,

    /// Output format: text, json
    #[arg(long, default_value = "text")]
    format: String,

    /// Append a JSON Lines record of this run to the given file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let Some(path) = args.path else {
        eprintln!("usage: pystyle <file-or-directory>");
        return ExitCode::from(1);
    };

    if !path.is_dir() && !(path.is_file() && has_source_extension(&path)) {
        eprintln!(
            "{}: not a Python source file or directory",
            path.display().to_string().red()
        );
        return ExitCode::from(1);
    }

    if args.verbose {
        eprintln!("Active rules: {}", rules::all_rule_codes().join(", "));
    }

    let files = collect_python_files(&path);
    if args.verbose {
        eprintln!("Found {} Python files", files.len());
    }

    let mut reports = analyze_files(&files);
    reports.sort_by(|a, b| a.path.cmp(&b.path));

    for report in &reports {
        if let Some(error) = &report.error {
            eprintln!("{}: {}", report.path.red(), error);
        }
    }

    let diagnostics = DiagnosticSet::from_reports(&reports);

    match args.format.as_str() {
        "json" => print_json(&diagnostics),
        _ => {
            for finding in diagnostics.iter() {
                println!("{}", finding);
            }
        }
    }

    if let Some(log_path) = &args.log_file {
        let entry = RunLogEntry::from_run(&reports, &diagnostics);
        match RunLogger::new(log_path) {
            Ok(mut logger) => {
                if let Err(e) = logger.log(&entry) {
                    eprintln!("failed to write run log: {}", e);
                }
            }
            Err(e) => eprintln!("failed to open run log {}: {}", log_path.display(), e),
        }
    }

    // Findings are not failures.
    ExitCode::SUCCESS
}

fn print_json(diagnostics: &DiagnosticSet) {
    let output: Vec<serde_json::Value> = diagnostics
        .iter()
        .map(|f| {
            serde_json::json!({
                "file": f.path,
                "line": f.line,
                "code": f.code,
                "message": f.message,
            })
        })
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&output).unwrap_or_default()
    );
}
