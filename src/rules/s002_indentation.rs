//! S002: Indentation is not a multiple of four
//!
//! Leading spaces of a non-blank line must come in groups of four.

use crate::models::{Finding, LineContext};
use crate::rules::base::LineRule;
use crate::scan;

pub struct IndentationRule;

impl IndentationRule {
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for IndentationRule {
    fn code(&self) -> &'static str {
        "S002"
    }

    fn description(&self) -> &'static str {
        "Indentation is not a multiple of four"
    }

    fn check(&self, ctx: &LineContext) -> Option<Finding> {
        if scan::is_blank(ctx.line) {
            return None;
        }
        let leading = ctx.line.len() - ctx.line.trim_start_matches(' ').len();
        if leading % 4 != 0 {
            Some(Finding::new(
                ctx.path,
                ctx.lineno,
                self.code(),
                "Indentation is not a multiple of four".to_string(),
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_line(line: &str) -> Option<Finding> {
        let lines = vec![line];
        let ctx = LineContext {
            path: "test.py",
            lineno: 1,
            line,
            lines: &lines,
        };
        IndentationRule::new().check(&ctx)
    }

    #[test]
    fn test_multiples_of_four_pass() {
        assert!(check_line("x = 1").is_none());
        assert!(check_line("    x = 1").is_none());
        assert!(check_line("        x = 1").is_none());
    }

    #[test]
    fn test_odd_indentation_fires() {
        assert!(check_line("  x = 1").is_some());
        assert!(check_line("   x = 1").is_some());
        assert!(check_line("     x = 1").is_some());
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        assert!(check_line("").is_none());
        assert!(check_line("  ").is_none());
    }
}
