//! S003: Unnecessary semicolon
//!
//! Python statements need no terminator; a `;` in the code part of a line
//! (outside string literals, outside comments) is flagged.

use crate::models::{Finding, LineContext};
use crate::rules::base::LineRule;
use crate::scan;

pub struct SemicolonRule;

impl SemicolonRule {
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for SemicolonRule {
    fn code(&self) -> &'static str {
        "S003"
    }

    fn description(&self) -> &'static str {
        "Unnecessary statement terminator"
    }

    fn check(&self, ctx: &LineContext) -> Option<Finding> {
        let (code, _) = scan::split_code_and_comment(ctx.line);
        if scan::contains_outside_string(code, ';') {
            Some(Finding::new(
                ctx.path,
                ctx.lineno,
                self.code(),
                "Unnecessary semicolon".to_string(),
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
        SemicolonRule::new().check(&ctx)
    }

    #[test]
    fn test_trailing_semicolon_fires() {
        assert!(check_line("x = 1;").is_some());
    }

    #[test]
    fn test_semicolon_inside_string_passes() {
        assert!(check_line(r#"greeting = "hello; world""#).is_none());
        assert!(check_line("greeting = 'hello; world'").is_none());
    }

    #[test]
    fn test_semicolon_inside_comment_passes() {
        assert!(check_line("x = 1  # set x; done").is_none());
    }

    #[test]
    fn test_semicolon_after_string_fires() {
        assert!(check_line(r#"greeting = "hello; world";"#).is_some());
    }

    #[test]
    fn test_fires_at_most_once_per_line() {
        let finding = check_line("x = 1; y = 2;").unwrap();
        assert_eq!(finding.code, "S003");
    }
}
