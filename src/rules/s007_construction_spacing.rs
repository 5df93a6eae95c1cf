//! S007: Too many spaces after a declaration keyword
//!
//! `def` and `class` take exactly one space before the declared name.

use crate::models::{Finding, LineContext};
use crate::rules::base::LineRule;
use once_cell::sync::Lazy;
use regex::Regex;

static EXTRA_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(def|class) {2,}").unwrap());

pub struct ConstructionSpacingRule;

impl ConstructionSpacingRule {
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for ConstructionSpacingRule {
    fn code(&self) -> &'static str {
        "S007"
    }

    fn description(&self) -> &'static str {
        "Too many spaces after a declaration keyword"
    }

    fn check(&self, ctx: &LineContext) -> Option<Finding> {
        let caps = EXTRA_SPACES.captures(ctx.line)?;
        let keyword = caps.get(1)?.as_str();
        Some(Finding::new(
            ctx.path,
            ctx.lineno,
            self.code(),
            format!("Too many spaces after '{}'", keyword),
        ))
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
        ConstructionSpacingRule::new().check(&ctx)
    }

    #[test]
    fn test_double_space_after_def_fires() {
        let finding = check_line("def  func():").unwrap();
        assert_eq!(finding.message, "Too many spaces after 'def'");
    }

    #[test]
    fn test_double_space_after_class_fires() {
        let finding = check_line("class  Name:").unwrap();
        assert_eq!(finding.message, "Too many spaces after 'class'");
    }

    #[test]
    fn test_single_space_passes() {
        assert!(check_line("def func():").is_none());
        assert!(check_line("class Name:").is_none());
    }

    #[test]
    fn test_indented_declaration_is_checked() {
        assert!(check_line("    def  method(self):").is_some());
    }

    #[test]
    fn test_keyword_prefix_identifiers_pass() {
        assert!(check_line("define  = 1").is_none());
        assert!(check_line("classes  = []").is_none());
    }
}
