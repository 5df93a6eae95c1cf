//! S009: Function name should use snake_case

use crate::models::{Finding, LineContext};
use crate::rules::base::LineRule;
use crate::utils;
use once_cell::sync::Lazy;
use regex::Regex;

static DEF_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*def\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap());

pub struct FunctionNamingRule;

impl FunctionNamingRule {
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for FunctionNamingRule {
    fn code(&self) -> &'static str {
        "S009"
    }

    fn description(&self) -> &'static str {
        "Function name is not snake_case"
    }

    fn check(&self, ctx: &LineContext) -> Option<Finding> {
        let caps = DEF_DECL.captures(ctx.line)?;
        let name = caps.get(1)?.as_str();
        if !utils::is_snake_case(name) {
            Some(Finding::new(
                ctx.path,
                ctx.lineno,
                self.code(),
                format!("Function name '{}' should use snake_case", name),
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
        FunctionNamingRule::new().check(&ctx)
    }

    #[test]
    fn test_camel_case_function_fires() {
        let finding = check_line("def myFunc():").unwrap();
        assert_eq!(
            finding.message,
            "Function name 'myFunc' should use snake_case"
        );
    }

    #[test]
    fn test_capitalized_function_fires() {
        assert!(check_line("def Process():").is_some());
    }

    #[test]
    fn test_snake_case_passes() {
        assert!(check_line("def my_func():").is_none());
        assert!(check_line("def _private():").is_none());
        assert!(check_line("    def method(self):").is_none());
    }

    #[test]
    fn test_non_def_lines_pass() {
        assert!(check_line("default = 3").is_none());
    }
}
