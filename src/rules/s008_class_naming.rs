//! S008: Class name should use CamelCase

use crate::models::{Finding, LineContext};
use crate::rules::base::LineRule;
use crate::utils;
use once_cell::sync::Lazy;
use regex::Regex;

static CLASS_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*class\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap());

pub struct ClassNamingRule;

impl ClassNamingRule {
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for ClassNamingRule {
    fn code(&self) -> &'static str {
        "S008"
    }

    fn description(&self) -> &'static str {
        "Class name is not CamelCase"
    }

    fn check(&self, ctx: &LineContext) -> Option<Finding> {
        let caps = CLASS_DECL.captures(ctx.line)?;
        let name = caps.get(1)?.as_str();
        if !utils::is_camel_case(name) {
            Some(Finding::new(
                ctx.path,
                ctx.lineno,
                self.code(),
                format!("Class name '{}' should use CamelCase", name),
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
        ClassNamingRule::new().check(&ctx)
    }

    #[test]
    fn test_snake_case_class_fires() {
        let finding = check_line("class my_class:").unwrap();
        assert_eq!(finding.message, "Class name 'my_class' should use CamelCase");
    }

    #[test]
    fn test_camel_case_passes() {
        assert!(check_line("class MyClass:").is_none());
        assert!(check_line("class MyClass(Base):").is_none());
    }

    #[test]
    fn test_underscore_in_name_fires() {
        assert!(check_line("class My_Class:").is_some());
    }

    #[test]
    fn test_name_found_despite_extra_spaces() {
        assert!(check_line("class  my_class:").is_some());
    }

    #[test]
    fn test_non_class_lines_pass() {
        assert!(check_line("classify = True").is_none());
        assert!(check_line("x = 1").is_none());
    }
}
