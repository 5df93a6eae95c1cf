//! S001: Too long
//!
//! Lines must stay within 79 visible characters (trailing newline excluded).

use crate::models::{Finding, LineContext};
use crate::rules::base::LineRule;

const MAX_LINE_LENGTH: usize = 79;

pub struct LongLineRule;

impl LongLineRule {
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for LongLineRule {
    fn code(&self) -> &'static str {
        "S001"
    }

    fn description(&self) -> &'static str {
        "Line is longer than 79 characters"
    }

    fn check(&self, ctx: &LineContext) -> Option<Finding> {
        if ctx.line.chars().count() > MAX_LINE_LENGTH {
            Some(Finding::new(
                ctx.path,
                ctx.lineno,
                self.code(),
                "Too long".to_string(),
            ))
        } else {
            None
        }
    }
}
