//! S004: At least two spaces required before inline comments

use crate::models::{Finding, LineContext};
use crate::rules::base::LineRule;
use crate::scan;

pub struct InlineCommentSpacingRule;

impl InlineCommentSpacingRule {
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for InlineCommentSpacingRule {
    fn code(&self) -> &'static str {
        "S004"
    }

    fn description(&self) -> &'static str {
        "Inline comment is not separated by two spaces"
    }

    fn check(&self, ctx: &LineContext) -> Option<Finding> {
        let (code, comment) = scan::split_code_and_comment(ctx.line);
        comment?;
        // Full-line comments need no separation.
        if code.trim().is_empty() {
            return None;
        }
        if !code.ends_with("  ") {
            Some(Finding::new(
                ctx.path,
                ctx.lineno,
                self.code(),
                "At least two spaces required before inline comments".to_string(),
            ))
        } else {
            None
        }
    }
}
