//! S005: TODO found
//!
//! The reserved keyword is matched case-insensitively, but only inside the
//! comment part of a line.

use crate::models::{Finding, LineContext};
use crate::rules::base::LineRule;
use crate::scan;

pub struct TodoCommentRule;

impl TodoCommentRule {
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for TodoCommentRule {
    fn code(&self) -> &'static str {
        "S005"
    }

    fn description(&self) -> &'static str {
        "TODO marker in a comment"
    }

    fn check(&self, ctx: &LineContext) -> Option<Finding> {
        let (_, comment) = scan::split_code_and_comment(ctx.line);
        let comment = comment?;
        if comment.to_lowercase().contains("todo") {
            Some(Finding::new(
                ctx.path,
                ctx.lineno,
                self.code(),
                "TODO found".to_string(),
            ))
        } else {
            None
        }
    }
}
