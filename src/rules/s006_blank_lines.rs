//! S006: More than two blank lines used before this line
//!
//! Fires on the first non-blank line after a run of three or more blank
//! lines, exactly once per run.

use crate::models::{Finding, LineContext};
use crate::rules::base::LineRule;
use crate::scan;

const MAX_BLANK_LINES: usize = 2;

pub struct BlankLinesRule;

impl BlankLinesRule {
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for BlankLinesRule {
    fn code(&self) -> &'static str {
        "S006"
    }

    fn description(&self) -> &'static str {
        "More than two blank lines before a line"
    }

    fn check(&self, ctx: &LineContext) -> Option<Finding> {
        if scan::is_blank(ctx.line) {
            return None;
        }
        let preceding_blanks = ctx.lines[..ctx.lineno - 1]
            .iter()
            .rev()
            .take_while(|line| scan::is_blank(line))
            .count();
        if preceding_blanks > MAX_BLANK_LINES {
            Some(Finding::new(
                ctx.path,
                ctx.lineno,
                self.code(),
                "More than two blank lines used before this line".to_string(),
            ))
        } else {
            None
        }
    }
}
