//! The fixed rule catalog
//!
//! Registration order is part of the output contract: the aggregator's sort
//! is stable, so findings with equal (path, line, code) keys keep the order
//! the rules were registered in.

pub mod base;

pub mod s001_long_line;
pub mod s002_indentation;
pub mod s003_semicolon;
pub mod s004_inline_comment_spacing;
pub mod s005_todo_comment;
pub mod s006_blank_lines;
pub mod s007_construction_spacing;
pub mod s008_class_naming;
pub mod s009_function_naming;
pub mod s010_argument_naming;
pub mod s011_variable_naming;
pub mod s012_mutable_default;

use base::{LineRule, TreeRule};
use once_cell::sync::Lazy;

/// Line rules in registration order. Built once, never mutated.
pub static LINE_RULES: Lazy<Vec<Box<dyn LineRule>>> = Lazy::new(|| {
    vec![
        Box::new(s001_long_line::LongLineRule::new()),
        Box::new(s002_indentation::IndentationRule::new()),
        Box::new(s003_semicolon::SemicolonRule::new()),
        Box::new(s004_inline_comment_spacing::InlineCommentSpacingRule::new()),
        Box::new(s005_todo_comment::TodoCommentRule::new()),
        Box::new(s006_blank_lines::BlankLinesRule::new()),
        Box::new(s007_construction_spacing::ConstructionSpacingRule::new()),
        Box::new(s008_class_naming::ClassNamingRule::new()),
        Box::new(s009_function_naming::FunctionNamingRule::new()),
    ]
});

/// Tree rules in registration order. Built once, never mutated.
pub static TREE_RULES: Lazy<Vec<Box<dyn TreeRule>>> = Lazy::new(|| {
    vec![
        Box::new(s010_argument_naming::ArgumentNamingRule::new()),
        Box::new(s011_variable_naming::VariableNamingRule::new()),
        Box::new(s012_mutable_default::MutableDefaultRule::new()),
    ]
});

/// Every registered rule code, line rules first.
pub fn all_rule_codes() -> Vec<&'static str> {
    LINE_RULES
        .iter()
        .map(|rule| rule.code())
        .chain(TREE_RULES.iter().map(|rule| rule.code()))
        .collect()
}
