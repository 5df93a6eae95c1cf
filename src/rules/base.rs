//! Rule capability traits

use crate::models::{Finding, LineContext, TreeContext};

/// A rule that inspects one physical line at a time.
///
/// Rules carry no state between invocations and may not depend on another
/// rule's outcome.
pub trait LineRule: Send + Sync {
    /// The stable identifier for this rule (e.g., "S001")
    fn code(&self) -> &'static str;

    /// Short description of what the rule checks
    fn description(&self) -> &'static str;

    /// Inspect one line; at most one finding per line.
    fn check(&self, ctx: &LineContext) -> Option<Finding>;
}

/// A rule that inspects statement nodes of the parsed syntax tree.
pub trait TreeRule: Send + Sync {
    /// The stable identifier for this rule (e.g., "S010")
    fn code(&self) -> &'static str;

    /// Short description of what the rule checks
    fn description(&self) -> &'static str;

    /// Inspect one statement node; zero or more findings.
    fn check(&self, ctx: &TreeContext) -> Vec<Finding>;
}
