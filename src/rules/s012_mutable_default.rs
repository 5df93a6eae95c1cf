//! S012: Default argument value is mutable
//!
//! A list/dict/set literal as a default is shared across every call that
//! omits the argument.

use crate::models::{Finding, TreeContext};
use crate::rules::base::TreeRule;
use crate::scan;
use rustpython_ast::{Arguments, Expr, Stmt};

pub struct MutableDefaultRule;

impl MutableDefaultRule {
    pub fn new() -> Self {
        Self
    }

    fn is_mutable_literal(expr: &Expr) -> bool {
        matches!(expr, Expr::List(_) | Expr::Dict(_) | Expr::Set(_))
    }

    fn check_arguments(&self, args: &Arguments, ctx: &TreeContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        for arg in args
            .posonlyargs
            .iter()
            .chain(args.args.iter())
            .chain(args.kwonlyargs.iter())
        {
            if let Some(default) = &arg.default {
                if Self::is_mutable_literal(default) {
                    findings.push(Finding::new(
                        ctx.path,
                        scan::offset_to_line(ctx.source, arg.def.range.start().to_usize()),
                        self.code(),
                        "Default argument value is mutable".to_string(),
                    ));
                }
            }
        }

        findings
    }
}

impl TreeRule for MutableDefaultRule {
    fn code(&self) -> &'static str {
        "S012"
    }

    fn description(&self) -> &'static str {
        "Parameter default is a mutable container literal"
    }

    fn check(&self, ctx: &TreeContext) -> Vec<Finding> {
        match ctx.stmt {
            Stmt::FunctionDef(func) => self.check_arguments(&func.args, ctx),
            Stmt::AsyncFunctionDef(func) => self.check_arguments(&func.args, ctx),
            _ => Vec::new(),
        }
    }
}
