//! S010: Argument name should be snake_case
//!
//! Covers positional-only, positional, keyword-only parameters and the
//! `*args` / `**kwargs` names.

use crate::models::{Finding, TreeContext};
use crate::rules::base::TreeRule;
use crate::scan;
use crate::utils;
use rustpython_ast::{Arguments, Stmt};

pub struct ArgumentNamingRule;

impl ArgumentNamingRule {
    pub fn new() -> Self {
        Self
    }

    fn check_arguments(&self, args: &Arguments, ctx: &TreeContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        for arg in args
            .posonlyargs
            .iter()
            .chain(args.args.iter())
            .chain(args.kwonlyargs.iter())
        {
            self.check_name(
                arg.def.arg.as_str(),
                arg.def.range.start().to_usize(),
                ctx,
                &mut findings,
            );
        }
        if let Some(vararg) = &args.vararg {
            self.check_name(
                vararg.arg.as_str(),
                vararg.range.start().to_usize(),
                ctx,
                &mut findings,
            );
        }
        if let Some(kwarg) = &args.kwarg {
            self.check_name(
                kwarg.arg.as_str(),
                kwarg.range.start().to_usize(),
                ctx,
                &mut findings,
            );
        }

        findings
    }

    fn check_name(
        &self,
        name: &str,
        offset: usize,
        ctx: &TreeContext,
        findings: &mut Vec<Finding>,
    ) {
        if !utils::is_snake_case(name) {
            findings.push(Finding::new(
                ctx.path,
                scan::offset_to_line(ctx.source, offset),
                self.code(),
                format!("Argument name '{}' should be snake_case", name),
            ));
        }
    }
}

impl TreeRule for ArgumentNamingRule {
    fn code(&self) -> &'static str {
        "S010"
    }

    fn description(&self) -> &'static str {
        "Formal parameter name is not snake_case"
    }

    fn check(&self, ctx: &TreeContext) -> Vec<Finding> {
        match ctx.stmt {
            Stmt::FunctionDef(func) => self.check_arguments(&func.args, ctx),
            Stmt::AsyncFunctionDef(func) => self.check_arguments(&func.args, ctx),
            _ => Vec::new(),
        }
    }
}
