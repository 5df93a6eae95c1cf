//! S011: Variable in function should be snake_case
//!
//! Checks plain-identifier targets of `=` assignments inside a function
//! body. Nested declarations are left to their own visit.

use crate::models::{Finding, TreeContext};
use crate::rules::base::TreeRule;
use crate::scan;
use crate::utils;
use rustpython_ast::{Expr, Stmt};

pub struct VariableNamingRule;

impl VariableNamingRule {
    pub fn new() -> Self {
        Self
    }
}

impl TreeRule for VariableNamingRule {
    fn code(&self) -> &'static str {
        "S011"
    }

    fn description(&self) -> &'static str {
        "Local variable name is not snake_case"
    }

    fn check(&self, ctx: &TreeContext) -> Vec<Finding> {
        let body = match ctx.stmt {
            Stmt::FunctionDef(func) => &func.body,
            Stmt::AsyncFunctionDef(func) => &func.body,
            _ => return Vec::new(),
        };

        let mut findings = Vec::new();
        utils::walk_direct_body(body, &mut |stmt| {
            if let Stmt::Assign(assign) = stmt {
                for target in &assign.targets {
                    if let Expr::Name(name) = target {
                        if !utils::is_snake_case(name.id.as_str()) {
                            findings.push(Finding::new(
                                ctx.path,
                                scan::offset_to_line(ctx.source, name.range.start().to_usize()),
                                self.code(),
                                format!(
                                    "Variable '{}' in function should be snake_case",
                                    name.id
                                ),
                            ));
                        }
                    }
                }
            }
        });

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustpython_ast::Mod;
    use rustpython_parser::{parse, Mode};

    fn check_code(code: &str) -> Vec<Finding> {
        let ast = parse(code, Mode::Module, "test.py").unwrap();
        let rule = VariableNamingRule::new();
        let mut findings = Vec::new();

        if let Mod::Module(module) = &ast {
            check_nested(&module.body, code, &rule, &mut findings);
        }

        findings
    }

    fn check_nested(body: &[Stmt], code: &str, rule: &VariableNamingRule, findings: &mut Vec<Finding>) {
        for stmt in body {
            let ctx = TreeContext {
                stmt,
                path: "test.py",
                source: code,
            };
            findings.extend(rule.check(&ctx));
            match stmt {
                Stmt::FunctionDef(func) => check_nested(&func.body, code, rule, findings),
                Stmt::ClassDef(class_def) => check_nested(&class_def.body, code, rule, findings),
                _ => {}
            }
        }
    }

    #[test]
    fn test_camel_case_local_fires() {
        let code = "def f():\n    myVar = 1\n";
        let findings = check_code(code);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 2);
        assert_eq!(
            findings[0].message,
            "Variable 'myVar' in function should be snake_case"
        );
    }

    #[test]
    fn test_snake_case_local_passes() {
        let code = "def f():\n    my_var = 1\n";
        assert!(check_code(code).is_empty());
    }

    #[test]
    fn test_module_level_assignments_pass() {
        let code = "ModuleVar = 1\n";
        assert!(check_code(code).is_empty());
    }

    #[test]
    fn test_assignment_inside_branch_is_checked() {
        let code = "def f(flag):\n    if flag:\n        BadName = 2\n";
        let findings = check_code(code);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 3);
    }

    #[test]
    fn test_nested_function_reported_once() {
        let code = "def outer():\n    def inner():\n        Bad = 1\n";
        let findings = check_code(code);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 3);
    }

    #[test]
    fn test_attribute_targets_pass() {
        let code = "def f(self):\n    self.Value = 1\n";
        assert!(check_code(code).is_empty());
    }
}
