//! Shared naming-convention matchers and AST helpers

use once_cell::sync::Lazy;
use regex::Regex;
use rustpython_ast::{ExceptHandler, Stmt};

static SNAKE_CASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z_][a-z0-9_]*$").unwrap());
static CAMEL_CASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9]*$").unwrap());

/// lowercase-with-underscores, e.g. `my_function`
pub fn is_snake_case(name: &str) -> bool {
    SNAKE_CASE.is_match(name)
}

/// Leading uppercase, alphanumeric, no underscores, e.g. `MyClass`
pub fn is_camel_case(name: &str) -> bool {
    CAMEL_CASE.is_match(name)
}

/// Visit the statements of a declaration body, descending into compound
/// statements but not into nested `def`/`class` (those are visited as
/// declaration nodes of their own by the analyzer's traversal).
pub fn walk_direct_body<'a>(body: &'a [Stmt], visit: &mut dyn FnMut(&'a Stmt)) {
    for stmt in body {
        visit(stmt);
        match stmt {
            Stmt::FunctionDef(_) | Stmt::AsyncFunctionDef(_) | Stmt::ClassDef(_) => {}
            Stmt::If(s) => {
                walk_direct_body(&s.body, visit);
                walk_direct_body(&s.orelse, visit);
            }
            Stmt::While(s) => {
                walk_direct_body(&s.body, visit);
                walk_direct_body(&s.orelse, visit);
            }
            Stmt::For(s) => {
                walk_direct_body(&s.body, visit);
                walk_direct_body(&s.orelse, visit);
            }
            Stmt::AsyncFor(s) => {
                walk_direct_body(&s.body, visit);
                walk_direct_body(&s.orelse, visit);
            }
            Stmt::With(s) => {
                walk_direct_body(&s.body, visit);
            }
            Stmt::AsyncWith(s) => {
                walk_direct_body(&s.body, visit);
            }
            Stmt::Try(s) => {
                walk_direct_body(&s.body, visit);
                for handler in &s.handlers {
                    if let ExceptHandler::ExceptHandler(h) = handler {
                        walk_direct_body(&h.body, visit);
                    }
                }
                walk_direct_body(&s.orelse, visit);
                walk_direct_body(&s.finalbody, visit);
            }
            _ => {}
        }
    }
}
