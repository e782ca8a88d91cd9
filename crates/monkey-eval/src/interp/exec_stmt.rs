// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Statement execution: programs, blocks, `let`/`return`/expression statements.

use std::cell::RefCell;
use std::rc::Rc;

use monkey_ast::{BlockStatement, Program, Stmt, StmtKind};

use crate::env::Environment;
use crate::value::Object;

use super::eval_expr::eval_expression;

/// Evaluate a whole program: on `ReturnValue`, unwrap to its payload; on
/// `Error`, return it as-is (the program-level short-circuit).
pub fn eval_program(program: &Program, env: &Rc<RefCell<Environment>>) -> Object {
    tracing::debug!(statements = program.statements.len(), "evaluating program");
    let mut result = Object::Null;

    for stmt in &program.statements {
        result = eval_statement(stmt, env);

        match result {
            Object::ReturnValue(value) => return *value,
            Object::Error(ref msg) => {
                tracing::debug!(error = %msg, "program evaluation short-circuited");
                return result;
            }
            _ => {}
        }
    }

    result
}

/// Evaluate a `{ ... }` block, propagating `ReturnValue`/`Error` *without*
/// unwrapping, so an enclosing function body (not an outer block) is the
/// one that finally catches them.
pub fn eval_block_statement(block: &BlockStatement, env: &Rc<RefCell<Environment>>) -> Object {
    let mut result = Object::Null;

    for stmt in &block.statements {
        result = eval_statement(stmt, env);

        if matches!(result, Object::ReturnValue(_) | Object::Error(_)) {
            return result;
        }
    }

    result
}

pub fn eval_statement(stmt: &Stmt, env: &Rc<RefCell<Environment>>) -> Object {
    match &stmt.kind {
        StmtKind::Let { name, value } => {
            let evaluated = eval_expression(value, env);
            if evaluated.is_error() {
                return evaluated;
            }
            env.borrow_mut().set(name.name.clone(), evaluated.clone());
            evaluated
        }
        StmtKind::Return { value } => {
            let evaluated = eval_expression(value, env);
            if evaluated.is_error() {
                return evaluated;
            }
            Object::ReturnValue(Box::new(evaluated))
        }
        StmtKind::Expression(expr) => eval_expression(expr, env),
    }
}
