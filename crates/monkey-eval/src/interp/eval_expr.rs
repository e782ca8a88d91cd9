// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Expression evaluation.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use monkey_ast::{Expr, ExprKind};

use crate::builtins;
use crate::env::Environment;
use crate::error::EvalError;
use crate::value::{FunctionData, HashData, Object};

use super::call::apply_function;
use super::exec_stmt::eval_block_statement;
use super::operators::{eval_infix_expression, eval_prefix_expression};

pub fn eval_expression(expr: &Expr, env: &Rc<RefCell<Environment>>) -> Object {
    match &expr.kind {
        ExprKind::IntegerLiteral(value) => Object::Integer(*value),
        ExprKind::BooleanLiteral(value) => Object::Boolean(*value),
        ExprKind::StringLiteral(value) => Object::String(Rc::from(value.as_str())),
        ExprKind::Identifier(ident) => eval_identifier(&ident.name, env),
        ExprKind::Prefix { op, right } => {
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(op, right)
        }
        ExprKind::Infix { op, left, right } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(op, left, right)
        }
        ExprKind::If { condition, consequence, alternative } => {
            let condition = eval_expression(condition, env);
            if condition.is_error() {
                return condition;
            }
            if condition.is_truthy() {
                eval_block_statement(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block_statement(alternative, env)
            } else {
                Object::Null
            }
        }
        ExprKind::FunctionLiteral { parameters, body, name } => Object::Function(Rc::new(FunctionData {
            parameters: parameters.clone(),
            body: body.clone(),
            env: env.clone(),
            name: name.clone(),
        })),
        ExprKind::Call { function, arguments } => {
            let func = eval_expression(function, env);
            if func.is_error() {
                return func;
            }
            let args = match eval_expressions(arguments, env) {
                Ok(args) => args,
                Err(err) => return err,
            };
            apply_function(func, args)
        }
        ExprKind::ArrayLiteral(elements) => match eval_expressions(elements, env) {
            Ok(elements) => Object::Array(Rc::new(elements)),
            Err(err) => err,
        },
        ExprKind::Index { left, index } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let index = eval_expression(index, env);
            if index.is_error() {
                return index;
            }
            eval_index_expression(left, index)
        }
        ExprKind::HashLiteral(pairs) => eval_hash_literal(pairs, env),
    }
}

fn eval_identifier(name: &str, env: &Rc<RefCell<Environment>>) -> Object {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(name) {
        return builtin;
    }
    tracing::trace!(%name, "identifier not found");
    Object::Error(EvalError::IdentifierNotFound { name: name.to_string() }.to_string())
}

/// Evaluate a comma-separated expression list left-to-right, abandoning the
/// rest as soon as one evaluates to an `Error`.
fn eval_expressions(exprs: &[Expr], env: &Rc<RefCell<Environment>>) -> Result<Vec<Object>, Object> {
    let mut result = Vec::with_capacity(exprs.len());
    for expr in exprs {
        let evaluated = eval_expression(expr, env);
        if evaluated.is_error() {
            return Err(evaluated);
        }
        result.push(evaluated);
    }
    Ok(result)
}

fn eval_index_expression(left: Object, index: Object) -> Object {
    match (&left, &index) {
        (Object::Array(elements), Object::Integer(i)) => {
            if *i < 0 || *i as usize >= elements.len() {
                Object::Null
            } else {
                elements[*i as usize].clone()
            }
        }
        (Object::Hash(_), _) => eval_hash_index_expression(left, index),
        _ => Object::Error(EvalError::IndexNotSupported { ty: left.type_name() }.to_string()),
    }
}

fn eval_hash_index_expression(left: Object, index: Object) -> Object {
    let Object::Hash(data) = &left else { unreachable!() };
    match index.hash_key() {
        Some(key) => data.pairs.get(&key).map(|(_, v)| v.clone()).unwrap_or(Object::Null),
        None => Object::Error(EvalError::UnusableAsHashKey { ty: index.type_name() }.to_string()),
    }
}

fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &Rc<RefCell<Environment>>) -> Object {
    let mut map = IndexMap::new();

    for (key_expr, value_expr) in pairs {
        let key = eval_expression(key_expr, env);
        if key.is_error() {
            return key;
        }
        let hash_key = match key.hash_key() {
            Some(k) => k,
            None => return Object::Error(EvalError::UnusableAsHashKey { ty: key.type_name() }.to_string()),
        };

        let value = eval_expression(value_expr, env);
        if value.is_error() {
            return value;
        }

        map.insert(hash_key, (key, value));
    }

    Object::Hash(Rc::new(HashData { pairs: map }))
}
