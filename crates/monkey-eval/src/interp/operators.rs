// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Prefix and infix operator dispatch.

use std::rc::Rc;

use crate::error::EvalError;
use crate::value::Object;

pub fn eval_prefix_expression(op: &str, right: Object) -> Object {
    match op {
        "!" => eval_bang_operator(right),
        "-" => eval_minus_prefix_operator(right),
        _ => Object::Error(
            EvalError::UnknownPrefixOperator { op: op.to_string(), operand: right.type_name() }.to_string(),
        ),
    }
}

fn eval_bang_operator(right: Object) -> Object {
    if right.is_truthy() {
        Object::FALSE
    } else {
        Object::TRUE
    }
}

fn eval_minus_prefix_operator(right: Object) -> Object {
    match right {
        Object::Integer(value) => Object::Integer(-value),
        other => Object::Error(
            EvalError::UnknownPrefixOperator { op: "-".to_string(), operand: other.type_name() }.to_string(),
        ),
    }
}

pub fn eval_infix_expression(op: &str, left: Object, right: Object) -> Object {
    match (&left, &right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix_expression(op, *l, *r),
        (Object::String(l), Object::String(r)) if op == "+" => {
            Object::String(Rc::from(format!("{}{}", l, r)))
        }
        _ if op == "==" => Object::Boolean(left == right),
        _ if op == "!=" => Object::Boolean(left != right),
        _ if std::mem::discriminant(&left) != std::mem::discriminant(&right) => Object::Error(
            EvalError::TypeMismatch { left: left.type_name(), op: op.to_string(), right: right.type_name() }
                .to_string(),
        ),
        _ => Object::Error(
            EvalError::UnknownInfixOperator { left: left.type_name(), op: op.to_string(), right: right.type_name() }
                .to_string(),
        ),
    }
}

fn eval_integer_infix_expression(op: &str, left: i64, right: i64) -> Object {
    match op {
        "+" => Object::Integer(left + right),
        "-" => Object::Integer(left - right),
        "*" => Object::Integer(left * right),
        "/" => {
            if right == 0 {
                Object::Error(EvalError::DivisionByZero { left, right }.to_string())
            } else {
                Object::Integer(left / right)
            }
        }
        "<" => Object::Boolean(left < right),
        ">" => Object::Boolean(left > right),
        "==" => Object::Boolean(left == right),
        "!=" => Object::Boolean(left != right),
        _ => Object::Error(
            EvalError::UnknownInfixOperator { left: "MInteger", op: op.to_string(), right: "MInteger" }.to_string(),
        ),
    }
}
