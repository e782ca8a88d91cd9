// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The built-in function table, consulted after environment lookup fails.

use std::rc::Rc;

use crate::error::EvalError;
use crate::value::{BuiltinData, Object};

/// Look up a builtin by name. The table is process-global and read-only;
/// this is a plain match rather than a lazily-built map since the set of
/// builtins is small and fixed.
pub fn lookup(name: &str) -> Option<Object> {
    let (name, func): (&'static str, fn(&[Object]) -> Object) = match name {
        "len" => ("len", len),
        "first" => ("first", first),
        "last" => ("last", last),
        "rest" => ("rest", rest),
        "push" => ("push", push),
        _ => return None,
    };
    Some(Object::Builtin(Rc::new(BuiltinData { name, func })))
}

fn arity_error(got: usize, want: &'static str) -> Object {
    Object::Error(EvalError::WrongArgumentCount { got, want }.to_string())
}

fn len(args: &[Object]) -> Object {
    if args.len() != 1 {
        return arity_error(args.len(), "1");
    }
    match &args[0] {
        Object::String(s) => Object::Integer(s.len() as i64),
        Object::Array(elements) => Object::Integer(elements.len() as i64),
        other => Object::Error(EvalError::ArgumentNotSupported { name: "len", ty: other.type_name() }.to_string()),
    }
}

fn first(args: &[Object]) -> Object {
    if args.len() != 1 {
        return arity_error(args.len(), "1");
    }
    match &args[0] {
        Object::Array(elements) => elements.first().cloned().unwrap_or(Object::Null),
        other => Object::Error(EvalError::ArgumentMustBeArray { name: "first", ty: other.type_name() }.to_string()),
    }
}

fn last(args: &[Object]) -> Object {
    if args.len() != 1 {
        return arity_error(args.len(), "1");
    }
    match &args[0] {
        Object::Array(elements) => elements.last().cloned().unwrap_or(Object::Null),
        other => Object::Error(EvalError::ArgumentMustBeArray { name: "last", ty: other.type_name() }.to_string()),
    }
}

fn rest(args: &[Object]) -> Object {
    if args.len() != 1 {
        return arity_error(args.len(), "1");
    }
    match &args[0] {
        Object::Array(elements) => {
            if elements.is_empty() {
                Object::Null
            } else {
                Object::Array(Rc::new(elements[1..].to_vec()))
            }
        }
        other => Object::Error(EvalError::ArgumentMustBeArray { name: "rest", ty: other.type_name() }.to_string()),
    }
}

/// Returns a fresh array with `x` appended; the original array is left
/// untouched (see the grounding ledger for why non-mutating was chosen).
fn push(args: &[Object]) -> Object {
    if args.len() != 2 {
        return arity_error(args.len(), "2");
    }
    match &args[0] {
        Object::Array(elements) => {
            let mut new_elements = elements.as_ref().clone();
            new_elements.push(args[1].clone());
            Object::Array(Rc::new(new_elements))
        }
        other => Object::Error(EvalError::ArgumentMustBeArray { name: "push", ty: other.type_name() }.to_string()),
    }
}
