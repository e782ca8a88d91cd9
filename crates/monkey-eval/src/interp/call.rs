// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Function application: user-defined closures and builtins.

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Object;

use super::exec_stmt::eval_block_statement;

/// Apply a callee to already-evaluated arguments.
///
/// Parameters are bound positionally with no arity check (see the
/// grounding ledger for why the reference behavior is preserved here).
pub fn apply_function(func: Object, args: Vec<Object>) -> Object {
    match func {
        Object::Function(data) => {
            tracing::trace!(name = ?data.name, arity = data.parameters.len(), "calling function");
            let call_env = Environment::new_enclosed(data.env.clone());
            for (param, arg) in data.parameters.iter().zip(args.into_iter()) {
                call_env.borrow_mut().set(param.name.clone(), arg);
            }
            let evaluated = eval_block_statement(&data.body, &call_env);
            unwrap_return_value(evaluated)
        }
        Object::Builtin(data) => {
            tracing::trace!(name = data.name, "calling builtin");
            let result = (data.func)(&args);
            if matches!(result, Object::Null) {
                Object::Null
            } else {
                result
            }
        }
        other => {
            tracing::debug!(ty = other.type_name(), "call target is not callable");
            Object::Error(EvalError::NotAFunction { ty: other.type_name() }.to_string())
        }
    }
}

fn unwrap_return_value(obj: Object) -> Object {
    match obj {
        Object::ReturnValue(inner) => *inner,
        other => other,
    }
}
