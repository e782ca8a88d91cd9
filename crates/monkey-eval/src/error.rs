// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Canonical evaluation-time error message templates.
//!
//! These never escape as Rust errors: every variant's [`Display`] rendering
//! becomes the message of an [`Object::Error`](crate::value::Object::Error),
//! a first-class runtime value that flows through the evaluator by value
//! rather than by unwinding.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },

    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch { left: &'static str, op: String, right: &'static str },

    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator { op: String, operand: &'static str },

    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator { left: &'static str, op: String, right: &'static str },

    #[error("unusable as a hash key: {ty}")]
    UnusableAsHashKey { ty: &'static str },

    #[error("index operator not supported: {ty}")]
    IndexNotSupported { ty: &'static str },

    #[error("not a function: {ty}")]
    NotAFunction { ty: &'static str },

    #[error("argument to '{name}' not supported, got {ty}")]
    ArgumentNotSupported { name: &'static str, ty: &'static str },

    #[error("argument to '{name}' must be ARRAY, got {ty}")]
    ArgumentMustBeArray { name: &'static str, ty: &'static str },

    #[error("wrong number of arguments. got={got}, want={want}")]
    WrongArgumentCount { got: usize, want: &'static str },

    #[error("division by zero: {left} / {right}")]
    DivisionByZero { left: i64, right: i64 },
}
