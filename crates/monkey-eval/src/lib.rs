// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The tree-walking evaluator and runtime object system.

pub mod builtins;
pub mod env;
pub mod error;
mod interp;
pub mod value;

pub use env::Environment;
pub use interp::{eval_program, format_parse_errors};
pub use value::Object;
