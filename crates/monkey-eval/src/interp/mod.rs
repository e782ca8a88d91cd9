// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The tree-walking evaluator, split by concern the way the AST is walked.

mod call;
mod eval_expr;
mod exec_stmt;
mod format;
mod operators;

pub use exec_stmt::eval_program;
pub use format::format_parse_errors;
