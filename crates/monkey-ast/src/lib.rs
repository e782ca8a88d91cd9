// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! AST node definitions shared by the parser and evaluator.

pub mod expr;
pub mod span;
pub mod stmt;
pub mod token;

pub use expr::{Expr, ExprKind, Identifier};
pub use span::Span;
pub use stmt::{BlockStatement, Stmt, StmtKind};
pub use token::{Token, TokenKind};

use std::fmt;

/// A whole parsed source file: a flat sequence of top-level statements.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
