// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Expression AST nodes.

use std::fmt;

use crate::stmt::BlockStatement;
use crate::Span;

/// A bare name, used both as an expression and as a function parameter.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An expression in the AST.
#[derive(Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// The kind of expression.
#[derive(Debug, Clone)]
pub enum ExprKind {
    Identifier(Identifier),
    IntegerLiteral(i64),
    BooleanLiteral(bool),
    StringLiteral(String),
    Prefix {
        op: String,
        right: Box<Expr>,
    },
    Infix {
        op: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    If {
        condition: Box<Expr>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    FunctionLiteral {
        parameters: Vec<Identifier>,
        body: BlockStatement,
        /// Name this literal was bound to via `let`, if any — used only for
        /// friendlier `inspect()` output, never for evaluation.
        name: Option<String>,
    },
    Call {
        function: Box<Expr>,
        arguments: Vec<Expr>,
    },
    ArrayLiteral(Vec<Expr>),
    Index {
        left: Box<Expr>,
        index: Box<Expr>,
    },
    /// Ordered `(key, value)` pairs in source order.
    HashLiteral(Vec<(Expr, Expr)>),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Identifier(ident) => write!(f, "{}", ident),
            ExprKind::IntegerLiteral(v) => write!(f, "{}", v),
            ExprKind::BooleanLiteral(v) => write!(f, "{}", v),
            ExprKind::StringLiteral(s) => write!(f, "{}", s),
            ExprKind::Prefix { op, right } => write!(f, "({}{})", op, right),
            ExprKind::Infix { op, left, right } => write!(f, "({} {} {})", left, op, right),
            ExprKind::If { condition, consequence, alternative } => {
                write!(f, "if{} {}", condition, consequence)?;
                if let Some(alt) = alternative {
                    write!(f, "else {}", alt)?;
                }
                Ok(())
            }
            ExprKind::FunctionLiteral { parameters, body, .. } => {
                let params: Vec<String> = parameters.iter().map(|p| p.name.clone()).collect();
                write!(f, "fn({}) {}", params.join(", "), body)
            }
            ExprKind::Call { function, arguments } => {
                let args: Vec<String> = arguments.iter().map(|a| a.to_string()).collect();
                write!(f, "{}({})", function, args.join(", "))
            }
            ExprKind::ArrayLiteral(elements) => {
                let items: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            ExprKind::Index { left, index } => write!(f, "({}[{}])", left, index),
            ExprKind::HashLiteral(pairs) => {
                let items: Vec<String> = pairs.iter().map(|(k, v)| format!("{}:{}", k, v)).collect();
                write!(f, "{{{}}}", items.join(", "))
            }
        }
    }
}
