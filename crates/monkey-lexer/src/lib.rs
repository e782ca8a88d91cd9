// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Tokenizes Monkey source text.

mod lexer;

pub use lexer::Lexer;
