// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Parses a token stream into a [`monkey_ast::Program`].

mod parser;

pub use parser::{ParseError, ParseResult, Parser};

use monkey_ast::Program;

/// Parse Monkey source text into a program plus any collected error strings.
pub fn parse(source: &str) -> (Program, Vec<String>) {
    let result = Parser::parse_source(source);
    let errors = result.error_messages();
    (result.program, errors)
}
