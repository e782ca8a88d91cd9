// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The parser implementation using Pratt parsing for expressions.

use monkey_ast::{BlockStatement, Expr, ExprKind, Identifier, Program, Span, Stmt, StmtKind, Token, TokenKind};
use monkey_lexer::Lexer;

/// Operator-precedence levels, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

fn infix_precedence(kind: &TokenKind) -> Precedence {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
        TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Slash | TokenKind::Asterisk => Precedence::Product,
        TokenKind::LParen => Precedence::Call,
        TokenKind::LBracket => Precedence::Index,
        _ => Precedence::Lowest,
    }
}

/// A parser error: a human-readable message plus the source span it refers to.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub span: Span,
    pub message: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// The outcome of parsing a source file: a (possibly partial) program plus
/// whatever errors were collected along the way.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error messages alone, matching the host-facing `parse` contract.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }
}

/// The parser for Monkey source code. Maintains a two-token lookahead
/// (`cur_token`, `peek_token`) over the token stream produced by the lexer.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    errors: Vec<ParseError>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0, errors: Vec::new() }
    }

    /// Parse an entire program from source text.
    pub fn parse_source(source: &str) -> ParseResult {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let tok = lexer.next_token();
            let done = tok.kind == TokenKind::Eof;
            tokens.push(tok);
            if done {
                break;
            }
        }
        let mut parser = Parser::new(tokens);
        let program = parser.parse_program();
        ParseResult { program, errors: parser.errors }
    }

    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();
        while !self.at_end() {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.advance();
        }
        Program { statements }
    }

    // =====================================================================
    // Token navigation
    // =====================================================================

    fn cur_token(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or_else(|| self.tokens.last().unwrap())
    }

    fn cur_kind(&self) -> &TokenKind {
        &self.cur_token().kind
    }

    fn peek_token(&self) -> &Token {
        self.tokens.get(self.pos + 1).unwrap_or_else(|| self.tokens.last().unwrap())
    }

    fn peek_kind(&self) -> &TokenKind {
        &self.peek_token().kind
    }

    fn at_end(&self) -> bool {
        matches!(self.cur_kind(), TokenKind::Eof)
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
    }

    fn cur_is(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.cur_kind()) == std::mem::discriminant(kind)
    }

    fn peek_is(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.peek_kind()) == std::mem::discriminant(kind)
    }

    fn peek_precedence(&self) -> Precedence {
        infix_precedence(self.peek_kind())
    }

    /// Advance past `peekToken` if it matches `kind`, else record an error.
    fn expect_peek(&mut self, kind: &TokenKind) -> bool {
        if self.peek_is(kind) {
            self.advance();
            true
        } else {
            let message = format!(
                "Expected next token to be {}, got {} instead",
                kind.display_name(),
                self.peek_kind().display_name()
            );
            self.errors.push(ParseError { span: self.peek_token().span, message });
            false
        }
    }

    fn push_error(&mut self, message: String) {
        self.errors.push(ParseError { span: self.cur_token().span, message });
    }

    // =====================================================================
    // Statements
    // =====================================================================

    fn parse_statement(&mut self) -> Option<Stmt> {
        match self.cur_kind() {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Stmt> {
        let start = self.cur_token().span;

        if !self.expect_peek(&TokenKind::Ident) {
            return None;
        }
        let name = Identifier { name: self.cur_token().literal.clone(), span: self.cur_token().span };

        if !self.expect_peek(&TokenKind::Assign) {
            return None;
        }
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        let value = name_function_literal(value, &name.name);

        if self.peek_is(&TokenKind::Semicolon) {
            self.advance();
        }

        let end = self.cur_token().span;
        Some(Stmt { kind: StmtKind::Let { name, value }, span: Span::new(start.start, end.end) })
    }

    fn parse_return_statement(&mut self) -> Option<Stmt> {
        let start = self.cur_token().span;
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;

        while self.peek_is(&TokenKind::Semicolon) {
            self.advance();
        }

        let end = self.cur_token().span;
        Some(Stmt { kind: StmtKind::Return { value }, span: Span::new(start.start, end.end) })
    }

    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let start = self.cur_token().span;
        let expr = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(&TokenKind::Semicolon) {
            self.advance();
        }

        let end = self.cur_token().span;
        Some(Stmt { kind: StmtKind::Expression(expr), span: Span::new(start.start, end.end) })
    }

    fn parse_block_statement(&mut self) -> BlockStatement {
        let start = self.cur_token().span;
        let mut statements = Vec::new();
        self.advance();

        while !self.cur_is(&TokenKind::RBrace) && !self.at_end() {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.advance();
        }

        let end = self.cur_token().span;
        BlockStatement { statements, span: Span::new(start.start, end.end) }
    }

    // =====================================================================
    // Expressions
    // =====================================================================

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(&TokenKind::Semicolon) && precedence < self.peek_precedence() {
            if !has_infix(self.peek_kind()) {
                return Some(left);
            }
            self.advance();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.cur_kind().clone() {
            TokenKind::Ident => Some(self.parse_identifier()),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::String => Some(self.parse_string_literal()),
            TokenKind::True | TokenKind::False => Some(self.parse_boolean_literal()),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::LBrace => self.parse_hash_literal(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            other => {
                self.push_error(format!("No prefix parser for {} function", other.display_name()));
                None
            }
        }
    }

    fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        match self.cur_kind() {
            TokenKind::LParen => Some(self.parse_call_expression(left)),
            TokenKind::LBracket => self.parse_index_expression(left),
            _ => Some(self.parse_infix_expression(left)),
        }
    }

    fn parse_identifier(&self) -> Expr {
        let tok = self.cur_token();
        Expr {
            kind: ExprKind::Identifier(Identifier { name: tok.literal.clone(), span: tok.span }),
            span: tok.span,
        }
    }

    fn parse_integer_literal(&mut self) -> Option<Expr> {
        let tok = self.cur_token().clone();
        match tok.literal.parse::<i64>() {
            Ok(value) => Some(Expr { kind: ExprKind::IntegerLiteral(value), span: tok.span }),
            Err(_) => {
                self.push_error(format!("could not parse {} as integer", tok.literal));
                None
            }
        }
    }

    fn parse_string_literal(&mut self) -> Expr {
        let tok = self.cur_token();
        Expr { kind: ExprKind::StringLiteral(tok.literal.clone()), span: tok.span }
    }

    fn parse_boolean_literal(&self) -> Expr {
        let tok = self.cur_token();
        Expr { kind: ExprKind::BooleanLiteral(matches!(tok.kind, TokenKind::True)), span: tok.span }
    }

    fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let start = self.cur_token().span;
        let op = self.cur_token().literal.clone();
        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;
        let end = right.span;
        Some(Expr { kind: ExprKind::Prefix { op, right: Box::new(right) }, span: Span::new(start.start, end.end) })
    }

    fn parse_infix_expression(&mut self, left: Expr) -> Expr {
        let op = self.cur_token().literal.clone();
        let precedence = infix_precedence(self.cur_kind());
        let start = left.span;
        self.advance();
        let right = self
            .parse_expression(precedence)
            .unwrap_or(Expr { kind: ExprKind::BooleanLiteral(false), span: self.cur_token().span });
        let end = right.span;
        Expr { kind: ExprKind::Infix { op, left: Box::new(left), right: Box::new(right) }, span: Span::new(start.start, end.end) }
    }

    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(&TokenKind::RParen) {
            return None;
        }
        Some(expr)
    }

    fn parse_if_expression(&mut self) -> Option<Expr> {
        let start = self.cur_token().span;

        if !self.expect_peek(&TokenKind::LParen) {
            return None;
        }
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(&TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let mut alternative = None;
        if self.peek_is(&TokenKind::Else) {
            self.advance();
            if !self.expect_peek(&TokenKind::LBrace) {
                return None;
            }
            alternative = Some(self.parse_block_statement());
        }

        let end = self.cur_token().span;
        Some(Expr {
            kind: ExprKind::If { condition: Box::new(condition), consequence, alternative },
            span: Span::new(start.start, end.end),
        })
    }

    fn parse_function_literal(&mut self) -> Option<Expr> {
        let start = self.cur_token().span;

        if !self.expect_peek(&TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(&TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        let end = self.cur_token().span;
        Some(Expr {
            kind: ExprKind::FunctionLiteral { parameters, body, name: None },
            span: Span::new(start.start, end.end),
        })
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut params = Vec::new();

        if self.peek_is(&TokenKind::RParen) {
            self.advance();
            return Some(params);
        }

        self.advance();
        params.push(Identifier { name: self.cur_token().literal.clone(), span: self.cur_token().span });

        while self.peek_is(&TokenKind::Comma) {
            self.advance();
            self.advance();
            params.push(Identifier { name: self.cur_token().literal.clone(), span: self.cur_token().span });
        }

        if !self.expect_peek(&TokenKind::RParen) {
            return None;
        }

        Some(params)
    }

    fn parse_call_expression(&mut self, function: Expr) -> Expr {
        let start = function.span;
        let arguments = self.parse_expression_list(&TokenKind::RParen);
        let end = self.cur_token().span;
        Expr { kind: ExprKind::Call { function: Box::new(function), arguments }, span: Span::new(start.start, end.end) }
    }

    fn parse_index_expression(&mut self, left: Expr) -> Option<Expr> {
        let start = left.span;
        self.advance();
        let index = self
            .parse_expression(Precedence::Lowest)
            .unwrap_or(Expr { kind: ExprKind::IntegerLiteral(0), span: self.cur_token().span });

        if !self.expect_peek(&TokenKind::RBracket) {
            return None;
        }

        let end = self.cur_token().span;
        Some(Expr { kind: ExprKind::Index { left: Box::new(left), index: Box::new(index) }, span: Span::new(start.start, end.end) })
    }

    fn parse_array_literal(&mut self) -> Option<Expr> {
        let start = self.cur_token().span;
        let elements = self.parse_expression_list(&TokenKind::RBracket);
        let end = self.cur_token().span;
        Some(Expr { kind: ExprKind::ArrayLiteral(elements), span: Span::new(start.start, end.end) })
    }

    fn parse_expression_list(&mut self, end_kind: &TokenKind) -> Vec<Expr> {
        let mut list = Vec::new();

        if self.peek_is(end_kind) {
            self.advance();
            return list;
        }

        self.advance();
        if let Some(expr) = self.parse_expression(Precedence::Lowest) {
            list.push(expr);
        }

        while self.peek_is(&TokenKind::Comma) {
            self.advance();
            self.advance();
            if let Some(expr) = self.parse_expression(Precedence::Lowest) {
                list.push(expr);
            }
        }

        self.expect_peek(end_kind);
        list
    }

    fn parse_hash_literal(&mut self) -> Option<Expr> {
        let start = self.cur_token().span;
        let mut pairs = Vec::new();

        while !self.peek_is(&TokenKind::RBrace) {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(&TokenKind::Colon) {
                return None;
            }
            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.peek_is(&TokenKind::RBrace) && !self.expect_peek(&TokenKind::Comma) {
                return None;
            }
        }

        if !self.expect_peek(&TokenKind::RBrace) {
            return None;
        }

        let end = self.cur_token().span;
        Some(Expr { kind: ExprKind::HashLiteral(pairs), span: Span::new(start.start, end.end) })
    }
}

fn has_infix(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Slash
            | TokenKind::Asterisk
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::LParen
            | TokenKind::LBracket
    )
}

/// Records the name a function literal is bound to via `let`, purely for
/// friendlier `inspect()` rendering of named (including recursive) functions.
fn name_function_literal(mut expr: Expr, name: &str) -> Expr {
    if let ExprKind::FunctionLiteral { name: fn_name, .. } = &mut expr.kind {
        *fn_name = Some(name.to_string());
    }
    expr
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> ParseResult {
        Parser::parse_source(input)
    }

    fn assert_no_errors(result: &ParseResult) {
        assert!(result.is_ok(), "parser errors: {:?}", result.error_messages());
    }

    #[test]
    fn let_statements() {
        let result = parse("let x = 5;\nlet y = true;\nlet foobar = y;");
        assert_no_errors(&result);
        assert_eq!(result.program.statements.len(), 3);
    }

    #[test]
    fn return_statements() {
        let result = parse("return 5;\nreturn 10;\nreturn add(15);");
        assert_no_errors(&result);
        assert_eq!(result.program.statements.len(), 3);
    }

    #[test]
    fn operator_precedence_round_trip() {
        let cases = [
            ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
            ("-a * b", "((-a) * b)"),
            ("!-a", "(!(-a))"),
            ("a + b + c", "((a + b) + c)"),
            ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
            ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
            ("(5 + 5) * 2", "((5 + 5) * 2)"),
            ("a * b[2]", "(a * (b[2]))"),
            ("add(a * b[2], b[1], 2 * [1, 2][1])", "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))"),
        ];

        for (input, expected) in cases {
            let result = parse(input);
            assert_no_errors(&result);
            assert_eq!(result.program.to_string(), expected, "input: {input}");
        }
    }

    #[test]
    fn no_prefix_parser_error() {
        let result = parse("@");
        assert!(!result.is_ok());
        assert_eq!(result.error_messages()[0], "No prefix parser for ILLEGAL function");
    }

    #[test]
    fn missing_rparen_reports_expected_token_error() {
        let result = parse("(1 + 2");
        assert!(!result.is_ok());
        assert!(result.error_messages().iter().any(|m| m.contains("Expected next token to be )")));
    }

    #[test]
    fn function_literal_parameters() {
        let result = parse("fn(x, y, z) { x + y; };");
        assert_no_errors(&result);
        let Stmt { kind: StmtKind::Expression(expr), .. } = &result.program.statements[0] else {
            panic!("expected expression statement");
        };
        let ExprKind::FunctionLiteral { parameters, .. } = &expr.kind else {
            panic!("expected function literal");
        };
        assert_eq!(parameters.len(), 3);
    }

    #[test]
    fn hash_literal_with_expression_keys() {
        let result = parse(r#"{"one": 0 + 1, "two": 10 - 8, "three": 15 / 5}"#);
        assert_no_errors(&result);
        let Stmt { kind: StmtKind::Expression(expr), .. } = &result.program.statements[0] else {
            panic!("expected expression statement");
        };
        let ExprKind::HashLiteral(pairs) = &expr.kind else {
            panic!("expected hash literal");
        };
        assert_eq!(pairs.len(), 3);
    }
}
