//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the diagnostic type, token window helpers, and the main parse
//! entry point.
//!
//! # Parser Architecture
//!
//! The Parser is a Pratt parser split across several files:
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: `let`, `return` and expression statements
//! - `expressions`: prefix/infix dispatch and precedence climbing
//!
//! # Error Recovery
//!
//! Nothing in the parser is fatal. A rule that cannot build its node records
//! a [`ParseError`] and returns `None`; [`Parser::parse_program`] then moves on
//! to the next token and keeps going. Callers decide what a non-empty error
//! list means.

use crate::parser::ast::*;
use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenKind};
use std::fmt;

/// A non-fatal problem found while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The token after the current one was not the kind the rule required
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    /// No expression can start with this kind of token
    NoPrefixParseFn(TokenKind),

    /// An integer literal does not fit in an `i64`
    InvalidInteger(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { expected, found } => write!(
                f,
                "expected next token to be {}, got {} instead",
                expected, found
            ),
            ParseError::NoPrefixParseFn(kind) => {
                write!(f, "no prefix parse function for {} found", kind)
            }
            ParseError::InvalidInteger(literal) => {
                write!(f, "could not parse {:?} as integer", literal)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Result of one parse: the program and every diagnostic, in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Diagnostics rendered as plain messages
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Pratt parser for Monkey
///
/// Holds a two-token window (`cur_token`, `peek_token`) over a lexer that is
/// pulled one token at a time.
pub struct Parser<'a> {
    pub(crate) lexer: Lexer<'a>,
    pub(crate) cur_token: Token,
    pub(crate) peek_token: Token,
    pub(crate) errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Self {
            lexer,
            cur_token: Token::eof(),
            peek_token: Token::eof(),
            errors: Vec::new(),
        };

        // Read two tokens so cur_token and peek_token are both set
        parser.next_token();
        parser.next_token();
        parser
    }

    pub fn from_source(source: &'a str) -> Self {
        Self::new(Lexer::new(source))
    }

    /// Parse the entire program, consuming the parser
    pub fn parse_program(mut self) -> ParseOutput {
        let mut program = Program::new();

        while !self.cur_token_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        ParseOutput {
            program,
            errors: self.errors,
        }
    }

    /// Diagnostics recorded so far
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    // ===== Helper methods =====

    pub(crate) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
    }

    pub(crate) fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.is(kind)
    }

    pub(crate) fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    /// Advance onto the peek token if it has the given kind, otherwise
    /// record an error and stay put
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        self.errors.push(ParseError::UnexpectedToken {
            expected,
            found: self.peek_token.kind,
        });
    }
}

/// Parse `source` in one go
pub fn parse(source: &str) -> ParseOutput {
    Parser::from_source(source).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_starts_on_first_two_tokens() {
        let parser = Parser::from_source("let x");
        assert_eq!(parser.cur_token, Token::new(TokenKind::Let, "let"));
        assert_eq!(parser.peek_token, Token::new(TokenKind::Ident, "x"));
        assert!(parser.errors().is_empty());
    }

    #[test]
    fn test_expect_peek_records_error() {
        let mut parser = Parser::from_source("let 5");
        assert!(!parser.expect_peek(TokenKind::Ident));
        assert!(parser.cur_token_is(TokenKind::Let));
        assert_eq!(
            parser.errors(),
            &[ParseError::UnexpectedToken {
                expected: TokenKind::Ident,
                found: TokenKind::Int,
            }]
        );
    }

    #[test]
    fn test_error_messages() {
        let unexpected = ParseError::UnexpectedToken {
            expected: TokenKind::Assign,
            found: TokenKind::Int,
        };
        assert_eq!(
            unexpected.to_string(),
            "expected next token to be =, got INT instead"
        );
        assert_eq!(
            ParseError::NoPrefixParseFn(TokenKind::Semicolon).to_string(),
            "no prefix parse function for ; found"
        );
        assert_eq!(
            ParseError::InvalidInteger("99999999999999999999".to_string()).to_string(),
            "could not parse \"99999999999999999999\" as integer"
        );
    }

    #[test]
    fn test_empty_program() {
        let output = parse("");
        assert!(output.is_ok());
        assert!(output.program.statements.is_empty());
    }
}
