//! Statement parsing implementation
//!
//! This module handles the three Monkey statement forms:
//!
//! - Let statements: `let x = 5;`
//! - Return statements: `return x;`
//! - Expression statements: `x + 10;` (the semicolon is optional)
//!
//! # Grammar
//!
//! ```text
//! statement ::= let_stmt | return_stmt | expr_stmt
//! let_stmt  ::= "let" IDENT "=" <skipped> ";"
//! return_stmt ::= "return" <skipped> ";"
//! expr_stmt ::= expression [";"]
//! ```
//!
//! The value part of `let` and `return` is skipped token by token rather than
//! parsed, so both statements come back with an empty value.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::expressions::Precedence;
use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;

impl<'a> Parser<'a> {
    /// Parse a statement starting at the current token
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            _ => Some(Statement::Expression(self.parse_expression_statement())),
        }
    }

    /// Parse let statement
    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }

        let name = Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        };

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        self.skip_to_semicolon();

        Some(LetStatement {
            token,
            name,
            value: None,
        })
    }

    /// Parse return statement
    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let token = self.cur_token.clone();
        self.next_token();

        self.skip_to_semicolon();

        Some(ReturnStatement {
            token,
            return_value: None,
        })
    }

    /// Parse expression statement; a trailing `;` is consumed if present
    fn parse_expression_statement(&mut self) -> ExpressionStatement {
        let token = self.cur_token.clone();
        let expression = self.parse_expression(Precedence::Lowest);

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        ExpressionStatement { token, expression }
    }

    /// Advance until the current token is `;` or the input runs out
    fn skip_to_semicolon(&mut self) {
        while !self.cur_token_is(TokenKind::Semicolon) && !self.cur_token_is(TokenKind::Eof) {
            self.next_token();
        }
    }
}
