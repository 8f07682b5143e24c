//! Expression parsing implementation
//!
//! This module handles Monkey expressions with Pratt parsing (top-down
//! operator precedence). Each token kind may start an expression (a prefix
//! rule), extend one (an infix rule), or both, and a [`Precedence`] per
//! operator decides how tightly it binds.
//!
//! # Supported Expressions
//!
//! - Identifiers: `foobar`
//! - Integer literals: `5`
//! - Prefix operators: `!`, `-`
//! - Infix operators: `+ - * / == != < >`
//!
//! Prefix and infix dispatch are plain `match` expressions over
//! [`TokenKind`]; the rule set is fixed at compile time.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::TokenKind;

/// Binding power of operators, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,      // ==
    LessGreater, // > or <
    Sum,         // +
    Product,     // *
    Prefix,      // -X or !X
    Call,        // myFunction(X), reserved for call expressions
}

impl Precedence {
    /// Precedence of a token kind in infix position
    pub fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Slash | TokenKind::Asterisk => Precedence::Product,
            _ => Precedence::Lowest,
        }
    }
}

impl<'a> Parser<'a> {
    /// Parse an expression whose operators all bind tighter than `precedence`
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        // Keep folding operators into `left` while they bind tighter than the
        // caller's threshold. A weaker or equal operator ends the loop and is
        // left for an enclosing call, which is what makes `a + b + c` group
        // as `((a + b) + c)`.
        while !self.peek_token_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            if !has_infix_rule(self.peek_token.kind) {
                return Some(left);
            }

            self.next_token();
            left = self.parse_infix_expression(left)?;
        }

        Some(left)
    }

    /// Dispatch on the current token to the rule that can start an expression
    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.cur_token.kind {
            TokenKind::Ident => Some(self.parse_identifier()),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            kind => {
                self.errors.push(ParseError::NoPrefixParseFn(kind));
                None
            }
        }
    }

    fn parse_identifier(&self) -> Expression {
        Expression::Identifier(Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        })
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        match integer_value(&self.cur_token.literal) {
            Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral {
                token: self.cur_token.clone(),
                value,
            })),
            Err(_) => {
                self.errors
                    .push(ParseError::InvalidInteger(self.cur_token.literal.clone()));
                None
            }
        }
    }

    /// Parse `!x` / `-x`
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    /// Parse the right-hand side of a binary operator. The current token is
    /// the operator.
    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        let precedence = self.cur_precedence();

        self.next_token();
        // Same precedence, not one higher: equal operators associate left
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek_token.kind)
    }

    fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.cur_token.kind)
    }
}

/// Value of an integer literal. A leading `0` on a multi-digit literal marks
/// it as octal, so `010` is 8 and `09` is rejected.
fn integer_value(literal: &str) -> Result<i64, std::num::ParseIntError> {
    match literal.strip_prefix('0') {
        Some(octal) if !octal.is_empty() => i64::from_str_radix(octal, 8),
        _ => literal.parse::<i64>(),
    }
}

/// Whether a token kind can continue an expression as a binary operator
fn has_infix_rule(kind: TokenKind) -> bool {
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
    )
}
