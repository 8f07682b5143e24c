//! Monkey source code parser
//!
//! This module transforms Monkey source text into an Abstract Syntax Tree (AST):
//! - [`token`]: Token kinds and keyword lookup
//! - [`lexer`]: Tokenization (source text → tokens), pulled one token at a time
//! - [`parse`]: The [`Parser`](parse::Parser) struct, diagnostics and entry point
//! - `statements` / `expressions`: Parsing rules, as `impl Parser` blocks
//! - [`ast`]: AST node definitions
//!
//! # Supported Language Subset
//!
//! - Statements: `let <ident> = ...;`, `return ...;`, expression statements
//! - Expressions: identifiers, integers, prefix `!`/`-`, infix `+ - * / == != < >`
//! - `fn`, `if`, `else`, `true` and `false` are scanned as keywords but have no
//!   parse rules yet
//!
//! # Parser Implementation
//!
//! Hand-written Pratt parser with per-token prefix/infix rules.
//! No external parser generator dependencies.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
pub mod token;

pub use expressions::Precedence;
pub use parse::{parse, ParseError, ParseOutput, Parser};
