//! # Introduction
//!
//! Front end for the Monkey scripting language: a byte-level lexer and a
//! Pratt parser that turn source text into an AST, plus two interactive
//! shells for looking at what they produce.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST + diagnostics
//! ```
//!
//! 1. [`parser`] — tokenises the source and builds the AST. Parse errors are
//!    collected, never fatal: see [`parser::ParseError`].
//! 2. [`repl`] — the line-mode token REPL and the ratatui explorer; not part
//!    of the stable library API.
//!
//! ## Supported language subset
//!
//! Statements: `let`, `return`, expression statements.
//! Expressions: identifiers, 64-bit integers, prefix `!`/`-`, and the infix
//! operators `+ - * / == != < >` with the usual precedence.

pub mod parser;
pub mod repl;
