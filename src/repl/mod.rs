//! Interactive front ends for the Monkey lexer and parser.
//!
//! Two shells are provided:
//!
//! - **[`line`]** — the plain read-print loop: prompt, read one line, print its
//!   tokens. Works on any reader/writer pair, so it also serves piped input.
//! - **[`app`]** — a terminal explorer built on [ratatui](https://docs.rs/ratatui)
//!   that shows tokens, the AST and parse errors side by side for each line.
//!   Its panes live in [`panes`] and its palette in [`theme`].
//!
//! Every line is scanned and parsed on its own; no state carries over.

pub mod app;
pub mod constants;
pub mod line;
pub mod panes;
pub mod theme;

pub use app::App;
