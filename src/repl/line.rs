//! Line-mode REPL
//!
//! Reads one line at a time, scans it with a fresh [`Lexer`] and prints every
//! token up to (not including) `EOF`. Lines share no state. Used when the
//! explorer cannot run (piped input, `--plain`).

use crate::parser::lexer::Lexer;
use crate::parser::token::TokenKind;
use crate::repl::constants::PROMPT;
use std::io::{self, BufRead, Write};

/// Run the loop until `input` is exhausted
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut lexer = Lexer::new(&line);
        loop {
            let token = lexer.next_token();
            if token.is(TokenKind::Eof) {
                break;
            }
            writeln!(output, "{}", token)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> String {
        let mut output = Vec::new();
        start(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_prints_tokens_per_line() {
        let output = run("let x = 5;\n");
        assert_eq!(
            output,
            ">> {Type:LET Literal:let}\n\
             {Type:IDENT Literal:x}\n\
             {Type:= Literal:=}\n\
             {Type:INT Literal:5}\n\
             {Type:; Literal:;}\n\
             >> "
        );
    }

    #[test]
    fn test_empty_input_prints_single_prompt() {
        assert_eq!(run(""), ">> ");
    }

    #[test]
    fn test_lines_are_independent() {
        let output = run("a ==\n= b\n");
        assert_eq!(
            output,
            ">> {Type:IDENT Literal:a}\n\
             {Type:== Literal:==}\n\
             >> {Type:= Literal:=}\n\
             {Type:IDENT Literal:b}\n\
             >> "
        );
    }

    #[test]
    fn test_blank_line_prints_nothing() {
        assert_eq!(run("\n\n"), ">> >> >> ");
    }
}
