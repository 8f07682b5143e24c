//! Lexer (tokenizer) for Monkey source code
//!
//! Converts raw source text into [`Token`]s one at a time. The parser pulls
//! tokens on demand through [`Lexer::next_token`]; nothing is buffered.
//!
//! The lexer works on single bytes. Multi-byte characters are not supported:
//! each byte of one shows up as its own `ILLEGAL` token.

use super::token::{lookup_ident, Token, TokenKind};

/// Byte-wise cursor over one source string.
///
/// `ch` is always the byte at `position`, or NUL once the input is exhausted,
/// and `read_position` is always `position + 1`.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    read_position: usize,
    ch: u8,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source string.
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Self {
            input,
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    /// Scan and return the next token.
    ///
    /// Once the end of input is reached every further call returns an `EOF`
    /// token with an empty literal.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::Eq, "==")
                } else {
                    self.single(TokenKind::Assign)
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::NotEq, "!=")
                } else {
                    self.single(TokenKind::Bang)
                }
            }
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'/' => self.single(TokenKind::Slash),
            b'*' => self.single(TokenKind::Asterisk),
            b'<' => self.single(TokenKind::Lt),
            b'>' => self.single(TokenKind::Gt),
            b';' => self.single(TokenKind::Semicolon),
            b',' => self.single(TokenKind::Comma),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            0 => Token::eof(),
            ch if is_letter(ch) => {
                // read_identifier already moved past the word
                let ident = self.read_identifier();
                return Token::new(lookup_ident(ident), ident);
            }
            ch if ch.is_ascii_digit() => {
                let number = self.read_number();
                return Token::new(TokenKind::Int, number);
            }
            _ => self.single(TokenKind::Illegal),
        };

        self.read_char();
        token
    }

    /// Scan the remaining input, including the final `EOF` token.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.is(TokenKind::Eof);
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }

    /// Token made of the current byte alone.
    fn single(&self, kind: TokenKind) -> Token {
        Token::new(kind, char::from(self.ch).to_string())
    }

    /// Advance to the next byte
    fn read_char(&mut self) {
        self.ch = self
            .input
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(0);
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Look at the byte after the current one without consuming it
    fn peek_char(&self) -> u8 {
        self.input
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(0)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> &'a str {
        let start = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }
        // Both ends sit on ASCII bytes or a char boundary, so slicing is safe.
        let input = self.input;
        &input[start..self.position]
    }

    fn read_number(&mut self) -> &'a str {
        let start = self.position;
        while self.ch.is_ascii_digit() {
            self.read_char();
        }
        let input = self.input;
        &input[start..self.position]
    }
}

/// Bytes allowed in identifiers and keywords.
fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    fn assert_tokens(input: &str, expected: &[(TokenKind, &str)]) {
        let mut lexer = Lexer::new(input);
        for (i, (kind, literal)) in expected.iter().enumerate() {
            let token = lexer.next_token();
            assert_eq!(token.kind, *kind, "token {i} kind in {input:?}");
            assert_eq!(token.literal, *literal, "token {i} literal in {input:?}");
        }
    }

    #[test]
    fn test_simple_tokens() {
        assert_tokens(
            "=+(){},;",
            &[
                (Assign, "="),
                (Plus, "+"),
                (LParen, "("),
                (RParen, ")"),
                (LBrace, "{"),
                (RBrace, "}"),
                (Comma, ","),
                (Semicolon, ";"),
                (Eof, ""),
            ],
        );
    }

    #[test]
    fn test_operators() {
        assert_tokens(
            "!-/*5; 5 < 10 > 5;",
            &[
                (Bang, "!"),
                (Minus, "-"),
                (Slash, "/"),
                (Asterisk, "*"),
                (Int, "5"),
                (Semicolon, ";"),
                (Int, "5"),
                (Lt, "<"),
                (Int, "10"),
                (Gt, ">"),
                (Int, "5"),
                (Semicolon, ";"),
                (Eof, ""),
            ],
        );
    }

    #[test]
    fn test_two_char_operators() {
        assert_tokens(
            "10 == 10; 10 != 9; = ! =! !!",
            &[
                (Int, "10"),
                (Eq, "=="),
                (Int, "10"),
                (Semicolon, ";"),
                (Int, "10"),
                (NotEq, "!="),
                (Int, "9"),
                (Semicolon, ";"),
                (Assign, "="),
                (Bang, "!"),
                (Assign, "="),
                (Bang, "!"),
                (Bang, "!"),
                (Bang, "!"),
                (Eof, ""),
            ],
        );
    }

    #[test]
    fn test_trailing_operator_at_end_of_input() {
        assert_tokens("=", &[(Assign, "="), (Eof, "")]);
        assert_tokens("!", &[(Bang, "!"), (Eof, "")]);
        assert_tokens("==", &[(Eq, "=="), (Eof, "")]);
    }

    #[test]
    fn test_program() {
        let input = "let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
if (5 < 10) {
    return true;
} else {
    return false;
}";
        assert_tokens(
            input,
            &[
                (Let, "let"),
                (Ident, "five"),
                (Assign, "="),
                (Int, "5"),
                (Semicolon, ";"),
                (Let, "let"),
                (Ident, "ten"),
                (Assign, "="),
                (Int, "10"),
                (Semicolon, ";"),
                (Let, "let"),
                (Ident, "add"),
                (Assign, "="),
                (Function, "fn"),
                (LParen, "("),
                (Ident, "x"),
                (Comma, ","),
                (Ident, "y"),
                (RParen, ")"),
                (LBrace, "{"),
                (Ident, "x"),
                (Plus, "+"),
                (Ident, "y"),
                (Semicolon, ";"),
                (RBrace, "}"),
                (Semicolon, ";"),
                (Let, "let"),
                (Ident, "result"),
                (Assign, "="),
                (Ident, "add"),
                (LParen, "("),
                (Ident, "five"),
                (Comma, ","),
                (Ident, "ten"),
                (RParen, ")"),
                (Semicolon, ";"),
                (If, "if"),
                (LParen, "("),
                (Int, "5"),
                (Lt, "<"),
                (Int, "10"),
                (RParen, ")"),
                (LBrace, "{"),
                (Return, "return"),
                (True, "true"),
                (Semicolon, ";"),
                (RBrace, "}"),
                (Else, "else"),
                (LBrace, "{"),
                (Return, "return"),
                (False, "false"),
                (Semicolon, ";"),
                (RBrace, "}"),
                (Eof, ""),
            ],
        );
    }

    #[test]
    fn test_identifiers_and_numbers_are_greedy() {
        assert_tokens(
            "foo_bar 12345 x1",
            &[
                (Ident, "foo_bar"),
                (Int, "12345"),
                (Ident, "x"),
                (Int, "1"),
                (Eof, ""),
            ],
        );
    }

    #[test]
    fn test_illegal_characters() {
        assert_tokens(
            "@ # 5 ?",
            &[
                (Illegal, "@"),
                (Illegal, "#"),
                (Int, "5"),
                (Illegal, "?"),
                (Eof, ""),
            ],
        );
    }

    #[test]
    fn test_eof_is_stable() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token(), Token::new(Ident, "x"));
        for _ in 0..5 {
            assert_eq!(lexer.next_token(), Token::eof());
        }
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(Lexer::new("").tokenize(), vec![Token::eof()]);
        assert_eq!(Lexer::new(" \t\r\n ").tokenize(), vec![Token::eof()]);
    }

    #[test]
    fn test_rescanning_is_deterministic() {
        let input = "let x = -a * (b + 10) != c;";
        assert_eq!(Lexer::new(input).tokenize(), Lexer::new(input).tokenize());
    }
}
