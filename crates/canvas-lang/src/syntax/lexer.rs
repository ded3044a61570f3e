use crate::error::{Error, ErrorCode};
use crate::syntax::token::{Token, TokenKind};

pub struct Lexer<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, bytes: source.as_bytes(), pos: 0, line: 1, column: 1 }
    }

    /// Scan the whole input. The first character that starts no token aborts
    /// the scan; no partial token list escapes.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                tokens.push(Token::new(TokenKind::Eof, self.line, self.column));
                break;
            }

            if let Some(tok) = self.next_token()? {
                tokens.push(tok);
            }
        }

        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        let line = self.line;
        let col = self.column;
        let ch = self.advance();

        let kind = match ch {
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b'[' => TokenKind::LBracket,
            b']' => TokenKind::RBracket,
            b';' => TokenKind::Semicolon,
            b',' => TokenKind::Comma,
            b'=' => TokenKind::Eq,

            b'-' => {
                // `->` is the only token starting with `-`; in particular
                // there are no negative number literals.
                if self.peek() == b'>' { self.advance(); TokenKind::Arrow }
                else {
                    return Err(Error::new(ErrorCode::L001, line, col,
                        "unexpected character `-`"));
                }
            }
            b'/' => {
                if self.peek() == b'/' { self.skip_line(); return Ok(None); }
                else {
                    return Err(Error::new(ErrorCode::L001, line, col,
                        "unexpected character `/`"));
                }
            }

            b'"' => TokenKind::Str(self.read_string(line, col)?),
            b'0'..=b'9' => TokenKind::Number(self.read_number()),
            b'a'..=b'z' | b'A'..=b'Z' => TokenKind::Ident(self.read_ident()),

            _ => {
                // report the whole character, not just its first byte
                let ch = self.source[self.pos - 1..].chars().next().unwrap_or('\u{fffd}');
                return Err(Error::new(ErrorCode::L001, line, col,
                    format!("unexpected character `{ch}`")));
            }
        };

        Ok(Some(Token::new(kind, line, col)))
    }

    // ─── Primitives ──────────────────────────────────────────────────────────

    fn advance(&mut self) -> u8 {
        let ch = self.bytes[self.pos];
        self.pos += 1;
        if ch == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if ch & 0xc0 != 0x80 {
            // UTF-8 continuation bytes are not characters of their own
            self.column += 1;
        }
        ch
    }

    fn peek(&self) -> u8 {
        if self.is_at_end() { 0 } else { self.bytes[self.pos] }
    }

    fn peek_next(&self) -> u8 {
        if self.pos + 1 >= self.bytes.len() { 0 } else { self.bytes[self.pos + 1] }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                b' ' | b'\t' | b'\r' | b'\n' => { self.advance(); }
                _ => break,
            }
        }
    }

    fn skip_line(&mut self) {
        while !self.is_at_end() && self.peek() != b'\n' { self.advance(); }
    }

    // ─── Readers ─────────────────────────────────────────────────────────────
    //
    // Each reader starts one byte past its opening character and returns a
    // slice of the original source, so multi-byte characters survive intact.

    /// Reads up to the closing quote and returns the raw literal text with
    /// the quotes still attached. No escape sequences; newlines are allowed.
    fn read_string(&mut self, start_line: usize, start_col: usize) -> Result<String, Error> {
        let start = self.pos - 1; // opening quote
        loop {
            if self.is_at_end() {
                return Err(Error::new(ErrorCode::L002, start_line, start_col,
                    "unterminated string literal"));
            }
            if self.advance() == b'"' { break; }
        }
        Ok(self.source[start..self.pos].to_string())
    }

    fn read_number(&mut self) -> f64 {
        let start = self.pos - 1;
        while !self.is_at_end() && self.peek().is_ascii_digit() {
            self.advance();
        }
        // consume the decimal point only when a digit follows, so a stray
        // trailing `.` is left behind to fail as an unexpected character
        if !self.is_at_end() && self.peek() == b'.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while !self.is_at_end() && self.peek().is_ascii_digit() {
                self.advance();
            }
        }
        self.source[start..self.pos].parse().unwrap_or(0.0)
    }

    fn read_ident(&mut self) -> String {
        let start = self.pos - 1;
        while !self.is_at_end() && (self.peek().is_ascii_alphanumeric() || self.peek() == b'_') {
            self.advance();
        }
        self.source[start..self.pos].to_string()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
