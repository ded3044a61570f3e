use crate::error::{Error, ErrorCode};
use crate::syntax::ast::{Canvas, Command};
use crate::syntax::token::{Token, TokenKind};

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse a whole program: `canvas { command* }`. No recovery — the first
    /// mismatch aborts the parse.
    pub fn parse(mut self) -> Result<Canvas, Error> {
        self.expect_ident()?; // the `canvas` word itself
        self.expect(TokenKind::LBrace)?;

        let commands = self.parse_commands()?;

        self.expect(TokenKind::RBrace)?;
        Ok(Canvas { commands })
    }

    /// Zero or more commands, up to (not including) the closing `}`.
    fn parse_commands(&mut self) -> Result<Vec<Command>, Error> {
        let mut commands = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            commands.push(self.parse_command()?);
        }
        Ok(commands)
    }

    /// Dispatch on the leading identifier's lexeme. The command set is closed;
    /// anything else is fatal.
    fn parse_command(&mut self) -> Result<Command, Error> {
        let tok = self.peek().clone();
        match &tok.kind {
            TokenKind::Ident(word) => match word.as_str() {
                "background" => self.parse_background(),
                "circle"     => self.parse_circle(),
                "rect"       => self.parse_rect(),
                "text"       => self.parse_text(),
                "line"       => self.parse_line(),
                "animate"    => self.parse_animate(),
                "var"        => self.parse_variable(),
                "rainbow"    => self.parse_rainbow(),
                "wait"       => self.parse_wait(),
                "frame"      => self.parse_frame(),
                other => Err(Error::new(ErrorCode::P001, tok.line, tok.column,
                    format!("unknown command `{other}`"))),
            },
            kind => Err(Error::new(ErrorCode::P001, tok.line, tok.column,
                format!("expected a command, found {}", kind.describe()))),
        }
    }

    // ─── Commands ────────────────────────────────────────────────────────────

    /// `background STRING ;`
    fn parse_background(&mut self) -> Result<Command, Error> {
        self.advance(); // background
        let color = self.expect_str()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Command::Background { color })
    }

    /// `circle at ( NUMBER , NUMBER ) radius NUMBER fill STRING ;`
    fn parse_circle(&mut self) -> Result<Command, Error> {
        self.advance(); // circle
        let (x, y) = self.parse_point()?;
        self.expect_ident()?; // radius
        let radius = self.expect_number()?;
        self.expect_ident()?; // fill
        let fill = self.expect_str()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Command::Circle { x, y, radius, fill })
    }

    /// `rect at ( NUMBER , NUMBER ) width NUMBER height NUMBER fill STRING ;`
    fn parse_rect(&mut self) -> Result<Command, Error> {
        self.advance(); // rect
        let (x, y) = self.parse_point()?;
        self.expect_ident()?; // width
        let width = self.expect_number()?;
        self.expect_ident()?; // height
        let height = self.expect_number()?;
        self.expect_ident()?; // fill
        let fill = self.expect_str()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Command::Rect { x, y, width, height, fill })
    }

    /// `text STRING at ( NUMBER , NUMBER ) size NUMBER color STRING ;`
    fn parse_text(&mut self) -> Result<Command, Error> {
        self.advance(); // text
        let text = strip_quotes(&self.expect_str()?);
        let (x, y) = self.parse_point()?;
        self.expect_ident()?; // size
        let size = self.expect_number()? as u32;
        self.expect_ident()?; // color
        let color = self.expect_str()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Command::Text { text, x, y, size, color })
    }

    /// `line from ( NUMBER , NUMBER ) to ( NUMBER , NUMBER ) color STRING ;`
    fn parse_line(&mut self) -> Result<Command, Error> {
        self.advance(); // line
        let (x1, y1) = self.parse_point()?;
        let (x2, y2) = self.parse_point()?;
        self.expect_ident()?; // color
        let color = self.expect_str()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Command::Line { x1, y1, x2, y2, color })
    }

    /// `var IDENT = NUMBER ;`
    fn parse_variable(&mut self) -> Result<Command, Error> {
        self.advance(); // var
        let name = self.expect_ident()?;
        self.expect(TokenKind::Eq)?;
        let value = self.expect_number()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Command::Variable { name, value })
    }

    /// `rainbow STRING at ( NUMBER , NUMBER ) duration NUMBER ;`
    fn parse_rainbow(&mut self) -> Result<Command, Error> {
        self.advance(); // rainbow
        let text = strip_quotes(&self.expect_str()?);
        let (x, y) = self.parse_point()?;
        self.expect_ident()?; // duration
        let duration = self.expect_number()? as u64;
        self.expect(TokenKind::Semicolon)?;
        Ok(Command::Rainbow { text, x, y, duration })
    }

    /// `wait NUMBER ;`
    fn parse_wait(&mut self) -> Result<Command, Error> {
        self.advance(); // wait
        let duration = self.expect_number()? as u64;
        self.expect(TokenKind::Semicolon)?;
        Ok(Command::Wait { duration })
    }

    /// `frame { command* }`
    fn parse_frame(&mut self) -> Result<Command, Error> {
        self.advance(); // frame
        self.expect(TokenKind::LBrace)?;
        let commands = self.parse_commands()?;
        self.expect(TokenKind::RBrace)?;
        Ok(Command::Frame { commands })
    }

    /// `animate { command* } for NUMBER ;`
    fn parse_animate(&mut self) -> Result<Command, Error> {
        self.advance(); // animate
        self.expect(TokenKind::LBrace)?;
        let frames = self.parse_commands()?;
        self.expect(TokenKind::RBrace)?;
        self.expect_ident()?; // for
        let duration = self.expect_number()? as u64;
        self.expect(TokenKind::Semicolon)?;
        Ok(Command::Animate { frames, duration })
    }

    /// `IDENT ( NUMBER , NUMBER )` — the leading identifier is a positional
    /// marker (`at`, `from`, `to`); its lexeme is not validated.
    fn parse_point(&mut self) -> Result<(f64, f64), Error> {
        self.expect_ident()?;
        self.expect(TokenKind::LParen)?;
        let x = self.expect_number()?;
        self.expect(TokenKind::Comma)?;
        let y = self.expect_number()?;
        self.expect(TokenKind::RParen)?;
        Ok((x, y))
    }

    // ─── Token primitives ────────────────────────────────────────────────────

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() { self.pos += 1; }
        tok
    }

    fn check(&self, kind: &TokenKind) -> bool {
        &self.peek().kind == kind
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, Error> {
        if self.check(&kind) {
            Ok(self.advance())
        } else {
            let tok = self.peek();
            Err(Error::new(ErrorCode::P002, tok.line, tok.column,
                format!("expected {}, found {}", kind.describe(), tok.kind.describe())))
        }
    }

    fn expect_ident(&mut self) -> Result<String, Error> {
        match self.peek().kind.clone() {
            TokenKind::Ident(s) => { self.advance(); Ok(s) }
            kind => {
                let tok = self.peek();
                Err(Error::new(ErrorCode::P002, tok.line, tok.column,
                    format!("expected identifier, found {}", kind.describe())))
            }
        }
    }

    fn expect_number(&mut self) -> Result<f64, Error> {
        match self.peek().kind.clone() {
            TokenKind::Number(n) => { self.advance(); Ok(n) }
            kind => {
                let tok = self.peek();
                Err(Error::new(ErrorCode::P002, tok.line, tok.column,
                    format!("expected number, found {}", kind.describe())))
            }
        }
    }

    /// Raw string literal, quotes still attached.
    fn expect_str(&mut self) -> Result<String, Error> {
        match self.peek().kind.clone() {
            TokenKind::Str(s) => { self.advance(); Ok(s) }
            kind => {
                let tok = self.peek();
                Err(Error::new(ErrorCode::P002, tok.line, tok.column,
                    format!("expected string, found {}", kind.describe())))
            }
        }
    }
}

/// Strip the surrounding quotes from a raw string literal.
fn strip_quotes(raw: &str) -> String {
    raw.trim_matches('"').to_string()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::lexer::Lexer;

    fn parse(src: &str) -> Canvas {
        let tokens = Lexer::new(src).tokenize().unwrap();
        Parser::new(tokens).parse().unwrap_or_else(|e| panic!("parse failed: {e}"))
    }

    fn parse_err(src: &str) -> Error {
        let tokens = Lexer::new(src).tokenize().unwrap();
        Parser::new(tokens).parse().unwrap_err()
    }

    #[test]
    fn empty_canvas() {
        assert_eq!(parse("canvas { }"), Canvas { commands: vec![] });
    }

    #[test]
    fn background_and_circle_round_trip() {
        // color fields keep their quotes; that is the contract the color
        // pipeline relies on
        let ast = parse(r#"canvas { background "red"; circle at(0,0) radius 3 fill "blue"; }"#);
        assert_eq!(ast, Canvas {
            commands: vec![
                Command::Background { color: "\"red\"".into() },
                Command::Circle { x: 0.0, y: 0.0, radius: 3.0, fill: "\"blue\"".into() },
            ],
        });
    }

    #[test]
    fn rect_command() {
        let ast = parse(r#"canvas { rect at(1, 2) width 10 height 4 fill "teal"; }"#);
        assert_eq!(ast.commands, vec![
            Command::Rect { x: 1.0, y: 2.0, width: 10.0, height: 4.0, fill: "\"teal\"".into() },
        ]);
    }

    #[test]
    fn text_strips_quotes_from_display_text_only() {
        let ast = parse(r#"canvas { text "hello" at(0, 0) size 20 color "white"; }"#);
        assert_eq!(ast.commands, vec![
            Command::Text { text: "hello".into(), x: 0.0, y: 0.0, size: 20, color: "\"white\"".into() },
        ]);
    }

    #[test]
    fn text_with_accented_characters_parses_intact() {
        let ast = parse(r#"canvas { text "café" at(0, 0) size 20 color "white"; }"#);
        assert_eq!(ast.commands, vec![
            Command::Text { text: "café".into(), x: 0.0, y: 0.0, size: 20, color: "\"white\"".into() },
        ]);
    }

    #[test]
    fn line_command() {
        let ast = parse(r#"canvas { line from(0, 0) to(5, 3) color "gray"; }"#);
        assert_eq!(ast.commands, vec![
            Command::Line { x1: 0.0, y1: 0.0, x2: 5.0, y2: 3.0, color: "\"gray\"".into() },
        ]);
    }

    #[test]
    fn variable_and_wait() {
        let ast = parse("canvas { var speed = 2.5; wait 100; }");
        assert_eq!(ast.commands, vec![
            Command::Variable { name: "speed".into(), value: 2.5 },
            Command::Wait { duration: 100 },
        ]);
    }

    #[test]
    fn rainbow_command() {
        let ast = parse(r#"canvas { rainbow "wow" at(0, 0) duration 50; }"#);
        assert_eq!(ast.commands, vec![
            Command::Rainbow { text: "wow".into(), x: 0.0, y: 0.0, duration: 50 },
        ]);
    }

    #[test]
    fn frame_block() {
        let ast = parse(r#"canvas { frame { circle at(0,0) radius 1 fill "red"; } }"#);
        assert_eq!(ast.commands, vec![
            Command::Frame {
                commands: vec![Command::Circle { x: 0.0, y: 0.0, radius: 1.0, fill: "\"red\"".into() }],
            },
        ]);
    }

    #[test]
    fn animate_block() {
        let ast = parse(r#"canvas {
            animate {
                frame { rect at(0,0) width 2 height 2 fill "red"; }
                frame { rect at(0,0) width 2 height 2 fill "blue"; }
            } for 1000;
        }"#);
        match &ast.commands[0] {
            Command::Animate { frames, duration } => {
                assert_eq!(frames.len(), 2);
                assert_eq!(*duration, 1000);
            }
            other => panic!("expected animate, got {other:?}"),
        }
    }

    #[test]
    fn positional_markers_are_not_validated() {
        // any identifier is accepted where `at`/`width`/`height` sit
        let ast = parse(r#"canvas { rect anywhere(0,0) w 2 h 3 f "red"; }"#);
        assert_eq!(ast.commands, vec![
            Command::Rect { x: 0.0, y: 0.0, width: 2.0, height: 3.0, fill: "\"red\"".into() },
        ]);
    }

    #[test]
    fn missing_semicolon() {
        let err = parse_err("canvas { wait 100 }");
        assert_eq!(err.code, ErrorCode::P002);
        assert!(err.message.contains("expected `;`, found `}`"), "message: {}", err.message);
    }

    #[test]
    fn unknown_command() {
        let err = parse_err("canvas { triangle at(0,0); }");
        assert_eq!(err.code, ErrorCode::P001);
        assert!(err.message.contains("triangle"), "message: {}", err.message);
    }

    #[test]
    fn command_position_holds_non_identifier() {
        let err = parse_err("canvas { 42; }");
        assert_eq!(err.code, ErrorCode::P001);
    }

    #[test]
    fn unclosed_canvas_reports_eof() {
        let err = parse_err(r#"canvas { background "red";"#);
        assert_eq!(err.code, ErrorCode::P002);
        assert!(err.message.contains("end of input"), "message: {}", err.message);
    }

    #[test]
    fn parse_is_deterministic() {
        let src = r#"canvas { background "red"; circle at(0,0) radius 3 fill "blue"; }"#;
        assert_eq!(parse(src), parse(src));
    }
}
