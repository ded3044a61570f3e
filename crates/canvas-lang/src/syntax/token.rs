#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    Number(f64),
    /// Raw literal text including the surrounding quotes. Display-text fields
    /// (`text`, `rainbow`) strip them in the parser; color fields keep them
    /// and the color pipeline strips them at lookup time.
    Str(String),
    Ident(String),

    // Punctuation
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    LBracket,  // [
    RBracket,  // ]
    Semicolon, // ;
    Comma,     // ,
    Eq,        // =
    Arrow,     // ->

    Eof,
}

impl TokenKind {
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Str(_))
    }

    /// Short name used in parse error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_)    => "string",
            Self::Ident(_)  => "identifier",
            Self::LParen    => "`(`",
            Self::RParen    => "`)`",
            Self::LBrace    => "`{`",
            Self::RBrace    => "`}`",
            Self::LBracket  => "`[`",
            Self::RBracket  => "`]`",
            Self::Semicolon => "`;`",
            Self::Comma     => "`,`",
            Self::Eq        => "`=`",
            Self::Arrow     => "`->`",
            Self::Eof       => "end of input",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }
}
