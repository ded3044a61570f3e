use thiserror::Error;

/// Error codes prefixed by phase: L = lexer, P = parser.
/// Both phases are fatal and unrecoverable; no partial result is salvaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexer
    L001, // unexpected character
    L002, // unterminated string literal

    // Parser
    P001, // unexpected token / unknown command
    P002, // missing expected token
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L001 => "L001",
            Self::L002 => "L002",
            Self::P001 => "P001",
            Self::P002 => "P002",
        }
    }

    pub fn is_lex(&self) -> bool {
        matches!(self, Self::L001 | Self::L002)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error)]
#[error("[{code}] {line}:{column}: {message}")]
pub struct Error {
    pub code: ErrorCode,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl Error {
    pub fn new(code: ErrorCode, line: usize, column: usize, message: impl Into<String>) -> Self {
        Self { code, line, column, message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let err = Error::new(ErrorCode::P002, 3, 7, "expected `;`, found `}`");
        assert_eq!(err.to_string(), "[P002] 3:7: expected `;`, found `}`");
    }

    #[test]
    fn phase_of_codes() {
        assert!(ErrorCode::L001.is_lex());
        assert!(ErrorCode::L002.is_lex());
        assert!(!ErrorCode::P001.is_lex());
        assert!(!ErrorCode::P002.is_lex());
    }
}
