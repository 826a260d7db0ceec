//! Literal parse and render errors

use thiserror::Error;

/// Result type for literal operations
pub type LiteralResult<T> = Result<T, LiteralError>;

/// Errors raised while parsing, rendering or converting literals.
///
/// Parse errors carry the byte offset into the input where the problem was
/// detected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LiteralError {
    #[error("unexpected end of input at byte {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("unexpected character {found:?} at byte {offset}")]
    UnexpectedChar { found: char, offset: usize },

    #[error("invalid number literal {text:?} at byte {offset}")]
    InvalidNumber { text: String, offset: usize },

    #[error("integer literal {text:?} at byte {offset} does not fit into 64 bits")]
    IntegerOverflow { text: String, offset: usize },

    #[error("invalid escape sequence at byte {offset}: {reason}")]
    InvalidEscape { offset: usize, reason: &'static str },

    #[error("unsupported {what} at byte {offset}")]
    Unsupported { what: String, offset: usize },

    #[error("literal nested deeper than {limit} levels at byte {offset}")]
    TooDeep { limit: usize, offset: usize },

    #[error("trailing input after literal at byte {offset}")]
    TrailingInput { offset: usize },

    #[error("cannot render non-finite float {0}")]
    NonFiniteFloat(f64),

    #[error("dict key {0} is not a string and cannot become a JSON object key")]
    NonStringKey(String),

    #[error("number {0} is outside the 64-bit signed integer range")]
    NumberOutOfRange(String),
}

impl LiteralError {
    /// Byte offset of a parse error, if this error came from the parser.
    pub fn offset(&self) -> Option<usize> {
        match self {
            LiteralError::UnexpectedEnd { offset }
            | LiteralError::UnexpectedChar { offset, .. }
            | LiteralError::InvalidNumber { offset, .. }
            | LiteralError::IntegerOverflow { offset, .. }
            | LiteralError::InvalidEscape { offset, .. }
            | LiteralError::Unsupported { offset, .. }
            | LiteralError::TooDeep { offset, .. }
            | LiteralError::TrailingInput { offset } => Some(*offset),
            LiteralError::NonFiniteFloat(_)
            | LiteralError::NonStringKey(_)
            | LiteralError::NumberOutOfRange(_) => None,
        }
    }
}
