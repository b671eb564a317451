//! Token definitions.

use std::fmt;

use crate::number::IntegerValue;

/// A token produced by the [`Lexer`](crate::Lexer).
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// An integer literal, e.g. `42`, `-0x2A`, `0b1010`
    Integer(IntegerValue),
    /// A float literal, e.g. `1.5`, `2e-3`, `0x1.8p1`
    Float(f64),
    /// Text that is not a valid literal; a diagnostic has been emitted
    Invalid(String),
    /// End of input
    Eof,
}

impl Token {
    /// Returns true for `Integer` and `Float` tokens.
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Integer(_) | Token::Float(_))
    }

    /// Returns true for `Invalid` tokens.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Token::Invalid(_))
    }

    /// Returns true for the end-of-input marker.
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }

    /// Short name of the token category.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Integer(_) => "integer",
            Token::Float(_) => "float",
            Token::Invalid(_) => "invalid",
            Token::Eof => "eof",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Integer(value) => write!(f, "{}", value),
            Token::Float(value) => write!(f, "{:?}", value),
            Token::Invalid(text) => write!(f, "<invalid `{}`>", text),
            Token::Eof => f.write_str("<eof>"),
        }
    }
}
