//! Typed failures for numeric literal parsing.

use std::fmt;

use numlex_util::DiagnosticCode;
use thiserror::Error;

use super::kind::NumeralKind;

/// Result type for numeric literal operations.
pub type Result<T> = std::result::Result<T, NumberError>;

/// A numeric literal that could not be turned into a value.
///
/// A successful parse and a `NumberError` are mutually exclusive; no
/// partial value is ever returned alongside an error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NumberError {
    /// The literal is malformed.
    #[error("invalid numeric literal `{literal}`: {reason}")]
    InvalidSyntax {
        /// The full literal as written
        literal: String,
        /// What is wrong with it
        reason: SyntaxError,
    },

    /// The literal is well-formed but its value does not fit the target.
    #[error("numeric literal `{literal}` does not fit in {target}")]
    Overflow {
        /// The full literal as written
        literal: String,
        /// The type the value was being computed in
        target: NumericTarget,
    },

    /// A caller violated a precondition of the parsing API.
    ///
    /// Never produced from user input through the public parse functions.
    #[error("internal invariant violated: {message}")]
    InternalInvariant {
        /// Description of the violated precondition
        message: String,
    },
}

impl NumberError {
    pub(crate) fn syntax(literal: &str, reason: SyntaxError) -> Self {
        NumberError::InvalidSyntax {
            literal: literal.to_string(),
            reason,
        }
    }

    pub(crate) fn overflow(literal: &str, target: NumericTarget) -> Self {
        NumberError::Overflow {
            literal: literal.to_string(),
            target,
        }
    }

    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        NumberError::InternalInvariant {
            message: message.into(),
        }
    }

    /// Returns the diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            NumberError::InvalidSyntax { .. } => DiagnosticCode::E_LEXER_INVALID_NUMBER,
            NumberError::Overflow { .. } => DiagnosticCode::E_LEXER_NUMBER_OVERFLOW,
            NumberError::InternalInvariant { .. } => DiagnosticCode::E_INTERNAL_INVARIANT,
        }
    }

    /// Returns the offending literal, if the error is about one.
    pub fn literal(&self) -> Option<&str> {
        match self {
            NumberError::InvalidSyntax { literal, .. } | NumberError::Overflow { literal, .. } => {
                Some(literal)
            },
            NumberError::InternalInvariant { .. } => None,
        }
    }

    /// Returns the syntax reason for `InvalidSyntax` errors.
    pub fn syntax_error(&self) -> Option<&SyntaxError> {
        match self {
            NumberError::InvalidSyntax { reason, .. } => Some(reason),
            _ => None,
        }
    }

    /// Byte offset of the offending character within the literal, if known.
    pub fn offset(&self) -> Option<usize> {
        self.syntax_error().and_then(SyntaxError::offset)
    }

    /// Returns true for `InvalidSyntax`.
    pub fn is_invalid_syntax(&self) -> bool {
        matches!(self, NumberError::InvalidSyntax { .. })
    }

    /// Returns true for `Overflow`.
    pub fn is_overflow(&self) -> bool {
        matches!(self, NumberError::Overflow { .. })
    }

    /// Returns true for `InternalInvariant`.
    pub fn is_internal(&self) -> bool {
        matches!(self, NumberError::InternalInvariant { .. })
    }

    /// A suggestion for fixing the literal, where one applies.
    pub fn help(&self) -> Option<String> {
        match self {
            NumberError::InvalidSyntax { reason, .. } => reason.help().map(str::to_string),
            NumberError::Overflow { target, .. } => Some(target.limit_help()),
            NumberError::InternalInvariant { .. } => None,
        }
    }
}

/// The type a literal's value was computed in when it overflowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericTarget {
    /// Unsigned 64-bit accumulator
    U64,
    /// Signed 64-bit integer
    I64,
    /// Finite 64-bit float
    F64,
}

impl NumericTarget {
    fn limit_help(self) -> String {
        match self {
            NumericTarget::U64 => format!("the largest accepted value is {}", u64::MAX),
            NumericTarget::I64 => format!(
                "signed literals must lie between {} and {}",
                i64::MIN,
                i64::MAX
            ),
            NumericTarget::F64 => format!("the largest finite value is {:e}", f64::MAX),
        }
    }
}

impl fmt::Display for NumericTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NumericTarget::U64 => "u64",
            NumericTarget::I64 => "i64",
            NumericTarget::F64 => "f64",
        })
    }
}

/// Why a literal is malformed.
///
/// Offsets are byte offsets into the full literal, sign and prefix included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// Nothing to parse.
    #[error("literal is empty")]
    Empty,

    /// A radix prefix with nothing after it, such as `0x`.
    #[error("{kind} prefix is not followed by any digits")]
    PrefixOnly {
        /// The kind the prefix announced
        kind: NumeralKind,
    },

    /// A character outside the radix's alphabet.
    #[error("invalid {kind} digit {found:?} at offset {offset}")]
    InvalidDigit {
        /// The rejected character
        found: char,
        /// Where it occurs
        offset: usize,
        /// The radix it was checked against
        kind: NumeralKind,
    },

    /// A digit span without a single digit, such as a lone sign.
    #[error("literal contains no digits")]
    NoDigits,

    /// A separator that is not between two digits of the same span.
    #[error("misplaced digit separator at offset {offset}")]
    MisplacedSeparator {
        /// Where the separator occurs
        offset: usize,
    },

    /// A sign where none is accepted.
    #[error("unexpected sign at offset {offset}")]
    UnexpectedSign {
        /// Where the sign occurs
        offset: usize,
    },

    /// A float literal in a radix that has no float form.
    #[error("{kind} literals cannot have a fraction or exponent")]
    FloatRadix {
        /// The offending kind
        kind: NumeralKind,
    },

    /// A second `.`.
    #[error("too many '.' (second one at offset {offset})")]
    TooManyDots {
        /// Where the second `.` occurs
        offset: usize,
    },

    /// A `.` inside the exponent.
    #[error("misplaced '.' in exponent at offset {offset}")]
    MisplacedDot {
        /// Where the `.` occurs
        offset: usize,
    },

    /// A second exponent marker.
    #[error("too many exponent markers (second one at offset {offset})")]
    TooManyExponents {
        /// Where the second marker occurs
        offset: usize,
    },

    /// An exponent marker with no digits before it in its section.
    #[error("exponent at offset {offset} has no mantissa digits before it")]
    ExponentWithoutMantissa {
        /// Where the marker occurs
        offset: usize,
    },

    /// An exponent marker with no digits after it.
    #[error("exponent at offset {offset} has no digits")]
    ExponentWithoutDigits {
        /// Where the marker occurs
        offset: usize,
    },

    /// The literal ends on something other than a digit.
    #[error("literal ends with {found:?} instead of a digit")]
    TrailingNonDigit {
        /// The final character
        found: char,
        /// Where it occurs
        offset: usize,
    },
}

impl SyntaxError {
    /// Byte offset of the offending character, when the error has one.
    pub fn offset(&self) -> Option<usize> {
        match *self {
            SyntaxError::InvalidDigit { offset, .. }
            | SyntaxError::MisplacedSeparator { offset }
            | SyntaxError::UnexpectedSign { offset }
            | SyntaxError::TooManyDots { offset }
            | SyntaxError::MisplacedDot { offset }
            | SyntaxError::TooManyExponents { offset }
            | SyntaxError::ExponentWithoutMantissa { offset }
            | SyntaxError::ExponentWithoutDigits { offset }
            | SyntaxError::TrailingNonDigit { offset, .. } => Some(offset),
            SyntaxError::Empty
            | SyntaxError::PrefixOnly { .. }
            | SyntaxError::NoDigits
            | SyntaxError::FloatRadix { .. } => None,
        }
    }

    /// A short label for the caret under the offending character.
    pub fn label(&self) -> String {
        match self {
            SyntaxError::InvalidDigit { kind, .. } => format!("not a valid {} digit", kind),
            SyntaxError::MisplacedSeparator { .. } => "separator not between digits".to_string(),
            SyntaxError::UnexpectedSign { .. } => "sign not allowed here".to_string(),
            SyntaxError::TooManyDots { .. } => "second '.'".to_string(),
            SyntaxError::MisplacedDot { .. } => "'.' inside the exponent".to_string(),
            SyntaxError::TooManyExponents { .. } => "second exponent marker".to_string(),
            SyntaxError::ExponentWithoutMantissa { .. } => "nothing before this exponent".to_string(),
            SyntaxError::ExponentWithoutDigits { .. } => "exponent needs digits".to_string(),
            SyntaxError::TrailingNonDigit { .. } => "expected a digit".to_string(),
            other => other.to_string(),
        }
    }

    /// A suggestion for fixing the literal, where one applies.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SyntaxError::PrefixOnly { .. } => Some("add at least one digit after the prefix"),
            SyntaxError::MisplacedSeparator { .. } => {
                Some("a digit separator must sit between two digits")
            },
            SyntaxError::FloatRadix { .. } => {
                Some("floating-point literals must be decimal or hexadecimal")
            },
            SyntaxError::ExponentWithoutDigits { .. } => {
                Some("write the exponent as digits, optionally signed: `1e-3`, `0x1p4`")
            },
            SyntaxError::TrailingNonDigit { found: '.', .. } => {
                Some("add a digit after '.', for example `5.0`")
            },
            _ => None,
        }
    }
}
