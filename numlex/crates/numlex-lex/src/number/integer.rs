//! Integer literal parsing.

use std::fmt;

use tracing::debug;

use super::accumulate::{accumulate, LiteralSpan};
use super::error::{NumberError, NumericTarget, Result, SyntaxError};
use super::kind::NumeralKind;

/// The value of an integer literal.
///
/// Unsigned parses yield the full `u64` range; signed parses yield an `i64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntegerValue {
    /// Result of a parse that permits no sign
    Unsigned(u64),
    /// Result of a parse that permits a leading `+` or `-`
    Signed(i64),
}

impl IntegerValue {
    /// Returns the value as `u64` if it is representable.
    pub fn as_u64(self) -> Option<u64> {
        match self {
            IntegerValue::Unsigned(value) => Some(value),
            IntegerValue::Signed(value) => u64::try_from(value).ok(),
        }
    }

    /// Returns the value as `i64` if it is representable.
    pub fn as_i64(self) -> Option<i64> {
        match self {
            IntegerValue::Unsigned(value) => i64::try_from(value).ok(),
            IntegerValue::Signed(value) => Some(value),
        }
    }

    /// Returns the value converted to the nearest `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            IntegerValue::Unsigned(value) => value as f64,
            IntegerValue::Signed(value) => value as f64,
        }
    }

    /// Returns true for values below zero.
    pub fn is_negative(self) -> bool {
        matches!(self, IntegerValue::Signed(value) if value < 0)
    }
}

impl fmt::Display for IntegerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegerValue::Unsigned(value) => write!(f, "{}", value),
            IntegerValue::Signed(value) => write!(f, "{}", value),
        }
    }
}

/// Splits an optional leading sign off `text`.
///
/// Returns whether the sign is `-` and the byte offset after it.
#[inline]
pub(crate) fn split_sign(text: &str) -> (Option<bool>, usize) {
    match text.as_bytes().first() {
        Some(b'+') => (Some(false), 1),
        Some(b'-') => (Some(true), 1),
        _ => (None, 0),
    }
}

/// Applies a sign to a magnitude, or returns `None` outside the `i64` range.
///
/// `i64::MIN` is reachable: its magnitude `2^63` exceeds `i64::MAX`.
#[inline]
pub(crate) fn apply_sign(negative: bool, magnitude: u64) -> Option<i64> {
    if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}

/// Parses an integer literal in any of the four radices.
///
/// With `expect_sign == false` the literal may not carry a sign and the
/// result is [`IntegerValue::Unsigned`]. With `expect_sign == true` an
/// optional `+` or `-` may precede the prefix and the result is
/// [`IntegerValue::Signed`].
///
/// # Errors
///
/// - `InvalidSyntax` for empty, prefix-only or sign-only literals, an
///   unexpected sign, characters outside the radix alphabet and misplaced
///   digit separators
/// - `Overflow` when the value does not fit `u64` (unsigned) or `i64`
///   (signed)
///
/// # Example
///
/// ```
/// use numlex_lex::number::{parse_integer, IntegerValue};
///
/// assert_eq!(parse_integer("0xFF", false).unwrap(), IntegerValue::Unsigned(255));
/// assert_eq!(parse_integer("-0b101", true).unwrap(), IntegerValue::Signed(-5));
/// assert_eq!(parse_integer("1'000", false).unwrap(), IntegerValue::Unsigned(1000));
/// assert!(parse_integer("-1", false).is_err());
/// ```
pub fn parse_integer(text: &str, expect_sign: bool) -> Result<IntegerValue> {
    integer_value(text, expect_sign).inspect_err(|err| {
        debug!(literal = text, error = %err, "rejected integer literal");
    })
}

fn integer_value(text: &str, expect_sign: bool) -> Result<IntegerValue> {
    let (sign, body_start) = split_sign(text);
    if sign.is_some() && !expect_sign {
        return Err(NumberError::syntax(
            text,
            SyntaxError::UnexpectedSign { offset: 0 },
        ));
    }

    let (kind, digits_start) = NumeralKind::detect_at(text, body_start)?;
    let span = LiteralSpan::new(text, digits_start, text.len())?;
    let magnitude = accumulate(&span, kind)?;

    if !expect_sign {
        return Ok(IntegerValue::Unsigned(magnitude));
    }
    apply_sign(sign.unwrap_or(false), magnitude)
        .map(IntegerValue::Signed)
        .ok_or_else(|| NumberError::overflow(text, NumericTarget::I64))
}

/// Parses an unsigned integer literal into a `u64`.
///
/// ```
/// use numlex_lex::number::parse_u64;
///
/// assert_eq!(parse_u64("0o377").unwrap(), 255);
/// assert!(parse_u64("0x1'0000'0000'0000'0000").is_err());
/// ```
pub fn parse_u64(text: &str) -> Result<u64> {
    parse_integer(text, false)?
        .as_u64()
        .ok_or_else(|| NumberError::overflow(text, NumericTarget::U64))
}

/// Parses an optionally signed integer literal into an `i64`.
///
/// ```
/// use numlex_lex::number::parse_i64;
///
/// assert_eq!(parse_i64("-0x80").unwrap(), -128);
/// assert_eq!(parse_i64("-9223372036854775808").unwrap(), i64::MIN);
/// assert!(parse_i64("9223372036854775808").is_err());
/// ```
pub fn parse_i64(text: &str) -> Result<i64> {
    parse_integer(text, true)?
        .as_i64()
        .ok_or_else(|| NumberError::overflow(text, NumericTarget::I64))
}
