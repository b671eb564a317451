//! Overflow-checked digit accumulation.
//!
//! [`accumulate`] turns a digit span into a `u64` under one radix. It is the
//! building block for integer literals and for each section (integer part,
//! fraction, exponent) of a float literal.

use super::alphabet::DIGIT_SEPARATOR;
use super::error::{NumberError, NumericTarget, Result, SyntaxError};
use super::kind::NumeralKind;

/// A range of digits inside a literal.
///
/// The span keeps the full literal around so that errors can quote it and
/// report offsets relative to its start.
///
/// # Example
///
/// ```
/// use numlex_lex::number::LiteralSpan;
///
/// let span = LiteralSpan::new("0x1F", 2, 4).unwrap();
/// assert_eq!(span.digits(), "1F");
/// assert_eq!(span.literal(), "0x1F");
///
/// assert!(LiteralSpan::new("0x1F", 2, 9).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiteralSpan<'a> {
    literal: &'a str,
    start: usize,
    end: usize,
}

impl<'a> LiteralSpan<'a> {
    /// Creates a span over `literal[start..end]`.
    ///
    /// # Errors
    ///
    /// [`NumberError::InternalInvariant`] if the bounds are reversed, exceed
    /// the literal, or split a character.
    pub fn new(literal: &'a str, start: usize, end: usize) -> Result<Self> {
        if start > end || end > literal.len() {
            return Err(NumberError::invariant(format!(
                "span {}..{} is out of bounds for literal `{}` of length {}",
                start,
                end,
                literal,
                literal.len()
            )));
        }
        if !literal.is_char_boundary(start) || !literal.is_char_boundary(end) {
            return Err(NumberError::invariant(format!(
                "span {}..{} splits a character of literal `{}`",
                start, end, literal
            )));
        }
        Ok(Self {
            literal,
            start,
            end,
        })
    }

    /// The full literal the span points into.
    #[inline]
    pub fn literal(&self) -> &'a str {
        self.literal
    }

    /// The characters inside the span.
    #[inline]
    pub fn digits(&self) -> &'a str {
        &self.literal[self.start..self.end]
    }

    /// Byte offset of the first character.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last character.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns true if the span covers no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Outcome of accumulating a span under a digit cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Accumulated {
    /// Value of the digits that contributed
    pub value: u64,
    /// Number of digits that contributed
    pub digits: u32,
    /// True if digits beyond the cap were dropped
    pub truncated: bool,
}

/// Accumulates the digits of `span` under `kind` into a `u64`.
///
/// Digit separators are skipped. Every other character must belong to the
/// kind's alphabet.
///
/// # Errors
///
/// - `InvalidSyntax` naming the first character outside the alphabet, a
///   separator that does not sit between two digits, or a span without any
///   digit
/// - `Overflow` if the value exceeds `u64::MAX`
///
/// # Example
///
/// ```
/// use numlex_lex::number::{accumulate, LiteralSpan, NumeralKind};
///
/// let span = LiteralSpan::new("0b1010'1010", 2, 11).unwrap();
/// assert_eq!(accumulate(&span, NumeralKind::Binary).unwrap(), 0xAA);
/// ```
pub fn accumulate(span: &LiteralSpan<'_>, kind: NumeralKind) -> Result<u64> {
    accumulate_capped(span, kind, None).map(|acc| acc.value)
}

/// Accumulates `span`, letting at most `cap` digits contribute.
///
/// Digits past the cap are still validated.
pub(crate) fn accumulate_capped(
    span: &LiteralSpan<'_>,
    kind: NumeralKind,
    cap: Option<u32>,
) -> Result<Accumulated> {
    let alphabet = kind.alphabet();
    let digits = span.digits();
    let mut acc = Accumulated {
        value: 0,
        digits: 0,
        truncated: false,
    };
    let mut seen_digit = false;
    let mut prev_is_digit = false;

    for (i, c) in digits.char_indices() {
        let offset = span.start() + i;

        if c == DIGIT_SEPARATOR {
            let next_is_digit = digits[i + c.len_utf8()..]
                .chars()
                .next()
                .is_some_and(|next| alphabet.is_digit(next));
            if !prev_is_digit || !next_is_digit {
                return Err(NumberError::syntax(
                    span.literal(),
                    SyntaxError::MisplacedSeparator { offset },
                ));
            }
            prev_is_digit = false;
            continue;
        }

        let digit = alphabet.digit_value(c).ok_or_else(|| {
            NumberError::syntax(
                span.literal(),
                SyntaxError::InvalidDigit {
                    found: c,
                    offset,
                    kind,
                },
            )
        })?;
        seen_digit = true;
        prev_is_digit = true;

        if cap.is_some_and(|cap| acc.digits >= cap) {
            acc.truncated = true;
            continue;
        }
        acc.value = alphabet
            .push_digit(acc.value, digit)
            .ok_or_else(|| NumberError::overflow(span.literal(), NumericTarget::U64))?;
        acc.digits += 1;
    }

    if !seen_digit {
        return Err(NumberError::syntax(span.literal(), SyntaxError::NoDigits));
    }
    Ok(acc)
}
