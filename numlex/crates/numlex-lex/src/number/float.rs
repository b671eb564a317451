//! Floating-point literal parsing.
//!
//! A float literal is split into up to three sections, each accumulated as
//! an integer:
//!
//! ```text
//!   0x 1F . 8    p -4
//!      ^^   ^      ^^
//!      |    |      exponent (always decimal digits, optional sign)
//!      |    fraction (radix digits, capped)
//!      integer part (radix digits, may be empty before '.')
//! ```
//!
//! The value is `(integer + fraction / radix^digits) * base^exponent`, with
//! radix 10 and base 10 for decimal literals and radix 16 and base 2 for
//! hexadecimal ones.

use std::ops::Range;

use tracing::debug;

use super::accumulate::{accumulate, accumulate_capped, LiteralSpan};
use super::error::{NumberError, NumericTarget, Result, SyntaxError};
use super::integer::{apply_sign, split_sign};
use super::kind::NumeralKind;

/// A parsed floating-point literal.
///
/// Keeps the section values alongside the assembled `f64`, so callers can
/// see how the value was formed and whether fraction digits were dropped.
///
/// # Example
///
/// ```
/// use numlex_lex::number::{FloatLiteral, NumeralKind};
///
/// let lit = FloatLiteral::parse("0x1.8p1").unwrap();
/// assert_eq!(lit.kind, NumeralKind::Hex);
/// assert_eq!(lit.integer_part, 1);
/// assert_eq!(lit.fraction_part, 8);
/// assert_eq!(lit.fraction_digits, 1);
/// assert_eq!(lit.exponent, 1);
/// assert_eq!(lit.value, 3.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatLiteral {
    /// Decimal or hexadecimal
    pub kind: NumeralKind,
    /// Digits before the `.` (0 when absent)
    pub integer_part: u64,
    /// Contributing digits after the `.` (0 when absent)
    pub fraction_part: u64,
    /// How many digits make up `fraction_part`
    pub fraction_digits: u32,
    /// Signed exponent (0 when absent)
    pub exponent: i64,
    /// True if fraction digits beyond the precision cap were ignored.
    ///
    /// The cap is 18 digits for decimal literals and 16 for hexadecimal
    /// ones (see [`NumeralKind::max_fraction_digits`]).
    pub truncated: bool,
    /// The assembled value
    pub value: f64,
}

/// Section boundaries of a float literal, as byte ranges into it.
#[derive(Debug)]
struct Sections {
    integer: Range<usize>,
    fraction: Option<Range<usize>>,
    exponent: Option<ExponentSection>,
}

#[derive(Debug)]
struct ExponentSection {
    negative: bool,
    digits: Range<usize>,
}

impl FloatLiteral {
    /// Parses a decimal or hexadecimal float literal.
    ///
    /// Literals without `.` or exponent are accepted and yield an integral
    /// value. A leading `.` is allowed; a trailing one is not. No sign is
    /// accepted before the literal.
    ///
    /// # Errors
    ///
    /// - `InvalidSyntax` for malformed literals, including octal and binary
    ///   ones
    /// - `Overflow` if a section overflows its accumulator or the assembled
    ///   value is not finite
    pub fn parse(text: &str) -> Result<Self> {
        float_literal(text).inspect_err(|err| {
            debug!(literal = text, error = %err, "rejected float literal");
        })
    }

    /// Value of the integer part plus fraction, before the exponent.
    pub fn mantissa(&self) -> f64 {
        mantissa(self.kind, self.integer_part, self.fraction_part, self.fraction_digits)
    }
}

/// Parses a float literal into an `f64`.
///
/// ```
/// use numlex_lex::number::parse_float;
///
/// assert_eq!(parse_float("1.5").unwrap(), 1.5);
/// assert_eq!(parse_float(".5").unwrap(), 0.5);
/// assert_eq!(parse_float("0x1.8p1").unwrap(), 3.0);
/// assert_eq!(parse_float("25e-1").unwrap(), 2.5);
/// assert!(parse_float("5.").is_err());
/// assert!(parse_float("0b1.1").is_err());
/// ```
pub fn parse_float(text: &str) -> Result<f64> {
    FloatLiteral::parse(text).map(|lit| lit.value)
}

/// Whether `text` is shaped like a float: it has a `.` or an exponent
/// marker of its radix after the prefix. A leading sign is skipped.
///
/// Only the shape is inspected; the literal may still be invalid.
///
/// ```
/// use numlex_lex::number::looks_like_float;
///
/// assert!(looks_like_float("1e5"));
/// assert!(looks_like_float("-0o1.5"));
/// assert!(!looks_like_float("0x1e5"));
/// assert!(!looks_like_float("42"));
/// ```
pub fn looks_like_float(text: &str) -> bool {
    let body = &text[split_sign(text).1..];
    let kind = NumeralKind::classify(body);
    body.get(kind.prefix().len()..).is_some_and(|digits| {
        digits.contains('.') || digits.chars().any(|c| kind.is_exponent_marker(c))
    })
}

fn float_literal(text: &str) -> Result<FloatLiteral> {
    if split_sign(text).0.is_some() {
        return Err(NumberError::syntax(
            text,
            SyntaxError::UnexpectedSign { offset: 0 },
        ));
    }

    let (kind, start) = NumeralKind::detect(text)?;
    if !kind.supports_float() {
        return Err(NumberError::syntax(text, SyntaxError::FloatRadix { kind }));
    }

    let sections = split_sections(text, kind, start)?;

    let integer_part = if sections.integer.is_empty() {
        0
    } else {
        accumulate(&section_span(text, &sections.integer)?, kind)?
    };

    let (fraction_part, fraction_digits, truncated) = match &sections.fraction {
        Some(range) => {
            let cap = kind.max_fraction_digits();
            let acc = accumulate_capped(&section_span(text, range)?, kind, Some(cap))?;
            (acc.value, acc.digits, acc.truncated)
        },
        None => (0, 0, false),
    };

    let exponent = match &sections.exponent {
        Some(section) => {
            let magnitude =
                accumulate(&section_span(text, &section.digits)?, NumeralKind::Decimal)?;
            apply_sign(section.negative, magnitude)
                .ok_or_else(|| NumberError::overflow(text, NumericTarget::I64))?
        },
        None => 0,
    };

    let value = assemble(kind, integer_part, fraction_part, fraction_digits, exponent)?;
    if !value.is_finite() {
        return Err(NumberError::overflow(text, NumericTarget::F64));
    }

    Ok(FloatLiteral {
        kind,
        integer_part,
        fraction_part,
        fraction_digits,
        exponent,
        truncated,
        value,
    })
}

fn section_span<'a>(text: &'a str, range: &Range<usize>) -> Result<LiteralSpan<'a>> {
    LiteralSpan::new(text, range.start, range.end)
}

/// Finds the section boundaries of `text[start..]`.
///
/// Checks the placement of `.`, the exponent marker and the exponent sign.
/// Digits and separators inside each section are left to the accumulator.
fn split_sections(text: &str, kind: NumeralKind, start: usize) -> Result<Sections> {
    let mut dot: Option<usize> = None;
    let mut marker: Option<(usize, bool, usize)> = None;
    let mut chars = text[start..].char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let offset = start + i;

        if c == '.' {
            if marker.is_some() {
                return Err(NumberError::syntax(text, SyntaxError::MisplacedDot { offset }));
            }
            if dot.is_some() {
                return Err(NumberError::syntax(text, SyntaxError::TooManyDots { offset }));
            }
            dot = Some(offset);
        } else if kind.is_exponent_marker(c) {
            if marker.is_some() {
                return Err(NumberError::syntax(
                    text,
                    SyntaxError::TooManyExponents { offset },
                ));
            }
            let section_start = dot.map_or(start, |dot| dot + 1);
            if section_start == offset {
                return Err(NumberError::syntax(
                    text,
                    SyntaxError::ExponentWithoutMantissa { offset },
                ));
            }

            let (negative, sign_len) = match chars.peek() {
                Some(&(_, '-')) => (true, 1),
                Some(&(_, '+')) => (false, 1),
                _ => (false, 0),
            };
            if sign_len > 0 {
                chars.next();
            }
            marker = Some((offset, negative, offset + 1 + sign_len));
        }
    }

    let mantissa_end = marker.map_or(text.len(), |(offset, _, _)| offset);

    if let Some((offset, _, digits_start)) = marker {
        if digits_start == text.len() {
            return Err(NumberError::syntax(
                text,
                SyntaxError::ExponentWithoutDigits { offset },
            ));
        }
    }
    if let Some(dot) = dot {
        if dot + 1 == mantissa_end {
            return Err(NumberError::syntax(
                text,
                SyntaxError::TrailingNonDigit {
                    found: '.',
                    offset: dot,
                },
            ));
        }
    }

    Ok(Sections {
        integer: start..dot.unwrap_or(mantissa_end),
        fraction: dot.map(|dot| dot + 1..mantissa_end),
        exponent: marker.map(|(_, negative, digits_start)| ExponentSection {
            negative,
            digits: digits_start..text.len(),
        }),
    })
}

fn mantissa(kind: NumeralKind, integer: u64, fraction: u64, fraction_digits: u32) -> f64 {
    let radix = f64::from(kind.radix());
    let scale = radix.powi(i32::try_from(fraction_digits).unwrap_or(i32::MAX));
    integer as f64 + fraction as f64 / scale
}

/// Powers of ten that an `f64` holds exactly.
const EXACT_POWERS_OF_TEN: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15,
    1e16, 1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// Every integer up to this bound converts to `f64` without rounding.
const MAX_EXACT_INTEGER: u64 = 1 << 53;

/// Combines section values into the literal's value.
///
/// A zero mantissa yields `0.0` whatever the exponent. Decimal values are
/// correctly rounded. Hexadecimal exponents are applied in two halves so
/// that intermediate powers of two stay finite when the result is. The
/// result may still be infinite (overflow) or zero (underflow).
///
/// # Errors
///
/// `InternalInvariant` if the normalized decimal form fails to parse.
pub(crate) fn assemble(
    kind: NumeralKind,
    integer: u64,
    fraction: u64,
    fraction_digits: u32,
    exponent: i64,
) -> Result<f64> {
    if integer == 0 && fraction == 0 {
        return Ok(0.0);
    }
    if kind == NumeralKind::Decimal {
        return decimal_value(integer, fraction, fraction_digits, exponent);
    }

    let mantissa = mantissa(kind, integer, fraction, fraction_digits);
    if exponent == 0 {
        return Ok(mantissa);
    }
    let base = f64::from(kind.exponent_base().unwrap_or(2));
    let limit = i64::from(i32::MAX);
    let exponent = exponent.clamp(-limit, limit) as i32;
    let half = exponent / 2;
    Ok(mantissa * base.powi(half) * base.powi(exponent - half))
}

fn decimal_value(integer: u64, fraction: u64, fraction_digits: u32, exponent: i64) -> Result<f64> {
    if let Some(value) = exact_decimal(integer, fraction, fraction_digits, exponent) {
        return Ok(value);
    }

    let normalized = if fraction_digits == 0 {
        format!("{}e{}", integer, exponent)
    } else {
        format!(
            "{}.{:0>width$}e{}",
            integer,
            fraction,
            exponent,
            width = fraction_digits as usize
        )
    };
    normalized.parse::<f64>().map_err(|err| {
        NumberError::invariant(format!(
            "normalized float `{}` failed to parse: {}",
            normalized, err
        ))
    })
}

/// One exact multiplication or division, when both operands are exact.
fn exact_decimal(integer: u64, fraction: u64, fraction_digits: u32, exponent: i64) -> Option<f64> {
    let digits = integer
        .checked_mul(10u64.checked_pow(fraction_digits)?)?
        .checked_add(fraction)?;
    if digits > MAX_EXACT_INTEGER {
        return None;
    }
    let exponent = exponent.checked_sub(i64::from(fraction_digits))?;
    let power = *EXACT_POWERS_OF_TEN.get(usize::try_from(exponent.unsigned_abs()).ok()?)?;
    if exponent < 0 {
        Some(digits as f64 / power)
    } else {
        Some(digits as f64 * power)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syntax(text: &str) -> SyntaxError {
        match FloatLiteral::parse(text) {
            Err(NumberError::InvalidSyntax { reason, .. }) => reason,
            other => panic!("expected a syntax error for {:?}, got {:?}", text, other),
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs())
    }

    #[test]
    fn test_simple_decimal() {
        assert_eq!(parse_float("1.5").unwrap(), 1.5);
        assert_eq!(parse_float("0.25").unwrap(), 0.25);
        assert_eq!(parse_float("10.0").unwrap(), 10.0);
    }

    #[test]
    fn test_hex_with_binary_exponent() {
        assert_eq!(parse_float("0x1.8p1").unwrap(), 3.0);
        assert_eq!(parse_float("0x1p-2").unwrap(), 0.25);
        assert_eq!(parse_float("0X1P+4").unwrap(), 16.0);
        assert_eq!(parse_float("0xA.8").unwrap(), 10.5);
    }

    #[test]
    fn test_leading_dot() {
        let lit = FloatLiteral::parse(".5").unwrap();
        assert_eq!(lit.integer_part, 0);
        assert_eq!(lit.value, 0.5);
        assert_eq!(parse_float("0x.8").unwrap(), 0.5);
    }

    #[test]
    fn test_trailing_dot_rejected() {
        assert_eq!(
            syntax("5."),
            SyntaxError::TrailingNonDigit {
                found: '.',
                offset: 1
            }
        );
        assert!(matches!(syntax("."), SyntaxError::TrailingNonDigit { .. }));
    }

    #[test]
    fn test_exponents() {
        assert!(close(parse_float("1e10").unwrap(), 1e10));
        assert!(close(parse_float("2.5e-3").unwrap(), 2.5e-3));
        assert!(close(parse_float("1E+2").unwrap(), 100.0));
        assert_eq!(FloatLiteral::parse("7e-12").unwrap().exponent, -12);
    }

    #[test]
    fn test_integral_literals_are_floats() {
        assert_eq!(parse_float("123").unwrap(), 123.0);
        assert_eq!(parse_float("0xFF").unwrap(), 255.0);
    }

    #[test]
    fn test_separators_per_section() {
        assert_eq!(parse_float("1'000.5").unwrap(), 1000.5);
        assert_eq!(parse_float("1.2'5").unwrap(), 1.25);
        assert!(matches!(
            syntax("1'.5"),
            SyntaxError::MisplacedSeparator { offset: 1 }
        ));
        assert!(matches!(
            syntax("1.'5"),
            SyntaxError::MisplacedSeparator { offset: 2 }
        ));
        assert!(matches!(
            syntax("1e'5"),
            SyntaxError::MisplacedSeparator { offset: 2 }
        ));
    }

    #[test]
    fn test_rejection_set() {
        assert_eq!(syntax(""), SyntaxError::Empty);
        assert_eq!(syntax("1.2.3"), SyntaxError::TooManyDots { offset: 3 });
        assert_eq!(syntax("1e"), SyntaxError::ExponentWithoutDigits { offset: 1 });
        assert_eq!(syntax("1e+"), SyntaxError::ExponentWithoutDigits { offset: 1 });
        assert_eq!(syntax("1ee2"), SyntaxError::TooManyExponents { offset: 2 });
        assert_eq!(syntax("1e2.5"), SyntaxError::MisplacedDot { offset: 3 });
        assert_eq!(syntax("e5"), SyntaxError::ExponentWithoutMantissa { offset: 0 });
        assert_eq!(syntax("1.e5"), SyntaxError::ExponentWithoutMantissa { offset: 2 });
        assert_eq!(syntax("-1.5"), SyntaxError::UnexpectedSign { offset: 0 });
        assert!(matches!(syntax("0x"), SyntaxError::PrefixOnly { .. }));
        assert!(matches!(
            syntax("123abc"),
            SyntaxError::InvalidDigit { found: 'a', offset: 3, .. }
        ));
    }

    #[test]
    fn test_octal_and_binary_are_not_floats() {
        assert_eq!(
            syntax("0o1.5"),
            SyntaxError::FloatRadix {
                kind: NumeralKind::Octal
            }
        );
        assert_eq!(
            syntax("0b1"),
            SyntaxError::FloatRadix {
                kind: NumeralKind::Binary
            }
        );
    }

    #[test]
    fn test_exponent_is_always_decimal() {
        assert_eq!(parse_float("0x1p10").unwrap(), 1024.0);
        assert!(matches!(
            syntax("0x1pA"),
            SyntaxError::InvalidDigit {
                found: 'A',
                kind: NumeralKind::Decimal,
                ..
            }
        ));
    }

    #[test]
    fn test_hex_e_is_a_digit() {
        assert_eq!(parse_float("0x1e").unwrap(), 30.0);
    }

    #[test]
    fn test_fraction_cap() {
        let lit = FloatLiteral::parse("0.1234567890123456789999").unwrap();
        assert_eq!(lit.fraction_digits, 18);
        assert_eq!(lit.fraction_part, 123_456_789_012_345_678);
        assert!(lit.truncated);

        let lit = FloatLiteral::parse("0x0.123456789ABCDEF012").unwrap();
        assert_eq!(lit.fraction_digits, 16);
        assert!(lit.truncated);

        assert!(!FloatLiteral::parse("0.5").unwrap().truncated);
    }

    #[test]
    fn test_digits_past_cap_are_validated() {
        let text = format!("0.{}x", "1".repeat(30));
        assert!(matches!(syntax(&text), SyntaxError::InvalidDigit { found: 'x', .. }));
    }

    #[test]
    fn test_overflow() {
        assert!(FloatLiteral::parse("1e309").unwrap_err().is_overflow());
        assert!(FloatLiteral::parse("0x1p1024").unwrap_err().is_overflow());
        assert!(FloatLiteral::parse("1e99999999999999999999")
            .unwrap_err()
            .is_overflow());
        assert!(FloatLiteral::parse("1e9223372036854775808")
            .unwrap_err()
            .is_overflow());
    }

    #[test]
    fn test_large_but_finite() {
        assert!(close(parse_float("0.001e310").unwrap(), 1e307));
        assert!(close(parse_float("0x1p1023").unwrap(), 2f64.powi(1023)));
    }

    #[test]
    fn test_decimal_is_correctly_rounded() {
        for text in [
            "1e300",
            "9e307",
            "2.2250738585072014e-308",
            "986450758e-242",
            "0.1",
            "123.456e-7",
            "1e22",
            "1e23",
            "4.9e-324",
        ] {
            let expected: f64 = text.parse().unwrap();
            assert_eq!(parse_float(text).unwrap().to_bits(), expected.to_bits(), "{}", text);
        }
    }

    #[test]
    fn test_f64_max_is_finite() {
        for text in [
            "1.7976931348623157e308",
            "1.797693134862315e308",
            "17976931348623157e292",
        ] {
            let expected: f64 = text.parse().unwrap();
            assert_eq!(parse_float(text), Ok(expected), "{}", text);
        }
        assert_eq!(parse_float("1.7976931348623157e308"), Ok(f64::MAX));
        assert!(matches!(
            parse_float("1.8e308"),
            Err(NumberError::Overflow { target: NumericTarget::F64, .. })
        ));
    }

    #[test]
    fn test_exact_decimal_fast_path() {
        assert_eq!(exact_decimal(15, 5, 1, 2), Some(1550.0));
        assert_eq!(exact_decimal(1, 0, 0, -22), Some(1e-22));
        assert_eq!(exact_decimal(1, 0, 0, 23), None);
        assert_eq!(exact_decimal(u64::MAX, 0, 0, 0), None);
        assert_eq!(exact_decimal(1, 0, 0, i64::MIN), None);
    }

    #[test]
    fn test_underflow_and_zero_mantissa() {
        assert_eq!(parse_float("1e-400").unwrap(), 0.0);
        assert_eq!(parse_float("0e99999").unwrap(), 0.0);
        assert_eq!(parse_float("0.0e-9223372036854775808").unwrap(), 0.0);
    }

    #[test]
    fn test_mantissa() {
        let lit = FloatLiteral::parse("2.5e3").unwrap();
        assert_eq!(lit.mantissa(), 2.5);
        assert!(close(lit.value, 2500.0));
    }
}
