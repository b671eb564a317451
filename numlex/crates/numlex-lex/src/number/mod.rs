//! Numeric literal recognition.
//!
//! This module turns the text of one numeric token into a value:
//!
//! - [`NumeralKind`] - radix detection from the `0x`/`0o`/`0b` prefix
//! - [`DigitAlphabet`] - per-radix digit tables
//! - [`accumulate`] - overflow-checked `u64` accumulation of a digit span
//! - [`parse_integer`], [`parse_u64`], [`parse_i64`] - integer literals
//! - [`FloatLiteral`], [`parse_float`] - decimal and hexadecimal floats
//! - [`looks_like_float`] - integer/float shape check
//! - [`is_valid_integer`], [`is_valid_float`] - value-free validation
//!
//! All functions are pure and allocation-free on success. Failures are
//! reported as [`NumberError`] values; nothing is logged as an error and no
//! partial value is returned.
//!
//! # Example
//!
//! ```
//! use numlex_lex::number::{is_valid_float, parse_float, parse_u64, NumberError};
//!
//! assert_eq!(parse_u64("0b1111'1111").unwrap(), 255);
//! assert_eq!(parse_float("0x1.8p1").unwrap(), 3.0);
//! assert!(is_valid_float("6.022e23"));
//!
//! match parse_u64("0x1'0000'0000'0000'0000") {
//!     Err(NumberError::Overflow { .. }) => {}
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

mod accumulate;
mod alphabet;
mod error;
mod float;
mod integer;
mod kind;
mod validate;

pub use accumulate::{accumulate, LiteralSpan};
pub use alphabet::{DigitAlphabet, DIGIT_SEPARATOR};
pub use error::{NumberError, NumericTarget, Result, SyntaxError};
pub use float::{looks_like_float, parse_float, FloatLiteral};
pub use integer::{parse_i64, parse_integer, parse_u64, IntegerValue};
pub use kind::NumeralKind;
pub use validate::{is_valid_float, is_valid_integer};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use quickcheck_macros::quickcheck;

    fn render(value: u64, kind: NumeralKind) -> String {
        match kind {
            NumeralKind::Decimal => format!("{}", value),
            NumeralKind::Hex => format!("0x{:X}", value),
            NumeralKind::Octal => format!("0o{:o}", value),
            NumeralKind::Binary => format!("0b{:b}", value),
        }
    }

    /// Inserts a separator after every `group` digits of a rendered literal.
    fn with_separators(literal: &str, group: usize) -> String {
        let kind = NumeralKind::classify(literal);
        let (prefix, digits) = literal.split_at(kind.prefix().len());
        let mut out = prefix.to_string();
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && i % group == 0 {
                out.push(DIGIT_SEPARATOR);
            }
            out.push(c);
        }
        out
    }

    #[quickcheck]
    fn prop_integer_round_trip(value: u64) -> bool {
        NumeralKind::ALL
            .iter()
            .all(|&kind| parse_u64(&render(value, kind)) == Ok(value))
    }

    #[quickcheck]
    fn prop_separated_round_trip(value: u64, group: u8) -> bool {
        let group = usize::from(group % 8) + 1;
        NumeralKind::ALL.iter().all(|&kind| {
            let literal = with_separators(&render(value, kind), group);
            parse_u64(&literal) == Ok(value) && is_valid_integer(&literal)
        })
    }

    #[quickcheck]
    fn prop_signed_round_trip(value: i64) -> bool {
        parse_i64(&value.to_string()) == Ok(value)
            && parse_integer(&value.to_string(), true) == Ok(IntegerValue::Signed(value))
    }

    /// Renders a positive normal `f64` as an exact hex float literal.
    fn hex_literal(value: f64) -> String {
        let bits = value.to_bits();
        let exponent = ((bits >> 52) & 0x7FF) as i64 - 1023;
        format!("0x1.{:013X}p{}", bits & ((1 << 52) - 1), exponent)
    }

    #[test]
    fn test_decimal_float_round_trip() {
        use proptest::num::f64::{NORMAL, POSITIVE, SUBNORMAL, ZERO};

        proptest!(|(value in POSITIVE | NORMAL | SUBNORMAL | ZERO)| {
            let text = format!("{:e}", value);
            let parsed = parse_float(&text);
            prop_assert_eq!(parsed.map(f64::to_bits), Ok(value.to_bits()), "{}", text);
            prop_assert!(is_valid_float(&text), "{}", text);
        });
    }

    #[test]
    fn test_hex_float_bits_round_trip() {
        use proptest::num::f64::{NORMAL, POSITIVE};

        proptest!(|(value in POSITIVE | NORMAL)| {
            let text = hex_literal(value);
            prop_assert_eq!(parse_float(&text).map(f64::to_bits), Ok(value.to_bits()), "{}", text);
            prop_assert!(is_valid_float(&text), "{}", text);
        });
    }

    #[test]
    fn test_hex_literal_rendering() {
        assert_eq!(hex_literal(1.0), "0x1.0000000000000p0");
        assert_eq!(hex_literal(f64::MAX), "0x1.FFFFFFFFFFFFFp1023");
    }

    #[test]
    fn test_hex_float_round_trip() {
        proptest!(|(int in 0u32..u32::MAX, frac in 0u32..0x10000)| {
            let text = format!("0x{:X}.{:04X}", int, frac);
            let expected = f64::from(int) + f64::from(frac) / 65536.0;
            prop_assert_eq!(parse_float(&text).unwrap(), expected);
        });
    }

    #[test]
    fn test_hex_exponent_round_trip() {
        proptest!(|(mantissa in 1u32..0x100000, exponent in -60i32..60)| {
            let text = format!("0x{:X}p{}", mantissa, exponent);
            let expected = f64::from(mantissa) * 2f64.powi(exponent);
            prop_assert_eq!(parse_float(&text).unwrap(), expected);
        });
    }

    #[test]
    fn test_parsing_is_idempotent() {
        proptest!(|(text in "[+-]?(0[xXoObB])?[0-9a-fA-F'.pP+-]{0,20}")| {
            prop_assert_eq!(parse_integer(&text, true), parse_integer(&text, true));
            prop_assert_eq!(parse_integer(&text, false), parse_integer(&text, false));
            let first = FloatLiteral::parse(&text);
            let second = FloatLiteral::parse(&text);
            prop_assert_eq!(first.is_ok(), second.is_ok());
            if let (Ok(a), Ok(b)) = (first, second) {
                prop_assert_eq!(a.value.to_bits(), b.value.to_bits());
            }
        });
    }

    #[test]
    fn test_small_decimal_floats_parse_exactly() {
        proptest!(|(int in 0u32..100_000, frac in 0u32..10)| {
            let text = format!("{}.{}", int, frac);
            let expected: f64 = text.parse().unwrap();
            prop_assert_eq!(parse_float(&text).map(f64::to_bits), Ok(expected.to_bits()));
        });
    }
}
