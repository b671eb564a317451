//! Numeral systems and radix detection.

use std::fmt;

use super::alphabet::DigitAlphabet;
use super::error::{NumberError, Result, SyntaxError};

/// The numeral system of a literal, determined by its prefix.
///
/// | Kind      | Radix | Prefix        |
/// |-----------|-------|---------------|
/// | `Decimal` | 10    | none          |
/// | `Hex`     | 16    | `0x` / `0X`   |
/// | `Octal`   | 8     | `0o` / `0O`   |
/// | `Binary`  | 2     | `0b` / `0B`   |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumeralKind {
    /// Base 10, no prefix
    Decimal,
    /// Base 16, `0x`
    Hex,
    /// Base 8, `0o`
    Octal,
    /// Base 2, `0b`
    Binary,
}

impl NumeralKind {
    /// Every kind, in prefix detection order after `Decimal`.
    pub const ALL: [NumeralKind; 4] = [
        NumeralKind::Decimal,
        NumeralKind::Hex,
        NumeralKind::Octal,
        NumeralKind::Binary,
    ];

    /// Returns the radix of this numeral system.
    #[inline]
    pub const fn radix(self) -> u32 {
        match self {
            NumeralKind::Decimal => 10,
            NumeralKind::Hex => 16,
            NumeralKind::Octal => 8,
            NumeralKind::Binary => 2,
        }
    }

    /// Returns the canonical lowercase prefix (empty for decimal).
    #[inline]
    pub const fn prefix(self) -> &'static str {
        match self {
            NumeralKind::Decimal => "",
            NumeralKind::Hex => "0x",
            NumeralKind::Octal => "0o",
            NumeralKind::Binary => "0b",
        }
    }

    /// Returns the human-readable name used in diagnostics.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            NumeralKind::Decimal => "decimal",
            NumeralKind::Hex => "hexadecimal",
            NumeralKind::Octal => "octal",
            NumeralKind::Binary => "binary",
        }
    }

    /// Returns the digit table for this radix.
    #[inline]
    pub fn alphabet(self) -> &'static DigitAlphabet {
        match self {
            NumeralKind::Decimal => &DigitAlphabet::DECIMAL,
            NumeralKind::Hex => &DigitAlphabet::HEX,
            NumeralKind::Octal => &DigitAlphabet::OCTAL,
            NumeralKind::Binary => &DigitAlphabet::BINARY,
        }
    }

    /// Returns the value of `c` as a digit of this radix.
    #[inline]
    pub fn digit_value(self, c: char) -> Option<u32> {
        self.alphabet().digit_value(c)
    }

    /// Returns true if `c` is a digit of this radix.
    #[inline]
    pub fn is_digit(self, c: char) -> bool {
        self.alphabet().is_digit(c)
    }

    /// Returns true if this kind may carry a fraction or exponent.
    #[inline]
    pub const fn supports_float(self) -> bool {
        matches!(self, NumeralKind::Decimal | NumeralKind::Hex)
    }

    /// Returns true if `c` is this kind's exponent marker.
    ///
    /// Decimal literals use `e`/`E` (power of ten), hexadecimal literals use
    /// `p`/`P` (power of two). Octal and binary literals have none.
    #[inline]
    pub const fn is_exponent_marker(self, c: char) -> bool {
        match self {
            NumeralKind::Decimal => matches!(c, 'e' | 'E'),
            NumeralKind::Hex => matches!(c, 'p' | 'P'),
            NumeralKind::Octal | NumeralKind::Binary => false,
        }
    }

    /// Returns the base raised to the exponent when assembling a float.
    #[inline]
    pub const fn exponent_base(self) -> Option<u32> {
        match self {
            NumeralKind::Decimal => Some(10),
            NumeralKind::Hex => Some(2),
            NumeralKind::Octal | NumeralKind::Binary => None,
        }
    }

    /// Maximum number of fraction digits that contribute to a float value.
    ///
    /// Further digits are validated but ignored; at these caps the fraction
    /// accumulator cannot overflow (`10^18 < 2^64`, `16^16 - 1 == u64::MAX`).
    #[inline]
    pub const fn max_fraction_digits(self) -> u32 {
        match self {
            NumeralKind::Decimal => 18,
            NumeralKind::Hex => 16,
            NumeralKind::Octal | NumeralKind::Binary => 0,
        }
    }

    /// Classifies `text` by its prefix alone.
    ///
    /// Returns `Decimal` when no recognized prefix is present. Never fails.
    ///
    /// ```
    /// use numlex_lex::number::NumeralKind;
    ///
    /// assert_eq!(NumeralKind::classify("0XFF"), NumeralKind::Hex);
    /// assert_eq!(NumeralKind::classify("0o17"), NumeralKind::Octal);
    /// assert_eq!(NumeralKind::classify("0b"), NumeralKind::Binary);
    /// assert_eq!(NumeralKind::classify("017"), NumeralKind::Decimal);
    /// ```
    pub fn classify(text: &str) -> NumeralKind {
        match text.as_bytes() {
            [b'0', b'x' | b'X', ..] => NumeralKind::Hex,
            [b'0', b'o' | b'O', ..] => NumeralKind::Octal,
            [b'0', b'b' | b'B', ..] => NumeralKind::Binary,
            _ => NumeralKind::Decimal,
        }
    }

    /// Determines the numeral system of `text` and the byte offset where its
    /// digits begin.
    ///
    /// # Errors
    ///
    /// - [`SyntaxError::Empty`] for an empty literal
    /// - [`SyntaxError::PrefixOnly`] when a prefix has nothing after it
    ///
    /// # Example
    ///
    /// ```
    /// use numlex_lex::number::NumeralKind;
    ///
    /// assert_eq!(NumeralKind::detect("0xFF").unwrap(), (NumeralKind::Hex, 2));
    /// assert_eq!(NumeralKind::detect("255").unwrap(), (NumeralKind::Decimal, 0));
    /// assert!(NumeralKind::detect("0b").is_err());
    /// assert!(NumeralKind::detect("").is_err());
    /// ```
    pub fn detect(text: &str) -> Result<(NumeralKind, usize)> {
        Self::detect_at(text, 0)
    }

    /// Like [`detect`](Self::detect), but inspects `text[start..]` while
    /// reporting errors and offsets against the whole of `text`.
    pub(crate) fn detect_at(text: &str, start: usize) -> Result<(NumeralKind, usize)> {
        let body = text.get(start..).ok_or_else(|| {
            NumberError::invariant(format!(
                "detection start {} is not a character boundary of `{}`",
                start, text
            ))
        })?;

        if body.is_empty() {
            let reason = if start == 0 {
                SyntaxError::Empty
            } else {
                SyntaxError::NoDigits
            };
            return Err(NumberError::syntax(text, reason));
        }

        let kind = Self::classify(body);
        let digits = start + kind.prefix().len();
        if digits == text.len() {
            return Err(NumberError::syntax(text, SyntaxError::PrefixOnly { kind }));
        }
        Ok((kind, digits))
    }
}

impl fmt::Display for NumeralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
