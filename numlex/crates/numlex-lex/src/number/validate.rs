//! Value-free literal validation.
//!
//! The predicates here answer "is this a numeric literal?" without building
//! an error. They follow the same section, alphabet, separator and range
//! rules as the parsers and agree with them on every input:
//!
//! - `is_valid_integer(s) == parse_integer(s, s starts with '+' or '-').is_ok()`
//! - `is_valid_float(s) == parse_float(s).is_ok()`

use super::alphabet::{DigitAlphabet, DIGIT_SEPARATOR};
use super::float::assemble;
use super::integer::{apply_sign, split_sign};
use super::kind::NumeralKind;

/// Returns true if `text` is a valid integer literal.
///
/// A leading sign is accepted, in which case the value must fit `i64`;
/// unsigned literals must fit `u64`.
///
/// ```
/// use numlex_lex::number::is_valid_integer;
///
/// assert!(is_valid_integer("0b1010"));
/// assert!(is_valid_integer("-42"));
/// assert!(is_valid_integer("18446744073709551615"));
/// assert!(!is_valid_integer("+18446744073709551615"));
/// assert!(!is_valid_integer("1.5"));
/// ```
pub fn is_valid_integer(text: &str) -> bool {
    check_integer(text).is_some()
}

/// Returns true if `text` is a valid float literal.
///
/// ```
/// use numlex_lex::number::is_valid_float;
///
/// assert!(is_valid_float("1.5e3"));
/// assert!(is_valid_float("0x1.8p1"));
/// assert!(is_valid_float("42"));
/// assert!(!is_valid_float("5."));
/// assert!(!is_valid_float("1e999"));
/// ```
pub fn is_valid_float(text: &str) -> bool {
    check_float(text).is_some()
}

fn check_integer(text: &str) -> Option<()> {
    let (sign, body_start) = split_sign(text);
    let body = &text[body_start..];
    let kind = NumeralKind::classify(body);
    let digits = &body[kind.prefix().len()..];

    let magnitude = fold_digits(digits, kind.alphabet())?;
    match sign {
        None => Some(()),
        Some(negative) => apply_sign(negative, magnitude).map(drop),
    }
}

/// Folds a whole digit span, requiring at least one digit.
fn fold_digits(digits: &str, alphabet: &DigitAlphabet) -> Option<u64> {
    let mut value = 0u64;
    let mut prev_is_digit = false;

    for (i, c) in digits.char_indices() {
        if c == DIGIT_SEPARATOR {
            if !prev_is_digit || !next_is_digit(digits, i, alphabet) {
                return None;
            }
            prev_is_digit = false;
            continue;
        }
        value = alphabet.push_digit(value, alphabet.digit_value(c)?)?;
        prev_is_digit = true;
    }

    prev_is_digit.then_some(value)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Integer,
    Fraction,
    Exponent,
}

fn check_float(text: &str) -> Option<()> {
    if split_sign(text).0.is_some() {
        return None;
    }
    let kind = NumeralKind::classify(text);
    if !kind.supports_float() {
        return None;
    }
    let body = &text[kind.prefix().len()..];
    if body.is_empty() {
        return None;
    }

    let cap = kind.max_fraction_digits();
    let mut section = Section::Integer;
    let mut section_digits = 0u32;
    let mut prev_is_digit = false;
    let mut integer = 0u64;
    let mut fraction = 0u64;
    let mut fraction_digits = 0u32;
    let mut exponent = 0u64;
    let mut negative = false;

    let mut chars = body.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let alphabet = match section {
            Section::Exponent => &DigitAlphabet::DECIMAL,
            Section::Integer | Section::Fraction => kind.alphabet(),
        };

        if c == '.' {
            if section != Section::Integer {
                return None;
            }
            section = Section::Fraction;
            section_digits = 0;
            prev_is_digit = false;
        } else if kind.is_exponent_marker(c) {
            if section == Section::Exponent || section_digits == 0 {
                return None;
            }
            if let Some(&(_, sign @ ('+' | '-'))) = chars.peek() {
                negative = sign == '-';
                chars.next();
            }
            section = Section::Exponent;
            section_digits = 0;
            prev_is_digit = false;
        } else if c == DIGIT_SEPARATOR {
            if !prev_is_digit || !next_is_digit(body, i, alphabet) {
                return None;
            }
            prev_is_digit = false;
        } else {
            let digit = alphabet.digit_value(c)?;
            match section {
                Section::Integer => integer = alphabet.push_digit(integer, digit)?,
                Section::Fraction if fraction_digits < cap => {
                    fraction = alphabet.push_digit(fraction, digit)?;
                    fraction_digits += 1;
                },
                Section::Fraction => {},
                Section::Exponent => exponent = alphabet.push_digit(exponent, digit)?,
            }
            section_digits += 1;
            prev_is_digit = true;
        }
    }

    if section_digits == 0 {
        return None;
    }

    let exponent = apply_sign(negative, exponent)?;
    assemble(kind, integer, fraction, fraction_digits, exponent)
        .ok()?
        .is_finite()
        .then_some(())
}

#[inline]
fn next_is_digit(text: &str, separator_at: usize, alphabet: &DigitAlphabet) -> bool {
    text[separator_at + DIGIT_SEPARATOR.len_utf8()..]
        .chars()
        .next()
        .is_some_and(|next| alphabet.is_digit(next))
}
