//! Per-radix digit tables.
//!
//! Every radix is described by one static [`DigitAlphabet`]: a 128-entry
//! ASCII lookup table plus the arithmetic needed to append a digit to an
//! accumulator without overflowing it. The accumulator, the float parser
//! and the validator all go through these tables, so radix behaviour is a
//! table lookup rather than a branch per numeral system.

/// The digit separator character.
///
/// A separator may only sit between two digits of the same digit span and
/// never contributes to the value.
pub const DIGIT_SEPARATOR: char = '\'';

const NOT_A_DIGIT: u8 = 0xFF;

/// Valid characters and digit values for one radix.
///
/// # Example
///
/// ```
/// use numlex_lex::number::DigitAlphabet;
///
/// let hex = &DigitAlphabet::HEX;
/// assert_eq!(hex.digit_value('f'), Some(15));
/// assert_eq!(hex.digit_value('F'), Some(15));
/// assert_eq!(hex.digit_value('g'), None);
/// assert_eq!(DigitAlphabet::OCTAL.digit_value('8'), None);
/// ```
#[derive(Debug)]
pub struct DigitAlphabet {
    radix: u32,
    bits: Option<u32>,
    table: [u8; 128],
}

impl DigitAlphabet {
    /// `0-9`
    pub const DECIMAL: DigitAlphabet = DigitAlphabet::build(10);
    /// `0-9`, `a-f`, `A-F`
    pub const HEX: DigitAlphabet = DigitAlphabet::build(16);
    /// `0-7`
    pub const OCTAL: DigitAlphabet = DigitAlphabet::build(8);
    /// `0-1`
    pub const BINARY: DigitAlphabet = DigitAlphabet::build(2);

    const fn build(radix: u32) -> Self {
        let mut table = [NOT_A_DIGIT; 128];
        let mut i = 0;
        while i < 128 {
            let c = i as u8;
            let value = match c {
                b'0'..=b'9' => (c - b'0') as u32,
                b'a'..=b'z' => (c - b'a') as u32 + 10,
                b'A'..=b'Z' => (c - b'A') as u32 + 10,
                _ => u32::MAX,
            };
            if value < radix {
                table[i] = value as u8;
            }
            i += 1;
        }

        let bits = match radix {
            2 => Some(1),
            8 => Some(3),
            16 => Some(4),
            _ => None,
        };

        Self { radix, bits, table }
    }

    /// The radix this alphabet describes.
    #[inline]
    pub const fn radix(&self) -> u32 {
        self.radix
    }

    /// Bits per digit for power-of-two radices, `None` for decimal.
    #[inline]
    pub const fn bits_per_digit(&self) -> Option<u32> {
        self.bits
    }

    /// Returns the value of `c` in this radix, or `None` if `c` is not one
    /// of its digits.
    #[inline]
    pub fn digit_value(&self, c: char) -> Option<u32> {
        if !c.is_ascii() {
            return None;
        }
        match self.table[c as usize] {
            NOT_A_DIGIT => None,
            value => Some(u32::from(value)),
        }
    }

    /// Returns true if `c` is a digit of this radix.
    #[inline]
    pub fn is_digit(&self, c: char) -> bool {
        self.digit_value(c).is_some()
    }

    /// Appends `digit` to `value`, or returns `None` if the result does not
    /// fit in a `u64`.
    ///
    /// The range check happens before the update, so a wrapped value is
    /// never produced.
    ///
    /// ```
    /// use numlex_lex::number::DigitAlphabet;
    ///
    /// assert_eq!(DigitAlphabet::DECIMAL.push_digit(12, 3), Some(123));
    /// assert_eq!(DigitAlphabet::HEX.push_digit(0xA, 0xB), Some(0xAB));
    /// assert_eq!(DigitAlphabet::DECIMAL.push_digit(u64::MAX / 10, 6), None);
    /// assert_eq!(DigitAlphabet::BINARY.push_digit(1 << 63, 0), None);
    /// ```
    #[inline]
    pub fn push_digit(&self, value: u64, digit: u32) -> Option<u64> {
        let digit = u64::from(digit);
        match self.bits {
            Some(bits) => {
                if value > u64::MAX >> bits {
                    None
                } else {
                    Some((value << bits) | digit)
                }
            },
            None => {
                let radix = u64::from(self.radix);
                if value > (u64::MAX - digit) / radix {
                    None
                } else {
                    Some(value * radix + digit)
                }
            },
        }
    }
}
