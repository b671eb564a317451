//! Diagnostic codes for categorizing literal errors and warnings.
//!
//! # Examples
//!
//! ```
//! use numlex_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_INVALID_NUMBER;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1003);
//! assert_eq!(code.as_str(), "E1003");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}` where the prefix is "E" for
/// errors or "W" for warnings and the number is padded to four digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1003")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E1xxx)
    // =========================================================================

    /// E1001: Lexer - Character that cannot start a numeric literal
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1003: Lexer - Invalid numeric literal
    pub const E_LEXER_INVALID_NUMBER: Self = Self::new("E", 1003);
    /// E1005: Lexer - Numeric literal out of range
    pub const E_LEXER_NUMBER_OVERFLOW: Self = Self::new("E", 1005);

    // =========================================================================
    // INTERNAL ERROR CODES (E9xxx)
    // =========================================================================

    /// E9001: A caller violated an internal precondition
    pub const E_INTERNAL_INVARIANT: Self = Self::new("E", 9001);

    // =========================================================================
    // WARNING CODES (W1xxx)
    // =========================================================================

    /// W1001: Fraction digits beyond the precision cap were ignored
    pub const W_LEXER_FRACTION_TRUNCATED: Self = Self::new("W", 1001);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
