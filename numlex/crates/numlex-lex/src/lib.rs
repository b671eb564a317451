//! numlex-lex - Numeric Literal Lexer
//!
//! This crate recognizes numeric literals written in a C-like notation
//! and turns them into values: unsigned or signed 64-bit integers and
//! `f64` floats.
//!
//! # Overview
//!
//! There are two layers:
//!
//! - [`number`] works on the text of a single literal. It detects the
//!   radix, accumulates digits with overflow checks, assembles floats and
//!   validates literals without computing a value.
//! - [`Lexer`] scans a source text of literals separated by whitespace,
//!   `,` or `;`, yielding [`Token`]s and reporting every malformed literal
//!   to a [`Handler`](numlex_util::Handler).
//!
//! # Example Usage
//!
//! ```
//! use numlex_lex::{parse_float, parse_u64, Lexer, Token};
//! use numlex_util::Handler;
//!
//! assert_eq!(parse_u64("0xDEAD'BEEF").unwrap(), 0xDEAD_BEEF);
//! assert_eq!(parse_float("1.5e3").unwrap(), 1500.0);
//!
//! let handler = Handler::new();
//! let mut lexer = Lexer::new("42 0b2", &handler);
//! assert!(lexer.next_token().is_number());
//! assert!(lexer.next_token().is_invalid());
//! assert_eq!(handler.error_count(), 1);
//! ```
//!
//! # Literal Syntax
//!
//! - **Prefixes**: `0x`/`0X` hexadecimal, `0o`/`0O` octal, `0b`/`0B`
//!   binary, anything else decimal
//! - **Separators**: `'` between two digits, e.g. `1'000'000`
//! - **Signs**: an optional `+`/`-` on integers only
//! - **Floats**: decimal `1.5`, `.5`, `2e-3` and hexadecimal `0x1.8p1`;
//!   exponent digits are always decimal
//!
//! # Module Structure
//!
//! - [`number`] - literal parsing and validation
//! - [`lexer`] - the token stream
//! - [`token`] - token definitions
//! - [`cursor`] - character cursor for source traversal

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod number;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{LexOptions, Lexer};
pub use number::{
    is_valid_float, is_valid_integer, looks_like_float, parse_float, parse_i64, parse_integer,
    parse_u64, FloatLiteral, IntegerValue, NumberError, NumeralKind,
};
pub use token::Token;

#[cfg(test)]
mod tests {
    use super::*;
    use numlex_util::Handler;

    /// Helper to collect all tokens from source.
    fn lex_all(source: &str) -> (Vec<Token>, Handler) {
        let handler = Handler::new();
        let mut tokens = Vec::new();
        {
            let mut lexer = Lexer::new(source, &handler);
            loop {
                let token = lexer.next_token();
                if token == Token::Eof {
                    break;
                }
                tokens.push(token);
            }
        }
        (tokens, handler)
    }

    #[test]
    fn test_table_of_constants() {
        let source = r#"
            0x7FFF'FFFF'FFFF'FFFF, 0o777; 0b1010'1010
            3.141'592'653, 6.022e23, 1e-9
            0x1.921FB54442D18p1
        "#;
        let (tokens, handler) = lex_all(source);

        assert!(!handler.has_errors(), "{:?}", handler.diagnostics());
        assert_eq!(tokens.len(), 7);
        assert_eq!(tokens[0], Token::Integer(IntegerValue::Unsigned(i64::MAX as u64)));
        assert_eq!(tokens[1], Token::Integer(IntegerValue::Unsigned(0o777)));
        assert_eq!(tokens[2], Token::Integer(IntegerValue::Unsigned(0b1010_1010)));
        assert!(matches!(tokens[3], Token::Float(v) if (v - 3.141_592_653).abs() < 1e-12));
        assert!(matches!(tokens[6], Token::Float(v) if (v - std::f64::consts::PI).abs() < 1e-12));
    }

    #[test]
    fn test_mixed_valid_and_invalid() {
        let (tokens, handler) = lex_all("1 0x 2 1.2.3 3 0o8 4");
        let numbers: Vec<_> = tokens.iter().filter(|t| t.is_number()).collect();
        assert_eq!(numbers.len(), 4);
        assert_eq!(handler.error_count(), 3);
    }

    #[test]
    fn test_lexer_agrees_with_parsers() {
        for literal in ["42", "-42", "0xff", "1.5", "0x1p-3", "1e308"] {
            let (tokens, _) = lex_all(literal);
            match &tokens[..] {
                [Token::Integer(value)] => {
                    let signed = literal.starts_with('-');
                    assert_eq!(parse_integer(literal, signed).as_ref(), Ok(value));
                },
                [Token::Float(value)] => assert_eq!(parse_float(literal), Ok(*value)),
                other => panic!("unexpected tokens for {}: {:?}", literal, other),
            }
        }
    }
}
