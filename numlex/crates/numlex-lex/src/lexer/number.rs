//! Number literal lexing.
//!
//! The lexer first munches the maximal run of characters that could belong
//! to a literal, then decides what the run is: an integer, a float, or an
//! invalid literal whose exact fault is reported.

use numlex_util::{DiagnosticBuilder, DiagnosticCode};
use tracing::trace;

use crate::number::{
    is_valid_float, is_valid_integer, looks_like_float, parse_integer, FloatLiteral, NumberError,
    NumeralKind, DIGIT_SEPARATOR,
};
use crate::token::Token;
use crate::Lexer;

/// Characters that continue a literal once it has started.
#[inline]
fn is_literal_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == DIGIT_SEPARATOR
}

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal starting at the cursor.
    ///
    /// # Number Formats
    ///
    /// - Decimal: `42`, `-7`, `1'000'000`
    /// - Hexadecimal: `0xFF`, `0xDEAD'BEEF`
    /// - Octal: `0o755`
    /// - Binary: `0b1010'0101`
    /// - Float: `3.14`, `.5`, `6.022e23`, `1e-9`, `0x1.8p1`
    pub(crate) fn lex_number(&mut self) -> Token {
        let start = self.cursor.position();
        if matches!(self.cursor.current_char(), '+' | '-') {
            self.cursor.advance();
        }
        let body_start = self.cursor.position();

        while !self.cursor.is_at_end() && is_literal_char(self.cursor.current_char()) {
            let c = self.cursor.current_char();
            self.cursor.advance();

            // An exponent sign belongs to the literal.
            if matches!(self.cursor.current_char(), '+' | '-') {
                let kind = NumeralKind::classify(self.cursor.slice_from(body_start));
                if kind.is_exponent_marker(c) {
                    self.cursor.advance();
                }
            }
        }

        let text = self.cursor.slice_from(start);
        self.classify_literal(text, start != body_start)
    }

    fn classify_literal(&self, text: &str, signed: bool) -> Token {
        if is_valid_integer(text) {
            trace!(literal = text, "integer literal");
            return match parse_integer(text, signed) {
                Ok(value) => Token::Integer(value),
                Err(err) => self.disagreement(text, &err),
            };
        }

        if is_valid_float(text) {
            trace!(literal = text, "float literal");
            return match FloatLiteral::parse(text) {
                Ok(literal) => {
                    if literal.truncated && self.options.warn_on_truncated_fraction {
                        self.warn_truncated(text, literal.kind);
                    }
                    Token::Float(literal.value)
                },
                Err(err) => self.disagreement(text, &err),
            };
        }

        let float_shaped = looks_like_float(text);
        trace!(literal = text, float_shaped, "invalid literal");
        let outcome = if float_shaped {
            FloatLiteral::parse(text).map(|_| ())
        } else {
            parse_integer(text, signed).map(|_| ())
        };
        match outcome {
            Err(err) => self.report(&err),
            Ok(()) => self.report(&NumberError::invariant(format!(
                "validation rejected `{}` but parsing accepted it",
                text
            ))),
        }
        Token::Invalid(text.to_string())
    }

    fn disagreement(&self, text: &str, err: &NumberError) -> Token {
        self.report(&NumberError::invariant(format!(
            "validation accepted `{}` but parsing failed: {}",
            text, err
        )));
        Token::Invalid(text.to_string())
    }

    fn warn_truncated(&self, text: &str, kind: NumeralKind) {
        DiagnosticBuilder::warning(format!(
            "fraction of `{}` has more than {} digits; the rest do not affect the value",
            text,
            kind.max_fraction_digits()
        ))
        .code(DiagnosticCode::W_LEXER_FRACTION_TRUNCATED)
        .span(self.token_span())
        .emit(self.handler);
    }
}
