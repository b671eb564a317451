//! Core lexer implementation.
//!
//! This module contains the `Lexer` struct, token dispatch and the
//! conversion of [`NumberError`]s into diagnostics.

use numlex_util::{DiagnosticBuilder, DiagnosticCode, Handler, SourceSnippet, Span};
use tracing::trace;

use super::LexOptions;
use crate::cursor::Cursor;
use crate::number::NumberError;
use crate::token::Token;

/// Lexer for whitespace-separated numeric literals.
///
/// Tokens may be separated by whitespace, `,` or `;`. Every malformed
/// literal produces a [`Token::Invalid`] and one diagnostic on the handler;
/// lexing then carries on with the next token.
///
/// # Example
///
/// ```
/// use numlex_lex::{Lexer, Token};
/// use numlex_lex::number::IntegerValue;
/// use numlex_util::Handler;
///
/// let handler = Handler::new();
/// let tokens: Vec<Token> = Lexer::new("0xFF, 1.5", &handler).collect();
///
/// assert_eq!(
///     tokens,
///     vec![Token::Integer(IntegerValue::Unsigned(255)), Token::Float(1.5)]
/// );
/// assert!(!handler.has_errors());
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Sink for lexical diagnostics.
    pub(crate) handler: &'a Handler,

    pub(crate) options: LexOptions,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    pub(crate) token_start_line: u32,

    /// Column number where the current token starts (1-based).
    pub(crate) token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with default options.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self::with_options(source, handler, LexOptions::default())
    }

    /// Creates a lexer with the given options.
    pub fn with_options(source: &'a str, handler: &'a Handler, options: LexOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            options,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// The options this lexer was created with.
    pub fn options(&self) -> &LexOptions {
        &self.options
    }

    /// Returns the next token, or `Token::Eof` at the end of the source.
    ///
    /// After `Eof` has been returned once, every further call returns it
    /// again.
    pub fn next_token(&mut self) -> Token {
        self.skip_separators();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Token::Eof;
        }

        let c = self.cursor.current_char();
        if self.starts_number(c) {
            return self.lex_number();
        }

        self.cursor.advance();
        self.report_unexpected(c);
        Token::Invalid(c.to_string())
    }

    /// Span of the most recently returned token.
    pub fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    fn skip_separators(&mut self) {
        self.cursor
            .eat_while(|c| c.is_whitespace() || c == ',' || c == ';');
    }

    /// Whether a literal starts at the cursor, whose current char is `c`.
    fn starts_number(&self, c: char) -> bool {
        let next = self.cursor.peek_char(1);
        match c {
            '0'..='9' => true,
            '.' => next.is_ascii_digit(),
            '+' | '-' if self.options.signed_integers => {
                next.is_ascii_digit()
                    || (next == '.' && self.cursor.peek_char(2).is_ascii_digit())
            },
            _ => false,
        }
    }

    fn report_unexpected(&self, c: char) {
        trace!(found = ?c, line = self.token_start_line, "unexpected character");
        DiagnosticBuilder::error(format!("unexpected character {:?}", c))
            .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
            .span(self.token_span())
            .snippet(
                self.snippet_at(0)
                    .with_label("cannot start a numeric literal"),
            )
            .emit(self.handler);
    }

    /// Emits the diagnostic for a rejected literal.
    ///
    /// `InternalInvariant` errors are fatal: the handler panics after
    /// recording them.
    pub(crate) fn report(&self, err: &NumberError) {
        let span = self.token_span();

        if err.is_internal() {
            DiagnosticBuilder::fatal(err.to_string())
                .code(err.code())
                .span(span)
                .emit(self.handler);
            return;
        }

        let mut builder = DiagnosticBuilder::error(err.to_string())
            .code(err.code())
            .span(span);

        match err.syntax_error() {
            Some(reason) => {
                if let Some(offset) = reason.offset() {
                    builder = builder.snippet(self.snippet_at(offset).with_label(reason.label()));
                }
            },
            None => {
                let width = self.cursor.slice_from(self.token_start).chars().count();
                let column = self.token_start_column as usize;
                builder = builder.snippet(SourceSnippet::new(
                    self.cursor.line_at(self.token_start),
                    self.token_start_line as usize,
                    column,
                    column + width.max(1),
                    Some("value out of range"),
                ));
            },
        }

        if let Some(help) = err.help() {
            builder = builder.help(help);
        }
        builder.emit(self.handler);
    }

    /// A snippet pointing at byte `offset` of the current token.
    pub(crate) fn snippet_at(&self, offset: usize) -> SourceSnippet {
        let token = self.cursor.slice_from(self.token_start);
        let chars_before = token.get(..offset).map_or(0, |s| s.chars().count());
        SourceSnippet::point(
            self.cursor.line_at(self.token_start),
            self.token_start_line as usize,
            self.token_start_column as usize + chars_before,
        )
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Token::Eof => None,
            token => Some(token),
        }
    }
}
