//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Parsing functions report failures through typed results; this module is
//! the channel the lexer driver and the command-line front end use to turn
//! those failures into human-readable reports.
//!
//! # Examples
//!
//! ```
//! use numlex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use numlex_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("numeric literal `0x1ffffffffffffffff` is out of range")
//!     .code(DiagnosticCode::E_LEXER_NUMBER_OVERFLOW)
//!     .span(Span::new(0, 19, 1, 1))
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;
mod level;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use level::{ColorConfig, Level};

use crate::span::Span;
use std::cell::RefCell;
use std::fmt;

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Render the diagnostic as a multi-line report
    ///
    /// ```text
    /// error[E1003]: invalid numeric literal `0b102`: invalid binary digit '2' at offset 4
    ///   --> 1:1
    ///   1 | 0b102
    ///     |     ^
    ///   = help: ...
    /// ```
    ///
    /// With `color` set the header is wrapped in the level's ANSI color.
    pub fn render(&self, color: bool) -> String {
        let mut header = self.level.name().to_string();
        if let Some(code) = self.code {
            header.push_str(&format!("[{}]", code));
        }
        if color {
            header = format!("\x1b[1;{}m{}\x1b[0m", self.level.color_code(), header);
        }

        let mut out = format!("{}: {}", header, self.message);
        if !self.span.is_dummy() {
            out.push_str(&format!("\n  --> {}:{}", self.span.line, self.span.column));
        }
        for snippet in &self.snippets {
            out.push('\n');
            out.push_str(&snippet.format());
        }
        for note in &self.notes {
            out.push_str(&format!("\n  = note: {}", note));
        }
        for help in &self.helps {
            out.push_str(&format!("\n  = help: {}", help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` is the message sink of the lexer: it accepts diagnostics of
/// any [`Level`] and keeps them for the caller to inspect or print. A
/// [`Level::Fatal`] diagnostic is recorded and then aborts the current
/// operation with a panic, because it signals a defect in the calling code.
///
/// # Examples
///
/// ```
/// use numlex_util::diagnostic::{Diagnostic, Handler};
/// use numlex_util::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::warning("fraction truncated", Span::DUMMY));
///
/// assert!(!handler.has_errors());
/// assert_eq!(handler.warning_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    ///
    /// # Panics
    ///
    /// Panics after recording a diagnostic whose level is [`Level::Fatal`].
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        let fatal = diagnostic.level.is_fatal().then(|| diagnostic.message.clone());
        self.diagnostics.borrow_mut().push(diagnostic);
        if let Some(message) = fatal {
            panic!("fatal diagnostic: {}", message);
        }
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors (fatal diagnostics included)
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_warning())
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}
