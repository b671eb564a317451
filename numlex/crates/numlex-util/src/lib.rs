//! numlex-util - Diagnostics and Source Locations
//!
//! This crate holds the reporting infrastructure shared by the numeric
//! literal lexer and its command-line front end:
//!
//! - [`span`] - byte ranges with line/column information
//! - [`diagnostic`] - severity levels, diagnostic codes, source snippets,
//!   the fluent [`DiagnosticBuilder`] and the [`Handler`] message sink
//!
//! # Example
//!
//! ```
//! use numlex_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("invalid numeric literal `0x`")
//!     .code(DiagnosticCode::E_LEXER_INVALID_NUMBER)
//!     .span(Span::new(0, 2, 1, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{
    ColorConfig, Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use span::Span;
