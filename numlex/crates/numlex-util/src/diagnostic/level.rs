//! Diagnostic severity levels and color configuration.
//!
//! # Examples
//!
//! ```
//! use numlex_util::diagnostic::Level;
//!
//! assert!(Level::Error.is_error());
//! assert!(Level::Fatal.is_error());
//! assert!(!Level::Warning.is_error());
//! assert!(Level::Fatal > Level::Error);
//! ```

use std::fmt;

/// Diagnostic severity level
///
/// Levels are ordered by severity, so `Warning < Error < Fatal`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Suspicious input that is still accepted
    Warning,
    /// A rejected literal; the caller reports it and continues
    Error,
    /// A violated internal precondition
    ///
    /// Fatal diagnostics indicate a defect in the calling code rather than
    /// in the input text. Emitting one through a [`Handler`](super::Handler)
    /// aborts the current operation.
    Fatal,
}

impl Level {
    /// Returns true for `Error` and `Fatal`
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error | Level::Fatal)
    }

    /// Returns true if this level represents a warning
    #[inline]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Level::Warning)
    }

    /// Returns true if this level is fatal
    #[inline]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Level::Fatal)
    }

    /// Returns the canonical name for this level
    ///
    /// # Examples
    ///
    /// ```
    /// use numlex_util::diagnostic::Level;
    ///
    /// assert_eq!(Level::Error.name(), "error");
    /// assert_eq!(Level::Fatal.name(), "fatal error");
    /// ```
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Fatal => "fatal error",
        }
    }

    /// Returns the ANSI color code for this level
    #[inline]
    pub const fn color_code(&self) -> &'static str {
        match self {
            Level::Warning => "33", // Yellow
            Level::Error => "31",   // Red
            Level::Fatal => "35",   // Magenta
        }
    }

    /// Returns a short single-character indicator for this level
    #[inline]
    pub const fn indicator(&self) -> &'static str {
        match self {
            Level::Warning => "W",
            Level::Error => "E",
            Level::Fatal => "!",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Color configuration for diagnostic rendering
///
/// # Examples
///
/// ```
/// use numlex_util::diagnostic::ColorConfig;
///
/// assert!(ColorConfig::Always.use_color(false));
/// assert!(!ColorConfig::Never.use_color(true));
/// assert!(ColorConfig::Auto.use_color(true));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ColorConfig {
    /// Use colors only when writing to a terminal
    #[default]
    Auto,
    /// Always use colors, even in pipes
    Always,
    /// Never use colors
    Never,
}

impl ColorConfig {
    /// Returns true if colors should be used for the given environment
    pub const fn use_color(&self, is_tty: bool) -> bool {
        match self {
            ColorConfig::Auto => is_tty,
            ColorConfig::Always => true,
            ColorConfig::Never => false,
        }
    }

    /// Parses a configuration name (`auto`, `always`, `never`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "auto" => Some(ColorConfig::Auto),
            "always" => Some(ColorConfig::Always),
            "never" => Some(ColorConfig::Never),
            _ => None,
        }
    }
}
