//! Lexer configuration.

/// Switches that change how the [`Lexer`](super::Lexer) treats literals.
///
/// # Example
///
/// ```
/// use numlex_lex::LexOptions;
///
/// let options = LexOptions::new().signed_integers(false);
/// assert!(!options.signed_integers);
/// assert!(options.warn_on_truncated_fraction);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexOptions {
    /// Accept a leading `+`/`-` on integer literals and keep it in the value.
    ///
    /// When off, a sign cannot start a token and is reported as an
    /// unexpected character.
    pub signed_integers: bool,
    /// Emit a warning when a float's fraction has more digits than
    /// contribute to its value.
    pub warn_on_truncated_fraction: bool,
}

impl LexOptions {
    /// Options with every switch at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets [`signed_integers`](Self::signed_integers).
    pub fn signed_integers(mut self, enabled: bool) -> Self {
        self.signed_integers = enabled;
        self
    }

    /// Sets [`warn_on_truncated_fraction`](Self::warn_on_truncated_fraction).
    pub fn warn_on_truncated_fraction(mut self, enabled: bool) -> Self {
        self.warn_on_truncated_fraction = enabled;
        self
    }
}

impl Default for LexOptions {
    fn default() -> Self {
        Self {
            signed_integers: true,
            warn_on_truncated_fraction: true,
        }
    }
}
