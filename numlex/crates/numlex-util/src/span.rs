//! Source location tracking.
//!
//! A [`Span`] identifies a byte range in a source text together with the
//! 1-based line and column of its first character, which is what the
//! diagnostic renderer needs to point at a literal.

/// Source location span
///
/// # Examples
///
/// ```
/// use numlex_util::span::Span;
///
/// let span = Span::new(4, 8, 1, 5);
/// assert_eq!(span.len(), 4);
/// assert!(span.contains(6));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for diagnostics that have no source location
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if this span contains a byte offset
    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Returns true if this is the dummy span
    #[inline]
    pub const fn is_dummy(&self) -> bool {
        self.line == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20, 2, 3);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.line, 2);
        assert_eq!(span.column, 3);
    }

    #[test]
    fn test_span_len_and_empty() {
        assert_eq!(Span::new(3, 7, 1, 4).len(), 4);
        assert!(Span::new(5, 5, 1, 6).is_empty());
        // Inverted ranges never underflow
        assert_eq!(Span::new(7, 3, 1, 1).len(), 0);
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(10, 20, 1, 1);
        assert!(span.contains(10));
        assert!(span.contains(19));
        assert!(!span.contains(20));
        assert!(!span.contains(9));
    }

    #[test]
    fn test_span_dummy() {
        assert!(Span::DUMMY.is_dummy());
        assert!(!Span::new(0, 1, 1, 1).is_dummy());
        assert_eq!(Span::default(), Span::DUMMY);
    }
}
