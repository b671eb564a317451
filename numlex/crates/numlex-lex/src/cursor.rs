//! Character cursor for traversing source text.
//!
//! The `Cursor` keeps a byte position into the source together with the
//! 1-based line and column of that position, so the lexer can attach a
//! [`Span`](numlex_util::Span) to every token it reports.

/// A cursor over source text.
///
/// # Example
///
/// ```
/// use numlex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("0x1F, 42");
/// assert_eq!(cursor.current_char(), '0');
/// cursor.advance_n(4);
/// assert_eq!(cursor.current_char(), ',');
/// assert_eq!(cursor.column(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or `'\0'` at the end.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead, or `'\0'` past the end.
    ///
    /// ```
    /// use numlex_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("1e5");
    /// assert_eq!(cursor.peek_char(1), 'e');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = &self.source[self.position..];

        // ASCII fast path
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..offset].is_ascii() && b.is_ascii() {
                return b as char;
            }
        }
        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Moves past the current character, updating line and column.
    ///
    /// Does nothing at the end of the source.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.source[self.position..].chars().next() else {
            return;
        };
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Moves past up to `count` characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Advances while `predicate` holds for the current character.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current line (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column (1-based, in characters).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Source text from `start` up to the cursor.
    ///
    /// ```
    /// use numlex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("0b101 7");
    /// cursor.advance_n(5);
    /// assert_eq!(cursor.slice_from(0), "0b101");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// The whole source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The line of source containing byte offset `at`, without its newline.
    ///
    /// ```
    /// use numlex_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("1\n0x2g\n3");
    /// assert_eq!(cursor.line_at(4), "0x2g");
    /// ```
    pub fn line_at(&self, at: usize) -> &'a str {
        let at = at.min(self.source.len());
        let start = self.source[..at].rfind('\n').map_or(0, |i| i + 1);
        let end = self.source[at..]
            .find('\n')
            .map_or(self.source.len(), |i| at + i);
        self.source[start..end].trim_end_matches('\r')
    }
}
