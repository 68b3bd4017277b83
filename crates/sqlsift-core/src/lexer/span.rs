//! Byte ranges into the query text.

use serde::Serialize;

/// A half-open byte range `start..end` in the source query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates an empty span at `offset`, used for the EOF sentinel.
    #[must_use]
    pub const fn empty_at(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the slice of `source` covered by this span.
    ///
    /// Returns `None` when the span is out of range or splits a UTF-8
    /// character.
    #[must_use]
    pub fn slice<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len_and_empty() {
        let span = Span::new(7, 11);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert!(Span::empty_at(3).is_empty());
    }

    #[test]
    fn test_span_slice() {
        let sql = "SELECT name FROM users";
        assert_eq!(Span::new(7, 11).slice(sql), Some("name"));
        assert_eq!(Span::new(20, 40).slice(sql), None);
    }
}
