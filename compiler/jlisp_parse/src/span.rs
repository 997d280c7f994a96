//! Source location spans.

use std::fmt;

/// Byte range into the source text.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from input start
/// - end: u32 - byte offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create from a byte range, saturating offsets past `u32::MAX`.
    #[inline]
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        let start = u32::try_from(range.start).unwrap_or(u32::MAX);
        let end = u32::try_from(range.end).unwrap_or(u32::MAX);
        Span { start, end }
    }

    /// Empty span positioned at `offset`.
    #[inline]
    pub fn point(offset: usize) -> Self {
        Self::from_range(offset..offset)
    }

    /// Smallest span covering both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// One-based line and column of the span start within `source`.
    ///
    /// Columns count characters, not bytes.
    pub fn line_col(&self, source: &str) -> (u32, u32) {
        let offset = (self.start as usize).min(source.len());
        let mut line = 1u32;
        let mut column = 1u32;
        for (idx, ch) in source.char_indices() {
            if idx >= offset {
                break;
            }
            if ch == '\n' {
                line = line.saturating_add(1);
                column = 1;
            } else {
                column = column.saturating_add(1);
            }
        }
        (line, column)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_and_point() {
        let a = Span::new(2, 5);
        let b = Span::new(7, 9);
        assert_eq!(a.merge(b), Span::new(2, 9));
        assert_eq!(b.merge(a), Span::new(2, 9));
        assert_eq!(Span::point(4), Span::new(4, 4));
    }

    #[test]
    fn test_line_col_single_line() {
        assert_eq!(Span::new(0, 1).line_col("(+ 1 2)"), (1, 1));
        assert_eq!(Span::new(3, 4).line_col("(+ 1 2)"), (1, 4));
    }

    #[test]
    fn test_line_col_multi_line() {
        let source = "(+ 1\n   2)";
        assert_eq!(Span::new(8, 9).line_col(source), (2, 4));
    }

    #[test]
    fn test_line_col_past_end_clamps() {
        assert_eq!(Span::point(100).line_col("ab"), (1, 3));
    }
}
