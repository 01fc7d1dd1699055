//! Source locations

use std::ops::Range;

/// Byte range of a declaration in its source file, with the 1-based
/// line/column of its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start byte offset
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Line of `start`
    pub line: u32,
    /// Column of `start`
    pub column: u32,
}

impl Span {
    /// Create a span
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no bytes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte range, as codespan labels expect it
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
