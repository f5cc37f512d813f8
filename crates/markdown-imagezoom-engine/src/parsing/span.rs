use serde::Serialize;

/// A byte range `[start, end)` relative to the start of a source line.
///
/// Parsed image records store the span of the exact substring they consumed,
/// so slicing the source line with the span reproduces the match verbatim.
/// Spans exist for replacement targeting only, never for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices the source line to the matched substring.
    ///
    /// Panics if the span does not lie on byte boundaries of `line`; callers
    /// only slice the line a span was produced from.
    #[must_use]
    pub fn slice(self, line: &str) -> &str {
        &line[self.start..self.end]
    }
}
