use serde::Serialize;

use crate::parsing::span::Span;

/// Which of the three source grammars matched.
///
/// Exactly one notation is reported per successful parse. Markdown and
/// Wikilink are read-only legacy inputs; `HtmlTag` is the only notation the
/// rewriter ever emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Notation {
    /// `![alt|dims](path)`
    Markdown,
    /// `![[path|suffix]]`
    Wikilink,
    /// `<img src=".." alt=".." style="..">`
    HtmlTag,
}

/// Explicit pixel dimensions carried by the source notation.
///
/// Width and height are independently optional and are preserved verbatim
/// across a drag; resizing only ever changes the zoom percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Canonical decomposition of one inline image reference on a line.
///
/// Produced fresh per parse call and owned by the caller. `path` is always
/// non-empty on success, and `span` re-slices the source line to the exact
/// substring the grammar consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedImage {
    /// The image source reference (file path or URL), whitespace-trimmed.
    pub path: String,
    /// Human-readable alternative text, if the notation carried any.
    pub alt: Option<String>,
    /// Explicit width/height from the source notation.
    pub dims: Dimensions,
    /// Zoom percentage, present only for `HtmlTag` sources with a zoom style.
    pub zoom_percent: Option<u32>,
    /// Which grammar matched.
    pub notation: Notation,
    /// Exact substring consumed, relative to the line start.
    pub span: Span,
}
