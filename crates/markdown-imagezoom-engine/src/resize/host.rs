use crate::resize::geometry::Rect;

/// A line of document text with its absolute byte offsets.
///
/// A `Line` is a snapshot: it reflects the document at the moment it was
/// fetched and becomes advisory the instant any later edit lands. Consumers
/// must re-fetch before using it as a replacement target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    /// Byte offset of the line start in the document.
    pub start: usize,
    /// Byte offset of the line end (exclusive) in the document.
    pub end: usize,
}

/// The on-screen image element being resized.
///
/// Borrowed by the drag session for its duration only; the element itself is
/// owned by the host's render layer.
pub trait ImageElement {
    /// Current bounding box in screen space.
    fn bounding_box(&self) -> Rect;

    /// Applies a transient visual zoom percentage. Rendering-only: must not
    /// touch the document text.
    fn set_preview_zoom(&mut self, percent: u32);

    /// Reads back the transient zoom, if one is currently applied.
    fn preview_zoom(&self) -> Option<u32>;

    /// Whether the element is still part of the live document view.
    fn is_attached(&self) -> bool;
}

/// The text-engine and pointer collaborators the resize core consumes.
///
/// Everything the state machine needs from its host, and nothing else: the
/// engine never sees a full document model, only line snapshots and atomic
/// range replacements.
pub trait ResizeHost {
    type Image: ImageElement;

    /// Maps an image element to a document byte position, or fails.
    fn resolve_position(&self, image: &Self::Image) -> Option<usize>;

    /// Fetches the line containing the given document position.
    fn line_at(&self, pos: usize) -> Option<Line>;

    /// Replaces `[start, end)` with `text` as one atomic edit. Returns
    /// whether the edit was applied. Called at most twice per gesture: once
    /// at arm (notation upgrade) and once at release (commit).
    fn replace_range(&mut self, start: usize, end: usize, text: &str) -> bool;

    /// Attaches or detaches document-global pointer listeners. Acquired
    /// exactly once when a drag arms and released on every exit path.
    fn set_pointer_tracking(&mut self, active: bool);
}
