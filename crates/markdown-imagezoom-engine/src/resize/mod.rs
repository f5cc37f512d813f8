//! # Drag-to-zoom state machine
//!
//! Owns the resize drag lifecycle for one inline image:
//!
//! - **Arm** (`Idle → Dragging`): a qualifying press resolves the image's
//!   line, parses its notation and snapshots a [`DragSession`]. Legacy
//!   notations (Markdown, Wikilink) are upgraded to the HTML tag notation
//!   with one atomic replacement; HTML sources arm without touching the text.
//! - **Move** (preview loop): radial pointer distance maps to a zoom
//!   percentage applied as a transient visual scale. No text mutation, cheap
//!   enough for native pointer-event frequency.
//! - **Commit** (`Dragging → Idle`): the final zoom is rendered into a tag
//!   and written over a span re-derived from the *current* line text,
//!   anchored by path identity rather than stored offsets.
//! - **Abort paths**: a text change that detaches the tracked element, an
//!   unlocatable anchor or refused edit at commit, or host teardown all
//!   release the session with the document left exactly as it was.
//!
//! Single-threaded and event-driven: every handler runs to completion before
//! the next event, and every handler is a session-presence-guarded no-op
//! when it does not apply. At most one [`DragSession`] exists at a time.

pub mod controller;
pub mod geometry;
pub mod host;
pub mod session;
pub mod zoom;

pub use controller::{CommitOutcome, ResizeController};
pub use geometry::{Point, Rect};
pub use host::{ImageElement, Line, ResizeHost};
pub use session::DragSession;
pub use zoom::{DEFAULT_SENSITIVITY, MAX_ZOOM, MIN_ZOOM, ZoomSettings};

/// Internal failure taxonomy for the resize core.
///
/// No variant is ever fatal to the host: arm failures leave the machine
/// Idle with no visible effect, commit failures discard the visual preview
/// and leave the text unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ResizeError {
    /// The image element does not map to a document position.
    #[error("image element does not resolve to a document position")]
    PositionUnresolved,
    /// No image notation matched on the resolved line.
    #[error("no image syntax on line at offset {0}")]
    NoSyntaxAtLine(usize),
    /// The session's image reference can no longer be located at commit time.
    #[error("image reference `{0}` can no longer be located on its line")]
    AnchorLost(String),
    /// The host refused a replacement edit (read-only buffer, stale range).
    #[error("host rejected the replacement edit for `{0}`")]
    EditRejected(String),
    /// A session snapshot no longer resolves at use time. Defensive only.
    #[error("drag session snapshot invalid: {0}")]
    SessionInvariant(&'static str),
}
