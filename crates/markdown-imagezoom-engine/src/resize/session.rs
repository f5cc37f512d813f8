use crate::parsing::types::Dimensions;
use crate::resize::geometry::Point;
use crate::resize::host::Line;

/// State for one drag gesture, created on a qualifying press and destroyed
/// on release, abort or teardown.
///
/// Everything here is a snapshot from arm time. Explicit width/height are
/// carried through a drag unchanged; only the zoom percentage moves. The
/// line snapshot is advisory: commit re-derives its replacement target from
/// the current text, anchored by path identity, and uses the snapshot only
/// as a re-anchor hint of last resort.
pub struct DragSession<I> {
    /// The tracked image element, borrowed for the session's lifetime.
    pub(crate) image: I,
    /// Image source path, the identity key for re-anchoring.
    pub(crate) path: String,
    /// Alt text at arm time.
    pub(crate) alt: Option<String>,
    /// Explicit dimensions at arm time, never derived from zoom.
    pub(crate) dims: Dimensions,
    /// Line snapshot at arm time. Stale after any subsequent edit.
    pub(crate) line: Line,
    /// Zoom in effect at arm time: 100 after an upgrade, else the
    /// previously recorded zoom.
    pub(crate) baseline_zoom: u32,
    /// Pointer position at arm time, in screen space.
    pub(crate) pointer_origin: Point,
    /// Image center at arm time; the element is assumed stationary on
    /// screen while dragging, so this is computed once.
    pub(crate) image_center: Point,
    /// Distance from `pointer_origin` to `image_center`.
    pub(crate) baseline_distance: f64,
}
