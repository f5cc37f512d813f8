pub mod parsing;
pub mod resize;
pub mod rewrite;

// Re-export key types for easier usage
pub use parsing::{Dimensions, Notation, ParsedImage, Span, parse_image};
pub use resize::{
    CommitOutcome, ImageElement, Line, Point, Rect, ResizeController, ResizeError, ResizeHost,
    ZoomSettings,
};
pub use rewrite::render_image_tag;
