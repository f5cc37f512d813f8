//! # Image Notation Kinds
//!
//! One module per source grammar, each owning its delimiter constants and
//! exposing a single pure `try_parse(line)` entry point so the grammars can
//! be unit-tested in isolation.
//!
//! - **`markdown`**: `![alt|dims](path)` — `OPEN = b"!["`
//! - **`wikilink`**: `![[path|suffix]]` — `OPEN = b"![["`, `CLOSE = b"]]"`
//! - **`html_tag`**: `<img ...>` — regex attribute/style scan
//!
//! Delimiter constants live here, not scattered in parser code; the grammar
//! functions call the constants and never hardcode `![` or `]]`.

pub mod html_tag;
pub mod markdown;
pub mod wikilink;

use crate::parsing::types::Dimensions;

/// Parses a dimension suffix: a bare width (`"200"`) or `WxH` (`"200x100"`).
///
/// Strict match: the whole input must be consumed and every value must be a
/// positive base-10 integer, otherwise the suffix is not dimensions at all.
pub(crate) fn parse_dims(s: &str) -> Option<Dimensions> {
    match s.split_once('x') {
        Some((w, h)) => Some(Dimensions {
            width: Some(parse_px(w)?),
            height: Some(parse_px(h)?),
        }),
        None => Some(Dimensions {
            width: Some(parse_px(s)?),
            height: None,
        }),
    }
}

fn parse_px(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let v: u32 = s.parse().ok()?;
    (v > 0).then_some(v)
}

/// Trims a captured text field, mapping an all-whitespace capture to `None`.
pub(crate) fn non_empty_trimmed(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
