//! Image syntax rewriting.
//!
//! Serializes a canonical image record back into the single supported output
//! notation: an HTML `<img>` tag with explicit style declarations. The two
//! legacy notations are read-only inputs that get upgraded to this one on
//! first interaction.

use crate::parsing::types::Dimensions;

/// Renders the canonical output tag.
///
/// Attribute order is fixed (`src`, `alt`, `style`); the style concatenates
/// `width: <W>px;` and `height: <H>px;` when given, then always
/// `zoom: <Z>%;`. The `alt` attribute is always present (empty when there is
/// no alt text) and is attribute-escaped. `path` is embedded verbatim: the
/// source path space is the user's own document references, so callers must
/// validate separately before passing untrusted input.
pub fn render_image_tag(path: &str, alt: Option<&str>, dims: Dimensions, zoom_percent: u32) -> String {
    let mut style = String::new();
    if let Some(w) = dims.width {
        style.push_str(&format!("width: {w}px; "));
    }
    if let Some(h) = dims.height {
        style.push_str(&format!("height: {h}px; "));
    }
    style.push_str(&format!("zoom: {zoom_percent}%;"));

    let alt = html_escape::encode_quoted_attribute(alt.unwrap_or(""));
    format!(r#"<img src="{path}" alt="{alt}" style="{style}">"#)
}
