use crate::parsing::cursor::Cursor;
use crate::parsing::span::Span;
use crate::parsing::types::{Dimensions, Notation, ParsedImage};

use super::{non_empty_trimmed, parse_dims};

/// Wikilink image embed: `![[path]]` or `![[path|suffix]]`.
///
/// The suffix is classified strictly: a full dimension match (`W` or `WxH`)
/// is dimensions, anything else is alt text verbatim. A suffix is never
/// split into partial dimensions plus alt text.
pub struct WikilinkImage;

impl WikilinkImage {
    pub const OPEN: &'static str = "![[";
    pub const CLOSE: &'static str = "]]";
    pub const SUFFIX_SEP: u8 = b'|';
}

/// Attempts to parse a wikilink image embed anywhere on the line.
pub fn try_parse(line: &str) -> Option<ParsedImage> {
    let mut from = 0;
    while let Some(found) = line[from..].find(WikilinkImage::OPEN) {
        let at = from + found;
        if let Some(img) = parse_at(line, at) {
            return Some(img);
        }
        from = at + WikilinkImage::OPEN.len();
    }
    None
}

fn parse_at(line: &str, at: usize) -> Option<ParsedImage> {
    let mut cur = Cursor::new(&line[at..], at);
    cur.bump_n(WikilinkImage::OPEN.len());

    // Path excludes `|` and `]`.
    let path_start = cur.pos();
    let path_end = cur.bump_until(|b| b == WikilinkImage::SUFFIX_SEP || b == b']');

    let mut suffix = None;
    if cur.peek() == Some(WikilinkImage::SUFFIX_SEP) {
        cur.bump(); // |
        let suffix_start = cur.pos();
        let suffix_end = cur.bump_until(|b| b == b']');
        suffix = Some(&line[suffix_start..suffix_end]);
    }

    if !cur.starts_with(WikilinkImage::CLOSE.as_bytes()) {
        return None;
    }
    cur.bump_n(WikilinkImage::CLOSE.len());

    let path = non_empty_trimmed(&line[path_start..path_end])?;
    let (alt, dims) = match suffix {
        Some(s) => match parse_dims(s.trim()) {
            Some(dims) => (None, dims),
            None => (non_empty_trimmed(s), Dimensions::default()),
        },
        None => (None, Dimensions::default()),
    };

    Some(ParsedImage {
        path,
        alt,
        dims,
        zoom_percent: None,
        notation: Notation::Wikilink,
        span: Span {
            start: at,
            end: cur.pos(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_embed() {
        let img = try_parse("![[a.png]]").unwrap();
        assert_eq!(img.path, "a.png");
        assert_eq!(img.alt, None);
        assert_eq!(img.dims, Dimensions::default());
        assert_eq!(img.notation, Notation::Wikilink);
        assert_eq!(img.span, Span { start: 0, end: 10 });
    }

    #[test]
    fn width_suffix_is_dimensions_not_alt() {
        let img = try_parse("![[a.png|150]]").unwrap();
        assert_eq!(img.dims.width, Some(150));
        assert_eq!(img.dims.height, None);
        assert_eq!(img.alt, None);
    }

    #[test]
    fn width_height_suffix() {
        let img = try_parse("![[a.png|150x80]]").unwrap();
        assert_eq!(img.dims.width, Some(150));
        assert_eq!(img.dims.height, Some(80));
        assert_eq!(img.alt, None);
    }

    #[test]
    fn text_suffix_is_alt_verbatim() {
        let img = try_parse("![[a.png|caption]]").unwrap();
        assert_eq!(img.alt.as_deref(), Some("caption"));
        assert_eq!(img.dims, Dimensions::default());
    }

    #[test]
    fn near_dims_suffix_is_never_split() {
        // `150x` is not a strict dimension match, so the whole suffix is alt.
        let img = try_parse("![[a.png|150x]]").unwrap();
        assert_eq!(img.alt.as_deref(), Some("150x"));
        assert_eq!(img.dims, Dimensions::default());
    }

    #[test]
    fn mid_line_embed_has_exact_span() {
        let line = "before ![[pic.jpg|200x100]] after";
        let img = try_parse(line).unwrap();
        assert_eq!(img.span.slice(line), "![[pic.jpg|200x100]]");
    }

    #[test]
    fn path_is_trimmed() {
        let img = try_parse("![[ a.png ]]").unwrap();
        assert_eq!(img.path, "a.png");
    }

    #[test]
    fn empty_path_fails() {
        assert!(try_parse("![[]]").is_none());
        assert!(try_parse("![[|150]]").is_none());
    }

    #[test]
    fn unclosed_embed_fails() {
        assert!(try_parse("![[a.png").is_none());
        assert!(try_parse("![[a.png]").is_none());
        assert!(try_parse("![[a.png|150").is_none());
    }

    #[test]
    fn empty_suffix_is_no_alt() {
        let img = try_parse("![[a.png|]]").unwrap();
        assert_eq!(img.alt, None);
        assert_eq!(img.dims, Dimensions::default());
    }
}
