use crate::parsing::cursor::Cursor;
use crate::parsing::span::Span;
use crate::parsing::types::{Dimensions, Notation, ParsedImage};

use super::{non_empty_trimmed, parse_dims};

/// Markdown image reference: `![alt](path)`, optionally `![alt|dims](path)`
/// where `dims` is `W` or `WxH`. The path runs to the first unescaped `)`;
/// a `\)` stays part of the path, backslash included.
pub struct MarkdownImage;

impl MarkdownImage {
    pub const OPEN: &'static str = "![";
    pub const ALT_CLOSE: u8 = b']';
    pub const PATH_OPEN: u8 = b'(';
    pub const PATH_CLOSE: u8 = b')';
    pub const DIMS_SEP: char = '|';
}

/// Attempts to parse a Markdown image reference anywhere on the line.
///
/// The first well-formed occurrence wins. A `![` that does not open a
/// complete reference (unclosed bracket, missing `(`, empty path) restarts
/// the scan just past the opener rather than failing the whole line.
pub fn try_parse(line: &str) -> Option<ParsedImage> {
    let mut from = 0;
    while let Some(found) = line[from..].find(MarkdownImage::OPEN) {
        let at = from + found;
        if let Some(img) = parse_at(line, at) {
            return Some(img);
        }
        from = at + MarkdownImage::OPEN.len();
    }
    None
}

fn parse_at(line: &str, at: usize) -> Option<ParsedImage> {
    let mut cur = Cursor::new(&line[at..], at);
    cur.bump_n(MarkdownImage::OPEN.len());

    let alt_start = cur.pos();
    let alt_end = cur.bump_until(|b| b == MarkdownImage::ALT_CLOSE);
    if cur.peek() != Some(MarkdownImage::ALT_CLOSE) {
        return None;
    }
    cur.bump(); // ]

    if cur.peek() != Some(MarkdownImage::PATH_OPEN) {
        return None;
    }
    cur.bump(); // (

    let path_start = cur.pos();
    let path_end = loop {
        let end = cur.bump_until(|b| b == MarkdownImage::PATH_CLOSE);
        if cur.peek() != Some(MarkdownImage::PATH_CLOSE) {
            return None;
        }
        // Only an unescaped `)` closes the path.
        if end > path_start && line.as_bytes()[end - 1] == b'\\' {
            cur.bump();
            continue;
        }
        break end;
    };
    cur.bump(); // )

    let path = non_empty_trimmed(&line[path_start..path_end])?;
    let (alt, dims) = split_alt_dims(&line[alt_start..alt_end]);

    Some(ParsedImage {
        path,
        alt,
        dims,
        zoom_percent: None,
        notation: Notation::Markdown,
        span: Span {
            start: at,
            end: cur.pos(),
        },
    })
}

/// Splits the bracket text into alt text and an optional dimension suffix.
///
/// The suffix is taken after the last `|` and only when it is a strict
/// dimension match; otherwise the whole bracket text stays alt text.
fn split_alt_dims(bracket: &str) -> (Option<String>, Dimensions) {
    if let Some(idx) = bracket.rfind(MarkdownImage::DIMS_SEP)
        && let Some(dims) = parse_dims(bracket[idx + 1..].trim())
    {
        return (non_empty_trimmed(&bracket[..idx]), dims);
    }
    (non_empty_trimmed(bracket), Dimensions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_reference() {
        let img = try_parse("![cap](img.png)").unwrap();
        assert_eq!(img.path, "img.png");
        assert_eq!(img.alt.as_deref(), Some("cap"));
        assert_eq!(img.dims, Dimensions::default());
        assert_eq!(img.zoom_percent, None);
        assert_eq!(img.notation, Notation::Markdown);
        assert_eq!(img.span, Span { start: 0, end: 15 });
    }

    #[test]
    fn empty_alt() {
        let img = try_parse("![](a.png)").unwrap();
        assert_eq!(img.alt, None);
        assert_eq!(img.path, "a.png");
    }

    #[test]
    fn width_only_suffix() {
        let img = try_parse("![cap|200](a.png)").unwrap();
        assert_eq!(img.alt.as_deref(), Some("cap"));
        assert_eq!(img.dims.width, Some(200));
        assert_eq!(img.dims.height, None);
    }

    #[test]
    fn width_and_height_suffix() {
        let img = try_parse("![cap|200x100](a.png)").unwrap();
        assert_eq!(img.dims.width, Some(200));
        assert_eq!(img.dims.height, Some(100));
    }

    #[test]
    fn non_numeric_suffix_stays_alt() {
        let img = try_parse("![one|two](a.png)").unwrap();
        assert_eq!(img.alt.as_deref(), Some("one|two"));
        assert_eq!(img.dims, Dimensions::default());
    }

    #[test]
    fn dims_taken_after_last_pipe() {
        let img = try_parse("![a|b|150](a.png)").unwrap();
        assert_eq!(img.alt.as_deref(), Some("a|b"));
        assert_eq!(img.dims.width, Some(150));
    }

    #[test]
    fn mid_line_reference_has_exact_span() {
        let line = "see ![shot](shots/1.png) for details";
        let img = try_parse(line).unwrap();
        assert_eq!(img.span.slice(line), "![shot](shots/1.png)");
    }

    #[test]
    fn path_is_trimmed() {
        let img = try_parse("![x]( img.png )").unwrap();
        assert_eq!(img.path, "img.png");
    }

    #[test]
    fn empty_path_fails() {
        assert!(try_parse("![x]()").is_none());
        assert!(try_parse("![x](   )").is_none());
    }

    #[test]
    fn escaped_paren_stays_in_the_path() {
        let line = r"![x](shot \(1\).png)";
        let img = try_parse(line).unwrap();
        assert_eq!(img.path, r"shot \(1\).png");
        assert_eq!(img.span.slice(line), line);
    }

    #[test]
    fn escaped_close_without_a_real_one_fails() {
        assert!(try_parse(r"![x](a\)").is_none());
    }

    #[test]
    fn unclosed_forms_fail() {
        assert!(try_parse("![x](a.png").is_none());
        assert!(try_parse("![x(a.png)").is_none());
        assert!(try_parse("![x] (a.png)").is_none());
    }

    #[test]
    fn wikilink_opener_does_not_match() {
        // `![[` starts a wikilink embed; the bracket text would swallow the
        // inner `[` and the required `(` never follows.
        assert!(try_parse("![[a.png]]").is_none());
    }

    #[test]
    fn broken_opener_then_valid_reference() {
        let line = "![nope] text ![ok](a.png)";
        let img = try_parse(line).unwrap();
        assert_eq!(img.path, "a.png");
        assert_eq!(img.span.slice(line), "![ok](a.png)");
    }

    #[test]
    fn alt_may_contain_a_nested_opener() {
        // Alt text admits anything but `]`, so a stray `![` is swallowed.
        let img = try_parse("![broken ![ok](a.png)").unwrap();
        assert_eq!(img.alt.as_deref(), Some("broken ![ok"));
        assert_eq!(img.path, "a.png");
    }
}
