use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::span::Span;
use crate::parsing::types::{Dimensions, Notation, ParsedImage};

use super::non_empty_trimmed;

/// HTML image tag: a single self-contained `<img ...>` tag.
///
/// `src` is the only mandatory attribute; `alt` and `style` are optional.
/// The style content is scanned independently for `width: <N>px`,
/// `height: <N>px` and `zoom: <N>%` declarations (the `%` is optional).
pub struct HtmlImageTag;

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<img\b[^>]*>").expect("invalid img tag regex"))
}

fn src_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)(?:^|\s)src\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
            .expect("invalid src attribute regex")
    })
}

fn alt_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)(?:^|\s)alt\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
            .expect("invalid alt attribute regex")
    })
}

fn style_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)(?:^|\s)style\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
            .expect("invalid style attribute regex")
    })
}

fn width_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:^|[;\s])width\s*:\s*(\d+)\s*px").expect("invalid width regex")
    })
}

fn height_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:^|[;\s])height\s*:\s*(\d+)\s*px").expect("invalid height regex")
    })
}

fn zoom_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:^|[;\s])zoom\s*:\s*(\d+)\s*%?").expect("invalid zoom regex")
    })
}

/// Attempts to parse an `<img>` tag anywhere on the line.
///
/// Tags without a usable `src` attribute are skipped and the scan continues
/// with the next tag on the line.
pub fn try_parse(line: &str) -> Option<ParsedImage> {
    tag_regex()
        .find_iter(line)
        .find_map(|m| parse_tag(line, m.start(), m.end()))
}

/// Locates the `<img>` tag on `line` whose `src` equals `path` exactly.
///
/// Used by the resize commit step to re-anchor its replacement by path
/// identity instead of stored offsets. First match wins when a line carries
/// two tags with an identical path.
pub fn find_with_path(line: &str, path: &str) -> Option<Span> {
    tag_regex().find_iter(line).find_map(|m| {
        let img = parse_tag(line, m.start(), m.end())?;
        (img.path == path).then_some(img.span)
    })
}

fn parse_tag(line: &str, start: usize, end: usize) -> Option<ParsedImage> {
    let tag = &line[start..end];

    let path = non_empty_trimmed(&attr_value(src_regex(), tag)?)?;

    // Alt is entity-decoded so escaped text round-trips through the rewriter;
    // src is taken verbatim.
    let alt = attr_value(alt_regex(), tag)
        .map(|v| html_escape::decode_html_entities(&v).into_owned())
        .and_then(|v| non_empty_trimmed(&v));

    let style = attr_value(style_regex(), tag).unwrap_or_default();
    let dims = Dimensions {
        width: style_value(width_regex(), &style),
        height: style_value(height_regex(), &style),
    };
    let zoom_percent = style_value(zoom_regex(), &style);

    Some(ParsedImage {
        path,
        alt,
        dims,
        zoom_percent,
        notation: Notation::HtmlTag,
        span: Span { start, end },
    })
}

/// Extracts an attribute value from whichever quoting alternative matched.
fn attr_value(re: &Regex, tag: &str) -> Option<String> {
    let caps = re.captures(tag)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map(|m| m.as_str().to_string())
}

/// Extracts one numeric CSS declaration from style content.
fn style_value(re: &Regex, style: &str) -> Option<u32> {
    re.captures(style)?.get(1)?.as_str().parse().ok()
}
