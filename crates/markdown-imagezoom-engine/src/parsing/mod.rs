//! Inline image syntax parsing.
//!
//! Recognizes one of three mutually exclusive image notations on a single
//! line of text and decomposes it into a canonical [`ParsedImage`] record.
//! Each grammar lives in its own [`kinds`] module as a pure function so it
//! can be tested in isolation; this module only dispatches.

pub mod cursor;
pub mod kinds;
pub mod span;
pub mod types;

pub use span::Span;
pub use types::{Dimensions, Notation, ParsedImage};

/// Parses the first inline image reference on a line.
///
/// Grammars are tried in fixed precedence order: Markdown, then Wikilink,
/// then HTML tag. The first *notation* that matches anywhere on the line
/// wins — a later grammar is never consulted once an earlier one matched,
/// even when the later grammar would match at an earlier column.
pub fn parse_image(line: &str) -> Option<ParsedImage> {
    kinds::markdown::try_parse(line)
        .or_else(|| kinds::wikilink::try_parse(line))
        .or_else(|| kinds::html_tag::try_parse(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn markdown_beats_html_tag() {
        let line = r#"<img src="first.png"> then ![cap](second.png)"#;
        let img = parse_image(line).unwrap();
        assert_eq!(img.notation, Notation::Markdown);
        assert_eq!(img.path, "second.png");
    }

    #[test]
    fn wikilink_beats_html_tag() {
        let line = r#"<img src="first.png"> then ![[second.png]]"#;
        let img = parse_image(line).unwrap();
        assert_eq!(img.notation, Notation::Wikilink);
        assert_eq!(img.path, "second.png");
    }

    #[test]
    fn markdown_beats_wikilink() {
        let line = "![[first.png]] then ![cap](second.png)";
        let img = parse_image(line).unwrap();
        assert_eq!(img.notation, Notation::Markdown);
        assert_eq!(img.path, "second.png");
    }

    #[test]
    fn html_tag_matches_when_alone() {
        let img = parse_image(r#"<img src="x.png" style="zoom: 80%;">"#).unwrap();
        assert_eq!(img.notation, Notation::HtmlTag);
        assert_eq!(img.zoom_percent, Some(80));
    }

    #[test]
    fn no_image_syntax_is_none() {
        assert_eq!(parse_image("just prose with [a link](x.md)"), None);
        assert_eq!(parse_image(""), None);
    }

    /// Slicing the line with a successful parse's span reproduces the exact
    /// matched substring, whatever the notation.
    #[rstest]
    #[case("![cap](img.png)", "![cap](img.png)")]
    #[case("pre ![cap|200x100](img.png) post", "![cap|200x100](img.png)")]
    #[case("pre ![[pic.jpg|150]] post", "![[pic.jpg|150]]")]
    #[case(r#"pre <img src="x.png" alt="a"> post"#, r#"<img src="x.png" alt="a">"#)]
    fn lossless_span_invariant(#[case] line: &str, #[case] matched: &str) {
        let img = parse_image(line).unwrap();
        assert_eq!(img.span.slice(line), matched);
        assert_eq!(img.span.len(), matched.len());
    }
}
