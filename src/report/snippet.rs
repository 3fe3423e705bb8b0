//! Context snippets around matches, for dry-run previews.
//!
//! Snippets are display-only: they are cut from a paragraph's logical text and
//! never feed back into the rewrite path.

use crate::config::SnippetOptions;
use crate::ooxml::text::Query;
use quick_xml::escape::{escape, partial_escape};
use serde::Serialize;
use std::ops::Range;

/// Marker placed where a window was cut short of the paragraph's text.
pub const ELLIPSIS: &str = "...";

/// Text of one side of a snippet with the spans to emphasize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetText {
    /// Windowed text, including any ellipsis markers
    pub text: String,
    /// Byte ranges within `text` to highlight, ascending and disjoint
    pub highlights: Vec<Range<usize>>,
}

impl SnippetText {
    /// Text without highlights.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlights: Vec::new(),
        }
    }

    /// Render as HTML.
    ///
    /// The text is HTML-escaped and every highlight is wrapped in a
    /// `<span class="...">`. Without highlights the result is exactly the
    /// escaped text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ato::report::SnippetText;
    ///
    /// let text = SnippetText { text: "a <b> c".to_string(), highlights: vec![2..5] };
    /// assert_eq!(text.to_html("highlight"), r#"a <span class="highlight">&lt;b&gt;</span> c"#);
    /// ```
    pub fn to_html(&self, class: &str) -> String {
        let class = escape(class);
        let mut html = String::with_capacity(self.text.len() + self.highlights.len() * 32);
        let mut cursor = 0;
        for range in &self.highlights {
            html.push_str(&partial_escape(&self.text[cursor..range.start]));
            html.push_str("<span class=\"");
            html.push_str(&class);
            html.push_str("\">");
            html.push_str(&partial_escape(&self.text[range.clone()]));
            html.push_str("</span>");
            cursor = range.end;
        }
        html.push_str(&partial_escape(&self.text[cursor..]));
        html
    }
}

/// A before/after preview of one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    /// Original context with matches highlighted
    pub before: SnippetText,
    /// Same context with matches substituted and the substitutions highlighted
    pub after: SnippetText,
}

/// Byte range of the window around `matched`, `context_chars` characters on
/// each side, clamped to the text.
pub fn window(text: &str, matched: Range<usize>, context_chars: usize) -> Range<usize> {
    let start = text[..matched.start]
        .char_indices()
        .rev()
        .take(context_chars)
        .last()
        .map_or(matched.start, |(i, _)| i);
    let end = text[matched.end..]
        .char_indices()
        .nth(context_chars)
        .map_or(text.len(), |(i, _)| matched.end + i);
    start..end
}

/// Build the snippet for `matches[index]`.
///
/// Every match lying entirely inside the window is highlighted (and
/// substituted on the `after` side); a match cut by the window edge is shown as
/// plain text.
pub fn snippet(
    text: &str,
    matches: &[Range<usize>],
    index: usize,
    replacement: &str,
    context_chars: usize,
) -> Snippet {
    let view = window(text, matches[index].clone(), context_chars);
    let prefix = if view.start > 0 { ELLIPSIS } else { "" };
    let suffix = if view.end < text.len() { ELLIPSIS } else { "" };

    let mut before = SnippetText::plain(prefix);
    let mut after = SnippetText::plain(prefix);
    let mut cursor = view.start;

    for m in matches.iter().filter(|m| m.start >= view.start && m.end <= view.end) {
        before.text.push_str(&text[cursor..m.start]);
        after.text.push_str(&text[cursor..m.start]);

        let at = before.text.len();
        before.text.push_str(&text[m.clone()]);
        before.highlights.push(at..before.text.len());

        let at = after.text.len();
        after.text.push_str(replacement);
        after.highlights.push(at..after.text.len());

        cursor = m.end;
    }

    before.text.push_str(&text[cursor..view.end]);
    after.text.push_str(&text[cursor..view.end]);
    before.text.push_str(suffix);
    after.text.push_str(suffix);

    Snippet { before, after }
}

/// Collect up to `options.max_snippets` snippets from paragraph texts.
///
/// Paragraphs are scanned in order and collection stops as soon as the limit
/// is reached.
pub fn collect_snippets<'t, I>(
    paragraphs: I,
    query: &Query,
    replacement: &str,
    options: &SnippetOptions,
) -> Vec<Snippet>
where
    I: IntoIterator<Item = &'t str>,
{
    let mut snippets = Vec::new();
    for text in paragraphs {
        if snippets.len() >= options.max_snippets {
            break;
        }
        let matches = query.locate(text);
        for index in 0..matches.len() {
            if snippets.len() >= options.max_snippets {
                break;
            }
            snippets.push(snippet(text, &matches, index, replacement, options.context_chars));
        }
    }
    snippets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_clamps_to_text() {
        assert_eq!(window("abcdefghij", 4..6, 2), 2..8);
        assert_eq!(window("abcdefghij", 1..2, 3), 0..5);
        assert_eq!(window("abcdefghij", 8..10, 3), 5..10);
    }

    #[test]
    fn test_window_counts_characters() {
        // "ééxéé": each é is two bytes
        let text = "ééxéé";
        assert_eq!(window(text, 4..5, 1), 2..7);
    }

    #[test]
    fn test_snippet_ellipsis_only_when_truncated() {
        let text = "one two three four five";
        let matches = Query::new("three", true).unwrap().locate(text);

        let wide = snippet(text, &matches, 0, "3", 40);
        assert_eq!(wide.before.text, "one two three four five");
        assert_eq!(wide.after.text, "one two 3 four five");

        let narrow = snippet(text, &matches, 0, "3", 4);
        assert_eq!(narrow.before.text, "...two three fou...");
        assert_eq!(narrow.before.highlights, vec![7..12]);
        assert_eq!(narrow.after.text, "...two 3 fou...");
        assert_eq!(narrow.after.highlights, vec![7..8]);
    }

    #[test]
    fn test_snippet_highlights_every_match_in_view() {
        let text = "cat and cat";
        let matches = Query::new("cat", true).unwrap().locate(text);
        let s = snippet(text, &matches, 0, "dog", 40);
        assert_eq!(s.before.highlights, vec![0..3, 8..11]);
        assert_eq!(s.after.text, "dog and dog");
        assert_eq!(s.after.to_html("replacement"), concat!(
            r#"<span class="replacement">dog</span> and "#,
            r#"<span class="replacement">dog</span>"#
        ));
    }

    #[test]
    fn test_snippet_keeps_partial_match_plain() {
        let text = "cat xx cat";
        let matches = Query::new("cat", true).unwrap().locate(text);
        // window of 5 chars after the first match cuts the second one
        let s = snippet(text, &matches, 0, "dog", 5);
        assert_eq!(s.before.text, "cat xx c...");
        assert_eq!(s.before.highlights, vec![0..3]);
        assert_eq!(s.after.text, "dog xx c...");
    }

    #[test]
    fn test_html_class_is_escaped() {
        let text = SnippetText { text: "ab".to_string(), highlights: vec![0..1] };
        assert_eq!(
            text.to_html(r#"x" onclick="y"#),
            r#"<span class="x&quot; onclick=&quot;y">a</span>b"#
        );
    }

    #[test]
    fn test_plain_html_is_escaped_text() {
        let text = SnippetText::plain("...a < b & c > d...");
        assert_eq!(text.to_html("highlight"), "...a &lt; b &amp; c &gt; d...");
    }

    #[test]
    fn test_collect_stops_at_limit() {
        let query = Query::new("x", true).unwrap();
        let paragraphs = ["x x x", "x x", "x"];
        let options = SnippetOptions::default().with_max_snippets(4);
        let snippets = collect_snippets(paragraphs, &query, "y", &options);
        assert_eq!(snippets.len(), 4);
        assert_eq!(snippets[3].before.text, "x x");
        assert_eq!(snippets[3].before.highlights, vec![0..1, 2..3]);
    }
}
