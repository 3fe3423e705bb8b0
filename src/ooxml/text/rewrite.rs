/// Projection of logical-text edits back onto run boundaries.
///
/// Matches are found in a paragraph's logical text, but the text lives in
/// separate runs, each with its own formatting. Every logical character gets a
/// [`CharAction`]; each run then rebuilds its own slice of the logical text from
/// that table, so a match split across runs is rewritten without moving any
/// text between runs.
use super::extract::Paragraph;
use quick_xml::escape::escape;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::ops::Range;

/// What happens to one logical character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharAction {
    /// Emit the original character.
    #[default]
    Keep,
    /// Emit nothing (character inside a match).
    Drop,
    /// Emit the replacement text instead of the character (first character of a match).
    Replace,
}

/// New content for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunEdit {
    /// Byte range of the run's raw content in the source markup
    pub content: Range<usize>,
    /// Escaped content to put there
    pub text: String,
}

/// Build the action table for `len` bytes of logical text.
///
/// Offsets are byte offsets; only entries at character starts are consulted.
pub fn action_table(len: usize, matches: &[Range<usize>]) -> Vec<CharAction> {
    let mut actions = vec![CharAction::Keep; len];
    for m in matches {
        if m.start >= m.end || m.end > len {
            continue;
        }
        actions[m.start] = CharAction::Replace;
        for action in &mut actions[m.start + 1..m.end] {
            *action = CharAction::Drop;
        }
    }
    actions
}

/// Compute the new text of every run.
///
/// `runs` are the logical ranges of the runs. The result holds one entry per
/// run: `None` when the run has no overlap with any match, otherwise the run's
/// new (unescaped) text. The replacement is emitted once, by whichever run owns
/// the first character of the match.
///
/// # Examples
///
/// ```rust
/// use ato::ooxml::text::plan_runs;
///
/// let planned = plan_runs("Hello World", &[0..3, 3..9, 9..11], &[3..8], "X");
/// assert_eq!(planned, vec![None, Some("Xr".to_string()), None]);
/// ```
pub fn plan_runs(
    logical: &str,
    runs: &[Range<usize>],
    matches: &[Range<usize>],
    replacement: &str,
) -> Vec<Option<String>> {
    let actions = action_table(logical.len(), matches);

    runs.iter()
        .map(|run| {
            let slice = &actions[run.clone()];
            if slice.iter().all(|a| *a == CharAction::Keep) {
                return None;
            }

            let mut text = String::with_capacity(run.len());
            for (offset, ch) in logical[run.clone()].char_indices() {
                match actions[run.start + offset] {
                    CharAction::Keep => text.push(ch),
                    CharAction::Replace => text.push_str(replacement),
                    CharAction::Drop => {},
                }
            }
            Some(text)
        })
        .collect()
}

/// Edits needed to apply `matches` to a paragraph.
///
/// Only runs touched by a match produce an edit. Edit content is XML-escaped.
pub fn run_edits(
    paragraph: &Paragraph,
    matches: &[Range<usize>],
    replacement: &str,
) -> SmallVec<[RunEdit; 8]> {
    if paragraph.is_empty() || matches.is_empty() {
        return SmallVec::new();
    }

    plan_runs(&paragraph.text, &paragraph.run_ranges(), matches, replacement)
        .into_iter()
        .zip(&paragraph.runs)
        .filter_map(|(planned, run)| {
            planned.map(|text| RunEdit {
                content: run.content.clone(),
                text: escape(text.as_str()).into_owned(),
            })
        })
        .collect()
}

/// Apply edits to markup.
///
/// Edits must not overlap; they may come in any order. Bytes outside the
/// edited ranges are copied unchanged.
pub fn splice<'a>(markup: &'a str, edits: &mut [RunEdit]) -> Cow<'a, str> {
    if edits.is_empty() {
        return Cow::Borrowed(markup);
    }
    edits.sort_by_key(|e| e.content.start);

    let mut out = String::with_capacity(markup.len() + edits.iter().map(|e| e.text.len()).sum::<usize>());
    let mut cursor = 0;
    for edit in edits.iter() {
        out.push_str(&markup[cursor..edit.content.start]);
        out.push_str(&edit.text);
        cursor = edit.content.end;
    }
    out.push_str(&markup[cursor..]);
    Cow::Owned(out)
}

/// Rewrite a paragraph fragment.
///
/// `paragraph` must have been extracted from `markup`. Runs with no overlap
/// with any match stay byte-identical; a paragraph with no runs or no matches
/// is returned as is.
///
/// # Examples
///
/// ```rust
/// use ato::ooxml::text::{Dialect, extract_runs, locate, rewrite};
///
/// let xml = "<a:p><a:r><a:t>Hel</a:t></a:r><a:r><a:t>lo Wor</a:t></a:r><a:r><a:t>ld</a:t></a:r></a:p>";
/// let para = extract_runs(xml, Dialect::DrawingMl)?;
/// let matches = locate(&para.text, "lo Wo", true)?;
/// let out = rewrite(xml, &para, &matches, "X");
/// assert_eq!(out, "<a:p><a:r><a:t>Hel</a:t></a:r><a:r><a:t>Xr</a:t></a:r><a:r><a:t>ld</a:t></a:r></a:p>");
/// # Ok::<(), ato::AtoError>(())
/// ```
pub fn rewrite<'a>(
    markup: &'a str,
    paragraph: &Paragraph,
    matches: &[Range<usize>],
    replacement: &str,
) -> Cow<'a, str> {
    let mut edits = run_edits(paragraph, matches, replacement);
    splice(markup, &mut edits)
}
