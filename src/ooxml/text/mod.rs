//! Text search and replacement over OOXML run markup.
//!
//! A logical word in a document is often split across several adjacent text
//! runs, each carrying its own formatting. This module matches against the
//! de-fragmented text of each paragraph and projects edits back onto the
//! original runs:
//!
//! 1. [`extract`]: tokenize an entry into paragraphs and runs
//! 2. [`locate`]: find non-overlapping matches in a paragraph's logical text
//! 3. [`rewrite`]: turn matches into per-run edits and splice them into the markup
//!
//! Paragraphs are a hard boundary: a match never spans two of them.

pub mod dialect;
pub mod extract;
pub mod locate;
pub mod rewrite;

pub use dialect::Dialect;
pub use extract::{Paragraph, Run, extract_runs, paragraphs};
pub use locate::{Query, locate};
pub use rewrite::{CharAction, RunEdit, action_table, plan_runs, rewrite, run_edits, splice};

use crate::error::Result;
use std::borrow::Cow;

/// Result of rewriting one text entry.
#[derive(Debug, Clone)]
pub struct EntryRewrite<'a> {
    /// The entry markup after replacement
    pub xml: Cow<'a, str>,
    /// Number of matches replaced
    pub replacements: usize,
}

/// Count matches of `query` in a text entry, paragraph by paragraph.
pub fn count_in_entry(xml: &str, dialect: Dialect, query: &Query) -> Result<usize> {
    Ok(paragraphs(xml, dialect)?
        .iter()
        .map(|p| query.count(&p.text))
        .sum())
}

/// Replace every match of `query` in a text entry.
///
/// Markup outside the content of touched runs is left byte-for-byte intact; an
/// entry without matches comes back borrowed.
pub fn rewrite_entry<'a>(
    xml: &'a str,
    dialect: Dialect,
    query: &Query,
    replacement: &str,
) -> Result<EntryRewrite<'a>> {
    let mut edits = Vec::new();
    let mut replacements = 0;

    for paragraph in paragraphs(xml, dialect)? {
        let matches = query.locate(&paragraph.text);
        if matches.is_empty() {
            continue;
        }
        replacements += matches.len();
        edits.extend(run_edits(&paragraph, &matches, replacement));
    }

    Ok(EntryRewrite {
        xml: splice(xml, &mut edits),
        replacements,
    })
}
