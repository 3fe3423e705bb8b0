/// Literal match location within a paragraph's logical text.
use crate::error::{AtoError, Result};
use regex::{Regex, RegexBuilder};
use std::ops::Range;

/// A compiled search.
///
/// The search text is matched literally; regex metacharacters in it carry no
/// special meaning. Case-insensitive queries fold case while comparing only,
/// the text being searched is never altered.
///
/// # Examples
///
/// ```rust
/// use ato::ooxml::text::Query;
///
/// let query = Query::new("aa", false)?;
/// assert_eq!(query.locate("AAaa"), vec![0..2, 2..4]);
/// # Ok::<(), ato::AtoError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Query {
    text: String,
    case_sensitive: bool,
    pattern: Regex,
}

impl Query {
    /// Compile a query.
    ///
    /// # Errors
    ///
    /// Returns [`AtoError::EmptySearch`] if `text` is empty.
    pub fn new(text: impl Into<String>, case_sensitive: bool) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(AtoError::EmptySearch);
        }

        let pattern = RegexBuilder::new(&regex::escape(&text))
            .case_insensitive(!case_sensitive)
            .build()
            .map_err(|e| AtoError::InvalidSearch(e.to_string()))?;

        Ok(Self {
            text,
            case_sensitive,
            pattern,
        })
    }

    /// The search text as given.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the query is case sensitive.
    #[inline]
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Find all non-overlapping matches, left to right.
    ///
    /// Each search resumes at the end of the previous match. Ranges are byte
    /// offsets into `haystack` and always lie on character boundaries.
    pub fn locate(&self, haystack: &str) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut cursor = 0;

        while cursor <= haystack.len() {
            let Some(m) = self.pattern.find_at(haystack, cursor) else {
                break;
            };
            ranges.push(m.range());
            // non-empty literal, so the cursor always advances
            cursor = m.end();
        }

        ranges
    }

    /// Number of non-overlapping matches in `haystack`.
    #[inline]
    pub fn count(&self, haystack: &str) -> usize {
        self.locate(haystack).len()
    }
}

/// Locate `search` in `text`.
///
/// Convenience form of [`Query::new`] followed by [`Query::locate`].
pub fn locate(text: &str, search: &str, case_sensitive: bool) -> Result<Vec<Range<usize>>> {
    Ok(Query::new(search, case_sensitive)?.locate(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_sensitivity() {
        let text = "hello HELLO Hello";
        assert_eq!(locate(text, "Hello", true).unwrap(), vec![12..17]);
        assert_eq!(locate(text, "Hello", false).unwrap(), vec![0..5, 6..11, 12..17]);
    }

    #[test]
    fn test_non_overlapping() {
        assert_eq!(locate("aaaa", "aa", false).unwrap(), vec![0..2, 2..4]);
        assert_eq!(locate("aaa", "aa", true).unwrap(), vec![0..2]);
    }

    #[test]
    fn test_special_characters_are_literal() {
        let text = "cost: $5.00 (approx.) or 5x00";
        assert_eq!(locate(text, "$5.00", true).unwrap(), vec![6..11]);
        assert_eq!(locate(text, "(approx.)", true).unwrap(), vec![12..21]);
        assert!(locate(text, "5.0*", true).unwrap().is_empty());
        assert_eq!(locate("a+b a\\b", "a\\b", true).unwrap(), vec![4..7]);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(locate("nothing here", "absent", false).unwrap().is_empty());
    }

    #[test]
    fn test_empty_search_rejected() {
        assert!(matches!(Query::new("", true), Err(AtoError::EmptySearch)));
    }

    #[test]
    fn test_non_ascii_case_folding() {
        let query = Query::new("ÉCOLE", false).unwrap();
        assert_eq!(query.locate("une école"), vec![4..10]);
        assert!(!query.is_case_sensitive());
        assert_eq!(query.text(), "ÉCOLE");
    }

    #[test]
    fn test_count() {
        let query = Query::new("ab", true).unwrap();
        assert_eq!(query.count("ab ab abab"), 4);
    }
}
