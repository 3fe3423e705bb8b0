//! Option types for scanning and previews.
//!
//! There is no configuration file; callers tune behaviour through these
//! builders.
//!
//! # Examples
//!
//! ```rust
//! use ato::config::{ScanOptions, SnippetOptions};
//!
//! let scan = ScanOptions::new().with_skip_dirs(["node_modules", "target"]);
//! let preview = SnippetOptions::new().with_context_chars(20).with_max_snippets(3);
//! assert_eq!(scan.skip_dirs.len(), 2);
//! assert_eq!(preview.max_snippets, 3);
//! ```

/// Options for the directory walker.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// File extensions to collect, without the dot, compared case-insensitively
    pub extensions: Vec<String>,
    /// Skip directories whose name starts with `.`
    pub skip_hidden: bool,
    /// Directory names never descended into
    pub skip_dirs: Vec<String>,
    /// Emit a scanning progress update every this many directories
    pub progress_interval: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["docx".to_string(), "pptx".to_string()],
            skip_hidden: true,
            skip_dirs: vec!["node_modules".to_string()],
            progress_interval: 10,
        }
    }
}

impl ScanOptions {
    /// Create a new `ScanOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether hidden directories are skipped.
    #[inline]
    pub fn with_skip_hidden(mut self, skip: bool) -> Self {
        self.skip_hidden = skip;
        self
    }

    /// Set the directory names that are never descended into.
    pub fn with_skip_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Set how many directories pass between scanning progress updates.
    ///
    /// Zero is treated as one.
    #[inline]
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    /// Check whether a file name carries one of the collected extensions.
    pub fn matches_extension(&self, file_name: &str) -> bool {
        let Some((_, ext)) = file_name.rsplit_once('.') else {
            return false;
        };
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// Options for dry-run preview snippets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetOptions {
    /// Characters of context kept on each side of a match
    pub context_chars: usize,
    /// Maximum snippets collected per document
    pub max_snippets: usize,
}

impl Default for SnippetOptions {
    fn default() -> Self {
        Self {
            context_chars: 40,
            max_snippets: 5,
        }
    }
}

impl SnippetOptions {
    /// Create a new `SnippetOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the context width on each side of a match.
    #[inline]
    pub fn with_context_chars(mut self, chars: usize) -> Self {
        self.context_chars = chars;
        self
    }

    /// Set the maximum number of snippets per document.
    #[inline]
    pub fn with_max_snippets(mut self, max: usize) -> Self {
        self.max_snippets = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_options_default() {
        let options = ScanOptions::default();
        assert!(options.skip_hidden);
        assert_eq!(options.skip_dirs, ["node_modules"]);
        assert_eq!(options.progress_interval, 10);
    }

    #[test]
    fn test_scan_options_builder() {
        let options = ScanOptions::new()
            .with_skip_hidden(false)
            .with_skip_dirs(["vendor"])
            .with_progress_interval(0);
        assert!(!options.skip_hidden);
        assert_eq!(options.skip_dirs, ["vendor"]);
        assert_eq!(options.progress_interval, 1);
    }

    #[test]
    fn test_matches_extension() {
        let options = ScanOptions::default();
        assert!(options.matches_extension("Report.DOCX"));
        assert!(options.matches_extension("deck.pptx"));
        assert!(!options.matches_extension("old.doc"));
        assert!(!options.matches_extension("docx"));
    }

    #[test]
    fn test_snippet_options() {
        assert_eq!(SnippetOptions::default(), SnippetOptions { context_chars: 40, max_snippets: 5 });
        let options = SnippetOptions::new().with_context_chars(10).with_max_snippets(1);
        assert_eq!(options.context_chars, 10);
        assert_eq!(options.max_snippets, 1);
    }
}
