//! Dry-run previews.
//!
//! [`snippet`] cuts before/after context around matches; [`DryRunReport`]
//! gathers the per-file dry-run results of a batch into one payload.

pub mod snippet;

pub use snippet::{ELLIPSIS, Snippet, SnippetText, collect_snippets, snippet, window};

use crate::batch::FileReplace;
use crate::document::DocumentKind;
use serde::Serialize;
use std::path::PathBuf;

/// One file of a dry-run preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DryRunFile {
    pub file_path: PathBuf,
    pub file_name: String,
    pub kind: Option<DocumentKind>,
    /// Where the edited copy would be written
    pub output_path: PathBuf,
    pub replacement_count: usize,
    pub snippets: Vec<Snippet>,
}

/// Dry-run preview of a whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DryRunReport {
    pub search_text: String,
    pub replace_text: String,
    pub files: Vec<DryRunFile>,
    pub total_replacements: usize,
}

impl DryRunReport {
    /// Gather the successful results of a batch.
    ///
    /// Failed files are left out; they are reported through the batch results.
    pub fn from_results(search_text: &str, replace_text: &str, results: &[FileReplace]) -> Self {
        let files: Vec<DryRunFile> = results
            .iter()
            .filter_map(|result| {
                let report = result.outcome.success()?;
                Some(DryRunFile {
                    file_path: result.file_path.clone(),
                    file_name: result.file_name.clone(),
                    kind: result.kind,
                    output_path: report.output_path.clone(),
                    replacement_count: report.replacement_count,
                    snippets: report.snippets.clone().unwrap_or_default(),
                })
            })
            .collect();
        let total_replacements = files.iter().map(|f| f.replacement_count).sum();

        Self {
            search_text: search_text.to_string(),
            replace_text: replace_text.to_string(),
            files,
            total_replacements,
        }
    }
}
