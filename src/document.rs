//! Per-file search and replace, dispatched on document type.
//!
//! These are the operations a UI shell calls for each candidate file. The input
//! file is only ever read; replacements land in a new file next to it.

use crate::config::SnippetOptions;
use crate::error::{AtoError, Result};
use crate::ooxml::docx;
use crate::ooxml::opc::Package;
use crate::ooxml::pptx::{self, SlideCount};
use crate::ooxml::text::Query;
use crate::report::{Snippet, collect_snippets};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Marker inserted between the original stem and the timestamp of output files.
pub const OUTPUT_MARKER: &str = "_modified_by_ato_";

/// Supported document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DocumentKind {
    /// .docx
    Word,
    /// .pptx
    PowerPoint,
}

impl DocumentKind {
    /// Determine the type from a path's extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("docx") => Ok(DocumentKind::Word),
            Some("pptx") => Ok(DocumentKind::PowerPoint),
            _ => Err(AtoError::UnsupportedFileType(path.display().to_string())),
        }
    }
}

/// An opened document of either type.
#[derive(Debug, Clone)]
pub enum Document {
    /// Word document
    Word(docx::Document),
    /// PowerPoint presentation
    PowerPoint(pptx::Presentation),
}

impl Document {
    /// Open a document, choosing the type from the extension.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let kind = DocumentKind::from_path(path)?;
        Self::from_package(kind, Package::open(path)?)
    }

    /// Wrap an already loaded package.
    pub fn from_package(kind: DocumentKind, package: Package) -> Result<Self> {
        Ok(match kind {
            DocumentKind::Word => Document::Word(docx::Document::from_package(package)?),
            DocumentKind::PowerPoint => Document::PowerPoint(pptx::Presentation::from_package(package)),
        })
    }

    /// Document type.
    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Word(_) => DocumentKind::Word,
            Document::PowerPoint(_) => DocumentKind::PowerPoint,
        }
    }

    /// The underlying package.
    pub fn package(&self) -> &Package {
        match self {
            Document::Word(doc) => doc.package(),
            Document::PowerPoint(pres) => pres.package(),
        }
    }

    /// Count matches.
    pub fn search(&self, query: &Query) -> Result<SearchReport> {
        let (matches, total_count) = match self {
            Document::Word(doc) => {
                let count = doc.count(query)?;
                let matches = if count > 0 {
                    vec![EntryMatch { slide: None, count }]
                } else {
                    Vec::new()
                };
                (matches, count)
            },
            Document::PowerPoint(pres) => {
                let counts = pres.counts(query)?;
                let total = counts.iter().map(|c| c.count).sum();
                (counts.into_iter().map(EntryMatch::from).collect(), total)
            },
        };

        Ok(SearchReport {
            found: total_count > 0,
            kind: self.kind(),
            matches,
            total_count,
        })
    }

    /// Replace every match in memory, returning the number of replacements.
    pub fn replace(&mut self, query: &Query, replacement: &str) -> Result<usize> {
        match self {
            Document::Word(doc) => doc.replace(query, replacement),
            Document::PowerPoint(pres) => pres.replace(query, replacement),
        }
    }

    /// Preview snippets for the first matches in the document.
    pub fn snippets(
        &self,
        query: &Query,
        replacement: &str,
        options: &SnippetOptions,
    ) -> Result<Vec<Snippet>> {
        match self {
            Document::Word(doc) => {
                let texts = doc.paragraph_texts()?;
                Ok(collect_snippets(texts.iter().map(String::as_str), query, replacement, options))
            },
            Document::PowerPoint(pres) => {
                let mut snippets = Vec::new();
                for slide in pres.slides() {
                    let remaining = options.max_snippets.saturating_sub(snippets.len());
                    if remaining == 0 {
                        break;
                    }
                    let texts = pres.paragraph_texts(slide)?;
                    let options = options.with_max_snippets(remaining);
                    snippets.extend(collect_snippets(
                        texts.iter().map(String::as_str),
                        query,
                        replacement,
                        &options,
                    ));
                }
                Ok(snippets)
            },
        }
    }
}

/// Match count of one text entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryMatch {
    /// Slide number, for presentations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide: Option<u32>,
    /// Number of matches
    pub count: usize,
}

impl From<SlideCount> for EntryMatch {
    fn from(count: SlideCount) -> Self {
        Self {
            slide: Some(count.slide),
            count: count.count,
        }
    }
}

/// Outcome of searching one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    /// Whether any match exists
    pub found: bool,
    /// Document type
    pub kind: DocumentKind,
    /// Word: one entry when found; PowerPoint: one entry per slide with matches
    pub matches: Vec<EntryMatch>,
    /// Total matches in the document
    pub total_count: usize,
}

/// Outcome of replacing in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceReport {
    /// Path of the edited copy (not written on a dry run)
    pub output_path: PathBuf,
    /// Number of matches replaced, or that would be
    pub replacement_count: usize,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Preview snippets, only on a dry run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippets: Option<Vec<Snippet>>,
}

/// Search a file.
///
/// # Examples
///
/// ```rust,no_run
/// use ato::{Query, search};
///
/// let report = search("deck.pptx", &Query::new("Q3", true)?)?;
/// if report.found {
///     println!("{} match(es)", report.total_count);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn search<P: AsRef<Path>>(path: P, query: &Query) -> Result<SearchReport> {
    Document::open(path)?.search(query)
}

/// Replace in a file, writing the result to a new file next to it.
///
/// On a dry run nothing is written; the report carries the output path that
/// would have been used plus preview snippets. Otherwise the reassembled
/// container is always written, even when nothing matched.
pub fn replace<P: AsRef<Path>>(
    path: P,
    query: &Query,
    replacement: &str,
    dry_run: bool,
    options: &SnippetOptions,
) -> Result<ReplaceReport> {
    let path = path.as_ref();
    let mut document = Document::open(path)?;
    let output_path = modified_path(path, Utc::now());

    if dry_run {
        let snippets = document.snippets(query, replacement, options)?;
        let replacement_count = document.search(query)?.total_count;
        return Ok(ReplaceReport {
            output_path,
            replacement_count,
            dry_run: true,
            snippets: Some(snippets),
        });
    }

    let replacement_count = document.replace(query, replacement)?;
    document.package().save_as(&output_path)?;
    debug!(
        source = %path.display(),
        output = %output_path.display(),
        replacements = replacement_count,
        "wrote modified copy"
    );

    Ok(ReplaceReport {
        output_path,
        replacement_count,
        dry_run: false,
        snippets: None,
    })
}

/// Output path for an edited copy of `path`.
///
/// `<stem>_modified_by_ato_<YYYY-MM-DDTHH-MM-SS><.ext>` in the same directory.
///
/// # Examples
///
/// ```rust
/// use ato::document::modified_path;
/// use chrono::{TimeZone, Utc};
/// use std::path::Path;
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
/// assert_eq!(
///     modified_path(Path::new("/docs/Plan.docx"), at),
///     Path::new("/docs/Plan_modified_by_ato_2024-03-09T14-05-07.docx")
/// );
/// ```
pub fn modified_path(path: &Path, at: DateTime<Utc>) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let timestamp = at.format("%Y-%m-%dT%H-%M-%S");
    path.with_file_name(format!("{stem}{OUTPUT_MARKER}{timestamp}{ext}"))
}
