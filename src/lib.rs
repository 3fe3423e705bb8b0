//! Ato - search and replace across Word and PowerPoint documents
//!
//! This library finds and replaces literal text inside Office Open XML
//! documents (.docx, .pptx) while keeping every other byte of the container
//! intact. Text that Word or PowerPoint split across several formatting runs is
//! matched as one string, and the replacement is written back into the
//! original runs so their formatting survives.
//!
//! # Features
//!
//! - **Run-preserving replacement**: matches spanning several runs are
//!   rewritten in place; the first run of a match takes the replacement
//! - **Word and PowerPoint**: `word/document.xml` and every
//!   `ppt/slides/slide<N>.xml` entry
//! - **Non-destructive**: edits land in a new, timestamped file next to the
//!   original
//! - **Dry runs**: before/after context snippets instead of writing
//! - **Batches**: recursive folder scan and sequential async processing with
//!   progress notifications
//!
//! # Example - Searching a file
//!
//! ```no_run
//! use ato::{Query, search};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let query = Query::new("quarterly review", false)?;
//! let report = search("deck.pptx", &query)?;
//! for entry in &report.matches {
//!     println!("slide {:?}: {} match(es)", entry.slide, entry.count);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Replacing in a file
//!
//! ```no_run
//! use ato::config::SnippetOptions;
//! use ato::{Query, replace};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let query = Query::new("2024", true)?;
//!
//! // Preview first
//! let preview = replace("plan.docx", &query, "2025", true, &SnippetOptions::default())?;
//! for snippet in preview.snippets.unwrap_or_default() {
//!     println!("{}  ->  {}", snippet.before.text, snippet.after.text);
//! }
//!
//! // Then write the edited copy
//! let done = replace("plan.docx", &query, "2025", false, &SnippetOptions::default())?;
//! println!("{} replacement(s) in {}", done.replacement_count, done.output_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Working on the text engine directly
//!
//! ```
//! use ato::ooxml::text::{Dialect, Query, extract_runs, rewrite};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xml = r#"<w:p><w:r><w:t>Hel</w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>lo</w:t></w:r></w:p>"#;
//! let paragraph = extract_runs(xml, Dialect::WordprocessingMl)?;
//! assert_eq!(paragraph.text, "Hello");
//!
//! let matches = Query::new("Hello", true)?.locate(&paragraph.text);
//! let edited = rewrite(xml, &paragraph, &matches, "Howdy");
//! assert_eq!(
//!     edited,
//!     r#"<w:p><w:r><w:t>Howdy</w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t></w:t></w:r></w:p>"#
//! );
//! # Ok(())
//! # }
//! ```

/// Asynchronous batch processing with progress notifications
pub mod batch;

/// Option types for scanning and previews
pub mod config;

/// Per-file search and replace
pub mod document;

pub mod error;

/// OOXML (Office Open XML) container and text engine
///
/// This module provides the ZIP container, the run-level text engine and the
/// format-specific orchestration for .docx and .pptx.
pub mod ooxml;

/// Dry-run previews
pub mod report;

/// Recursive discovery of candidate documents
pub mod scan;

// Re-export commonly used types for convenience
pub use batch::{Progress, ProgressSink, Session};
pub use document::{Document, DocumentKind, ReplaceReport, SearchReport, replace, search};
pub use error::{AtoError, ErrorKind, Result};
pub use ooxml::{Dialect, Query};
