//! Office Open XML (OOXML) text search and replacement.
//!
//! # Architecture
//!
//! 1. **OPC Layer** (`opc`): the ZIP container, read into memory and written back
//! 2. **Text Engine** (`text`): paragraph/run extraction, match location and
//!    run-preserving rewriting, shared by both formats
//! 3. **Format-Specific Modules**:
//!    - `docx`: Word documents (`word/document.xml`)
//!    - `pptx`: PowerPoint presentations (`ppt/slides/slide<N>.xml`)
//!
//! # Example: Replacing text in a Word document
//!
//! ```rust,no_run
//! use ato::ooxml::docx::Document;
//! use ato::ooxml::text::Query;
//!
//! let mut doc = Document::open("letter.docx")?;
//! doc.replace(&Query::new("ACME Corp", true)?, "ACME Inc.")?;
//! doc.package().save_as("letter-renamed.docx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod docx;
pub mod opc;
pub mod pptx;
pub mod text;

// Re-export commonly used types
pub use opc::Package;
pub use text::{Dialect, Query};
