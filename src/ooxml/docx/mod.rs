/// Word (.docx) document support.
///
/// A Word document keeps its body text in one entry, `word/document.xml`,
/// made of `<w:p>` paragraphs whose text is split over `<w:t>` runs.
pub mod document;

pub use document::Document;
