/// Well-known member names inside OOXML packages.
///
/// Only the parts that carry visible body text are listed here.

/// Main document part of a WordprocessingML package.
pub const WORD_DOCUMENT: &str = "word/document.xml";

/// Prefix shared by every slide part of a PresentationML package.
pub const SLIDE_PREFIX: &str = "ppt/slides/slide";

/// Extension of XML parts.
pub const XML_EXTENSION: &str = ".xml";
