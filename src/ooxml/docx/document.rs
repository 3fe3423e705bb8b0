/// Word document text access.
use crate::error::{AtoError, Result};
use crate::ooxml::opc::Package;
use crate::ooxml::opc::constants::WORD_DOCUMENT;
use crate::ooxml::text::{self, Dialect, Query};
use std::path::Path;

/// A Word (.docx) document.
///
/// All visible body text lives in the single `word/document.xml` entry.
///
/// # Examples
///
/// ```rust,no_run
/// use ato::ooxml::docx::Document;
/// use ato::ooxml::text::Query;
///
/// let mut doc = Document::open("minutes.docx")?;
/// let query = Query::new("draft", false)?;
/// println!("{} occurrence(s)", doc.count(&query)?);
/// doc.replace(&query, "final")?;
/// doc.package().save_as("minutes-final.docx")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    package: Package,
}

impl Document {
    /// Open a .docx file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_package(Package::open(path)?)
    }

    /// Wrap a package, checking that it has a main document entry.
    pub fn from_package(package: Package) -> Result<Self> {
        if !package.contains(WORD_DOCUMENT) {
            return Err(AtoError::EntryNotFound(WORD_DOCUMENT.to_string()));
        }
        Ok(Self { package })
    }

    /// The underlying package.
    #[inline]
    pub fn package(&self) -> &Package {
        &self.package
    }

    /// Consume the document and return its package.
    #[inline]
    pub fn into_package(self) -> Package {
        self.package
    }

    /// Raw markup of the main document entry.
    pub fn xml(&self) -> Result<String> {
        self.package
            .read_entry(WORD_DOCUMENT)?
            .ok_or_else(|| AtoError::EntryNotFound(WORD_DOCUMENT.to_string()))
    }

    /// Logical text of every paragraph, in document order.
    pub fn paragraph_texts(&self) -> Result<Vec<String>> {
        Ok(text::paragraphs(&self.xml()?, Dialect::WordprocessingMl)?
            .into_iter()
            .map(|p| p.text)
            .collect())
    }

    /// Number of matches of `query` in the document.
    pub fn count(&self, query: &Query) -> Result<usize> {
        text::count_in_entry(&self.xml()?, Dialect::WordprocessingMl, query)
    }

    /// Replace every match in memory and return the number of replacements.
    ///
    /// The entry is only rewritten when something matched.
    pub fn replace(&mut self, query: &Query, replacement: &str) -> Result<usize> {
        let xml = self.xml()?;
        let rewritten = text::rewrite_entry(&xml, Dialect::WordprocessingMl, query, replacement)?;
        if rewritten.replacements > 0 {
            let new_xml = rewritten.xml.into_owned();
            self.package.write_entry(WORD_DOCUMENT, new_xml);
        }
        Ok(rewritten.replacements)
    }
}
