//! Tag vocabulary of the two markup languages carrying body text.

/// Markup language of a text entry.
///
/// WordprocessingML scopes paragraphs with `<w:p>` and text runs with `<w:t>`;
/// DrawingML (used by slides) uses `<a:p>` and `<a:t>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Word main document
    WordprocessingMl,
    /// PowerPoint slide text bodies
    DrawingMl,
}

impl Dialect {
    /// Qualified name of the paragraph element.
    #[inline]
    pub const fn paragraph_tag(self) -> &'static [u8] {
        match self {
            Dialect::WordprocessingMl => b"w:p",
            Dialect::DrawingMl => b"a:p",
        }
    }

    /// Qualified name of the run text element.
    #[inline]
    pub const fn text_tag(self) -> &'static [u8] {
        match self {
            Dialect::WordprocessingMl => b"w:t",
            Dialect::DrawingMl => b"a:t",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(Dialect::WordprocessingMl.paragraph_tag(), b"w:p");
        assert_eq!(Dialect::WordprocessingMl.text_tag(), b"w:t");
        assert_eq!(Dialect::DrawingMl.paragraph_tag(), b"a:p");
        assert_eq!(Dialect::DrawingMl.text_tag(), b"a:t");
    }
}
