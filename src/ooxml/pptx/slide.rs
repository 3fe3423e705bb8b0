/// Slide entries of a presentation.
use crate::ooxml::opc::constants::{SLIDE_PREFIX, XML_EXTENSION};

/// A slide entry such as `ppt/slides/slide3.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Member name inside the package
    pub name: String,
    /// Number taken from the member name
    pub number: u32,
}

impl Slide {
    /// Recognize a slide entry by its member name.
    ///
    /// Only `ppt/slides/slide<digits>.xml` qualifies; relationship parts,
    /// layouts and masters live elsewhere and are rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ato::ooxml::pptx::Slide;
    ///
    /// assert_eq!(Slide::from_entry_name("ppt/slides/slide12.xml").map(|s| s.number), Some(12));
    /// assert!(Slide::from_entry_name("ppt/slides/_rels/slide1.xml.rels").is_none());
    /// ```
    pub fn from_entry_name(name: &str) -> Option<Self> {
        let digits = name.strip_prefix(SLIDE_PREFIX)?.strip_suffix(XML_EXTENSION)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            number: digits.parse().ok()?,
        })
    }
}

/// Match count of one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideCount {
    /// Slide number
    pub slide: u32,
    /// Matches on that slide
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_names() {
        assert_eq!(
            Slide::from_entry_name("ppt/slides/slide1.xml"),
            Some(Slide {
                name: "ppt/slides/slide1.xml".to_string(),
                number: 1
            })
        );
        assert!(Slide::from_entry_name("ppt/slides/slideA.xml").is_none());
        assert!(Slide::from_entry_name("ppt/slides/slide.xml").is_none());
        assert!(Slide::from_entry_name("ppt/slideLayouts/slideLayout1.xml").is_none());
        assert!(Slide::from_entry_name("ppt/slides/slide2.xml.bak").is_none());
    }
}
