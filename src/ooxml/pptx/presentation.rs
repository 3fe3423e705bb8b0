/// Presentation text access, slide by slide.
use super::slide::{Slide, SlideCount};
use crate::error::Result;
use crate::ooxml::opc::Package;
use crate::ooxml::text::{self, Dialect, Query};
use std::path::Path;
use tracing::debug;

/// A PowerPoint (.pptx) presentation.
///
/// Each slide keeps its text in its own entry; slides are visited in the order
/// the archive lists them, not sorted by number.
///
/// # Examples
///
/// ```rust,no_run
/// use ato::ooxml::pptx::Presentation;
/// use ato::ooxml::text::Query;
///
/// let pres = Presentation::open("deck.pptx")?;
/// for hit in pres.counts(&Query::new("Q3", true)?)? {
///     println!("slide {}: {}", hit.slide, hit.count);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Presentation {
    package: Package,
    slides: Vec<Slide>,
}

impl Presentation {
    /// Open a .pptx file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_package(Package::open(path)?))
    }

    /// Wrap a package and discover its slide entries.
    pub fn from_package(package: Package) -> Self {
        let slides = package.entry_names().filter_map(Slide::from_entry_name).collect();
        Self { package, slides }
    }

    /// The underlying package.
    #[inline]
    pub fn package(&self) -> &Package {
        &self.package
    }

    /// Consume the presentation and return its package.
    #[inline]
    pub fn into_package(self) -> Package {
        self.package
    }

    /// Slide entries in discovery order.
    #[inline]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Logical text of every paragraph on a slide.
    pub fn paragraph_texts(&self, slide: &Slide) -> Result<Vec<String>> {
        let Some(xml) = self.package.read_entry(&slide.name)? else {
            return Ok(Vec::new());
        };
        Ok(text::paragraphs(&xml, Dialect::DrawingMl)?
            .into_iter()
            .map(|p| p.text)
            .collect())
    }

    /// Match counts for every slide with at least one match.
    pub fn counts(&self, query: &Query) -> Result<Vec<SlideCount>> {
        let mut counts = Vec::new();
        for slide in &self.slides {
            let Some(xml) = self.package.read_entry(&slide.name)? else {
                continue;
            };
            let count = text::count_in_entry(&xml, Dialect::DrawingMl, query)?;
            if count > 0 {
                counts.push(SlideCount {
                    slide: slide.number,
                    count,
                });
            }
        }
        Ok(counts)
    }

    /// Replace every match in memory and return the number of replacements.
    ///
    /// Slides without matches are left untouched.
    pub fn replace(&mut self, query: &Query, replacement: &str) -> Result<usize> {
        let mut total = 0;
        for slide in &self.slides {
            let Some(xml) = self.package.read_entry(&slide.name)? else {
                continue;
            };
            let rewritten = text::rewrite_entry(&xml, Dialect::DrawingMl, query, replacement)?;
            if rewritten.replacements == 0 {
                continue;
            }
            debug!(slide = slide.number, replacements = rewritten.replacements, "rewrote slide");
            total += rewritten.replacements;
            let new_xml = rewritten.xml.into_owned();
            self.package.write_entry(&slide.name, new_xml);
        }
        Ok(total)
    }
}
