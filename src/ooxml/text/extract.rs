/// Paragraph and run extraction from raw OOXML markup.
///
/// The tokenizer walks `quick-xml` events and records byte positions instead of
/// re-serializing anything, so the markup between and around runs is never
/// touched by later stages.
use super::dialect::Dialect;
use crate::error::{AtoError, Result};
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::Event;
use smallvec::SmallVec;
use std::ops::Range;

/// A text run: one `<w:t>` / `<a:t>` element inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Byte range of the whole text element within the source markup
    pub markup: Range<usize>,
    /// Byte range of the raw (still escaped) content within the source markup
    pub content: Range<usize>,
    /// Attributes of the text element, verbatim
    pub attributes: Option<String>,
    /// Decoded text of the run
    pub text: String,
    /// Range this run occupies within the paragraph's logical text
    pub logical: Range<usize>,
}

/// A paragraph: the runs scoped by one `<w:p>` / `<a:p>` element.
///
/// Runs belong to their innermost enclosing paragraph, so a paragraph nested
/// inside another (a text box anchored in a paragraph, say) is reported on its
/// own and its text never joins the outer paragraph's logical text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Byte range of the paragraph element within the source markup
    pub span: Range<usize>,
    /// Text runs in document order
    pub runs: SmallVec<[Run; 8]>,
    /// Concatenated run texts
    pub text: String,
}

impl Paragraph {
    /// Check whether the paragraph has no text runs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Logical ranges of the runs, in order.
    pub fn run_ranges(&self) -> SmallVec<[Range<usize>; 8]> {
        self.runs.iter().map(|r| r.logical.clone()).collect()
    }

    fn push_run(
        &mut self,
        markup: Range<usize>,
        content: Range<usize>,
        attributes: Option<String>,
        text: String,
    ) {
        let start = self.text.len();
        self.text.push_str(&text);
        self.runs.push(Run {
            markup,
            content,
            attributes,
            text,
            logical: start..self.text.len(),
        });
    }
}

/// Text element whose end tag hasn't been seen yet.
struct OpenText {
    start: usize,
    content_start: usize,
    attributes: Option<String>,
}

/// Split a text entry into paragraphs and their runs.
///
/// Paragraphs are returned in the order their start tags appear. Text elements
/// outside any paragraph are ignored; self-closing text elements carry no text
/// and are skipped.
///
/// # Errors
///
/// Returns an error if the markup is not well formed, if a text element
/// contains child markup, or if its content holds an unknown entity.
pub fn paragraphs(xml: &str, dialect: Dialect) -> Result<Vec<Paragraph>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let paragraph_tag = dialect.paragraph_tag();
    let text_tag = dialect.text_tag();

    let mut paragraphs: Vec<Paragraph> = Vec::new();
    // Indices into `paragraphs` of the paragraph elements currently open
    let mut open: SmallVec<[usize; 4]> = SmallVec::new();
    let mut pending: Option<OpenText> = None;

    loop {
        let event = reader.read_event()?;
        let end = reader.buffer_position() as usize;

        match event {
            Event::Start(_) | Event::Empty(_) | Event::CData(_) | Event::Comment(_) | Event::PI(_)
                if pending.is_some() =>
            {
                return Err(AtoError::InvalidFormat(format!(
                    "unexpected markup inside text element at byte {end}"
                )));
            },
            Event::Start(e) if e.name().as_ref() == paragraph_tag => {
                let start = tag_start(xml, end)?;
                open.push(paragraphs.len());
                paragraphs.push(Paragraph {
                    span: start..end,
                    ..Default::default()
                });
            },
            Event::Start(e) if e.name().as_ref() == text_tag => {
                let start = tag_start(xml, end)?;
                pending = Some(OpenText {
                    start,
                    content_start: end,
                    attributes: attributes(&xml[start..end], text_tag.len()),
                });
            },
            Event::End(e) if e.name().as_ref() == text_tag => {
                let Some(text) = pending.take() else {
                    continue;
                };
                let content_end = end_tag_start(xml, end)?;
                if let Some(&idx) = open.last() {
                    let decoded = unescape(&xml[text.content_start..content_end])?.into_owned();
                    paragraphs[idx].push_run(
                        text.start..end,
                        text.content_start..content_end,
                        text.attributes,
                        decoded,
                    );
                }
            },
            Event::End(e) if e.name().as_ref() == paragraph_tag => {
                if let Some(idx) = open.pop() {
                    paragraphs[idx].span.end = end;
                }
            },
            Event::Eof => break,
            _ => {},
        }
    }

    if pending.is_some() || !open.is_empty() {
        return Err(AtoError::Xml("unexpected end of markup inside a paragraph".to_string()));
    }

    Ok(paragraphs)
}

/// Extract the runs of a single paragraph fragment.
///
/// The fragment's first paragraph element is returned. A fragment without any
/// paragraph element yields an empty paragraph spanning the whole fragment.
///
/// # Examples
///
/// ```rust
/// use ato::ooxml::text::{Dialect, extract_runs};
///
/// let xml = r#"<w:p><w:r><w:t>Hel</w:t></w:r><w:r><w:t xml:space="preserve">lo</w:t></w:r></w:p>"#;
/// let para = extract_runs(xml, Dialect::WordprocessingMl)?;
/// assert_eq!(para.text, "Hello");
/// assert_eq!(para.runs.len(), 2);
/// # Ok::<(), ato::AtoError>(())
/// ```
pub fn extract_runs(markup: &str, dialect: Dialect) -> Result<Paragraph> {
    Ok(paragraphs(markup, dialect)?
        .into_iter()
        .next()
        .unwrap_or_else(|| Paragraph {
            span: 0..markup.len(),
            ..Default::default()
        }))
}

/// Start of the tag that ends at `end`.
///
/// Attribute values cannot contain `<`, so the last `<` before the closing `>`
/// opens the tag.
fn tag_start(xml: &str, end: usize) -> Result<usize> {
    xml[..end]
        .rfind('<')
        .ok_or_else(|| AtoError::Xml(format!("no tag start before byte {end}")))
}

fn end_tag_start(xml: &str, end: usize) -> Result<usize> {
    xml[..end]
        .rfind("</")
        .ok_or_else(|| AtoError::Xml(format!("no end tag before byte {end}")))
}

/// Attributes of a start tag such as `<w:t xml:space="preserve">`.
fn attributes(tag: &str, name_len: usize) -> Option<String> {
    let inner = tag.get(1 + name_len..tag.len().saturating_sub(1))?.trim();
    (!inner.is_empty()).then(|| inner.to_string())
}
