//! PowerPoint (.pptx) presentation support.
//!
//! Slide text lives in `ppt/slides/slide<N>.xml` entries as DrawingML
//! `<a:p>` paragraphs made of `<a:t>` runs. Every slide is searched and
//! rewritten independently.

pub mod presentation;
pub mod slide;

pub use presentation::Presentation;
pub use slide::{Slide, SlideCount};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::Package;
    use crate::ooxml::text::Query;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    fn slide_xml(paragraphs: &[&[&str]]) -> String {
        let mut xml = String::from(r#"<p:sld><p:cSld><p:spTree><p:sp><p:txBody>"#);
        for runs in paragraphs {
            xml.push_str("<a:p>");
            for run in *runs {
                xml.push_str(&format!("<a:r><a:rPr lang=\"en-US\"/><a:t>{run}</a:t></a:r>"));
            }
            xml.push_str("</a:p>");
        }
        xml.push_str("</p:txBody></p:sp></p:spTree></p:cSld></p:sld>");
        xml
    }

    fn pptx(entries: &[(&str, String)]) -> Package {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, body) in entries {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        Package::from_bytes(&writer.finish().unwrap().into_inner()).unwrap()
    }

    fn deck() -> Presentation {
        Presentation::from_package(pptx(&[
            ("ppt/presentation.xml", "<p:presentation/>".to_string()),
            ("ppt/slides/slide10.xml", slide_xml(&[&["Revenue up"]])),
            ("ppt/slides/slide2.xml", slide_xml(&[&["Rev", "enue"], &["no match here"]])),
            ("ppt/slides/_rels/slide2.xml.rels", "<Relationships/>".to_string()),
            ("ppt/slides/slide1.xml", slide_xml(&[&["Title"]])),
        ]))
    }

    #[test]
    fn test_slides_in_discovery_order() {
        let numbers: Vec<_> = deck().slides().iter().map(|s| s.number).collect();
        assert_eq!(numbers, [10, 2, 1]);
    }

    #[test]
    fn test_counts_per_slide() {
        let counts = deck().counts(&Query::new("revenue", false).unwrap()).unwrap();
        assert_eq!(
            counts,
            [SlideCount { slide: 10, count: 1 }, SlideCount { slide: 2, count: 1 }]
        );
    }

    #[test]
    fn test_match_never_spans_paragraphs() {
        let pres = Presentation::from_package(pptx(&[(
            "ppt/slides/slide1.xml",
            slide_xml(&[&["Hello Wo"], &["rld"]]),
        )]));
        assert!(pres.counts(&Query::new("World", true).unwrap()).unwrap().is_empty());
    }

    #[test]
    fn test_replace_only_touches_matching_slides() {
        let mut pres = deck();
        let untouched = pres.package().read_entry("ppt/slides/slide1.xml").unwrap();

        assert_eq!(pres.replace(&Query::new("Revenue", true).unwrap(), "Income").unwrap(), 2);
        assert_eq!(pres.package().read_entry("ppt/slides/slide1.xml").unwrap(), untouched);

        let slide2 = pres.slides()[1].clone();
        assert_eq!(pres.paragraph_texts(&slide2).unwrap(), ["Income", "no match here"]);
        let xml = pres.package().read_entry("ppt/slides/slide2.xml").unwrap().unwrap();
        assert!(xml.contains(r#"<a:r><a:rPr lang="en-US"/><a:t>Income</a:t></a:r><a:r><a:rPr lang="en-US"/><a:t></a:t></a:r>"#));
    }
}
