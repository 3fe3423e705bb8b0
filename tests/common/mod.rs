//! Builders for small but real .docx/.pptx containers.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const A_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub const P_NS: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

/// Zip `entries` in order; names ending in `.png` are stored, the rest deflated.
pub fn zip_entries(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in entries {
        let method = if name.ends_with(".png") {
            CompressionMethod::Stored
        } else {
            CompressionMethod::Deflated
        };
        writer
            .start_file(*name, SimpleFileOptions::default().compression_method(method))
            .unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// `word/document.xml` whose body holds the given paragraph markup.
pub fn word_xml(paragraphs: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{W_NS}"><w:body>{paragraphs}<w:sectPr/></w:body></w:document>"#
    )
}

/// A slide whose text body holds the given paragraph markup.
pub fn slide_xml(paragraphs: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sld xmlns:a="{A_NS}" xmlns:p="{P_NS}"><p:cSld><p:spTree><p:sp><p:txBody><a:bodyPr/>{paragraphs}</p:txBody></p:sp></p:spTree></p:cSld></p:sld>"#
    )
}

/// Paragraph with one plain run per piece.
pub fn word_paragraph(pieces: &[&str]) -> String {
    let runs: String = pieces
        .iter()
        .map(|t| format!(r#"<w:r><w:t xml:space="preserve">{t}</w:t></w:r>"#))
        .collect();
    format!("<w:p>{runs}</w:p>")
}

/// Paragraph with one run per piece.
pub fn slide_paragraph(pieces: &[&str]) -> String {
    let runs: String = pieces
        .iter()
        .map(|t| format!(r#"<a:r><a:rPr lang="en-US"/><a:t>{t}</a:t></a:r>"#))
        .collect();
    format!("<a:p>{runs}</a:p>")
}

pub fn docx_bytes(document_xml: &str) -> Vec<u8> {
    zip_entries(&[
        ("[Content_Types].xml", b"<Types/>".as_slice()),
        ("word/document.xml", document_xml.as_bytes()),
        ("word/media/image1.png", [0x89u8, 0x50, 0x4e, 0x47].as_slice()),
    ])
}

pub fn pptx_bytes(slides: &[String]) -> Vec<u8> {
    let names: Vec<String> = (1..=slides.len())
        .map(|i| format!("ppt/slides/slide{i}.xml"))
        .collect();
    let mut entries: Vec<(&str, &[u8])> = vec![
        ("[Content_Types].xml", b"<Types/>".as_slice()),
        ("ppt/presentation.xml", b"<p:presentation/>".as_slice()),
    ];
    for (name, xml) in names.iter().zip(slides) {
        entries.push((name.as_str(), xml.as_bytes()));
    }
    zip_entries(&entries)
}

pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Files in `dir` other than `keep`.
pub fn other_files(dir: &Path, keep: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p != keep)
        .collect()
}
