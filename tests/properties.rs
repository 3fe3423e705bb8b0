use ato::ooxml::text::{Dialect, Query, extract_runs, rewrite, rewrite_entry};
use proptest::prelude::*;
use std::borrow::Cow;

fn paragraph_xml(runs: &[String]) -> String {
    let body: String = runs
        .iter()
        .map(|t| format!("<w:r><w:rPr><w:i/></w:rPr><w:t xml:space=\"preserve\">{t}</w:t></w:r>"))
        .collect();
    format!("<w:p><w:pPr/>{body}</w:p>")
}

proptest! {
    #[test]
    fn prop_no_match_leaves_markup_identical(runs in prop::collection::vec("[a-z ]{0,12}", 0..6)) {
        let xml = paragraph_xml(&runs);
        // digits never occur in the generated text
        let query = Query::new("0", true).unwrap();

        let para = extract_runs(&xml, Dialect::WordprocessingMl).unwrap();
        prop_assert_eq!(&para.text, &runs.concat());
        let matches = query.locate(&para.text);
        prop_assert!(matches.is_empty());
        prop_assert!(matches!(rewrite(&xml, &para, &matches, "X"), Cow::Borrowed(_)));

        let entry = rewrite_entry(&xml, Dialect::WordprocessingMl, &query, "X").unwrap();
        prop_assert_eq!(entry.replacements, 0);
        prop_assert_eq!(&*entry.xml, xml.as_str());
    }

    #[test]
    fn prop_replacement_yields_expected_text(
        runs in prop::collection::vec("[a-c]{1,4}", 1..6),
        replacement in "[x-z]{0,3}",
    ) {
        let xml = paragraph_xml(&runs);
        let logical = runs.concat();
        let query = Query::new("ab", true).unwrap();

        let entry = rewrite_entry(&xml, Dialect::WordprocessingMl, &query, &replacement).unwrap();
        prop_assert_eq!(entry.replacements, logical.matches("ab").count());

        let para = extract_runs(&entry.xml, Dialect::WordprocessingMl).unwrap();
        prop_assert_eq!(para.text, logical.replace("ab", &replacement));
        prop_assert_eq!(para.runs.len(), runs.len());
    }
}
