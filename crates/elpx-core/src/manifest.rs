//! # Content Manifest — Reserved Entries and Root Element Extraction
//!
//! Every package carries its structural description in a reserved entry.
//! Current packages use `content.xml`; packages written by the old desktop
//! editor use `contentv3.xml`, whose document is a dump of the editor's
//! in-memory object graph rooted at `<instance>` or `<dictionary>`.
//!
//! [`root_element_name`] parses the manifest with `roxmltree`, a conforming
//! XML 1.0 + Namespaces parser, and returns the qualified name of the
//! document element as written (prefix included). Anything the parser
//! rejects (undeclared entities, bare `&` or `<`, invalid names, unbound
//! prefixes, non-XML characters, content after the root) is an error.

use serde::{Deserialize, Serialize};

use crate::error::ManifestError;

/// Reserved manifest entry of legacy packages.
pub const LEGACY_MANIFEST_NAME: &str = "contentv3.xml";

/// Reserved manifest entry of standard packages.
pub const STANDARD_MANIFEST_NAME: &str = "content.xml";

/// Root tag names produced by the legacy object serializer. Closed set.
pub const LEGACY_ROOT_TAGS: [&str; 2] = ["instance", "dictionary"];

/// Whether `tag` marks a legacy object-graph dump. Exact, case-sensitive.
pub fn is_legacy_root(tag: &str) -> bool {
    LEGACY_ROOT_TAGS.contains(&tag)
}

/// Which reserved manifest entries a package carries.
///
/// Diagnostic only: the verdict never depends on `content.xml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManifestKind {
    /// `contentv3.xml` is present (with or without `content.xml`).
    Legacy,
    /// Only `content.xml` is present.
    Standard,
    /// Neither reserved entry is present.
    Missing,
}

impl ManifestKind {
    /// Classify from the presence of the two reserved entries.
    pub fn from_presence(has_legacy: bool, has_standard: bool) -> Self {
        match (has_legacy, has_standard) {
            (true, _) => Self::Legacy,
            (false, true) => Self::Standard,
            (false, false) => Self::Missing,
        }
    }
}

/// Extract the qualified name of the document element of `bytes`.
///
/// The bytes must be UTF-8; a leading byte-order mark is skipped. A
/// document type declaration is allowed before the root; the XML
/// declaration is only allowed at the very start.
pub fn root_element_name(bytes: &[u8]) -> Result<String, ManifestError> {
    let text = std::str::from_utf8(bytes)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(text, options)?;
    if let Some(offset) = misplaced_declaration(&doc) {
        return Err(ManifestError::MisplacedDeclaration(offset));
    }
    Ok(qualified_name(doc.input_text(), doc.root_element()))
}

/// Byte offset of an XML declaration that was parsed as a processing
/// instruction because it is not at the very start of the document. The
/// `xml` target is reserved in any letter case.
fn misplaced_declaration(doc: &roxmltree::Document<'_>) -> Option<usize> {
    doc.descendants()
        .filter_map(|node| node.pi().map(|pi| (node, pi)))
        .find(|(_, pi)| pi.target.eq_ignore_ascii_case("xml"))
        .map(|(node, _)| node.range().start)
}

/// The element's tag exactly as written in the source, prefix included.
fn qualified_name(input: &str, node: roxmltree::Node<'_, '_>) -> String {
    let raw = input.get(node.range()).unwrap_or_default();
    raw.trim_start_matches('<')
        .split(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_root_tags_are_exact() {
        assert!(is_legacy_root("instance"));
        assert!(is_legacy_root("dictionary"));
        assert!(!is_legacy_root("Instance"));
        assert!(!is_legacy_root("DICTIONARY"));
        assert!(!is_legacy_root("instances"));
        assert!(!is_legacy_root(""));
        assert!(!is_legacy_root("content"));
    }

    #[test]
    fn manifest_kind_prefers_legacy() {
        assert_eq!(ManifestKind::from_presence(true, true), ManifestKind::Legacy);
        assert_eq!(ManifestKind::from_presence(true, false), ManifestKind::Legacy);
        assert_eq!(ManifestKind::from_presence(false, true), ManifestKind::Standard);
        assert_eq!(ManifestKind::from_presence(false, false), ManifestKind::Missing);
    }

    #[test]
    fn root_of_legacy_dump() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<instance xmlns="http://www.exelearning.org/content/v0.3" class="exe.engine.package.Package" version="10">
  <dictionary>
    <string role="key" value="_name"/>
    <unicode value="project"/>
  </dictionary>
</instance>"#;
        assert_eq!(root_element_name(xml).unwrap(), "instance");
    }

    #[test]
    fn root_of_self_closing_document() {
        assert_eq!(root_element_name(b"<dictionary/>").unwrap(), "dictionary");
    }

    #[test]
    fn root_keeps_namespace_prefix() {
        assert_eq!(
            root_element_name(br#"<x:instance xmlns:x="urn:x"/>"#).unwrap(),
            "x:instance"
        );
    }

    #[test]
    fn comments_and_doctype_before_root_are_skipped() {
        let xml = b"<?xml version=\"1.0\"?>\n<!-- generated -->\n<!DOCTYPE page>\n<page><title>x</title></page>\n";
        assert_eq!(root_element_name(xml).unwrap(), "page");
    }

    #[test]
    fn byte_order_mark_is_skipped() {
        let mut xml = vec![0xEF, 0xBB, 0xBF];
        xml.extend_from_slice(b"<instance/>");
        assert_eq!(root_element_name(&xml).unwrap(), "instance");
    }

    #[test]
    fn invalid_utf8_is_encoding_error() {
        let err = root_element_name(&[0x3C, 0xFF, 0xFE, 0x3E]).unwrap_err();
        assert!(matches!(err, ManifestError::Encoding(_)));
    }

    #[test]
    fn empty_document_is_rejected() {
        assert!(matches!(
            root_element_name(b"").unwrap_err(),
            ManifestError::Xml(_)
        ));
        assert!(root_element_name(b"<?xml version=\"1.0\"?>\n  ").is_err());
    }

    #[test]
    fn plain_text_is_rejected() {
        assert!(root_element_name(b"this is not xml").is_err());
    }

    #[test]
    fn unclosed_root_is_rejected() {
        assert!(root_element_name(b"<instance><dictionary/>").is_err());
    }

    #[test]
    fn mismatched_end_tag_is_rejected() {
        assert!(root_element_name(b"<instance><a></b></instance>").is_err());
    }

    #[test]
    fn stray_end_tag_is_rejected() {
        assert!(root_element_name(b"<instance/></instance>").is_err());
    }

    #[test]
    fn second_root_is_rejected() {
        assert!(root_element_name(b"<instance/><dictionary/>").is_err());
    }

    #[test]
    fn trailing_text_is_rejected() {
        assert!(root_element_name(b"<instance/>garbage").is_err());
    }

    #[test]
    fn malformed_attribute_is_rejected() {
        assert!(root_element_name(b"<instance version=10/>").is_err());
        assert!(root_element_name(b"<instance a=\"1\" a=\"2\"/>").is_err());
    }

    #[test]
    fn undeclared_entity_is_rejected() {
        assert!(root_element_name(b"<instance>&nbsp;</instance>").is_err());
    }

    #[test]
    fn predefined_entities_are_accepted() {
        let xml = b"<instance title=\"a &amp; b\">&lt;&gt;&#233;</instance>";
        assert_eq!(root_element_name(xml).unwrap(), "instance");
    }

    #[test]
    fn bare_ampersand_is_rejected() {
        assert!(root_element_name(b"<instance>a & b</instance>").is_err());
    }

    #[test]
    fn lt_in_attribute_value_is_rejected() {
        assert!(root_element_name(b"<instance a=\"<\"/>").is_err());
    }

    #[test]
    fn invalid_element_name_is_rejected() {
        assert!(root_element_name(b"<instance><1bad/></instance>").is_err());
    }

    #[test]
    fn declaration_after_whitespace_is_rejected() {
        assert!(root_element_name(b"  <?xml version=\"1.0\"?><instance/>").is_err());
    }

    #[test]
    fn declaration_after_root_is_rejected() {
        assert!(root_element_name(b"<instance/><?xml version=\"1.0\"?>").is_err());
        assert!(root_element_name(b"<instance/><?XML version=\"1.0\"?>").is_err());
        assert!(matches!(
            root_element_name(b"<instance><?xml version=\"1.0\"?></instance>").unwrap_err(),
            ManifestError::MisplacedDeclaration(_) | ManifestError::Xml(_)
        ));
    }

    #[test]
    fn other_processing_instructions_are_accepted() {
        let xml = b"<?xml version=\"1.0\"?><?xml-stylesheet href=\"a.xsl\"?><instance><!-- <?xml version=\"1.0\"?> --></instance>";
        assert_eq!(root_element_name(xml).unwrap(), "instance");
    }

    #[test]
    fn unbound_prefix_is_rejected() {
        assert!(root_element_name(b"<instance><x:a/></instance>").is_err());
        assert!(root_element_name(b"<x:instance/>").is_err());
    }

    #[test]
    fn control_character_is_rejected() {
        assert!(root_element_name(b"<instance>\x01</instance>").is_err());
    }

    #[test]
    fn doctype_after_root_is_rejected() {
        assert!(root_element_name(b"<instance/><!DOCTYPE x>").is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The extracted root is exactly the tag that was written.
        #[test]
        fn root_name_round_trips(tag in "[a-zA-Z_][a-zA-Z0-9_.-]{0,15}") {
            let xml = format!("<?xml version=\"1.0\"?>\n<{tag}><child/></{tag}>\n");
            prop_assert_eq!(root_element_name(xml.as_bytes()).unwrap(), tag);
        }

        /// Arbitrary bytes never panic the extractor.
        #[test]
        fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
            let _ = root_element_name(&bytes);
        }

        /// Only the two exact legacy names are legacy markers.
        #[test]
        fn legacy_marker_set_is_closed(tag in "[a-zA-Z]{0,12}") {
            let expected = tag == "instance" || tag == "dictionary";
            prop_assert_eq!(is_legacy_root(&tag), expected);
        }
    }
}
