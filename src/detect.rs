//! Ordered dialect detection rules.
//!
//! Rules are evaluated in a fixed priority order; the first match wins even
//! when a later rule would also match. The RDF branch is recognized by
//! namespace, the RSS 2.0 branch by its `rss` root tag plus attribute
//! inspection, which is why the version-specific legacy rules come before the
//! generic `rss` fallback.

use roxmltree::{Document, Node};

use crate::dialect::Dialect;
use crate::diagnostics::Diagnostics;
use crate::error::{FeedError, Result};
use crate::ns;

/// Classify a parsed document into one of the five supported dialects.
///
/// Compatibility fallbacks (Atom 0.3, RSS 0.91/0.92, version-less `rss`)
/// succeed with a warning pushed into `diagnostics`; a document matching no
/// rule fails with [`FeedError::UnknownFeedType`].
pub fn detect(doc: &Document<'_>, diagnostics: &Diagnostics) -> Result<Dialect> {
    let root = doc.root_element();
    let root_ns = root.tag_name().namespace();
    let tag = root.tag_name().name();
    let version = root.attribute("version");

    if root_ns == Some(ns::ATOM_10) {
        return Ok(Dialect::Atom);
    }

    if root_ns == Some(ns::ATOM_03) {
        diagnostics.warn("Atom 0.3 is deprecated, using the Atom 1.0 parser");
        return Ok(Dialect::Atom);
    }

    if carries_namespace(root, ns::RSS_10) {
        return Ok(Dialect::Rdf10);
    }

    if carries_namespace(root, ns::RSS_11) {
        return Ok(Dialect::Rdf11);
    }

    if carries_namespace(root, ns::RSS_090) {
        return Ok(Dialect::Rdf090);
    }

    if tag == "rss" && version == Some("0.91") {
        diagnostics.warn("RSS 0.91 has been superseded by RSS 2.0, using the RSS 2.0 parser");
        return Ok(Dialect::Rss2);
    }

    if tag == "rss" && version == Some("0.92") {
        diagnostics.warn("RSS 0.92 has been superseded by RSS 2.0, using the RSS 2.0 parser");
        return Ok(Dialect::Rss2);
    }

    if root_ns.is_some_and(|uri| ns::RSS2_COMPAT.contains(&uri)) || tag == "rss" {
        // "2" and "2.0" both name RSS 2.0; anything else (or nothing) gets
        // the benefit of the doubt, with a warning.
        if !matches!(version, Some("2") | Some("2.0")) {
            diagnostics.warn("RSS version not specified, parsing as RSS 2.0");
        }
        return Ok(Dialect::Rss2);
    }

    Err(FeedError::UnknownFeedType {
        tag: tag.to_string(),
        namespace: root_ns.map(str::to_string),
    })
}

/// RDF-branch membership test: the root lives in `uri`, declares `uri`
/// through any prefix, or its second child node is an element in `uri`.
///
/// The second-child probe mirrors DOM child indexing: index 1 over all node
/// kinds (whitespace between the root tag and its first element usually
/// occupies index 0), consulted only when that node is an element.
fn carries_namespace(root: Node<'_, '_>, uri: &str) -> bool {
    if root.tag_name().namespace() == Some(uri) {
        return true;
    }
    if root.namespaces().any(|declared| declared.uri() == uri) {
        return true;
    }
    second_child_namespace(root) == Some(uri)
}

fn second_child_namespace<'a>(root: Node<'a, '_>) -> Option<&'a str> {
    root.children()
        .nth(1)
        .filter(|n| n.is_element())
        .and_then(|n| n.tag_name().namespace())
}
