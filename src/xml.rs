//! Namespace-aware query helpers over roxmltree nodes.
//!
//! All queries resolve element names through a dialect descriptor's prefix
//! bindings, so the same helpers serve Atom (everything namespaced), the RDF
//! branch (several namespaces at once) and RSS 2.0 (mostly un-namespaced).

use roxmltree::Node;

use crate::dialect::{DialectDescriptor, QName};

/// True when `node` is an element whose expanded name matches `qname` under
/// the descriptor's bindings.
pub fn matches(node: Node<'_, '_>, descriptor: &DialectDescriptor, qname: QName) -> bool {
    node.is_element()
        && node.tag_name().name() == qname.name
        && node.tag_name().namespace() == descriptor.namespace_of(qname)
}

/// Child elements of `node` matching `qname`, in document order.
pub fn children<'a, 'input>(
    node: Node<'a, 'input>,
    descriptor: &'static DialectDescriptor,
    qname: QName,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| matches(*child, descriptor, qname))
}

/// Descendant elements of `node` matching `qname`, in document order.
pub fn descendants<'a, 'input>(
    node: Node<'a, 'input>,
    descriptor: &'static DialectDescriptor,
    qname: QName,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants()
        .filter(move |n| matches(*n, descriptor, qname))
}

/// Walk a path of child steps from `node`, taking the first match at each
/// step.
pub fn find_path<'a, 'input>(
    node: Node<'a, 'input>,
    descriptor: &'static DialectDescriptor,
    path: &[QName],
) -> Option<Node<'a, 'input>> {
    let mut current = node;
    for &step in path {
        current = children(current, descriptor, step).next()?;
    }
    Some(current)
}

/// All text content beneath a node, concatenated and trimmed at the ends.
///
/// Escaped markup and CDATA sections both surface as text nodes, so the body
/// of a `content:encoded` element comes back intact.
pub fn text_content(node: Node<'_, '_>) -> String {
    let mut out = String::new();
    for text in node.descendants().filter(|n| n.is_text()) {
        if let Some(t) = text.text() {
            out.push_str(t);
        }
    }
    out.trim().to_string()
}

/// Resolve the Atom alternate-link rule over a set of candidate links.
///
/// Prefers the first `link` with `rel="alternate"`; a bare link without any
/// `rel` attribute counts as alternate too (RFC 4287 defaults the relation).
/// Returns the `href`, or empty when neither form is present.
pub fn alternate_href(links: &[Node<'_, '_>]) -> String {
    if let Some(link) = links
        .iter()
        .find(|l| l.attribute("rel") == Some("alternate"))
    {
        return link.attribute("href").unwrap_or_default().to_string();
    }
    links
        .iter()
        .find(|l| l.attribute("rel").is_none())
        .and_then(|l| l.attribute("href"))
        .unwrap_or_default()
        .to_string()
}

/// `href` of the first `link[rel="self"]` among the candidates, or empty.
pub fn self_href(links: &[Node<'_, '_>]) -> String {
    links
        .iter()
        .find(|l| l.attribute("rel") == Some("self"))
        .and_then(|l| l.attribute("href"))
        .unwrap_or_default()
        .to_string()
}
