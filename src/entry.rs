//! Entry-level extraction.
//!
//! An [`Entry`] wraps one item sub-tree (`<entry>` in Atom, `<item>` in the
//! RSS branches) together with its feed's descriptor. Every accessor is a
//! pure function of the sub-tree and the descriptor; anomalies go into the
//! parent feed's diagnostics.

use roxmltree::Node;

use crate::dialect::{DialectDescriptor, LinkQuery, QName};
use crate::diagnostics::Diagnostics;
use crate::xml;

/// One item of a feed, scoped to its sub-tree.
pub struct Entry<'a, 'input, 'f> {
    node: Node<'a, 'input>,
    descriptor: &'static DialectDescriptor,
    diagnostics: &'f Diagnostics,
}

impl<'a, 'input, 'f> Entry<'a, 'input, 'f> {
    pub(crate) fn new(
        node: Node<'a, 'input>,
        descriptor: &'static DialectDescriptor,
        diagnostics: &'f Diagnostics,
    ) -> Self {
        Self {
            node,
            descriptor,
            diagnostics,
        }
    }

    /// Entry title, or empty when absent.
    #[must_use]
    pub fn title(&self) -> String {
        let mut found = xml::descendants(self.node, self.descriptor, self.descriptor.entry_title);
        let Some(first) = found.next() else {
            return String::new();
        };
        if found.next().is_some() {
            self.diagnostics.warn(format!(
                "multiple <{}> elements in entry, using the first",
                self.descriptor.entry_title.name
            ));
        }
        xml::text_content(first)
    }

    /// Entry body, resolved through the dialect's ordered fallback chain;
    /// the first element with non-empty text wins. Empty when the whole
    /// chain comes up dry.
    #[must_use]
    pub fn content(&self) -> String {
        for &qname in self.descriptor.entry_content {
            if let Some(node) = xml::descendants(self.node, self.descriptor, qname).next() {
                let text = xml::text_content(node);
                if !text.is_empty() {
                    return text;
                }
            }
        }
        String::new()
    }

    /// Publication date as the source wrote it (Atom `updated`, RSS
    /// `pubDate`). No fallback: Atom guarantees exactly one `updated`, so
    /// `published` is deliberately not consulted. Empty when absent.
    #[must_use]
    pub fn pub_date(&self) -> String {
        xml::descendants(self.node, self.descriptor, self.descriptor.entry_date)
            .next()
            .map(xml::text_content)
            .unwrap_or_default()
    }

    /// Link to the item, or empty when absent.
    #[must_use]
    pub fn link(&self) -> String {
        match self.descriptor.entry_link {
            LinkQuery::Text(qname) => self.text_field(qname),
            LinkQuery::AtomAlternate(qname) => {
                let links: Vec<_> =
                    xml::descendants(self.node, self.descriptor, qname).collect();
                xml::alternate_href(&links)
            }
        }
    }

    fn text_field(&self, qname: QName) -> String {
        xml::descendants(self.node, self.descriptor, qname)
            .next()
            .map(xml::text_content)
            .unwrap_or_default()
    }
}
