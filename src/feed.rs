//! Feed-level extraction.
//!
//! One [`Feed`] type serves all five dialects; everything dialect-specific
//! comes from the shared [`DialectDescriptor`] selected at detection time.
//! The feed borrows the caller's parsed document and never mutates it.

use roxmltree::{Document, Node};

use crate::detect::detect;
use crate::dialect::{Dialect, DialectDescriptor, FeedLinkQuery, ItemsQuery, LinkQuery, QName};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::entry::Entry;
use crate::error::{FeedError, Result};
use crate::xml;

/// Externally supplied schema-conformance check for strict mode.
///
/// The crate ships no schema; strict callers plug their own grammar in here.
/// A rejection surfaces as [`FeedError::ValidationFailed`] before any
/// extraction happens.
pub trait FeedValidator {
    /// Return `Err(reason)` to reject the document.
    fn validate(&self, doc: &Document<'_>, dialect: Dialect) -> std::result::Result<(), String>;
}

/// A classified feed document with read-only accessors.
///
/// All accessors are idempotent; string fields come back empty (never absent)
/// when the source does not carry them. Non-fatal anomalies accumulate in the
/// feed's diagnostics, starting with any compatibility warnings emitted
/// during detection.
pub struct Feed<'a, 'input> {
    root: Node<'a, 'input>,
    descriptor: &'static DialectDescriptor,
    diagnostics: Diagnostics,
}

impl<'a, 'input> Feed<'a, 'input> {
    /// Detect the dialect of `doc` and wrap it for extraction.
    ///
    /// # Errors
    /// [`FeedError::UnknownFeedType`] when no detection rule matches.
    pub fn from_document(doc: &'a Document<'input>) -> Result<Self> {
        let diagnostics = Diagnostics::new();
        let dialect = detect(doc, &diagnostics)?;
        Ok(Self {
            root: doc.root_element(),
            descriptor: dialect.descriptor(),
            diagnostics,
        })
    }

    /// Like [`Feed::from_document`], but run the supplied schema check after
    /// detection and before extraction (strict mode).
    ///
    /// # Errors
    /// [`FeedError::UnknownFeedType`] when no detection rule matches;
    /// [`FeedError::ValidationFailed`] when the validator rejects the
    /// document.
    pub fn from_document_validated(
        doc: &'a Document<'input>,
        validator: &dyn FeedValidator,
    ) -> Result<Self> {
        let diagnostics = Diagnostics::new();
        let dialect = detect(doc, &diagnostics)?;
        validator
            .validate(doc, dialect)
            .map_err(FeedError::ValidationFailed)?;
        Ok(Self {
            root: doc.root_element(),
            descriptor: dialect.descriptor(),
            diagnostics,
        })
    }

    /// The detected dialect tag.
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.descriptor.dialect
    }

    /// The dialect's fixed label, e.g. `"RSS 2.0"` or `"Atom 1.0"`.
    #[must_use]
    pub fn feed_type(&self) -> &'static str {
        self.descriptor.label
    }

    /// The descriptor this feed extracts with.
    #[must_use]
    pub fn descriptor(&self) -> &'static DialectDescriptor {
        self.descriptor
    }

    /// Snapshot of all warnings collected so far (detection plus any emitted
    /// by accessors already called).
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.snapshot()
    }

    /// Feed title, or empty when absent.
    #[must_use]
    pub fn title(&self) -> String {
        self.channel_field(self.descriptor.title)
    }

    /// Feed description (Atom `subtitle`), or empty when absent.
    #[must_use]
    pub fn description(&self) -> String {
        self.channel_field(self.descriptor.description)
    }

    /// Link to the website the feed came from, or empty.
    #[must_use]
    pub fn link(&self) -> String {
        match self.descriptor.link {
            LinkQuery::Text(qname) => self.channel_field(qname),
            LinkQuery::AtomAlternate(qname) => {
                let Some(channel) = self.channel() else {
                    return String::new();
                };
                let links: Vec<_> = xml::children(channel, self.descriptor, qname).collect();
                xml::alternate_href(&links)
            }
        }
    }

    /// Link to the feed itself. Atom only; the RSS branches have no
    /// feed-self convention and always return empty.
    #[must_use]
    pub fn feed_link(&self) -> String {
        match self.descriptor.feed_link {
            FeedLinkQuery::None => String::new(),
            FeedLinkQuery::AtomSelf(qname) => {
                let Some(channel) = self.channel() else {
                    return String::new();
                };
                let links: Vec<_> = xml::children(channel, self.descriptor, qname).collect();
                xml::self_href(&links)
            }
        }
    }

    /// Entry sub-trees in document order, each wrapped with this feed's
    /// descriptor.
    ///
    /// Recomputed from the document on every call, never memoized: a feed is
    /// often listed without its entries ever being read, and recomputing
    /// keeps the sequence consistent with the document.
    #[must_use]
    pub fn items(&self) -> Vec<Entry<'a, 'input, '_>> {
        let nodes: Vec<Node<'a, 'input>> = match self.descriptor.items {
            ItemsQuery::Descendants(qname) => {
                xml::descendants(self.root, self.descriptor, qname).collect()
            }
            ItemsQuery::RootChildren(qname) => {
                xml::children(self.root, self.descriptor, qname).collect()
            }
        };
        nodes
            .into_iter()
            .map(|node| Entry::new(node, self.descriptor, &self.diagnostics))
            .collect()
    }

    /// The channel element feed-level fields hang off (the root itself for
    /// Atom).
    fn channel(&self) -> Option<Node<'a, 'input>> {
        xml::find_path(self.root, self.descriptor, self.descriptor.channel_path)
    }

    /// Single-element channel query with the first-match multiplicity policy.
    fn channel_field(&self, qname: QName) -> String {
        let Some(channel) = self.channel() else {
            return String::new();
        };
        let mut found = xml::children(channel, self.descriptor, qname);
        let Some(first) = found.next() else {
            return String::new();
        };
        if found.next().is_some() {
            self.diagnostics.warn(format!(
                "multiple top-level <{}> elements in feed, using the first",
                qname.name
            ));
        }
        xml::text_content(first)
    }
}
