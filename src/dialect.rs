//! Dialect tags and the static per-dialect extraction descriptors.
//!
//! The five dialects share one feed extractor and one entry extractor; all
//! per-dialect variation lives in these data tables. The three RDF-branch
//! dialects differ only in their label and in which URI the `rss` prefix is
//! bound to.

use crate::ns;

/// The supported syndication dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Atom 1.0 (Atom 0.3 documents are handled here too, with a warning).
    Atom,
    /// RSS 2.0 family: 0.91, 0.92 and 2.0 share tags and carry no namespace.
    Rss2,
    /// RDF branch, RSS 1.0.
    Rdf10,
    /// RDF branch, RSS 1.1.
    Rdf11,
    /// RDF branch, RSS 0.90.
    Rdf090,
}

impl Dialect {
    /// The shared, immutable descriptor for this dialect.
    #[must_use]
    pub fn descriptor(self) -> &'static DialectDescriptor {
        match self {
            Self::Atom => &ATOM,
            Self::Rss2 => &RSS2,
            Self::Rdf10 => &RDF_10,
            Self::Rdf11 => &RDF_11,
            Self::Rdf090 => &RDF_090,
        }
    }

    /// Human-readable dialect label, e.g. `"RSS 2.0"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.descriptor().label
    }
}

/// A namespace-qualified element name used in queries.
///
/// The prefix is resolved through the owning descriptor's bindings at query
/// time; `None` matches elements without a namespace (the RSS 2.0 branch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QName {
    pub prefix: Option<&'static str>,
    pub name: &'static str,
}

impl QName {
    /// Name under the namespace bound to `prefix`.
    #[must_use]
    pub const fn ns(prefix: &'static str, name: &'static str) -> Self {
        Self {
            prefix: Some(prefix),
            name,
        }
    }

    /// Un-namespaced name.
    #[must_use]
    pub const fn plain(name: &'static str) -> Self {
        Self { prefix: None, name }
    }
}

/// How a link field is queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkQuery {
    /// Text content of a single element; duplicates trigger a multiplicity
    /// warning at feed level.
    Text(QName),
    /// Atom rule: `href` of a `link[rel="alternate"]`, falling back to the
    /// `href` of a link carrying no attributes at all (which RFC 4287 says
    /// must be read as `rel="alternate"`).
    AtomAlternate(QName),
}

/// Atom feeds point at themselves with `link[rel="self"]`; the RSS branches
/// have no feed-self convention at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedLinkQuery {
    None,
    AtomSelf(QName),
}

/// Where entry sub-trees live in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemsQuery {
    /// Anywhere beneath the root (Atom `entry`, RSS 2.0 `item`).
    Descendants(QName),
    /// Direct children of the root element (RDF puts `item` next to the
    /// channel, not inside it).
    RootChildren(QName),
}

/// Immutable per-dialect extraction configuration.
///
/// One instance exists per dialect, constructed at compile time and shared
/// read-only by every feed of that dialect.
#[derive(Debug)]
pub struct DialectDescriptor {
    pub dialect: Dialect,
    /// Fixed label returned by `Feed::feed_type`.
    pub label: &'static str,
    /// Prefix-to-URI bindings used verbatim for every query this descriptor
    /// issues.
    pub bindings: &'static [(&'static str, &'static str)],
    /// Child steps from the document root to the channel element; empty when
    /// the root itself is the channel (Atom `feed`).
    pub channel_path: &'static [QName],
    pub items: ItemsQuery,
    pub title: QName,
    pub description: QName,
    pub link: LinkQuery,
    pub feed_link: FeedLinkQuery,
    pub entry_title: QName,
    /// Ordered fallback chain; the first element whose text is non-empty wins.
    pub entry_content: &'static [QName],
    pub entry_date: QName,
    pub entry_link: LinkQuery,
}

impl DialectDescriptor {
    /// Look up the URI bound to a prefix.
    #[must_use]
    pub fn resolve(&self, prefix: &str) -> Option<&'static str> {
        self.bindings
            .iter()
            .find(|(p, _)| *p == prefix)
            .map(|(_, uri)| *uri)
    }

    /// Namespace URI a query name expands to under this descriptor.
    #[must_use]
    pub fn namespace_of(&self, qname: QName) -> Option<&'static str> {
        qname.prefix.and_then(|p| self.resolve(p))
    }
}

pub static ATOM: DialectDescriptor = DialectDescriptor {
    dialect: Dialect::Atom,
    label: "Atom 1.0",
    bindings: &[("atom", ns::ATOM_10)],
    channel_path: &[],
    items: ItemsQuery::Descendants(QName::ns("atom", "entry")),
    title: QName::ns("atom", "title"),
    description: QName::ns("atom", "subtitle"),
    link: LinkQuery::AtomAlternate(QName::ns("atom", "link")),
    feed_link: FeedLinkQuery::AtomSelf(QName::ns("atom", "link")),
    entry_title: QName::ns("atom", "title"),
    entry_content: &[QName::ns("atom", "content")],
    // Every Atom entry carries exactly one <updated>; <published> is optional
    // and deliberately not consulted.
    entry_date: QName::ns("atom", "updated"),
    entry_link: LinkQuery::AtomAlternate(QName::ns("atom", "link")),
};

pub static RSS2: DialectDescriptor = DialectDescriptor {
    dialect: Dialect::Rss2,
    label: "RSS 2.0",
    bindings: &[("dc", ns::DC), ("content", ns::CONTENT)],
    channel_path: &[QName::plain("channel")],
    items: ItemsQuery::Descendants(QName::plain("item")),
    title: QName::plain("title"),
    description: QName::plain("description"),
    link: LinkQuery::Text(QName::plain("link")),
    feed_link: FeedLinkQuery::None,
    entry_title: QName::plain("title"),
    entry_content: &[QName::ns("content", "encoded"), QName::plain("description")],
    entry_date: QName::plain("pubDate"),
    entry_link: LinkQuery::Text(QName::plain("link")),
};

pub static RDF_10: DialectDescriptor = DialectDescriptor {
    dialect: Dialect::Rdf10,
    label: "RSS 1.0",
    bindings: &[
        ("rdf", ns::RDF_SYNTAX),
        ("dc", ns::DC),
        ("content", ns::CONTENT),
        ("sy", ns::SYNDICATION),
        ("rss", ns::RSS_10),
    ],
    channel_path: &[QName::ns("rss", "channel")],
    items: ItemsQuery::RootChildren(QName::ns("rss", "item")),
    title: QName::ns("rss", "title"),
    description: QName::ns("rss", "description"),
    link: LinkQuery::Text(QName::ns("rss", "link")),
    feed_link: FeedLinkQuery::None,
    entry_title: QName::ns("rss", "title"),
    entry_content: &[
        QName::ns("content", "encoded"),
        QName::ns("dc", "description"),
        QName::ns("rss", "description"),
    ],
    entry_date: QName::ns("rss", "pubDate"),
    entry_link: LinkQuery::Text(QName::ns("rss", "link")),
};

pub static RDF_11: DialectDescriptor = DialectDescriptor {
    dialect: Dialect::Rdf11,
    label: "RSS 1.1",
    bindings: &[
        ("rdf", ns::RDF_SYNTAX),
        ("dc", ns::DC),
        ("content", ns::CONTENT),
        ("sy", ns::SYNDICATION),
        ("rss", ns::RSS_11),
    ],
    channel_path: &[QName::ns("rss", "channel")],
    items: ItemsQuery::RootChildren(QName::ns("rss", "item")),
    title: QName::ns("rss", "title"),
    description: QName::ns("rss", "description"),
    link: LinkQuery::Text(QName::ns("rss", "link")),
    feed_link: FeedLinkQuery::None,
    entry_title: QName::ns("rss", "title"),
    entry_content: &[
        QName::ns("content", "encoded"),
        QName::ns("dc", "description"),
        QName::ns("rss", "description"),
    ],
    entry_date: QName::ns("rss", "pubDate"),
    entry_link: LinkQuery::Text(QName::ns("rss", "link")),
};

pub static RDF_090: DialectDescriptor = DialectDescriptor {
    dialect: Dialect::Rdf090,
    label: "RSS 0.90",
    bindings: &[
        ("rdf", ns::RDF_SYNTAX),
        ("dc", ns::DC),
        ("content", ns::CONTENT),
        ("sy", ns::SYNDICATION),
        ("rss", ns::RSS_090),
    ],
    channel_path: &[QName::ns("rss", "channel")],
    items: ItemsQuery::RootChildren(QName::ns("rss", "item")),
    title: QName::ns("rss", "title"),
    description: QName::ns("rss", "description"),
    link: LinkQuery::Text(QName::ns("rss", "link")),
    feed_link: FeedLinkQuery::None,
    entry_title: QName::ns("rss", "title"),
    entry_content: &[
        QName::ns("content", "encoded"),
        QName::ns("dc", "description"),
        QName::ns("rss", "description"),
    ],
    entry_date: QName::ns("rss", "pubDate"),
    entry_link: LinkQuery::Text(QName::ns("rss", "link")),
};
