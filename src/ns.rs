//! Namespace URI constants for the supported syndication dialects.
//!
//! Dialects in the RDF branch (RSS 0.90, 1.0, 1.1) are told apart purely by
//! which of these URIs the document carries; the RSS branch (0.91, 0.92, 2.0)
//! has no namespace of its own and is recognized by its `rss` root tag.

/// Atom 1.0 namespace (RFC 4287).
pub const ATOM_10: &str = "http://www.w3.org/2005/Atom";

/// Legacy Atom 0.3 namespace. Deprecated; documents in it are handled by the
/// Atom 1.0 extractor with a warning.
pub const ATOM_03: &str = "http://purl.org/atom/ns#";

/// RSS 1.0 default namespace.
pub const RSS_10: &str = "http://purl.org/rss/1.0/";

/// RSS 1.1 default namespace.
pub const RSS_11: &str = "http://purl.org/net/rss1.1#";

/// RSS 0.90 default namespace (the original Netscape RDF vocabulary).
pub const RSS_090: &str = "http://my.netscape.com/rdf/simple/0.9/";

/// RDF syntax namespace, bound as `rdf` on every RDF-branch feed.
pub const RDF_SYNTAX: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Dublin Core module namespace as published by the RSS 1.0 modules.
pub const DC: &str = "http://purl.org/rss/1.0/modules/dc/";

/// Content module namespace (`content:encoded`).
pub const CONTENT: &str = "http://purl.org/rss/1.0/modules/content/";

/// Syndication module namespace.
pub const SYNDICATION: &str = "http://web.resource.org/rss/1.0/modules/syndication/";

/// Root namespaces that some generators put on RSS 2.0-family documents.
/// A root in any of these is treated as RSS 2.0.
pub const RSS2_COMPAT: &[&str] = &[
    "http://backend.userland.com/rss",
    "http://backend.userland.com/rss2",
    "http://blogs.law.harvard.edu/tech/rss",
];
