//! Syndication feed dialect detection and extraction.
//!
//! This crate takes an XML document already parsed with [`roxmltree`] and
//! produces a normalized view of it: feed-level metadata (title, description,
//! canonical link, feed-self link, dialect label) and an ordered collection
//! of entries. Five dialects are supported: Atom 1.0, the RSS 2.0 family
//! (0.91, 0.92, 2.0), and the RDF branch (RSS 0.90, 1.0, 1.1).
//!
//! Retrieval of feed bytes and rendering of extracted content are the
//! caller's business; the engine only borrows a parsed, read-only tree.
//!
//! # Example
//!
//! ```
//! use feedparser::Feed;
//! use roxmltree::Document;
//!
//! let xml = r#"<rss version="2.0"><channel>
//!   <title>News</title>
//!   <link>http://site/</link>
//!   <item><title>Post</title><description>Hello</description></item>
//! </channel></rss>"#;
//!
//! let doc = Document::parse(xml).unwrap();
//! let feed = Feed::from_document(&doc).unwrap();
//! assert_eq!(feed.feed_type(), "RSS 2.0");
//! assert_eq!(feed.title(), "News");
//! assert_eq!(feed.items()[0].content(), "Hello");
//! ```
//!
//! # Architecture
//!
//! - [`ns`]: namespace URI constants
//! - [`dialect`]: dialect tags and the static per-dialect descriptors
//! - [`detect`]: the ordered dialect detection rules
//! - [`diagnostics`]: non-fatal warning collection
//! - [`xml`]: namespace-aware query helpers over roxmltree
//! - [`feed`]: feed-level extractor and the strict-mode validation hook
//! - [`entry`]: entry-level extractor
//! - [`error`]: error types and Result alias
//! - [`cli`]: command-line interface

pub mod cli;
pub mod detect;
pub mod dialect;
pub mod diagnostics;
pub mod entry;
pub mod error;
pub mod feed;
pub mod ns;
pub mod xml;

// Re-export commonly used items
pub use detect::detect;
pub use dialect::{Dialect, DialectDescriptor};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use entry::Entry;
pub use error::{FeedError, Result};
pub use feed::{Feed, FeedValidator};
