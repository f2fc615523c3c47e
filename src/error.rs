//! Error types for the feed parser.
//!
//! Detection and validation failures are fatal and abort construction; all
//! field-level anomalies are reported through [`crate::diagnostics`] instead
//! and never appear here.

use thiserror::Error;

/// Main error type for the feed parser library.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The XML parse step did not yield a usable tree.
    #[error("malformed XML document: {0}")]
    MalformedDocument(#[from] roxmltree::Error),

    /// No detection rule matched the document root.
    #[error("unknown feed type: root element <{tag}>{}", .namespace.as_ref().map(|ns| format!(" in namespace {ns}")).unwrap_or_default())]
    UnknownFeedType {
        tag: String,
        namespace: Option<String>,
    },

    /// Strict mode was requested and the supplied schema check rejected the
    /// document.
    #[error("feed validation failed: {0}")]
    ValidationFailed(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for feed parser operations.
pub type Result<T> = std::result::Result<T, FeedError>;
