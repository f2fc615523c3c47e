//! Non-fatal diagnostics collected during detection and extraction.
//!
//! Field-level anomalies (deprecated dialect versions, duplicated top-level
//! elements) never fail a parse. They are recorded here and mirrored to
//! `tracing::warn!`, so callers that ignore them still get a usable feed.

use std::cell::RefCell;

/// How serious a diagnostic is. Everything the extractor reports is
/// recoverable, so only one level exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
}

/// A single non-fatal anomaly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

/// Collector shared between a feed and its entries.
///
/// Interior mutability keeps the extraction accessors `&self`; a collector
/// belongs to exactly one feed and is not meant to be shared across threads.
#[derive(Debug, Default)]
pub struct Diagnostics {
    collected: RefCell<Vec<Diagnostic>>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and mirror it to the log.
    pub fn warn(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.collected.borrow_mut().push(Diagnostic {
            severity: Severity::Warning,
            message,
        });
    }

    /// Snapshot of everything collected so far, in emission order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.collected.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.collected.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collected.borrow().is_empty()
    }
}
