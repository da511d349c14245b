//! Diagnostic sink for one compilation unit.
//!
//! Features:
//! - Optional error limit
//! - Optional deduplication of repeated (code, target) reports
//! - Emission order is preserved; nothing is sorted
//! - `ErrorGuaranteed` proof that errors were emitted

use rest_ir::Target;
use rustc_hash::FxHashSet;

use crate::{Diagnostic, ErrorCode, ErrorGuaranteed};

/// Configuration for diagnostic collection.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors to keep (0 = unlimited).
    pub error_limit: usize,
    /// Drop a diagnostic whose code and target were already reported.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    /// Unlimited and undeduplicated: every report accumulates.
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

impl DiagnosticConfig {
    /// Config with an error limit and deduplication, for interactive hosts.
    pub fn strict(error_limit: usize) -> Self {
        DiagnosticConfig {
            error_limit,
            deduplicate: true,
        }
    }
}

/// Collects diagnostics in emission order.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.push(duplicate_key(prop, span, "Org", "id", first_span));
/// let reported = queue.flush();
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    /// Count of errors kept.
    error_count: usize,
    /// (code, target) pairs already reported, for dedup.
    seen: FxHashSet<(ErrorCode, Option<Target>)>,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &DiagnosticConfig {
        &self.config
    }

    /// Add a diagnostic to the queue.
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was filtered.
    pub fn push(&mut self, diag: Diagnostic) -> bool {
        if self.limit_reached() {
            return false;
        }

        if self.config.deduplicate && !self.seen.insert((diag.code, diag.target)) {
            return false;
        }

        self.diagnostics.push(diag);
        self.error_count += 1;
        true
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Get the number of errors collected.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Number of collected diagnostics of a given code.
    pub fn count_code(&self, code: ErrorCode) -> usize {
        self.diagnostics.iter().filter(|d| d.code == code).count()
    }

    /// Total number of collected diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Check if any errors were emitted and get proof if so.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    /// Get diagnostics without clearing the queue.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Return all diagnostics in emission order and reset the queue.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.error_count = 0;
        self.seen.clear();
        std::mem::take(&mut self.diagnostics)
    }
}
