//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! Features:
//! - Error limits to prevent overwhelming output
//! - Deduplication of identical diagnostics at the same span
//! - Follow-on error filtering (messages that mention the error type)
//! - Position-ordered output regardless of emission order

use bal_ir::Span;

use crate::{Diagnostic, DiagnosticSink, ErrorCode};

/// Rendered name of the error type; messages containing it are follow-on errors.
const ERROR_TYPE_MARKER: &str = "<error>";

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before dropping further ones (0 = unlimited).
    pub error_limit: usize,
    /// Filter out follow-on errors that result from previous errors.
    pub filter_follow_on: bool,
    /// Drop a diagnostic identical in code, span, and message to a queued one.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            filter_follow_on: true,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            filter_follow_on: false,
            deduplicate: false,
        }
    }
}

/// Queue for collecting, deduplicating, and sorting diagnostics.
///
/// One queue per compilation unit keeps output deterministic even when units
/// are checked in parallel.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    /// Collected diagnostics with their sort key.
    diagnostics: Vec<(u32, Diagnostic)>,
    /// Count of errors (not warnings).
    error_count: usize,
    /// Set once the error limit dropped a diagnostic.
    overflowed: bool,
    config: DiagnosticConfig,
}

impl Default for DiagnosticQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            error_count: 0,
            overflowed: false,
            config,
        }
    }

    /// Add a diagnostic to the queue.
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        let is_error = diag.is_error();

        if is_error && self.limit_reached() {
            self.overflowed = true;
            return false;
        }

        if self.config.filter_follow_on && Self::is_follow_on(&diag) {
            return false;
        }

        if self.config.deduplicate && self.is_duplicate(&diag) {
            return false;
        }

        let position = diag.primary_span().map_or(0, |span| span.start);
        self.diagnostics.push((position, diag));

        if is_error {
            self.error_count += 1;
        }

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

    /// Check if any errors have been collected.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Sort diagnostics by position and return them, clearing the queue.
    ///
    /// If the error limit dropped diagnostics, a trailing "too many errors"
    /// diagnostic is appended.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        // Stable sort keeps emission order for diagnostics at the same position
        self.diagnostics.sort_by_key(|(position, _)| *position);

        let mut result: Vec<Diagnostic> = self.diagnostics.drain(..).map(|(_, d)| d).collect();

        if self.overflowed {
            let span = result
                .last()
                .and_then(Diagnostic::primary_span)
                .unwrap_or(Span::DUMMY);
            result.push(too_many_errors(self.config.error_limit, span));
        }

        self.error_count = 0;
        self.overflowed = false;

        result
    }

    /// Get diagnostics without clearing the queue.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().map(|(_, d)| d)
    }

    fn is_follow_on(diag: &Diagnostic) -> bool {
        diag.is_error()
            && (diag.message.contains(ERROR_TYPE_MARKER)
                || diag.args.iter().any(|arg| arg == ERROR_TYPE_MARKER))
    }

    fn is_duplicate(&self, diag: &Diagnostic) -> bool {
        let span = diag.primary_span();
        self.diagnostics.iter().any(|(_, queued)| {
            queued.code == diag.code
                && queued.primary_span() == span
                && queued.message == diag.message
        })
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.add(diagnostic);
    }
}

/// Create a "too many errors" diagnostic.
#[cold]
pub fn too_many_errors(limit: usize, span: Span) -> Diagnostic {
    Diagnostic::from_template(ErrorCode::E9002, span, vec![limit.to_string()])
        .with_note("raise `DiagnosticConfig::error_limit` to see more")
}
