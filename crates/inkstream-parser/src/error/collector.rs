//! Collector for accumulating diagnostics while checking a completed array.
//!
//! Every offending element is reported instead of stopping at the first.

use crate::error::{Diagnostic, ParseError};

/// Accumulates diagnostics and decides whether the check failed.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection.
    ///
    /// - If any error was emitted, returns `Err(ParseError)` with every
    ///   diagnostic, warnings included.
    /// - Otherwise returns the warnings.
    pub fn finish(self) -> Result<Vec<Diagnostic>, ParseError> {
        if self.has_errors {
            Err(ParseError::new(self.diagnostics))
        } else {
            Ok(self.diagnostics)
        }
    }
}
