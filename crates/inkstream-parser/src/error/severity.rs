//! Severity levels for diagnostics.

use std::fmt;

/// How serious a diagnostic is.
///
/// - [`Severity::Error`]: the completed text cannot be used as a diagram.
/// - [`Severity::Warning`]: the diagram is usable but a renderer may
///   misbehave, e.g. two elements share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The final parse fails.
    Error,

    /// The final parse succeeds; the issue is reported alongside.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn test_severity_predicates() {
        assert!(Severity::Error.is_error());
        assert!(!Severity::Error.is_warning());
        assert!(Severity::Warning.is_warning());
    }
}
