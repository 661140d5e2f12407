//! Labeled byte ranges attached to diagnostics.

use crate::span::Span;

/// A message pinned to a byte range of the streamed text.
///
/// A diagnostic usually carries one primary label pointing at the offending
/// entry or byte, plus optional secondary labels for context such as the
/// enclosing value.
///
/// ```text
/// error[E201]: element 1 is a number, expected an object
///  --> 1:33
///   |
/// 1 | [{"type":"rectangle","id":"r1"}, 42]
///   |                                  ^^ not an object
/// ```
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a label marking the main location of a problem.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a label providing surrounding context.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// The labeled byte range.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The label text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this label marks the main location.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Whether this label only provides context.
    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_label() {
        let label = Label::primary(Span::new(33..35), "not an object");

        assert_eq!(label.span().start(), 33);
        assert_eq!(label.span().end(), 35);
        assert_eq!(label.message(), "not an object");
        assert!(label.is_primary());
        assert!(!label.is_secondary());
    }

    #[test]
    fn test_secondary_label() {
        let label = Label::secondary(Span::new(0..36), "in this array");

        assert_eq!(label.span().len(), 36);
        assert!(label.is_secondary());
    }
}
