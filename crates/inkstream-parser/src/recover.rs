//! Recovery of complete elements from a truncated JSON array.
//!
//! Every snapshot of a streamed tool argument is handed to a [`Recover`]
//! implementation, which returns the longest run of leading elements that
//! parse as complete JSON values. Recovery never fails: text that cannot
//! be recovered yields an empty sequence.
//!
//! Both strategies share the same shape:
//!
//! 1. If the trimmed text does not start with `[`, return nothing.
//! 2. Parse the whole text strictly. Success means the array is complete.
//! 3. Otherwise pick a boundary `}` and parse `text[..=boundary] + "]"`.
//! 4. If that parse fails too, return nothing. There is no backtracking.
//!
//! They differ only in how the boundary is found. [`BraceScan`] takes the
//! rightmost `}` in the text, which is wrong when that brace closes a nested
//! object or sits inside a string. [`DepthScan`] tracks nesting and string
//! state and takes the last `}` that closed a top-level element.

use std::fmt;

use log::trace;
use serde::Deserialize;

use inkstream_core::{Element, RecoveredSequence};

use crate::scan;

/// Recovers the complete leading elements of a streamed JSON array.
pub trait Recover {
    /// Returns the elements that can be parsed from `text`.
    ///
    /// `None` stands for "no text received yet".
    fn recover(&self, text: Option<&str>) -> RecoveredSequence;
}

/// Rightmost-brace heuristic.
///
/// Assumes every element is an object and that no string contains an
/// unescaped `}` after the last complete element. When the assumption is
/// broken the synthesized candidate fails to parse and nothing is returned
/// for that snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BraceScan;

/// Nesting-aware boundary search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthScan;

/// Selects a recovery implementation, e.g. from configuration.
///
/// Deserializes from `"brace-scan"` or `"depth-scan"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecoveryStrategy {
    /// See [`BraceScan`].
    #[default]
    BraceScan,

    /// See [`DepthScan`].
    DepthScan,
}

impl Recover for BraceScan {
    fn recover(&self, text: Option<&str>) -> RecoveredSequence {
        recover_with(text, RecoveryStrategy::BraceScan, |text| text.rfind('}'))
    }
}

impl Recover for DepthScan {
    fn recover(&self, text: Option<&str>) -> RecoveredSequence {
        recover_with(text, RecoveryStrategy::DepthScan, |text| {
            scan::scan_entries(text).last_object_close
        })
    }
}

impl Recover for RecoveryStrategy {
    fn recover(&self, text: Option<&str>) -> RecoveredSequence {
        match self {
            Self::BraceScan => BraceScan.recover(text),
            Self::DepthScan => DepthScan.recover(text),
        }
    }
}

impl fmt::Display for RecoveryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BraceScan => write!(f, "brace-scan"),
            Self::DepthScan => write!(f, "depth-scan"),
        }
    }
}

/// Recover elements with the default [`BraceScan`] strategy.
///
/// # Examples
///
/// ```
/// use inkstream_parser::recover_elements;
/// use serde_json::json;
///
/// let text = r#"[{"type":"rectangle","id":"r1"},{"type":"ellipse","id":"e"#;
/// let elements = recover_elements(Some(text));
/// assert_eq!(elements, vec![json!({"type": "rectangle", "id": "r1"})]);
///
/// assert!(recover_elements(None).is_empty());
/// assert!(recover_elements(Some("[")).is_empty());
/// ```
pub fn recover_elements(text: Option<&str>) -> RecoveredSequence {
    BraceScan.recover(text)
}

fn recover_with(
    text: Option<&str>,
    strategy: RecoveryStrategy,
    find_boundary: impl FnOnce(&str) -> Option<usize>,
) -> RecoveredSequence {
    let Some(text) = text.filter(|text| text.trim_start().starts_with('[')) else {
        return RecoveredSequence::new();
    };

    if let Some(elements) = parse_array(text) {
        trace!(strategy:%, count = elements.len(); "Parsed complete array");
        return elements;
    }

    let Some(boundary) = find_boundary(text) else {
        trace!(strategy:%, len = text.len(); "No element boundary yet");
        return RecoveredSequence::new();
    };

    // `}` is ASCII, so `boundary + 1` is a char boundary.
    let mut candidate = String::with_capacity(boundary + 2);
    candidate.push_str(&text[..=boundary]);
    candidate.push(']');

    match parse_array(&candidate) {
        Some(elements) => {
            trace!(strategy:%, boundary, count = elements.len(); "Recovered truncated array");
            elements
        }
        None => {
            trace!(strategy:%, boundary; "Boundary did not close a top-level element");
            RecoveredSequence::new()
        }
    }
}

fn parse_array(text: &str) -> Option<RecoveredSequence> {
    serde_json::from_str::<Vec<Element>>(text).ok()
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn values(elements: RecoveredSequence) -> Vec<Value> {
        elements.into_iter().map(Element::into_value).collect()
    }

    #[test]
    fn test_complete_array() {
        let text = r#"[{"type":"rectangle","id":"r1"},{"type":"ellipse","id":"e1"}]"#;
        let elements = recover_elements(Some(text));

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].kind(), Some("rectangle"));
        assert_eq!(elements[1].kind(), Some("ellipse"));
    }

    #[test]
    fn test_incomplete_last_element_is_dropped() {
        let text = r#"[{"type":"rectangle","id":"r1"},{"type":"ellipse","id":"e"#;

        assert_eq!(
            values(recover_elements(Some(text))),
            vec![json!({"type": "rectangle", "id": "r1"})]
        );
    }

    #[test]
    fn test_missing_closing_bracket() {
        let text = r#"[{"type":"rectangle","id":"r1"},{"type":"ellipse"}"#;

        assert_eq!(recover_elements(Some(text)).len(), 2);
    }

    #[test]
    fn test_absent_and_blank_input() {
        assert!(recover_elements(None).is_empty());
        assert!(recover_elements(Some("")).is_empty());
        assert!(recover_elements(Some("   ")).is_empty());
        assert!(recover_elements(Some("[")).is_empty());
        assert!(recover_elements(Some(" \n[ ")).is_empty());
    }

    #[test]
    fn test_non_array_input() {
        assert!(recover_elements(Some("{}")).is_empty());
        assert!(recover_elements(Some(r#"{"type":"rect"}"#)).is_empty());
        assert!(recover_elements(Some("42")).is_empty());
        assert!(recover_elements(Some(r#""[{}]""#)).is_empty());
    }

    #[test]
    fn test_incomplete_first_element() {
        assert!(recover_elements(Some(r#"[{"type":"rect"#)).is_empty());
    }

    #[test]
    fn test_truncated_right_after_first_element() {
        let text = r#"[{"type":"rectangle","id":"r1"}"#;
        assert_eq!(recover_elements(Some(text)).len(), 1);

        let with_comma = r#"[{"type":"rectangle","id":"r1"},"#;
        assert_eq!(recover_elements(Some(with_comma)).len(), 1);
    }

    #[test]
    fn test_leading_whitespace_is_kept_in_candidate() {
        let text = "\n  [{\"id\":\"a\"},{\"id\":\"b\"},{\"id";
        assert_eq!(recover_elements(Some(text)).len(), 2);
    }

    #[test]
    fn test_nested_objects() {
        let text = r#"[{"type":"text","label":{"text":"Hello"}}]"#;
        let elements = recover_elements(Some(text));

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].get("label"), Some(&json!({"text": "Hello"})));
    }

    #[test]
    fn test_arrays_within_elements() {
        let text = r#"[{"type":"arrow","points":[[0,0],[100,100]]}]"#;
        let elements = recover_elements(Some(text));

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].get("points"), Some(&json!([[0, 0], [100, 100]])));
    }

    #[test]
    fn test_escaped_characters() {
        let text = r#"[{"type":"text","text":"Hello\nWorld"},{"type":"text","text":"say \"hi\""}]"#;
        let elements = recover_elements(Some(text));

        assert_eq!(elements[0].get("text"), Some(&json!("Hello\nWorld")));
        assert_eq!(elements[1].get("text"), Some(&json!("say \"hi\"")));
    }

    #[test]
    fn test_primitives_in_complete_array_are_returned_verbatim() {
        assert_eq!(
            values(recover_elements(Some("[1, \"two\", null]"))),
            vec![json!(1), json!("two"), Value::Null]
        );
    }

    #[test]
    fn test_brace_scan_does_not_backtrack() {
        // The rightmost `}` closes a nested object of the second element.
        let text = r#"[{"id":"a"},{"id":"b","label":{"text":"x"}"#;
        assert!(BraceScan.recover(Some(text)).is_empty());
    }

    #[test]
    fn test_brace_scan_brace_inside_string() {
        let text = r#"[{"id":"a"},{"id":"b","text":"}"#;
        assert!(BraceScan.recover(Some(text)).is_empty());
    }

    #[test]
    fn test_depth_scan_nested_truncation() {
        let text = r#"[{"id":"a"},{"id":"b","label":{"text":"x"}"#;
        assert_eq!(
            values(DepthScan.recover(Some(text))),
            vec![json!({"id": "a"})]
        );
    }

    #[test]
    fn test_depth_scan_brace_inside_string() {
        let text = r#"[{"id":"a","text":"}"},{"id":"b","text":"}"#;
        assert_eq!(
            values(DepthScan.recover(Some(text))),
            vec![json!({"id": "a", "text": "}"})]
        );
    }

    #[test]
    fn test_depth_scan_matches_brace_scan_on_flat_streams() {
        let text = r#"[{"type":"rectangle","id":"r1"},{"type":"ellipse","id":"e1"},{"ty"#;
        assert_eq!(BraceScan.recover(Some(text)), DepthScan.recover(Some(text)));
    }

    #[test]
    fn test_strategy_dispatch() {
        let text = r#"[{"id":"a"},{"id":"b","label":{"text":"x"}"#;

        assert!(RecoveryStrategy::BraceScan.recover(Some(text)).is_empty());
        assert_eq!(RecoveryStrategy::DepthScan.recover(Some(text)).len(), 1);
        assert_eq!(RecoveryStrategy::default(), RecoveryStrategy::BraceScan);
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(RecoveryStrategy::BraceScan.to_string(), "brace-scan");
        assert_eq!(RecoveryStrategy::DepthScan.to_string(), "depth-scan");
    }

    #[test]
    fn test_deterministic() {
        let text = r#"[{"type":"rectangle","id":"r1"},{"type":"ell"#;
        assert_eq!(recover_elements(Some(text)), recover_elements(Some(text)));
    }
}
