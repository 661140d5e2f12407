//! Diagram elements as they arrive from a streamed tool call.
//!
//! An [`Element`] is one entry of the streamed JSON array. The core never
//! interprets it beyond offering a few convenience accessors; consumers
//! narrow shape-specific fields themselves.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field holding the primitive kind (`"rectangle"`, `"ellipse"`, ...).
pub const KIND_FIELD: &str = "type";

/// Elements recovered from one snapshot, in array order.
///
/// Produced fresh on every recovery call; no identity persists across calls.
pub type RecoveredSequence = Vec<Element>;

/// Prefix of a [`RecoveredSequence`] that is safe to render.
pub type StableSequence<'a> = &'a [Element];

/// One diagram primitive, kept as an opaque JSON value.
///
/// Elements are expected to be JSON objects, but any JSON value that appears
/// as an array entry is preserved verbatim.
///
/// # Examples
///
/// ```
/// use inkstream_core::Element;
/// use serde_json::json;
///
/// let element = Element::new(json!({"type": "rectangle", "id": "r1"}));
/// assert_eq!(element.kind(), Some("rectangle"));
/// assert_eq!(element.get("id"), Some(&json!("r1")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Element(Value);

impl Element {
    /// Wraps a decoded JSON value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the element and returns the underlying JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Returns `true` if the element is a JSON object.
    pub fn is_object(&self) -> bool {
        self.0.is_object()
    }

    /// Looks up a top-level field. Returns `None` for non-object elements.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns the `type` field when it is a string.
    pub fn kind(&self) -> Option<&str> {
        self.get(KIND_FIELD).and_then(Value::as_str)
    }
}

impl From<Value> for Element {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Element> for Value {
    fn from(element: Element) -> Self {
        element.0
    }
}

impl PartialEq<Value> for Element {
    fn eq(&self, other: &Value) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_kind_reads_type_field() {
        let element = Element::new(json!({"type": "ellipse", "id": "e1"}));
        assert_eq!(element.kind(), Some("ellipse"));
        assert!(element.is_object());
    }

    #[test]
    fn test_kind_missing_or_not_string() {
        assert_eq!(Element::new(json!({"id": "e1"})).kind(), None);
        assert_eq!(Element::new(json!({"type": 3})).kind(), None);
        assert_eq!(Element::new(json!(42)).kind(), None);
    }

    #[test]
    fn test_get_on_non_object() {
        let element = Element::new(json!([1, 2]));
        assert!(!element.is_object());
        assert_eq!(element.get("id"), None);
    }

    #[test]
    fn test_serde_is_transparent() {
        let element: Element = serde_json::from_str(r#"{"type":"text","text":"a"}"#).unwrap();
        assert_eq!(element, json!({"type": "text", "text": "a"}));
        assert_eq!(
            serde_json::to_string(&element).unwrap(),
            r#"{"type":"text","text":"a"}"#
        );
    }

    #[test]
    fn test_field_order_preserved() {
        let element: Element = serde_json::from_str(r#"{"z":1,"a":2,"m":3}"#).unwrap();
        assert_eq!(element.to_string(), r#"{"z":1,"a":2,"m":3}"#);
    }
}
