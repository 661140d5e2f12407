//! Render keys for diagram elements.
//!
//! Recovered sequences carry no identity of their own, so renderers key
//! elements by a field inside each element. [`ElementKey`] captures that
//! key, falling back to the element's position when no usable id exists.

use std::fmt;

use serde_json::Value;

use crate::element::Element;

/// Default field used to identify elements.
pub const DEFAULT_ID_FIELD: &str = "id";

/// Identity of an element within a rendered diagram.
///
/// # Examples
///
/// ```
/// use inkstream_core::{Element, ElementKey};
/// use serde_json::json;
///
/// let keyed = Element::new(json!({"id": "r1"}));
/// assert_eq!(ElementKey::of(&keyed, 0, "id"), ElementKey::Id("r1".to_string()));
///
/// let anonymous = Element::new(json!({"type": "text"}));
/// assert_eq!(ElementKey::of(&anonymous, 3, "id").to_string(), "#3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKey {
    /// Key taken from the element's id field.
    Id(String),

    /// Positional key for elements without a usable id.
    Position(usize),
}

impl ElementKey {
    /// Derives the key for `element` found at `index` in its sequence.
    ///
    /// String ids are used as-is and numeric ids are stringified. Any other
    /// id value (or none) yields [`ElementKey::Position`].
    pub fn of(element: &Element, index: usize, id_field: &str) -> Self {
        match element.get(id_field) {
            Some(Value::String(id)) => Self::Id(id.clone()),
            Some(Value::Number(id)) => Self::Id(id.to_string()),
            _ => Self::Position(index),
        }
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Position(idx) => write!(f, "#{idx}"),
        }
    }
}
