//! Keyed differences between two rendered element sequences.
//!
//! Renderers update the DOM (or any retained scene) incrementally, matching
//! elements by their [`ElementKey`] rather than by position.

use std::fmt;

use indexmap::IndexMap;

use inkstream_core::{Element, ElementKey};

/// Changes needed to go from one rendered sequence to the next.
///
/// `added` and `updated` follow the order of the new sequence; `removed`
/// follows the order of the previous one.
///
/// # Examples
///
/// ```
/// use inkstream::DiagramDiff;
/// use inkstream_core::Element;
/// use serde_json::json;
///
/// let before = [Element::new(json!({"id": "r1", "x": 0}))];
/// let after = [
///     Element::new(json!({"id": "r1", "x": 10})),
///     Element::new(json!({"id": "e1"})),
/// ];
///
/// let diff = DiagramDiff::between(&before, &after, "id");
/// assert_eq!(diff.added().len(), 1);
/// assert_eq!(diff.updated().len(), 1);
/// assert!(diff.removed().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagramDiff {
    added: Vec<(ElementKey, Element)>,
    updated: Vec<(ElementKey, Element)>,
    removed: Vec<ElementKey>,
}

impl DiagramDiff {
    /// Compute the diff from `previous` to `next`, keying by `id_field`.
    ///
    /// When several elements share a key the last one wins.
    pub fn between(previous: &[Element], next: &[Element], id_field: &str) -> Self {
        let before = keyed(previous, id_field);
        let after = keyed(next, id_field);

        let mut diff = Self::default();
        for (key, element) in &after {
            match before.get(key) {
                None => diff.added.push((key.clone(), (*element).clone())),
                Some(old) if old != element => {
                    diff.updated.push((key.clone(), (*element).clone()));
                }
                Some(_) => {}
            }
        }
        diff.removed = before
            .keys()
            .filter(|key| !after.contains_key(*key))
            .cloned()
            .collect();

        diff
    }

    /// Elements that were not rendered before.
    pub fn added(&self) -> &[(ElementKey, Element)] {
        &self.added
    }

    /// Elements whose content changed.
    pub fn updated(&self) -> &[(ElementKey, Element)] {
        &self.updated
    }

    /// Keys that are no longer rendered.
    pub fn removed(&self) -> &[ElementKey] {
        &self.removed
    }

    /// Returns `true` when nothing changed.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}

impl fmt::Display for DiagramDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "+{} ~{} -{}",
            self.added.len(),
            self.updated.len(),
            self.removed.len()
        )
    }
}

fn keyed<'a>(elements: &'a [Element], id_field: &str) -> IndexMap<ElementKey, &'a Element> {
    elements
        .iter()
        .enumerate()
        .map(|(idx, element)| (ElementKey::of(element, idx, id_field), element))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn elements(values: &[serde_json::Value]) -> Vec<Element> {
        values.iter().cloned().map(Element::new).collect()
    }

    fn key(id: &str) -> ElementKey {
        ElementKey::Id(id.to_string())
    }

    #[test]
    fn test_identical_sequences() {
        let seq = elements(&[json!({"id": "a"}), json!({"id": "b"})]);
        let diff = DiagramDiff::between(&seq, &seq, "id");

        assert!(diff.is_empty());
        assert_eq!(diff.to_string(), "+0 ~0 -0");
    }

    #[test]
    fn test_added_updated_removed() {
        let before = elements(&[json!({"id": "a"}), json!({"id": "b", "x": 1}), json!({"id": "c"})]);
        let after = elements(&[json!({"id": "b", "x": 2}), json!({"id": "d"}), json!({"id": "a"})]);

        let diff = DiagramDiff::between(&before, &after, "id");

        assert_eq!(diff.added(), &[(key("d"), Element::new(json!({"id": "d"})))]);
        assert_eq!(diff.updated(), &[(key("b"), Element::new(json!({"id": "b", "x": 2})))]);
        assert_eq!(diff.removed(), &[key("c")]);
        assert_eq!(diff.to_string(), "+1 ~1 -1");
    }

    #[test]
    fn test_from_empty_adds_everything_in_order() {
        let after = elements(&[json!({"id": "z"}), json!({"id": "y"})]);
        let diff = DiagramDiff::between(&[], &after, "id");

        let keys: Vec<_> = diff.added().iter().map(|(key, _)| key.clone()).collect();
        assert_eq!(keys, vec![key("z"), key("y")]);
    }

    #[test]
    fn test_to_empty_removes_everything() {
        let before = elements(&[json!({"id": "a"}), json!({"type": "text"})]);
        let diff = DiagramDiff::between(&before, &[], "id");

        assert_eq!(diff.removed(), &[key("a"), ElementKey::Position(1)]);
    }

    #[test]
    fn test_elements_without_ids_are_keyed_by_position() {
        let before = elements(&[json!({"type": "text", "text": "a"})]);
        let after = elements(&[json!({"type": "text", "text": "b"})]);

        let diff = DiagramDiff::between(&before, &after, "id");
        assert_eq!(diff.updated().len(), 1);
        assert_eq!(diff.updated()[0].0, ElementKey::Position(0));
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let after = elements(&[json!({"id": "a", "n": 1}), json!({"id": "a", "n": 2})]);
        let diff = DiagramDiff::between(&[], &after, "id");

        assert_eq!(diff.added(), &[(key("a"), Element::new(json!({"id": "a", "n": 2})))]);
    }
}
