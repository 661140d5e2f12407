//! Withholding elements that may still change.
//!
//! The last recovered element is never shown while streaming. Its closing
//! brace is only proven genuine once a later element has begun, and
//! rendering it early would make it flicker when the next chunk rewrites it.

/// Returns `items` without its last element.
///
/// Sequences of zero or one element yield an empty slice. The result is
/// always a prefix of `items` of length `max(0, len - 1)`.
///
/// # Examples
///
/// ```
/// use inkstream_parser::stable_prefix;
///
/// assert_eq!(stable_prefix(&[1, 2, 3, 4]), &[1, 2, 3]);
/// assert_eq!(stable_prefix(&[1, 2]), &[1]);
/// assert!(stable_prefix(&[1]).is_empty());
/// assert!(stable_prefix::<i32>(&[]).is_empty());
/// ```
pub fn stable_prefix<T>(items: &[T]) -> &[T] {
    match items.split_last() {
        Some((_, rest)) => rest,
        None => &[],
    }
}

/// Like [`stable_prefix`], treating an absent sequence as empty.
///
/// ```
/// use inkstream_parser::stable_prefix_or_empty;
///
/// assert!(stable_prefix_or_empty::<u8>(None).is_empty());
/// assert_eq!(stable_prefix_or_empty(Some(&[7, 8][..])), &[7]);
/// ```
pub fn stable_prefix_or_empty<T>(items: Option<&[T]>) -> &[T] {
    items.map(stable_prefix).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use inkstream_core::Element;

    use super::*;

    #[test]
    fn test_empty_and_single() {
        assert!(stable_prefix::<Element>(&[]).is_empty());
        assert!(stable_prefix(&[Element::new(json!({"id": 1}))]).is_empty());
    }

    #[test]
    fn test_drops_only_the_last() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(stable_prefix(&items), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_objects_keep_order() {
        let items: Vec<Element> = [json!({"id": 1}), json!({"id": 2}), json!({"id": 3})]
            .into_iter()
            .map(Element::new)
            .collect();

        assert_eq!(stable_prefix(&items), &items[..2]);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_absent() {
        assert!(stable_prefix_or_empty::<Element>(None).is_empty());
        assert!(stable_prefix_or_empty::<Element>(Some(&[])).is_empty());
    }
}
