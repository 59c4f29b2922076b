//! Lenient traversal over the loosely-typed incentive document.
//!
//! Every level of the upstream tree may be absent, `null`, or the wrong
//! shape. [`Node`] folds all of those into "missing" so the extractor can
//! walk `data → years → vehicles → cardOrder` without a nullable check at
//! each step: a missing node yields no children and no fields.

use serde_json::{Map, Value};

/// A borrowed view of a JSON object that may not exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct Node<'a>(Option<&'a Map<String, Value>>);

impl<'a> Node<'a> {
    /// Wraps `value` if it is an object; anything else is a missing node.
    #[must_use]
    pub fn new(value: &'a Value) -> Self {
        Self(value.as_object())
    }

    /// True when the node exists and has at least one key.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.0.is_some_and(|m| !m.is_empty())
    }

    /// True when `key` is present, even if its value is `null`.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.0.is_some_and(|m| m.contains_key(key))
    }

    /// The raw value under `key`, including an explicit `null`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&'a Value> {
        self.0.and_then(|m| m.get(key))
    }

    /// The value under `key`, with `null` treated as absent.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&'a Value> {
        self.raw(key).filter(|v| !v.is_null())
    }

    /// The string under `key`; non-string values are treated as absent.
    #[must_use]
    pub fn str(&self, key: &str) -> Option<&'a str> {
        self.raw(key).and_then(Value::as_str)
    }

    /// The object under `key`, or a missing node.
    #[must_use]
    pub fn child(&self, key: &str) -> Node<'a> {
        self.raw(key).map(Node::new).unwrap_or_default()
    }

    /// The object elements of the sequence under `key`, in source order.
    ///
    /// An absent or non-array value yields nothing; non-object elements
    /// are skipped.
    pub fn children(&self, key: &str) -> impl Iterator<Item = Node<'a>> {
        self.raw(key)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
            .map(|m| Node(Some(m)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn non_object_root_has_no_fields_or_children() {
        for value in [json!(null), json!([{"a": 1}]), json!("data"), json!(3)] {
            let node = Node::new(&value);
            assert!(!node.is_populated(), "{value} should not be populated");
            assert_eq!(node.children("data").count(), 0);
        }
    }

    #[test]
    fn children_of_absent_key_is_empty() {
        let doc = json!({"other": []});
        assert_eq!(Node::new(&doc).children("data").count(), 0);
    }

    #[test]
    fn children_of_non_array_is_empty() {
        let doc = json!({"data": {"years": []}});
        assert_eq!(Node::new(&doc).children("data").count(), 0);
        let doc = json!({"data": "nope"});
        assert_eq!(Node::new(&doc).children("data").count(), 0);
        let doc = json!({"data": null});
        assert_eq!(Node::new(&doc).children("data").count(), 0);
    }

    #[test]
    fn children_skip_non_object_elements_and_keep_order() {
        let doc = json!({"data": [{"id": 1}, 7, null, {"id": 2}]});
        let ids: Vec<i64> = Node::new(&doc)
            .children("data")
            .filter_map(|n| n.value("id").and_then(Value::as_i64))
            .collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn missing_node_has_no_fields_or_children() {
        let node = Node::default();
        assert!(!node.has("x"));
        assert!(node.raw("x").is_none());
        assert!(!node.child("x").is_populated());
        assert_eq!(node.children("x").count(), 0);
    }

    #[test]
    fn raw_keeps_explicit_null_but_value_drops_it() {
        let doc = json!({"apr": null});
        let node = Node::new(&doc);
        assert!(node.has("apr"));
        assert_eq!(node.raw("apr"), Some(&Value::Null));
        assert!(node.value("apr").is_none());
    }

    #[test]
    fn str_ignores_non_string_values() {
        let doc = json!({"modelName": 5, "trimName": "SEL"});
        let node = Node::new(&doc);
        assert!(node.str("modelName").is_none());
        assert_eq!(node.str("trimName"), Some("SEL"));
    }

    #[test]
    fn populated_requires_a_key() {
        let empty = json!({});
        let full = json!({"a": 1});
        assert!(!Node::new(&empty).is_populated());
        assert!(Node::new(&full).is_populated());
        assert!(!Node::default().is_populated());
    }
}
