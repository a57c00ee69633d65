//! Read-side path resolution
//!
//! A path resolves only when every key lands on an object and every index
//! lands inside an array. Any other shape is reported as not found; type
//! conflicts during traversal are not distinguished from absence.

use serde_json::Value;

use crate::path::{Path, Segment};

/// Descend one segment
#[inline]
pub(crate) fn child<'a>(node: &'a Value, segment: &Segment) -> Option<&'a Value> {
    match (node, segment) {
        (Value::Object(map), Segment::Key(key)) => map.get(key),
        (Value::Array(items), Segment::Index(index)) => items.get(*index),
        _ => None,
    }
}

/// Descend one segment, mutably
#[inline]
pub(crate) fn child_mut<'a>(node: &'a mut Value, segment: &Segment) -> Option<&'a mut Value> {
    match (node, segment) {
        (Value::Object(map), Segment::Key(key)) => map.get_mut(key),
        (Value::Array(items), Segment::Index(index)) => items.get_mut(*index),
        _ => None,
    }
}

/// Resolve `path` against `document`
///
/// Returns the terminal node, which may itself be a container.
#[must_use]
pub fn resolve<'a>(document: &'a Value, path: &Path) -> Option<&'a Value> {
    let found = path
        .iter()
        .try_fold(document, |node, segment| child(node, segment));
    if found.is_none() {
        tracing::trace!("path {} not found", path);
    }
    found
}

/// Resolve `path` against `document`, mutably
#[must_use]
pub fn resolve_mut<'a>(document: &'a mut Value, path: &Path) -> Option<&'a mut Value> {
    path.iter()
        .try_fold(document, |node, segment| child_mut(node, segment))
}

/// Check if `path` resolves to a value (including `null`)
#[inline]
#[must_use]
pub fn exists(document: &Value, path: &Path) -> bool {
    resolve(document, path).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(s: &str) -> Path {
        Path::parse(s).unwrap()
    }

    #[test]
    fn resolve_nested_members_and_elements() {
        let doc = json!({"a": {"b": [10, {"c": "deep"}]}});
        assert_eq!(resolve(&doc, &path("a.b.0")), Some(&json!(10)));
        assert_eq!(resolve(&doc, &path("a.b.1.c")), Some(&json!("deep")));
    }

    #[test]
    fn resolve_returns_containers() {
        let doc = json!({"a": {"b": [1, 2]}});
        assert_eq!(resolve(&doc, &path("a")), Some(&json!({"b": [1, 2]})));
        assert_eq!(resolve(&doc, &path("a.b")), Some(&json!([1, 2])));
    }

    #[test]
    fn resolve_missing_member() {
        let doc = json!({"a": {}});
        assert_eq!(resolve(&doc, &path("a.b")), None);
        assert_eq!(resolve(&doc, &path("x.y.z")), None);
    }

    #[test]
    fn resolve_index_out_of_range() {
        let doc = json!({"a": [1, 2]});
        assert_eq!(resolve(&doc, &path("a.2")), None);
    }

    #[test]
    fn resolve_shape_mismatch_is_not_found() {
        let doc = json!({"a": [1], "b": {"0": "zero"}, "s": "text"});
        assert_eq!(resolve(&doc, &path("a.x")), None);
        assert_eq!(resolve(&doc, &path("b.0")), None);
        assert_eq!(resolve(&doc, &path("s.length")), None);
        assert_eq!(resolve(&doc, &path("s.0")), None);
    }

    #[test]
    fn resolve_null_value_is_found() {
        let doc = json!({"a": null});
        assert_eq!(resolve(&doc, &path("a")), Some(&Value::Null));
        assert!(exists(&doc, &path("a")));
        assert!(!exists(&doc, &path("a.b")));
    }

    #[test]
    fn resolve_mut_edits_in_place() {
        let mut doc = json!({"a": [{"b": 1}]});
        if let Some(target) = resolve_mut(&mut doc, &path("a.0.b")) {
            *target = json!(2);
        }
        assert_eq!(doc, json!({"a": [{"b": 2}]}));
    }
}
