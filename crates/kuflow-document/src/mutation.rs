//! In-place document writes
//!
//! Setting a value creates every missing intermediate container; the kind of
//! each new container follows the segment that will index it (index ⇒ array,
//! key ⇒ object). Deleting a value removes it and then prunes containers the
//! removal left empty, stopping below the root.

use chrono::{DateTime, NaiveDate, Utc};
use kuflow_reference::{FileReference, PrincipalReference};
use serde_json::{Map, Number, Value};

use crate::error::{value_type_name, DocumentError, DocumentResult};
use crate::navigator::child_mut;
use crate::options::UpdateOptions;
use crate::path::{Path, Segment, ToPath};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Values that can be stored in a document
///
/// Typed references and dates are stored as their string form; the document
/// never holds them as nested objects.
pub trait IntoDocumentValue {
    /// Convert into the stored representation
    fn into_document_value(self) -> Value;
}

impl IntoDocumentValue for Value {
    fn into_document_value(self) -> Value {
        self
    }
}

impl IntoDocumentValue for String {
    fn into_document_value(self) -> Value {
        Value::String(self)
    }
}

impl IntoDocumentValue for &str {
    fn into_document_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoDocumentValue for bool {
    fn into_document_value(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoDocumentValue for Number {
    fn into_document_value(self) -> Value {
        Value::Number(self)
    }
}

macro_rules! into_number {
    ($($ty:ty),+) => {
        $(
            impl IntoDocumentValue for $ty {
                fn into_document_value(self) -> Value {
                    Value::from(self)
                }
            }
        )+
    };
}

// Non-finite floats become `null`.
into_number!(i32, i64, u32, u64, usize, f64);

impl IntoDocumentValue for Map<String, Value> {
    fn into_document_value(self) -> Value {
        Value::Object(self)
    }
}

impl<T: IntoDocumentValue> IntoDocumentValue for Vec<T> {
    fn into_document_value(self) -> Value {
        Value::Array(self.into_iter().map(IntoDocumentValue::into_document_value).collect())
    }
}

impl IntoDocumentValue for FileReference {
    fn into_document_value(self) -> Value {
        Value::String(self.encode())
    }
}

impl IntoDocumentValue for &FileReference {
    fn into_document_value(self) -> Value {
        Value::String(self.encode())
    }
}

impl IntoDocumentValue for PrincipalReference {
    fn into_document_value(self) -> Value {
        Value::String(self.encode())
    }
}

impl IntoDocumentValue for &PrincipalReference {
    fn into_document_value(self) -> Value {
        Value::String(self.encode())
    }
}

impl IntoDocumentValue for NaiveDate {
    fn into_document_value(self) -> Value {
        Value::String(self.format(DATE_FORMAT).to_string())
    }
}

impl IntoDocumentValue for DateTime<Utc> {
    fn into_document_value(self) -> Value {
        self.date_naive().into_document_value()
    }
}

/// Set, replace or delete the value at `path`
///
/// `Some(value)` writes, autovivifying missing containers. `None` deletes;
/// deleting a path that doesn't resolve is a no-op unless
/// [`UpdateOptions::require_parent_on_delete`] is set and the parent is
/// missing.
///
/// # Errors
/// - [`DocumentError::InvalidPath`] if `path` doesn't parse
/// - [`DocumentError::PathConflict`] if the document shape conflicts with the
///   path (a scalar in the way, a key into an array, an index into an object,
///   or an index past the end of an array)
///
/// # Examples
///
/// ```
/// use kuflow_document::{update, UpdateOptions};
/// use serde_json::{json, Value};
///
/// let mut doc = json!({});
/// let options = UpdateOptions::default();
/// update(&mut doc, "key2.0.key1", Some(true), &options).unwrap();
/// assert_eq!(doc, json!({"key2": [{"key1": true}]}));
///
/// update(&mut doc, "key2.0.key1", None::<Value>, &options).unwrap();
/// assert_eq!(doc, json!({}));
/// ```
pub fn update<V: IntoDocumentValue>(
    document: &mut Value,
    path: impl ToPath,
    value: Option<V>,
    options: &UpdateOptions,
) -> DocumentResult<()> {
    let path = path.to_path()?;
    match value {
        Some(value) => set_at(document, &path, value.into_document_value()),
        None => delete_at(document, &path, options),
    }
}

/// Set or replace the value at `path` with default options
///
/// # Errors
/// See [`update`]
#[inline]
pub fn set<V: IntoDocumentValue>(
    document: &mut Value,
    path: impl ToPath,
    value: V,
) -> DocumentResult<()> {
    update(document, path, Some(value), &UpdateOptions::default())
}

/// Delete the value at `path` with default options
///
/// # Errors
/// See [`update`]
#[inline]
pub fn delete(document: &mut Value, path: impl ToPath) -> DocumentResult<()> {
    update(document, path, None::<Value>, &UpdateOptions::default())
}

fn empty_container(next: &Segment) -> Value {
    match next {
        Segment::Key(_) => Value::Object(Map::new()),
        Segment::Index(_) => Value::Array(Vec::new()),
    }
}

fn is_empty_container(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::Bool(_) | Value::Number(_) | Value::String(_))
}

fn shape_conflict(node: &Value, segment: &Segment, path: &Path, depth: usize) -> DocumentError {
    let at = if depth == 0 {
        "document root".to_string()
    } else {
        path.prefix(depth).to_string()
    };
    DocumentError::path_conflict(
        path.clone(),
        format!(
            "expected {} at {}, found {}",
            segment.container_name(),
            at,
            value_type_name(node)
        ),
    )
}

/// Step into the child addressed by `segment`, creating it if missing
///
/// `next` is the segment that will index the child and decides the kind of a
/// freshly created container. A `null` child counts as missing.
fn child_or_insert<'a>(
    node: &'a mut Value,
    segment: &Segment,
    next: &Segment,
    path: &Path,
    depth: usize,
) -> DocumentResult<&'a mut Value> {
    let child = match (node, segment) {
        (Value::Object(map), Segment::Key(key)) => map.entry(key.clone()).or_insert(Value::Null),
        (Value::Array(items), Segment::Index(index)) => {
            let (index, len) = (*index, items.len());
            if index == len {
                items.push(Value::Null);
            }
            items
                .get_mut(index)
                .ok_or_else(|| past_end(path, index, len))?
        }
        (node, segment) => return Err(shape_conflict(node, segment, path, depth)),
    };

    if child.is_null() {
        tracing::debug!(
            "creating {} at {}",
            next.container_name(),
            path.prefix(depth + 1)
        );
        *child = empty_container(next);
    }
    Ok(child)
}

fn past_end(path: &Path, index: usize, len: usize) -> DocumentError {
    DocumentError::path_conflict(
        path.clone(),
        format!("index {index} is past the end of an array of length {len}"),
    )
}

/// Reject a write that would conflict, before anything is created
///
/// Containers created on the way are empty, so below the first missing node
/// only index `0` is reachable.
fn check_set(document: &Value, path: &Path) -> DocumentResult<()> {
    let mut node = Some(document);
    for (depth, segment) in path.iter().enumerate() {
        node = match (node.filter(|n| !n.is_null()), segment) {
            (None, Segment::Index(index)) if *index > 0 => return Err(past_end(path, *index, 0)),
            (None, _) => None,
            (Some(Value::Object(map)), Segment::Key(key)) => map.get(key),
            (Some(Value::Array(items)), Segment::Index(index)) => {
                if *index > items.len() {
                    return Err(past_end(path, *index, items.len()));
                }
                items.get(*index)
            }
            (Some(existing), segment) => {
                return Err(shape_conflict(existing, segment, path, depth))
            }
        };
    }
    Ok(())
}

fn set_at(document: &mut Value, path: &Path, value: Value) -> DocumentResult<()> {
    check_set(document, path)?;

    let segments = path.segments();
    let Some((last, _)) = path.split_last() else {
        return Ok(());
    };

    if document.is_null() {
        *document = empty_container(&segments[0]);
    }

    let mut node = document;
    for (depth, pair) in segments.windows(2).enumerate() {
        node = child_or_insert(node, &pair[0], &pair[1], path, depth)?;
    }

    let depth = segments.len() - 1;
    match (node, last) {
        (Value::Object(map), Segment::Key(key)) => {
            map.insert(key.clone(), value);
            Ok(())
        }
        (Value::Array(items), Segment::Index(index)) => {
            let (index, len) = (*index, items.len());
            if index < len {
                items[index] = value;
            } else if index == len {
                items.push(value);
            } else {
                return Err(past_end(path, index, len));
            }
            Ok(())
        }
        (node, segment) => Err(shape_conflict(node, segment, path, depth)),
    }
}

struct Deletion<'p> {
    path: &'p Path,
    options: &'p UpdateOptions,
}

impl Deletion<'_> {
    /// Segment at `depth` couldn't be resolved from `node`
    fn unresolved(&self, node: &Value, depth: usize) -> DocumentResult<bool> {
        let segment = &self.path.segments()[depth];
        if is_scalar(node) {
            return Err(shape_conflict(node, segment, self.path, depth));
        }
        if self.options.require_parent_on_delete {
            return Err(DocumentError::path_conflict(
                self.path.clone(),
                format!("parent {} doesn't exist", self.parent_name()),
            ));
        }
        tracing::debug!("delete of {} is a no-op: path not found", self.path);
        Ok(false)
    }

    fn parent_name(&self) -> String {
        self.path
            .parent()
            .map_or_else(|| "document root".to_string(), |parent| parent.to_string())
    }

    /// Remove the terminal member or element from `node`
    fn remove_terminal(&self, node: &mut Value, depth: usize) -> DocumentResult<bool> {
        let segment = &self.path.segments()[depth];
        match (node, segment) {
            (Value::Object(map), Segment::Key(key)) => {
                let removed = map.remove(key).is_some();
                if !removed {
                    tracing::debug!("delete of {} is a no-op: key not present", self.path);
                }
                Ok(removed)
            }
            (Value::Array(items), Segment::Index(index)) => {
                if *index < items.len() {
                    items.remove(*index);
                    Ok(true)
                } else {
                    tracing::debug!("delete of {} is a no-op: index out of range", self.path);
                    Ok(false)
                }
            }
            (node, _) => self.unresolved(node, depth),
        }
    }

    /// Delete below `node`, returning whether anything was removed
    fn remove_in(&self, node: &mut Value, depth: usize) -> DocumentResult<bool> {
        let segments = self.path.segments();
        if depth + 1 == segments.len() {
            return self.remove_terminal(node, depth);
        }

        let segment = &segments[depth];
        let Some(child) = child_mut(node, segment) else {
            return self.unresolved(node, depth);
        };

        if !self.remove_in(child, depth + 1)? {
            return Ok(false);
        }

        if self.options.prune_empty_containers && is_empty_container(child) {
            tracing::debug!("pruning empty container at {}", self.path.prefix(depth + 1));
            match (node, segment) {
                (Value::Object(map), Segment::Key(key)) => {
                    map.remove(key);
                }
                (Value::Array(items), Segment::Index(index)) => {
                    items.remove(*index);
                }
                _ => {}
            }
        }
        Ok(true)
    }
}

fn delete_at(document: &mut Value, path: &Path, options: &UpdateOptions) -> DocumentResult<()> {
    Deletion { path, options }.remove_in(document, 0).map(|_| ())
}
