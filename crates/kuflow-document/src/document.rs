//! Owned document wrapper
//!
//! [`Document`] bundles a JSON value with the [`UpdateOptions`] used for its
//! writes, for callers that hold a form document for a while and edit it
//! through several calls.

use serde_json::Value;

use crate::accessor::{self, FromDocumentValue};
use crate::error::{DocumentError, DocumentResult};
use crate::mutation::{self, IntoDocumentValue};
use crate::navigator;
use crate::options::UpdateOptions;
use crate::path::ToPath;

/// Form document with typed path access
///
/// # Examples
///
/// ```
/// use kuflow_document::Document;
///
/// let mut doc = Document::from_json(r#"{"customer": {"name": "Homer"}}"#).unwrap();
/// assert_eq!(doc.get::<String>("customer.name").unwrap(), "Homer");
///
/// doc.set("customer.tags.0", "vip").unwrap();
/// doc.delete("customer.name").unwrap();
/// assert_eq!(doc.to_json().unwrap(), r#"{"customer":{"tags":["vip"]}}"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    value: Value,
    options: UpdateOptions,
}

impl Document {
    /// Wrap an existing value
    #[inline]
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self {
            value,
            options: UpdateOptions::default(),
        }
    }

    /// Empty object document
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Value::Object(serde_json::Map::new()))
    }

    /// Parse from JSON string
    ///
    /// # Errors
    /// Returns error if JSON is invalid
    pub fn from_json(json: &str) -> DocumentResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::new(value))
    }

    /// Parse from YAML string
    ///
    /// # Errors
    /// Returns error if YAML is invalid
    pub fn from_yaml(yaml: &str) -> DocumentResult<Self> {
        let value: Value = serde_yaml::from_str(yaml)?;
        Ok(Self::new(value))
    }

    /// With write options
    #[inline]
    #[must_use]
    pub fn with_options(mut self, options: UpdateOptions) -> Self {
        self.options = options;
        self
    }

    /// Write options in effect
    #[inline]
    #[must_use]
    pub fn options(&self) -> &UpdateOptions {
        &self.options
    }

    /// Get JSON value reference
    #[inline]
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Unwrap into the JSON value
    #[inline]
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Serialize to compact JSON
    ///
    /// # Errors
    /// Returns error if serialization fails (rare for JSON)
    pub fn to_json(&self) -> DocumentResult<String> {
        Ok(serde_json::to_string(&self.value)?)
    }

    /// Serialize to YAML
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_yaml(&self) -> DocumentResult<String> {
        Ok(serde_yaml::to_string(&self.value)?)
    }

    /// Check if `path` resolves
    ///
    /// An unparseable path never resolves.
    #[must_use]
    pub fn exists(&self, path: impl ToPath) -> bool {
        path.to_path()
            .map(|path| navigator::exists(&self.value, &path))
            .unwrap_or(false)
    }

    /// Read a required value; see [`crate::get`]
    ///
    /// # Errors
    /// `InvalidPath`, `PropertyMissing` or `TypeMismatch`
    #[inline]
    pub fn get<T: FromDocumentValue>(&self, path: impl ToPath) -> DocumentResult<T> {
        accessor::get(&self.value, path)
    }

    /// Read an optional value; see [`crate::find`]
    ///
    /// # Errors
    /// `InvalidPath` or `TypeMismatch`
    #[inline]
    pub fn find<T: FromDocumentValue>(&self, path: impl ToPath) -> DocumentResult<Option<T>> {
        accessor::find(&self.value, path)
    }

    /// Read a required list; see [`crate::get_list`]
    ///
    /// # Errors
    /// `InvalidPath`, `PropertyMissing` or `TypeMismatch`
    #[inline]
    pub fn get_list<T: FromDocumentValue>(&self, path: impl ToPath) -> DocumentResult<Vec<T>> {
        accessor::get_list(&self.value, path)
    }

    /// Read an optional list; see [`crate::find_list`]
    ///
    /// # Errors
    /// `InvalidPath` or `TypeMismatch`
    #[inline]
    pub fn find_list<T: FromDocumentValue>(&self, path: impl ToPath) -> DocumentResult<Vec<T>> {
        accessor::find_list(&self.value, path)
    }

    /// Set or delete using this document's options; see [`crate::update`]
    ///
    /// # Errors
    /// `InvalidPath` or `PathConflict`
    #[inline]
    pub fn update<V: IntoDocumentValue>(
        &mut self,
        path: impl ToPath,
        value: Option<V>,
    ) -> DocumentResult<()> {
        mutation::update(&mut self.value, path, value, &self.options)
    }

    /// Set or replace a value
    ///
    /// # Errors
    /// `InvalidPath` or `PathConflict`
    #[inline]
    pub fn set<V: IntoDocumentValue>(&mut self, path: impl ToPath, value: V) -> DocumentResult<()> {
        self.update(path, Some(value))
    }

    /// Delete a value
    ///
    /// # Errors
    /// `InvalidPath` or `PathConflict`
    #[inline]
    pub fn delete(&mut self, path: impl ToPath) -> DocumentResult<()> {
        self.update(path, None::<Value>)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl From<Document> for Value {
    fn from(document: Document) -> Self {
        document.value
    }
}

impl AsRef<Value> for Document {
    fn as_ref(&self) -> &Value {
        &self.value
    }
}

impl std::str::FromStr for Document {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_invalid() {
        let result = Document::from_json("{not json");
        assert!(matches!(result, Err(DocumentError::InvalidJson(_))));
    }

    #[test]
    fn from_yaml() {
        let doc = Document::from_yaml("key1: text\nkey2:\n  - key1: true\n").unwrap();
        assert_eq!(doc.value(), &json!({"key1": "text", "key2": [{"key1": true}]}));
        assert!(doc.get::<bool>("key2.0.key1").unwrap());
    }

    #[test]
    fn from_yaml_invalid() {
        let result = Document::from_yaml("key: [unclosed");
        assert!(matches!(result, Err(DocumentError::InvalidYaml(_))));
    }

    #[test]
    fn yaml_round_trip() {
        let doc = Document::new(json!({"a": [1, "two"]}));
        let back = Document::from_yaml(&doc.to_yaml().unwrap()).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn exists() {
        let doc = Document::new(json!({"a": [null]}));
        assert!(doc.exists("a.0"));
        assert!(!doc.exists("a.1"));
        assert!(!doc.exists("a..0"));
    }

    #[test]
    fn uses_own_options() {
        let mut doc = Document::new(json!({"a": {"b": 1}}))
            .with_options(UpdateOptions::new().with_require_parent_on_delete(true));
        assert!(doc.delete("x.y").unwrap_err().is_path_conflict());
        doc.delete("a.b").unwrap();
        assert_eq!(doc.into_value(), json!({}));
    }

    #[test]
    fn default_is_empty_object() {
        assert_eq!(Document::default().value(), &json!({}));
    }
}
