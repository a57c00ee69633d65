//! Error types for document access and mutation

use serde_json::Value;

use crate::path::Path;

/// Errors raised by path parsing, typed reads and writes
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Malformed path string
    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    /// Path does not resolve to a value
    #[error("property missing: {path}")]
    PropertyMissing { path: Path },

    /// Value exists but is not of the requested type
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: Path,
        expected: &'static str,
        found: &'static str,
    },

    /// Document shape conflicts with the requested write
    #[error("path conflict at {path}: {reason}")]
    PathConflict { path: Path, reason: String },

    /// Document source is not valid JSON
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Document source is not valid YAML
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

impl DocumentError {
    /// Create invalid path error
    #[inline]
    pub fn invalid_path(path: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason,
        }
    }

    /// Create property missing error
    #[inline]
    pub fn property_missing(path: Path) -> Self {
        Self::PropertyMissing { path }
    }

    /// Create type mismatch error
    #[inline]
    pub fn type_mismatch(path: Path, expected: &'static str, found: &Value) -> Self {
        Self::TypeMismatch {
            path,
            expected,
            found: value_type_name(found),
        }
    }

    /// Create path conflict error
    #[inline]
    pub fn path_conflict(path: Path, reason: impl Into<String>) -> Self {
        Self::PathConflict {
            path,
            reason: reason.into(),
        }
    }

    /// Check if this is a strict-read miss
    #[inline]
    #[must_use]
    pub fn is_property_missing(&self) -> bool {
        matches!(self, Self::PropertyMissing { .. })
    }

    /// Check if this is a type mismatch
    #[inline]
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Check if this is a structural write conflict
    #[inline]
    #[must_use]
    pub fn is_path_conflict(&self) -> bool {
        matches!(self, Self::PathConflict { .. })
    }
}

/// Result type alias for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Get the type name of a JSON value
#[inline]
#[must_use]
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn type_mismatch_display() {
        let path = Path::parse("a.0").unwrap();
        let err = DocumentError::type_mismatch(path, "string", &json!(1));
        assert_eq!(
            err.to_string(),
            "type mismatch at a.0: expected string, found number"
        );
        assert!(err.is_type_mismatch());
    }

    #[test]
    fn property_missing_display() {
        let err = DocumentError::property_missing(Path::parse("key1").unwrap());
        assert_eq!(err.to_string(), "property missing: key1");
        assert!(err.is_property_missing());
    }

    #[test]
    fn invalid_path_display() {
        let err = DocumentError::invalid_path("a..b", "empty segment");
        assert_eq!(err.to_string(), "invalid path 'a..b': empty segment");
    }

    #[test]
    fn value_type_names() {
        assert_eq!(value_type_name(&json!(null)), "null");
        assert_eq!(value_type_name(&json!(true)), "boolean");
        assert_eq!(value_type_name(&json!(4.5)), "number");
        assert_eq!(value_type_name(&json!("x")), "string");
        assert_eq!(value_type_name(&json!([])), "array");
        assert_eq!(value_type_name(&json!({})), "object");
    }
}
