//! Error types for reference decoding

use crate::kind::ReferenceKind;

/// Errors raised while decoding an encoded reference scalar
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceError {
    /// Value does not start with the expected `<prefix>:`
    #[error("value is not a {expected} reference")]
    UnknownPrefix { expected: ReferenceKind },

    /// A required `key=value` pair is absent
    #[error("{kind} reference is missing required field '{field}'")]
    MissingField {
        kind: ReferenceKind,
        field: &'static str,
    },

    /// The `size` field of a file reference is not a non-negative integer
    #[error("invalid file size: '{0}'")]
    InvalidSize(String),

    /// A field value's percent escapes do not decode to UTF-8
    #[error("field value '{0}' is not valid UTF-8 once decoded")]
    InvalidEncoding(String),
}

impl ReferenceError {
    /// Create missing field error
    #[inline]
    pub fn missing_field(kind: ReferenceKind, field: &'static str) -> Self {
        Self::MissingField { kind, field }
    }
}

/// Result type alias for reference decoding
pub type ReferenceResult<T> = Result<T, ReferenceError>;
