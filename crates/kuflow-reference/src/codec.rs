//! Pair-list encoding shared by every reference kind
//!
//! The wire form is `<prefix>:<key>=<value>;<key>=<value>;...;` where each
//! value is form-URL-encoded with spaces written as `%20`.

use std::collections::HashMap;

use url::form_urlencoded;

use crate::error::{ReferenceError, ReferenceResult};
use crate::kind::ReferenceKind;

/// Encode a single field value
///
/// The value is trimmed first. Spaces come out as `%20`, never `+`.
#[must_use]
pub fn encode_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.trim().as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

const REPLACEMENT: char = '\u{FFFD}';

/// Decode a single field value (`+` and `%20` both decode to a space)
///
/// Malformed escapes such as `%zz` are kept literally.
///
/// # Errors
/// Returns [`ReferenceError::InvalidEncoding`] if the escapes decode to
/// bytes that are not UTF-8
pub fn decode_value(value: &str) -> ReferenceResult<String> {
    let escaped = value.replace('&', "%26").replace('=', "%3D");
    let decoded = form_urlencoded::parse(escaped.as_bytes())
        .next()
        .map(|(key, _)| key.into_owned())
        .unwrap_or_default();

    // Lossy decoding is the only source of U+FFFD beyond the ones already
    // present literally or as `%EF%BF%BD`.
    let expected = value.matches(REPLACEMENT).count()
        + value.to_ascii_lowercase().matches("%ef%bf%bd").count();
    if decoded.matches(REPLACEMENT).count() > expected {
        return Err(ReferenceError::InvalidEncoding(value.to_string()));
    }
    Ok(decoded)
}

/// Builder for the encoded pair list
#[derive(Debug)]
pub(crate) struct PairWriter {
    out: String,
}

impl PairWriter {
    pub(crate) fn new(kind: ReferenceKind) -> Self {
        let mut out = String::with_capacity(64);
        out.push_str(kind.prefix());
        out.push(':');
        Self { out }
    }

    /// Append `key=<enc(value)>;`
    pub(crate) fn pair(mut self, key: &str, value: &str) -> Self {
        self.out.push_str(key);
        self.out.push('=');
        self.out.push_str(&encode_value(value));
        self.out.push(';');
        self
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}

/// Decoded `key -> value` pairs of an encoded reference
#[derive(Debug)]
pub(crate) struct Pairs {
    kind: ReferenceKind,
    fields: HashMap<String, String>,
}

impl Pairs {
    /// Parse `value` as a reference of `kind`
    ///
    /// Empty pieces and pieces without `=` are skipped; a repeated key keeps
    /// its last value. Any value that fails [`decode_value`] fails the parse.
    pub(crate) fn parse(kind: ReferenceKind, value: &str) -> ReferenceResult<Self> {
        let body = kind
            .strip_prefix(value)
            .ok_or(ReferenceError::UnknownPrefix { expected: kind })?;

        let fields = body
            .split(';')
            .filter_map(|piece| piece.split_once('='))
            .map(|(key, raw)| Ok((key.trim().to_string(), decode_value(raw)?)))
            .collect::<ReferenceResult<HashMap<_, _>>>()?;

        Ok(Self { kind, fields })
    }

    pub(crate) fn required(&mut self, field: &'static str) -> ReferenceResult<String> {
        self.fields
            .remove(field)
            .ok_or_else(|| ReferenceError::missing_field(self.kind, field))
    }

    pub(crate) fn optional(&mut self, field: &str) -> Option<String> {
        self.fields.remove(field)
    }
}
