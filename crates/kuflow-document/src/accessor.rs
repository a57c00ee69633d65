//! Typed reads
//!
//! Every supported type has a strict reader (`get_*`, fails with
//! [`DocumentError::PropertyMissing`]) and a lenient one (`find_*`, returns
//! `None`). Both fail with [`DocumentError::TypeMismatch`] when the value is
//! present but of the wrong type.
//!
//! List readers decode every element of an array with the same rule. Note that
//! `find_*_list` returns an empty `Vec` for a missing path, unlike the scalar
//! `find_*` readers which return `None`.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use kuflow_reference::{FileReference, PrincipalReference};
use serde_json::{Map, Number, Value};

use crate::error::{DocumentError, DocumentResult};
use crate::navigator::resolve;
use crate::path::{Path, ToPath};

/// Types that can be read out of a document value
pub trait FromDocumentValue: Sized {
    /// Type name used in [`DocumentError::TypeMismatch`]
    const EXPECTED: &'static str;

    /// Convert, returning `None` when `value` doesn't satisfy the type
    fn from_document_value(value: &Value) -> Option<Self>;
}

impl FromDocumentValue for String {
    const EXPECTED: &'static str = "string";

    fn from_document_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromDocumentValue for Number {
    const EXPECTED: &'static str = "number";

    fn from_document_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(n.clone()),
            _ => None,
        }
    }
}

impl FromDocumentValue for f64 {
    const EXPECTED: &'static str = "number";

    fn from_document_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromDocumentValue for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_document_value(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl FromDocumentValue for u64 {
    const EXPECTED: &'static str = "unsigned integer";

    fn from_document_value(value: &Value) -> Option<Self> {
        value.as_u64()
    }
}

impl FromDocumentValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_document_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) if s == "true" => Some(true),
            Value::String(s) if s == "false" => Some(false),
            _ => None,
        }
    }
}

impl FromDocumentValue for NaiveDate {
    const EXPECTED: &'static str = "date";

    fn from_document_value(value: &Value) -> Option<Self> {
        value.as_str().and_then(parse_date)
    }
}

impl FromDocumentValue for DateTime<Utc> {
    const EXPECTED: &'static str = "date";

    fn from_document_value(value: &Value) -> Option<Self> {
        NaiveDate::from_document_value(value)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| Utc.from_utc_datetime(&midnight))
    }
}

impl FromDocumentValue for Vec<Value> {
    const EXPECTED: &'static str = "array";

    fn from_document_value(value: &Value) -> Option<Self> {
        value.as_array().cloned()
    }
}

impl FromDocumentValue for Map<String, Value> {
    const EXPECTED: &'static str = "object";

    fn from_document_value(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }
}

impl FromDocumentValue for FileReference {
    const EXPECTED: &'static str = "file reference";

    fn from_document_value(value: &Value) -> Option<Self> {
        value.as_str().and_then(FileReference::decode)
    }
}

impl FromDocumentValue for PrincipalReference {
    const EXPECTED: &'static str = "principal reference";

    fn from_document_value(value: &Value) -> Option<Self> {
        value.as_str().and_then(PrincipalReference::decode)
    }
}

/// ISO-8601 calendar date, or an RFC 3339 date-time truncated to its UTC date
fn parse_date(s: &str) -> Option<NaiveDate> {
    Some(s)
        .filter(|s| is_calendar_date(s))
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
}

/// Exactly `YYYY-MM-DD`; chrono alone also takes `2020-1-1`
fn is_calendar_date(s: &str) -> bool {
    s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn coerce<T: FromDocumentValue>(value: &Value, path: &Path) -> DocumentResult<T> {
    T::from_document_value(value)
        .ok_or_else(|| DocumentError::type_mismatch(path.clone(), T::EXPECTED, value))
}

fn coerce_list<T: FromDocumentValue>(value: &Value, path: &Path) -> DocumentResult<Vec<T>> {
    let items = value
        .as_array()
        .ok_or_else(|| DocumentError::type_mismatch(path.clone(), "array", value))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| coerce(item, &path.clone().index(i)))
        .collect()
}

/// Read a required value
///
/// # Errors
/// - [`DocumentError::InvalidPath`] if `path` doesn't parse
/// - [`DocumentError::PropertyMissing`] if `path` doesn't resolve
/// - [`DocumentError::TypeMismatch`] if the value is not a `T`
pub fn get<T: FromDocumentValue>(document: &Value, path: impl ToPath) -> DocumentResult<T> {
    let path = path.to_path()?;
    match resolve(document, &path) {
        Some(value) => coerce(value, &path),
        None => Err(DocumentError::property_missing(path.into_owned())),
    }
}

/// Read an optional value
///
/// # Errors
/// - [`DocumentError::InvalidPath`] if `path` doesn't parse
/// - [`DocumentError::TypeMismatch`] if the value is present but not a `T`
pub fn find<T: FromDocumentValue>(
    document: &Value,
    path: impl ToPath,
) -> DocumentResult<Option<T>> {
    let path = path.to_path()?;
    resolve(document, &path)
        .map(|value| coerce(value, &path))
        .transpose()
}

/// Read a required array, decoding every element as `T`
///
/// # Errors
/// - [`DocumentError::InvalidPath`] if `path` doesn't parse
/// - [`DocumentError::PropertyMissing`] if `path` doesn't resolve
/// - [`DocumentError::TypeMismatch`] if the value is not an array or an
///   element is not a `T` (reported at the element's path)
pub fn get_list<T: FromDocumentValue>(
    document: &Value,
    path: impl ToPath,
) -> DocumentResult<Vec<T>> {
    let path = path.to_path()?;
    match resolve(document, &path) {
        Some(value) => coerce_list(value, &path),
        None => Err(DocumentError::property_missing(path.into_owned())),
    }
}

/// Read an optional array, decoding every element as `T`
///
/// A missing path yields an empty `Vec`.
///
/// # Errors
/// Same as [`get_list`], minus `PropertyMissing`
pub fn find_list<T: FromDocumentValue>(
    document: &Value,
    path: impl ToPath,
) -> DocumentResult<Vec<T>> {
    let path = path.to_path()?;
    match resolve(document, &path) {
        Some(value) => coerce_list(value, &path),
        None => Ok(Vec::new()),
    }
}

macro_rules! typed_accessors {
    ($($name:literal, $ty:ty => $get:ident, $find:ident, $get_list:ident, $find_list:ident;)+) => {
        $(
            #[doc = concat!("Read a required ", $name, ".\n\n# Errors\nSee [`get`].")]
            #[inline]
            pub fn $get(document: &Value, path: impl ToPath) -> DocumentResult<$ty> {
                get(document, path)
            }

            #[doc = concat!("Read an optional ", $name, ".\n\n# Errors\nSee [`find`].")]
            #[inline]
            pub fn $find(document: &Value, path: impl ToPath) -> DocumentResult<Option<$ty>> {
                find(document, path)
            }

            #[doc = concat!(
                "Read a required list of ", $name, " values.\n\n# Errors\nSee [`get_list`]."
            )]
            #[inline]
            pub fn $get_list(document: &Value, path: impl ToPath) -> DocumentResult<Vec<$ty>> {
                get_list(document, path)
            }

            #[doc = concat!(
                "Read an optional list of ", $name, " values.\n\n# Errors\nSee [`find_list`]."
            )]
            #[inline]
            pub fn $find_list(document: &Value, path: impl ToPath) -> DocumentResult<Vec<$ty>> {
                find_list(document, path)
            }
        )+
    };
}

typed_accessors! {
    "string", String => get_string, find_string, get_string_list, find_string_list;
    "number", Number => get_number, find_number, get_number_list, find_number_list;
    "integer", i64 => get_integer, find_integer, get_integer_list, find_integer_list;
    "unsigned integer", u64 => get_unsigned, find_unsigned, get_unsigned_list, find_unsigned_list;
    "float", f64 => get_float, find_float, get_float_list, find_float_list;
    "boolean", bool => get_boolean, find_boolean, get_boolean_list, find_boolean_list;
    "date", DateTime<Utc> => get_date, find_date, get_date_list, find_date_list;
    "array", Vec<Value> => get_array, find_array, get_array_list, find_array_list;
    "object", Map<String, Value> => get_object, find_object, get_object_list, find_object_list;
    "file reference", FileReference => get_file, find_file, get_file_list, find_file_list;
    "principal reference", PrincipalReference =>
        get_principal, find_principal, get_principal_list, find_principal_list;
}
