//! KuFlow form documents
//!
//! Typed, fail-fast access to loosely-typed form documents addressed by
//! dotted paths, plus in-place mutation with autovivification and pruning.
//!
//! # Core Concepts
//!
//! - [`Path`]: dotted path such as `key2.0.key1`; digit-only segments are indexes
//! - [`resolve`]: walk a path, reporting absence rather than shape conflicts
//! - [`get`] / [`find`]: strict and lenient typed reads (`get_string`, `find_file`, ...)
//! - [`update`]: set, replace or delete with [`UpdateOptions`]
//! - [`Document`]: owned wrapper exposing all of the above as methods
//!
//! File and principal references are read and written through their encoded
//! string form; see [`kuflow_reference`].
//!
//! # Example
//!
//! ```
//! use kuflow_document::{find_string, get_boolean_list, set, delete};
//! use serde_json::json;
//!
//! let mut doc = json!({});
//! set(&mut doc, "key1", "text").unwrap();
//! set(&mut doc, "key2.0.key1", true).unwrap();
//! set(&mut doc, "key3", 100).unwrap();
//! assert_eq!(doc, json!({"key1": "text", "key2": [{"key1": true}], "key3": 100}));
//!
//! delete(&mut doc, "key1").unwrap();
//! assert_eq!(find_string(&doc, "key1").unwrap(), None);
//!
//! let flags = json!({"flags": [true, false, "true", "false"]});
//! assert_eq!(get_boolean_list(&flags, "flags").unwrap(), vec![true, false, true, false]);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod accessor;
mod document;
mod error;
mod mutation;
mod navigator;
mod options;
mod path;

// Re-exports
pub use accessor::*;
pub use document::Document;
pub use error::{value_type_name, DocumentError, DocumentResult};
pub use mutation::{delete, set, update, IntoDocumentValue};
pub use navigator::{exists, resolve, resolve_mut};
pub use options::UpdateOptions;
pub use path::{Path, Segment, ToPath};

pub use kuflow_reference::{FileReference, PrincipalReference, ReferenceKind};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
