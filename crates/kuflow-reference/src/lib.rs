//! KuFlow references
//!
//! Typed file and principal references that travel through form documents
//! as single delimited string scalars.
//!
//! # Core Concepts
//!
//! - [`FileReference`]: stored file (`kuflow-file:` prefix)
//! - [`PrincipalReference`]: user or other principal (`kuflow-principal:` prefix)
//! - [`ReferenceKind`]: the known prefixes, with case-insensitive matching
//!
//! # Example
//!
//! ```
//! use kuflow_reference::{PrincipalReference, ReferenceKind};
//!
//! let principal = PrincipalReference::new("42", "USER", "Homer Simpson");
//! let encoded = principal.encode();
//! assert_eq!(encoded, "kuflow-principal:id=42;type=USER;name=Homer%20Simpson;");
//! assert_eq!(ReferenceKind::detect(&encoded), Some(ReferenceKind::Principal));
//! assert_eq!(PrincipalReference::decode(&encoded), Some(principal));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod codec;
mod error;
mod file;
mod kind;
mod principal;

pub use codec::{decode_value, encode_value};
pub use error::{ReferenceError, ReferenceResult};
pub use file::FileReference;
pub use kind::ReferenceKind;
pub use principal::PrincipalReference;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
