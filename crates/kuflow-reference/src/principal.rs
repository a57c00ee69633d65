//! Principal references

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::codec::{PairWriter, Pairs};
use crate::error::{ReferenceError, ReferenceResult};
use crate::kind::ReferenceKind;

const ID: &str = "id";
const TYPE: &str = "type";
const NAME: &str = "name";

/// Reference to a principal (user, application, system)
///
/// Encoded as `kuflow-principal:id=..;type=..;name=..;`. Decoding also
/// accepts the `kuflow-principal-user:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrincipalReference {
    /// Principal identifier
    pub id: String,
    /// Principal type, e.g. `USER`
    pub principal_type: String,
    /// Display name
    pub name: String,
}

impl PrincipalReference {
    /// Create new principal reference
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        principal_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            principal_type: principal_type.into(),
            name: name.into(),
        }
    }

    /// Encode as a `kuflow-principal:` scalar
    #[inline]
    #[must_use]
    pub fn encode(&self) -> String {
        self.encode_as(ReferenceKind::Principal)
    }

    /// Encode with an explicit principal prefix
    ///
    /// A non-principal `kind` falls back to [`ReferenceKind::Principal`].
    #[must_use]
    pub fn encode_as(&self, kind: ReferenceKind) -> String {
        let kind = if kind.is_principal() {
            kind
        } else {
            ReferenceKind::Principal
        };

        PairWriter::new(kind)
            .pair(ID, &self.id)
            .pair(TYPE, &self.principal_type)
            .pair(NAME, &self.name)
            .finish()
    }

    /// Decode a principal scalar, returning `None` if it is not a match
    #[must_use]
    pub fn decode(value: &str) -> Option<Self> {
        match Self::try_decode(value) {
            Ok(principal) => Some(principal),
            Err(e) => {
                tracing::debug!("not a principal reference: {}", e);
                None
            }
        }
    }

    /// Decode a `kuflow-principal:` or `kuflow-principal-user:` scalar
    ///
    /// # Errors
    /// Returns error if the prefix doesn't match, a required field is missing,
    /// or a value is not valid UTF-8 once decoded
    pub fn try_decode(value: &str) -> ReferenceResult<Self> {
        let kind = if ReferenceKind::PrincipalUser.strip_prefix(value).is_some() {
            ReferenceKind::PrincipalUser
        } else {
            ReferenceKind::Principal
        };
        let mut pairs = Pairs::parse(kind, value)?;

        Ok(Self {
            id: pairs.required(ID)?,
            principal_type: pairs.required(TYPE)?,
            name: pairs.required(NAME)?,
        })
    }
}

impl Display for PrincipalReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for PrincipalReference {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_decode(s)
    }
}

impl serde::Serialize for PrincipalReference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> serde::Deserialize<'de> for PrincipalReference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::try_decode(&s).map_err(serde::de::Error::custom)
    }
}
