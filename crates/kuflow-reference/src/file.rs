//! File references
//!
//! A [`FileReference`] points at a stored file and travels through form
//! documents as a single `kuflow-file:` string.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::codec::{PairWriter, Pairs};
use crate::error::{ReferenceError, ReferenceResult};
use crate::kind::ReferenceKind;

const URI: &str = "uri";
const TYPE: &str = "type";
const NAME: &str = "name";
const SIZE: &str = "size";
const ORIGINAL_NAME: &str = "original-name";

/// Reference to a stored file
///
/// # Examples
///
/// ```
/// use kuflow_reference::FileReference;
///
/// let file = FileReference::new("ku:dms/file/1", "application/pdf", "report.pdf", 500);
/// let encoded = file.encode();
/// assert!(encoded.starts_with("kuflow-file:uri=ku%3Adms%2Ffile%2F1;"));
/// assert_eq!(FileReference::decode(&encoded), Some(file));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileReference {
    /// Storage URI
    pub uri: String,
    /// MIME type
    pub content_type: String,
    /// Display name
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Name of the file as uploaded, if it differs from `name`
    pub original_name: Option<String>,
}

impl FileReference {
    /// Create new file reference
    #[inline]
    #[must_use]
    pub fn new(
        uri: impl Into<String>,
        content_type: impl Into<String>,
        name: impl Into<String>,
        size: u64,
    ) -> Self {
        Self {
            uri: uri.into(),
            content_type: content_type.into(),
            name: name.into(),
            size,
            original_name: None,
        }
    }

    /// With original upload name
    #[inline]
    #[must_use]
    pub fn with_original_name(mut self, original_name: impl Into<String>) -> Self {
        self.original_name = Some(original_name.into());
        self
    }

    /// Encode as a `kuflow-file:` scalar
    #[must_use]
    pub fn encode(&self) -> String {
        let writer = PairWriter::new(ReferenceKind::File)
            .pair(URI, &self.uri)
            .pair(TYPE, &self.content_type)
            .pair(NAME, &self.name)
            .pair(SIZE, &self.size.to_string());

        match &self.original_name {
            Some(original_name) => writer.pair(ORIGINAL_NAME, original_name).finish(),
            None => writer.finish(),
        }
    }

    /// Decode a `kuflow-file:` scalar, returning `None` if it is not a match
    #[must_use]
    pub fn decode(value: &str) -> Option<Self> {
        match Self::try_decode(value) {
            Ok(file) => Some(file),
            Err(e) => {
                tracing::debug!("not a file reference: {}", e);
                None
            }
        }
    }

    /// Decode a `kuflow-file:` scalar
    ///
    /// # Errors
    /// Returns error if the prefix doesn't match, a required field is
    /// missing, a value is not valid UTF-8 once decoded, or `size` is not a
    /// non-negative integer
    pub fn try_decode(value: &str) -> ReferenceResult<Self> {
        let mut pairs = Pairs::parse(ReferenceKind::File, value)?;

        let uri = pairs.required(URI)?;
        let content_type = pairs.required(TYPE)?;
        let name = pairs.required(NAME)?;
        let raw_size = pairs.required(SIZE)?;
        let size = raw_size
            .trim()
            .parse::<u64>()
            .map_err(|_| ReferenceError::InvalidSize(raw_size.clone()))?;
        let original_name = pairs.optional(ORIGINAL_NAME);

        Ok(Self {
            uri,
            content_type,
            name,
            size,
            original_name,
        })
    }
}

impl Display for FileReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for FileReference {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_decode(s)
    }
}

impl serde::Serialize for FileReference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> serde::Deserialize<'de> for FileReference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::try_decode(&s).map_err(serde::de::Error::custom)
    }
}
