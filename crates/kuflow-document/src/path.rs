//! Dotted document paths
//!
//! Provides [`Path`] for addressing values inside a document, e.g.
//! `customer.addresses.0.city`. Segments made only of ASCII digits are array
//! indexes; everything else is an object key. There is no escaping, so keys
//! containing `.` cannot be addressed.

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{DocumentError, DocumentResult};

/// A single step of a [`Path`]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    /// Object member access
    Key(String),
    /// Array element access
    Index(usize),
}

impl Segment {
    /// Classify a raw path piece
    ///
    /// # Errors
    /// Returns error if the piece is empty or is an index too large for `usize`
    fn parse(piece: &str, path: &str) -> DocumentResult<Self> {
        if piece.is_empty() {
            return Err(DocumentError::invalid_path(path, "empty segment"));
        }
        if is_all_digits(piece) {
            return piece
                .parse()
                .map(Self::Index)
                .map_err(|_| DocumentError::invalid_path(path, "index out of range"));
        }
        Ok(Self::Key(piece.to_string()))
    }

    /// Key segment that renders back to itself in a dotted path
    ///
    /// # Errors
    /// Returns [`DocumentError::InvalidPath`] if `key` is empty, contains `.`,
    /// or is made only of digits (it would parse as an index)
    pub fn key(key: impl Into<String>) -> DocumentResult<Self> {
        let key = key.into();
        let reason = if key.is_empty() {
            "empty segment"
        } else if key.contains('.') {
            "key contains '.'"
        } else if is_all_digits(&key) {
            "key is all digits"
        } else {
            return Ok(Self::Key(key));
        };
        Err(DocumentError::invalid_path(key, reason))
    }

    /// Returns true if this is a key segment
    #[inline]
    #[must_use]
    pub fn is_key(&self) -> bool {
        matches!(self, Self::Key(_))
    }

    /// Returns true if this is an index segment
    #[inline]
    #[must_use]
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }

    /// Name of the container kind this segment addresses
    #[inline]
    #[must_use]
    pub fn container_name(&self) -> &'static str {
        match self {
            Self::Key(_) => "object",
            Self::Index(_) => "array",
        }
    }
}

fn is_all_digits(piece: &str) -> bool {
    piece.bytes().all(|b| b.is_ascii_digit())
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Non-empty sequence of segments addressing a value in a document
///
/// # Examples
///
/// ```
/// use kuflow_document::{Path, Segment};
///
/// let path = Path::parse("key2.0.key1").unwrap();
/// assert_eq!(
///     path.segments(),
///     &[Segment::key("key2").unwrap(), Segment::Index(0), Segment::key("key1").unwrap()]
/// );
/// assert_eq!(path, Path::from_key("key2").unwrap().index(0).key("key1").unwrap());
/// assert_eq!(path.to_string(), "key2.0.key1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path(Vec<Segment>);

impl Path {
    /// Parse a dotted path string
    ///
    /// # Errors
    /// Returns [`DocumentError::InvalidPath`] for an empty path or an empty
    /// segment (`a..b`, `.a`, `a.`)
    pub fn parse(path: &str) -> DocumentResult<Self> {
        if path.is_empty() {
            return Err(DocumentError::invalid_path(path, "path is empty"));
        }

        path.split('.')
            .map(|piece| Segment::parse(piece, path))
            .collect::<DocumentResult<Vec<_>>>()
            .map(Self)
    }

    /// Single-segment path addressing an object member
    ///
    /// # Errors
    /// Same rules as [`Segment::key`]
    #[inline]
    pub fn from_key(key: impl Into<String>) -> DocumentResult<Self> {
        Segment::key(key).map(|segment| Self(vec![segment]))
    }

    /// Single-segment path addressing an array element
    #[inline]
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self(vec![Segment::Index(index)])
    }

    /// Append a key segment (builder)
    ///
    /// # Errors
    /// Same rules as [`Segment::key`]
    #[inline]
    pub fn key(mut self, key: impl Into<String>) -> DocumentResult<Self> {
        self.0.push(Segment::key(key)?);
        Ok(self)
    }

    /// Append an index segment (builder)
    #[inline]
    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.0.push(Segment::Index(index));
        self
    }

    /// Get path segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Number of segments (always at least one)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last segment
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Segment> {
        self.0.last()
    }

    /// Last segment and the segments before it
    #[inline]
    #[must_use]
    pub fn split_last(&self) -> Option<(&Segment, &[Segment])> {
        self.0.split_last()
    }

    /// Path without its last segment, `None` for a single-segment path
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        (self.0.len() > 1).then(|| Self(self.0[..self.0.len() - 1].to_vec()))
    }

    /// First `len` segments, clamped to `1..=self.len()`
    #[must_use]
    pub fn prefix(&self, len: usize) -> Self {
        let len = len.clamp(1, self.0.len());
        Self(self.0[..len].to_vec())
    }

    /// Iterator over segments from root to leaf
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.0.iter()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl serde::Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Anything that can name a [`Path`]: a dotted string or an already parsed path
pub trait ToPath {
    /// Borrow or parse the path
    ///
    /// # Errors
    /// Returns [`DocumentError::InvalidPath`] if a string fails to parse
    fn to_path(&self) -> DocumentResult<Cow<'_, Path>>;
}

impl ToPath for str {
    fn to_path(&self) -> DocumentResult<Cow<'_, Path>> {
        Path::parse(self).map(Cow::Owned)
    }
}

impl ToPath for String {
    fn to_path(&self) -> DocumentResult<Cow<'_, Path>> {
        self.as_str().to_path()
    }
}

impl ToPath for Path {
    fn to_path(&self) -> DocumentResult<Cow<'_, Path>> {
        Ok(Cow::Borrowed(self))
    }
}

impl<T: ToPath + ?Sized> ToPath for &T {
    fn to_path(&self) -> DocumentResult<Cow<'_, Path>> {
        (**self).to_path()
    }
}
