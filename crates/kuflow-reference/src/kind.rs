//! Reference kinds and their string prefixes

use std::fmt::{self, Display, Formatter};

/// Kind of reference carried by an encoded scalar
///
/// Each kind owns a distinct prefix; the encoded form is always
/// `<prefix>:<pairs>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// `kuflow-file`
    File,
    /// `kuflow-principal`
    Principal,
    /// `kuflow-principal-user`, the user-scoped principal variant
    PrincipalUser,
}

impl ReferenceKind {
    /// All known kinds
    pub const ALL: [Self; 3] = [Self::File, Self::Principal, Self::PrincipalUser];

    /// Prefix written before the `:` separator
    #[inline]
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::File => "kuflow-file",
            Self::Principal => "kuflow-principal",
            Self::PrincipalUser => "kuflow-principal-user",
        }
    }

    /// Check if this kind carries a principal
    #[inline]
    #[must_use]
    pub const fn is_principal(self) -> bool {
        matches!(self, Self::Principal | Self::PrincipalUser)
    }

    /// Strip `<prefix>:` from `value`, matching the prefix case-insensitively
    ///
    /// Returns the remaining pair list, or `None` if the prefix doesn't match.
    #[must_use]
    pub fn strip_prefix(self, value: &str) -> Option<&str> {
        let prefix = self.prefix();
        let head = value.get(..prefix.len())?;
        if !head.eq_ignore_ascii_case(prefix) {
            return None;
        }
        value[prefix.len()..].strip_prefix(':')
    }

    /// Classify an arbitrary scalar by its prefix
    #[must_use]
    pub fn detect(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.strip_prefix(value).is_some())
    }
}

impl Display for ReferenceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}
