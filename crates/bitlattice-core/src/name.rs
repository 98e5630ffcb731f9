//! Type tag identifiers.

use std::borrow::Borrow;
use std::fmt;

/// Name of a type tag, unique across the whole emitted lattice.
///
/// Ordering is byte-wise lexicographic, which is the order rows appear in the
/// generated table.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TypeName(Box<str>);

impl TypeName {
    pub fn new(name: impl Into<Box<str>>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Foo` -> `OptFoo`.
    pub fn optional(&self) -> Self {
        Self::new(format!("{}{}", crate::OPTIONAL_PREFIX, self.0))
    }

    /// `Foo` -> `Foo<suffix>`, used to derive `*Exact`/`*User` variants.
    pub fn with_suffix(&self, suffix: &str) -> Self {
        Self::new(format!("{}{}", self.0, suffix))
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TypeName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl Borrow<str> for TypeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
