//! Identifiers and asset kinds shared with the backing vocabulary store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A URI-like identifier.
///
/// Treated as an opaque string; the backend owns IRI syntax and
/// namespace policy.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(String);

impl Iri {
    /// Create an identifier from any string-like value.
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    /// The identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, yielding the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// True for the empty identifier.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Iri {
    fn from(iri: &str) -> Self {
        Self(iri.to_string())
    }
}

impl From<String> for Iri {
    fn from(iri: String) -> Self {
        Self(iri)
    }
}

/// Kind tag attached to identifier-suggestion requests.
///
/// The suggestion service namespaces generated identifiers by the kind of
/// asset being created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetKind {
    /// A vocabulary term.
    Term,
    /// A vocabulary itself.
    Vocabulary,
}

impl AssetKind {
    /// The wire tag sent to the suggestion service.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Term => "TERM",
            Self::Vocabulary => "VOCABULARY",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
