//! Language tags keying per-language term attributes.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A BCP 47-style language tag (`"en"`, `"cs"`, `"pt-BR"`).
///
/// Tags are compared verbatim; no normalization is applied. The backend
/// owns tag validity, this type only keys maps.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Create a tag from any string-like value.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The tag as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageTag {
    /// The application-wide default editing language.
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageTag {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for LanguageTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl Borrow<str> for LanguageTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_verbatim() {
        assert_eq!(LanguageTag::new("pt-BR").to_string(), "pt-BR");
    }

    #[test]
    fn no_normalization() {
        assert_ne!(LanguageTag::new("EN"), LanguageTag::new("en"));
    }

    #[test]
    fn default_is_english() {
        assert_eq!(LanguageTag::default().as_str(), "en");
    }

    #[test]
    fn borrow_allows_str_lookup() {
        use std::collections::BTreeMap;
        let mut map = BTreeMap::new();
        map.insert(LanguageTag::new("en"), 1);
        assert_eq!(map.get("en"), Some(&1));
    }
}
