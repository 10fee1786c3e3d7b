//! Multilingual string values and localized lookup.
//!
//! Term attributes like labels and definitions carry one value per
//! language tag. Lookup resolves a display value for a requested language
//! with a fixed fallback policy: exact tag, else the caller's fallback
//! tag, else the first available entry, else empty. The policy lives here
//! so consumers never reimplement it.

use crate::language::LanguageTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A per-language string value (label, definition).
///
/// Entries are kept in tag order so serialized output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultilingualString {
    values: BTreeMap<LanguageTag, String>,
}

impl MultilingualString {
    /// Create an empty value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a language, replacing any previous one.
    pub fn set(&mut self, language: LanguageTag, value: impl Into<String>) {
        self.values.insert(language, value.into());
    }

    /// The exact value for a language, if one is present.
    ///
    /// A present-but-empty string counts as present.
    pub fn get(&self, language: &LanguageTag) -> Option<&str> {
        self.values.get(language).map(String::as_str)
    }

    /// Best-match display value: exact tag, else `fallback`, else the
    /// first available entry, else `""`.
    pub fn localized(&self, language: &LanguageTag, fallback: &LanguageTag) -> &str {
        self.get(language)
            .or_else(|| self.get(fallback))
            .or_else(|| self.values.values().next().map(String::as_str))
            .unwrap_or("")
    }

    /// Exact value for a language, else the caller-supplied default.
    pub fn localized_or<'a>(&'a self, language: &LanguageTag, default: &'a str) -> &'a str {
        self.get(language).unwrap_or(default)
    }

    /// Remove the value for a language.
    pub fn remove(&mut self, language: &LanguageTag) -> Option<String> {
        self.values.remove(language)
    }

    /// Languages that currently carry a value.
    pub fn languages(&self) -> impl Iterator<Item = &LanguageTag> {
        self.values.keys()
    }

    /// Iterate over `(language, value)` entries in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&LanguageTag, &str)> {
        self.values.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Number of languages carrying a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no language carries a value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(LanguageTag, String)> for MultilingualString {
    fn from_iter<I: IntoIterator<Item = (LanguageTag, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// A per-language ordered string sequence (alternative labels, hidden
/// labels).
///
/// The editor replaces whole sequences; no deduplication or sorting is
/// imposed here. Empty strings are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultilingualList {
    values: BTreeMap<LanguageTag, Vec<String>>,
}

impl MultilingualList {
    /// Create an empty value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full sequence for a language.
    pub fn set(&mut self, language: LanguageTag, values: Vec<String>) {
        self.values.insert(language, values);
    }

    /// The exact sequence for a language, if one is present.
    pub fn get(&self, language: &LanguageTag) -> Option<&[String]> {
        self.values.get(language).map(Vec::as_slice)
    }

    /// Best-match sequence: exact tag, else `fallback`, else empty.
    pub fn localized(&self, language: &LanguageTag, fallback: &LanguageTag) -> &[String] {
        self.get(language)
            .or_else(|| self.get(fallback))
            .unwrap_or(&[])
    }

    /// Iterate over `(language, sequence)` entries in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&LanguageTag, &[String])> {
        self.values.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Number of languages carrying a sequence.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no language carries a sequence.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(LanguageTag, Vec<String>)> for MultilingualList {
    fn from_iter<I: IntoIterator<Item = (LanguageTag, Vec<String>)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
