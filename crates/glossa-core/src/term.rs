//! The in-progress edited representation of a vocabulary term.

use crate::asset::Iri;
use crate::language::LanguageTag;
use crate::multilingual::{MultilingualList, MultilingualString};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A term draft: created empty (or seeded from an existing term), mutated
/// only through the editor's reducer, and handed off in full to the
/// create/update operation on submit.
///
/// `comment` is a single global string while `definition` is per-language.
/// The asymmetry is part of the established data contract and is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermDraft {
    /// Preferred label, one value per language.
    #[serde(default, skip_serializing_if = "MultilingualString::is_empty")]
    pub label: MultilingualString,
    /// Alternative labels, an ordered sequence per language.
    #[serde(default, skip_serializing_if = "MultilingualList::is_empty")]
    pub alt_labels: MultilingualList,
    /// Hidden labels (search-only synonyms), an ordered sequence per language.
    #[serde(default, skip_serializing_if = "MultilingualList::is_empty")]
    pub hidden_labels: MultilingualList,
    /// Definition, one value per language.
    #[serde(default, skip_serializing_if = "MultilingualString::is_empty")]
    pub definition: MultilingualString,
    /// Free-text comment.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    /// Term identifier, user-supplied or system-generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Iri>,
    /// Source references. The simple source field collapses this to a
    /// single element.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    /// Type tags.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub types: BTreeSet<String>,
    /// Parent terms, referenced by identifier. Acyclicity is enforced by
    /// the backend, not here.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub parent_terms: BTreeSet<Iri>,
}

impl TermDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the draft carries a non-empty label for `language`.
    pub fn has_label_in(&self, language: &LanguageTag) -> bool {
        self.label.get(language).is_some_and(|v| !v.is_empty())
    }
}
