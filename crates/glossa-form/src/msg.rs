//! Messages driving the term editor reducer.

use glossa_core::{Iri, LanguageTag};
use glossa_services::ServiceError;
use std::collections::BTreeSet;
use web_time::Duration;

/// Input events for [`TermEditor::update`](crate::TermEditor::update).
///
/// Edit messages come from the owning form; the four resolution messages
/// come back from the effect host when a collaborator call settles. Each
/// resolution carries the input value its request was computed from, so
/// the reducer can discard stale responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The label field changed for the given language.
    LabelEdited {
        language: LanguageTag,
        value: String,
    },
    /// The alternative-labels list was replaced for the given language.
    AltLabelsEdited {
        language: LanguageTag,
        values: Vec<String>,
    },
    /// The hidden-labels list was replaced for the given language.
    HiddenLabelsEdited {
        language: LanguageTag,
        values: Vec<String>,
    },
    /// The definition field changed for the given language.
    DefinitionEdited {
        language: LanguageTag,
        value: String,
    },
    /// The comment field changed. Comment is a single global string, not
    /// per-language.
    CommentEdited { value: String },
    /// The identifier field was hand-edited. Disables auto-generation for
    /// the rest of the draft's life.
    IdentifierEdited { value: String },
    /// The simple source field changed. Collapses `sources` to a single
    /// element.
    SourceEdited { value: String },
    /// The type-tag set was replaced.
    TypesEdited { types: BTreeSet<String> },
    /// The parent-term set was replaced.
    ParentsEdited { parents: BTreeSet<Iri> },
    /// The advanced form section was expanded or collapsed.
    AdvancedToggled,
    /// The active editing language changed.
    LanguageSelected { language: LanguageTag },
    /// Debounce clock advance; flushes staged uniqueness checks that are
    /// due.
    Tick(Duration),
    /// The suggestion service produced an identifier for `name`.
    SuggestionResolved {
        language: LanguageTag,
        name: String,
        identifier: Iri,
    },
    /// The suggestion service failed for `name`.
    SuggestionFailed { name: String, error: ServiceError },
    /// The uniqueness service answered for `label` in `language`.
    UniquenessResolved {
        language: LanguageTag,
        label: String,
        exists: bool,
    },
    /// The uniqueness service failed for `label` in `language`.
    UniquenessFailed {
        language: LanguageTag,
        label: String,
        error: ServiceError,
    },
}
