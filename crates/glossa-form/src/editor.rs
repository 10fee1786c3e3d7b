//! Term editor reducer: one update path for draft and UI state.
//!
//! [`TermEditor`] owns a [`TermDraft`] plus the presentation/validation
//! state around it, and mutates both exclusively through
//! [`update`](TermEditor::update). Side effects (identifier suggestion,
//! label-uniqueness checks, notifications) are returned as [`Cmd`] values
//! for the host to execute; the reducer itself never blocks or performs
//! I/O.
//!
//! # Staleness
//!
//! Both collaborator calls are asynchronous and uncancelled. Every
//! outgoing request carries the input value it was computed from, and the
//! resolution message echoes it back. `update` compares the echoed value
//! against current state before applying, so a slow response for a
//! superseded value is discarded instead of overwriting fresher state.
//!
//! # Debounce
//!
//! Uniqueness checks can optionally be coalesced: with a debounce delay
//! configured, qualifying edits stage a per-language pending check and
//! [`Msg::Tick`] flushes the ones whose deadline elapsed, carrying the
//! latest staged value. Default is unthrottled.

use ahash::AHashMap;
use glossa_core::{AssetKind, Iri, LanguageTag, TermDraft};
use glossa_services::{Notification, NotificationKind};
use web_time::Duration;

use crate::cmd::Cmd;
use crate::msg::Msg;

/// Presentational and validation state that travels with the draft but is
/// not part of the submit payload.
#[derive(Debug, Clone)]
pub struct EditorUiState {
    /// True until the identifier field is hand-edited; never reset.
    auto_generate_identifier: bool,
    /// Whether the advanced form section is expanded.
    advanced_expanded: bool,
    /// Latest uniqueness-check result per language. Absent means "not
    /// known to conflict".
    label_exists: AHashMap<LanguageTag, bool>,
}

impl Default for EditorUiState {
    fn default() -> Self {
        Self {
            auto_generate_identifier: true,
            advanced_expanded: false,
            label_exists: AHashMap::new(),
        }
    }
}

impl EditorUiState {
    /// Whether the identifier is still derived from the label.
    pub fn auto_generate_identifier(&self) -> bool {
        self.auto_generate_identifier
    }

    /// Whether the advanced form section is expanded.
    pub fn advanced_expanded(&self) -> bool {
        self.advanced_expanded
    }

    /// Whether the label for `language` is known to conflict.
    ///
    /// False until a uniqueness check for the current value resolves
    /// positively.
    pub fn label_conflict(&self, language: &LanguageTag) -> bool {
        self.label_exists.get(language).copied().unwrap_or(false)
    }
}

/// A staged uniqueness check waiting out the debounce delay.
#[derive(Debug, Clone)]
struct PendingCheck {
    label: String,
    remaining: Duration,
}

/// The multilingual term-editing state model.
///
/// Create with [`new`](Self::new) for a fresh draft or seed with
/// [`with_draft`](Self::with_draft) for edit flows, call
/// [`init`](Self::init) once, then feed every UI event and every host
/// resolution through [`update`](Self::update).
#[derive(Debug, Clone)]
pub struct TermEditor {
    draft: TermDraft,
    vocabulary: Iri,
    active_language: LanguageTag,
    ui: EditorUiState,
    debounce: Option<Duration>,
    pending_checks: AHashMap<LanguageTag, PendingCheck>,
}

impl TermEditor {
    /// Create an editor over an empty draft.
    pub fn new(vocabulary: Iri, language: LanguageTag) -> Self {
        Self {
            draft: TermDraft::new(),
            vocabulary,
            active_language: language,
            ui: EditorUiState::default(),
            debounce: None,
            pending_checks: AHashMap::new(),
        }
    }

    /// Seed the editor with an existing draft (builder).
    #[must_use]
    pub fn with_draft(mut self, draft: TermDraft) -> Self {
        self.draft = draft;
        self
    }

    /// Coalesce uniqueness checks with the given delay (builder).
    ///
    /// The eventual conflict state is the same as without debouncing;
    /// only the number of requests changes.
    #[must_use]
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debounce = Some(delay);
        self
    }

    /// Startup effects: a seeded non-empty label requests its identifier
    /// suggestion right away.
    pub fn init(&self) -> Cmd {
        if !self.ui.auto_generate_identifier {
            return Cmd::none();
        }
        let label = self.draft.label.get(&self.active_language).unwrap_or("");
        if label.is_empty() {
            return Cmd::none();
        }
        self.suggest_identifier(self.active_language.clone(), label.to_string())
    }

    /// Apply a message, returning the effects to execute.
    pub fn update(&mut self, msg: Msg) -> Cmd {
        match msg {
            Msg::LabelEdited { language, value } => self.on_label_edited(language, value),
            Msg::AltLabelsEdited { language, values } => {
                self.draft.alt_labels.set(language, values);
                Cmd::none()
            }
            Msg::HiddenLabelsEdited { language, values } => {
                self.draft.hidden_labels.set(language, values);
                Cmd::none()
            }
            Msg::DefinitionEdited { language, value } => {
                self.draft.definition.set(language, value);
                Cmd::none()
            }
            Msg::CommentEdited { value } => {
                self.draft.comment = value;
                Cmd::none()
            }
            Msg::IdentifierEdited { value } => {
                self.draft.identifier = Some(Iri::new(value));
                if self.ui.auto_generate_identifier {
                    tracing::debug!(
                        target: "glossa.form",
                        "identifier hand-edited, auto-generation disabled"
                    );
                    self.ui.auto_generate_identifier = false;
                }
                Cmd::none()
            }
            Msg::SourceEdited { value } => {
                // the simple source field collapses multi-value history
                self.draft.sources = vec![value];
                Cmd::none()
            }
            Msg::TypesEdited { types } => {
                self.draft.types = types;
                Cmd::none()
            }
            Msg::ParentsEdited { parents } => {
                self.draft.parent_terms = parents;
                Cmd::none()
            }
            Msg::AdvancedToggled => {
                self.ui.advanced_expanded = !self.ui.advanced_expanded;
                Cmd::none()
            }
            Msg::LanguageSelected { language } => {
                self.active_language = language;
                Cmd::none()
            }
            Msg::Tick(elapsed) => self.on_tick(elapsed),
            Msg::SuggestionResolved {
                language,
                name,
                identifier,
            } => self.on_suggestion_resolved(language, name, identifier),
            Msg::SuggestionFailed { name, error } => {
                tracing::warn!(
                    target: "glossa.form",
                    name = %name,
                    error = %error,
                    "identifier suggestion failed"
                );
                Cmd::Notify(
                    Notification::new(NotificationKind::IdentifierSuggestionFailed)
                        .with_detail(error.to_string()),
                )
            }
            Msg::UniquenessResolved {
                language,
                label,
                exists,
            } => self.on_uniqueness_resolved(language, label, exists),
            Msg::UniquenessFailed {
                language,
                label,
                error,
            } => {
                tracing::warn!(
                    target: "glossa.form",
                    language = %language,
                    label = %label,
                    error = %error,
                    "label uniqueness check failed"
                );
                Cmd::Notify(
                    Notification::new(NotificationKind::LabelCheckFailed)
                        .with_detail(error.to_string()),
                )
            }
        }
    }

    // --- Message handlers ---

    fn on_label_edited(&mut self, language: LanguageTag, value: String) -> Cmd {
        let previous = self
            .draft
            .label
            .get(&language)
            .unwrap_or("")
            .to_string();
        self.draft.label.set(language.clone(), value.clone());
        // optimistic clear; a positive check result re-marks the slot
        self.ui.label_exists.insert(language.clone(), false);

        let mut cmds = Vec::new();
        if self.ui.auto_generate_identifier && !value.is_empty() {
            cmds.push(self.suggest_identifier(language.clone(), value.clone()));
        }
        // no-op edits (focus/blur churn, casing-only changes) skip the check
        if value.to_lowercase() != previous.to_lowercase() {
            cmds.push(self.schedule_check(language, value));
        }
        Cmd::batch(cmds)
    }

    fn on_tick(&mut self, elapsed: Duration) -> Cmd {
        if self.pending_checks.is_empty() {
            return Cmd::none();
        }
        let mut due: Vec<(LanguageTag, String)> = Vec::new();
        self.pending_checks.retain(|language, pending| {
            pending.remaining = pending.remaining.saturating_sub(elapsed);
            if pending.remaining.is_zero() {
                due.push((language.clone(), pending.label.clone()));
                false
            } else {
                true
            }
        });
        due.sort();
        Cmd::batch(
            due.into_iter()
                .map(|(language, label)| {
                    tracing::debug!(
                        target: "glossa.form",
                        language = %language,
                        label = %label,
                        "debounced uniqueness check due"
                    );
                    Cmd::CheckLabel {
                        vocabulary: self.vocabulary.clone(),
                        label,
                        language,
                    }
                })
                .collect(),
        )
    }

    fn on_suggestion_resolved(
        &mut self,
        language: LanguageTag,
        name: String,
        identifier: Iri,
    ) -> Cmd {
        if !self.ui.auto_generate_identifier {
            tracing::debug!(
                target: "glossa.form",
                name = %name,
                "suggestion discarded, auto-generation disabled"
            );
            return Cmd::none();
        }
        if self.draft.label.get(&language) != Some(name.as_str()) {
            tracing::debug!(
                target: "glossa.form",
                name = %name,
                current = ?self.draft.label.get(&language),
                "suggestion discarded, label changed"
            );
            return Cmd::none();
        }
        self.draft.identifier = Some(identifier);
        Cmd::none()
    }

    fn on_uniqueness_resolved(
        &mut self,
        language: LanguageTag,
        label: String,
        exists: bool,
    ) -> Cmd {
        if self.draft.label.get(&language) != Some(label.as_str()) {
            tracing::debug!(
                target: "glossa.form",
                language = %language,
                label = %label,
                current = ?self.draft.label.get(&language),
                "uniqueness result discarded, label changed"
            );
            return Cmd::none();
        }
        if exists {
            self.ui.label_exists.insert(language, true);
        }
        // a negative answer leaves the optimistic clear in place
        Cmd::none()
    }

    // --- Effect construction ---

    fn suggest_identifier(&self, language: LanguageTag, name: String) -> Cmd {
        tracing::debug!(
            target: "glossa.form",
            language = %language,
            name = %name,
            "requesting identifier suggestion"
        );
        Cmd::SuggestIdentifier {
            name,
            language,
            vocabulary: self.vocabulary.clone(),
            kind: AssetKind::Term,
        }
    }

    fn schedule_check(&mut self, language: LanguageTag, label: String) -> Cmd {
        match self.debounce {
            Some(delay) => {
                tracing::debug!(
                    target: "glossa.form",
                    language = %language,
                    label = %label,
                    "uniqueness check staged"
                );
                self.pending_checks
                    .insert(language, PendingCheck { label, remaining: delay });
                Cmd::none()
            }
            None => {
                tracing::debug!(
                    target: "glossa.form",
                    language = %language,
                    label = %label,
                    "requesting uniqueness check"
                );
                Cmd::CheckLabel {
                    vocabulary: self.vocabulary.clone(),
                    label,
                    language,
                }
            }
        }
    }

    // --- Accessors ---

    /// The draft being edited.
    pub fn draft(&self) -> &TermDraft {
        &self.draft
    }

    /// Consume the editor, yielding the draft for submit handoff.
    pub fn into_draft(self) -> TermDraft {
        self.draft
    }

    /// The vocabulary the term is being created in.
    pub fn vocabulary(&self) -> &Iri {
        &self.vocabulary
    }

    /// The single active editing language.
    pub fn active_language(&self) -> &LanguageTag {
        &self.active_language
    }

    /// Presentation and validation state.
    pub fn ui(&self) -> &EditorUiState {
        &self.ui
    }

    /// Whether the identifier is still derived from the label.
    pub fn auto_generate_identifier(&self) -> bool {
        self.ui.auto_generate_identifier
    }

    /// Whether the label for `language` is known to conflict.
    pub fn label_conflict(&self, language: &LanguageTag) -> bool {
        self.ui.label_conflict(language)
    }

    /// Whether the owning form may submit: the active-language label is
    /// non-empty and not known to conflict.
    pub fn can_submit(&self) -> bool {
        self.draft.has_label_in(&self.active_language)
            && !self.ui.label_conflict(&self.active_language)
    }
}
