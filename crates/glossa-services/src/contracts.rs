//! Collaborator contracts consumed by the term editor.
//!
//! Implementations are expected to be HTTP-backed in the application and
//! fakes in tests. All traits are `Send + Sync` so the editor host can
//! invoke them from worker threads.

use crate::error::ServiceError;
use crate::notification::Notification;
use glossa_core::{AssetKind, Iri, LanguageTag};

/// Derives an identifier suggestion from a candidate name.
pub trait IdentifierSuggester: Send + Sync {
    /// Suggest an identifier for `name` within `vocabulary`.
    fn suggest(&self, name: &str, vocabulary: &Iri, kind: AssetKind) -> Result<Iri, ServiceError>;
}

/// Answers whether a label is already taken within a vocabulary.
pub trait LabelUniqueness: Send + Sync {
    /// True when `label` already exists in `vocabulary` for `language`.
    fn exists(
        &self,
        vocabulary: &Iri,
        label: &str,
        language: &LanguageTag,
    ) -> Result<bool, ServiceError>;
}

/// Sink for user-visible notification events.
///
/// Fire-and-forget from the editor's perspective: delivery, display, and
/// dismissal policy belong to the implementation.
pub trait Notifier: Send + Sync {
    /// Accept an event for display.
    fn notify(&self, event: Notification);
}
