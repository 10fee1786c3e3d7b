//! Commands represent side effects to be executed by the host.
//!
//! The reducer never performs I/O. It returns commands describing the
//! collaborator calls to make; the host executes them and feeds the
//! results back as messages.

use glossa_core::{AssetKind, Iri, LanguageTag};
use glossa_services::Notification;

/// Side effects returned by [`TermEditor::update`](crate::TermEditor::update).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// No operation.
    None,
    /// Execute multiple commands.
    Batch(Vec<Cmd>),
    /// Ask the identifier-suggestion service for a candidate identifier.
    /// `name` and `language` are echoed back in the resolution message.
    SuggestIdentifier {
        name: String,
        language: LanguageTag,
        vocabulary: Iri,
        kind: AssetKind,
    },
    /// Ask the uniqueness service whether `label` is already taken.
    /// `label` and `language` are echoed back in the resolution message.
    CheckLabel {
        vocabulary: Iri,
        label: String,
        language: LanguageTag,
    },
    /// Forward a user-visible notification event to the sink.
    Notify(Notification),
}

impl Cmd {
    /// Create a no-op command.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Create a batch of commands, flattening trivial cases.
    pub fn batch(cmds: Vec<Self>) -> Self {
        let mut cmds: Vec<Self> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Self::None,
            1 => cmds.remove(0),
            _ => Self::Batch(cmds),
        }
    }

    /// True for [`Cmd::None`].
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Flatten into leaf effects, dropping no-ops.
    pub fn into_effects(self) -> Vec<Cmd> {
        match self {
            Self::None => Vec::new(),
            Self::Batch(cmds) => cmds.into_iter().flat_map(Self::into_effects).collect(),
            leaf => vec![leaf],
        }
    }
}

impl Default for Cmd {
    fn default() -> Self {
        Self::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossa_services::NotificationKind;

    fn notify() -> Cmd {
        Cmd::Notify(Notification::new(NotificationKind::LabelCheckFailed))
    }

    #[test]
    fn batch_of_nothing_is_none() {
        assert!(Cmd::batch(vec![]).is_none());
        assert!(Cmd::batch(vec![Cmd::none(), Cmd::none()]).is_none());
    }

    #[test]
    fn singleton_batch_unwraps() {
        assert_eq!(Cmd::batch(vec![Cmd::none(), notify()]), notify());
    }

    #[test]
    fn into_effects_flattens_nested_batches() {
        let cmd = Cmd::batch(vec![
            notify(),
            Cmd::Batch(vec![Cmd::None, notify()]),
            Cmd::none(),
        ]);
        assert_eq!(cmd.into_effects(), vec![notify(), notify()]);
    }
}
