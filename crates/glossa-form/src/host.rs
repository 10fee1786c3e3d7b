//! Executes editor commands against the external collaborators.
//!
//! The reducer returns [`Cmd`] values; the host runs them. Service calls
//! run on background threads and come back as [`Msg`]s on the channel
//! handed out at construction, so the reducer never blocks on a
//! collaborator. There is no cancellation: superseded responses are
//! discarded by the reducer's value-tag comparison, not by aborting the
//! in-flight call.

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use glossa_services::{IdentifierSuggester, LabelUniqueness, Notifier};

use crate::cmd::Cmd;
use crate::editor::TermEditor;
use crate::msg::Msg;

/// Bridges [`Cmd`]s to the collaborator services.
pub struct EditorHost {
    suggester: Arc<dyn IdentifierSuggester>,
    uniqueness: Arc<dyn LabelUniqueness>,
    notifier: Arc<dyn Notifier>,
    tx: mpsc::Sender<Msg>,
}

impl EditorHost {
    /// Create a host over the given collaborators.
    ///
    /// Returns the receiving end of the resolution channel; the embedding
    /// loop drains it and feeds each message back through
    /// [`TermEditor::update`].
    pub fn new(
        suggester: Arc<dyn IdentifierSuggester>,
        uniqueness: Arc<dyn LabelUniqueness>,
        notifier: Arc<dyn Notifier>,
    ) -> (Self, mpsc::Receiver<Msg>) {
        let (tx, rx) = mpsc::channel();
        (
            Self {
                suggester,
                uniqueness,
                notifier,
                tx,
            },
            rx,
        )
    }

    /// A sender for injecting messages alongside service resolutions
    /// (ticks, UI events routed through the same loop).
    pub fn sender(&self) -> mpsc::Sender<Msg> {
        self.tx.clone()
    }

    /// Apply a message to the editor and execute whatever it returns.
    pub fn step(&self, editor: &mut TermEditor, msg: Msg) {
        let cmd = editor.update(msg);
        self.dispatch(cmd);
    }

    /// Execute a command tree.
    pub fn dispatch(&self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.dispatch(cmd);
                }
            }
            Cmd::Notify(event) => self.notifier.notify(event),
            Cmd::SuggestIdentifier {
                name,
                language,
                vocabulary,
                kind,
            } => {
                tracing::debug!(
                    target: "glossa.form",
                    name = %name,
                    vocabulary = %vocabulary,
                    "dispatching identifier suggestion"
                );
                let service = Arc::clone(&self.suggester);
                let tx = self.tx.clone();
                thread::spawn(move || {
                    let msg = match service.suggest(&name, &vocabulary, kind) {
                        Ok(identifier) => Msg::SuggestionResolved {
                            language,
                            name,
                            identifier,
                        },
                        Err(error) => Msg::SuggestionFailed { name, error },
                    };
                    // receiver gone means the form was torn down
                    let _ = tx.send(msg);
                });
            }
            Cmd::CheckLabel {
                vocabulary,
                label,
                language,
            } => {
                tracing::debug!(
                    target: "glossa.form",
                    label = %label,
                    language = %language,
                    "dispatching uniqueness check"
                );
                let service = Arc::clone(&self.uniqueness);
                let tx = self.tx.clone();
                thread::spawn(move || {
                    let msg = match service.exists(&vocabulary, &label, &language) {
                        Ok(exists) => Msg::UniquenessResolved {
                            language,
                            label,
                            exists,
                        },
                        Err(error) => Msg::UniquenessFailed {
                            language,
                            label,
                            error,
                        },
                    };
                    let _ = tx.send(msg);
                });
            }
        }
    }
}
