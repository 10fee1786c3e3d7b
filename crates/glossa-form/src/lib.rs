#![forbid(unsafe_code)]

//! Multilingual term-editing state model.
//!
//! [`TermEditor`] owns the per-language editable state of a vocabulary
//! term draft and exposes a single reducer: feed it a [`Msg`], get back a
//! [`Cmd`] describing the side effects to run. [`EditorHost`] executes
//! those effects against the collaborator contracts from
//! `glossa-services` and feeds resolutions back as messages.
//!
//! # Role in glossa
//! This crate is the application logic of the term-creation form: state
//! transitions, identifier auto-generation, uniqueness validation, and
//! the staleness policy for both.
//!
//! # How it fits in the system
//! The owning form renders from [`TermEditor`]'s accessors, routes its
//! input events through [`TermEditor::update`], and hands
//! [`TermEditor::into_draft`] to the create/update operation on submit.
//!
//! # Example
//!
//! ```
//! use glossa_core::{Iri, LanguageTag};
//! use glossa_form::{Msg, TermEditor};
//!
//! let mut editor = TermEditor::new(
//!     Iri::from("http://example.org/vocabulary"),
//!     LanguageTag::from("en"),
//! );
//! let cmd = editor.update(Msg::LabelEdited {
//!     language: LanguageTag::from("en"),
//!     value: "Cat".to_string(),
//! });
//! // a suggestion request and a uniqueness check, for the host to run
//! assert_eq!(cmd.into_effects().len(), 2);
//! assert_eq!(
//!     editor.draft().label.get(&LanguageTag::from("en")),
//!     Some("Cat"),
//! );
//! ```

pub mod cmd;
pub mod editor;
pub mod host;
pub mod msg;

pub use cmd::Cmd;
pub use editor::{EditorUiState, TermEditor};
pub use host::EditorHost;
pub use msg::Msg;
