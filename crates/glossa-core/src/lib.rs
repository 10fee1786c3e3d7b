#![forbid(unsafe_code)]

//! Core domain model for the glossa vocabulary editor.
//!
//! Provides the types a term-editing front end shares with its backing
//! vocabulary store: language tags, per-language string maps with localized
//! lookup, identifiers, and the in-progress [`TermDraft`].
//!
//! # Role in glossa
//! `glossa-core` isolates the data model so the editor state machine and
//! the collaborator contracts can both depend on it without depending on
//! each other.
//!
//! # How it fits in the system
//! `glossa-form` mutates a [`TermDraft`] through its reducer and hands the
//! finished draft to the external create/update operation on submit.
//! `glossa-services` expresses collaborator contracts in terms of these
//! types. Nothing here performs I/O.

pub mod asset;
pub mod language;
pub mod multilingual;
pub mod term;

pub use asset::{AssetKind, Iri};
pub use language::LanguageTag;
pub use multilingual::{MultilingualList, MultilingualString};
pub use term::TermDraft;
