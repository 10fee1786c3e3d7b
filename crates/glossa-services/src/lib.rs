#![forbid(unsafe_code)]

//! Collaborator contracts and notification plumbing for glossa.
//!
//! The term editor consumes three external collaborators: an
//! identifier-suggestion service, a label-uniqueness service, and a
//! notification sink for user-visible events. This crate owns their
//! contracts, the shared [`ServiceError`] type, and a queue-backed
//! notification sink with deduplication and bounded capacity.
//!
//! # Role in glossa
//! Keeps the editor decoupled from transport: `glossa-form` only sees the
//! traits here, never HTTP or storage.
//!
//! # How it fits in the system
//! The application wires real (HTTP-backed) implementations of these
//! traits into the editor host; tests wire fakes.

pub mod contracts;
pub mod error;
pub mod notification;

pub use contracts::{IdentifierSuggester, LabelUniqueness, Notifier};
pub use error::ServiceError;
pub use notification::{
    Notification, NotificationKind, NotificationQueue, QueueConfig, QueueNotifier, QueueStats,
    RecordingNotifier,
};
