//! Notification events and the queue-backed sink.
//!
//! The editor reports collaborator failures as structured events. The
//! queue provides:
//! - FIFO ordering with bounded capacity
//! - Content-based deduplication within a configurable time window
//! - Counters for pushed/deduplicated/overflowed events
//!
//! Time advances through [`NotificationQueue::tick`], keeping the queue
//! deterministic under test.

use std::collections::{HashMap, VecDeque};
use std::hash::{Hash, Hasher};
use std::sync::Mutex;
use web_time::Duration;

use crate::contracts::Notifier;

/// What happened, from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// The identifier-suggestion service failed; the identifier keeps its
    /// prior value.
    IdentifierSuggestionFailed,
    /// The label-uniqueness service failed; the conflict state keeps its
    /// last known value.
    LabelCheckFailed,
}

impl NotificationKind {
    /// Localization key for the toast/banner text.
    pub fn message_key(self) -> &'static str {
        match self {
            Self::IdentifierSuggestionFailed => "term.identifier.suggestion.failed",
            Self::LabelCheckFailed => "term.label.uniqueness.failed",
        }
    }
}

/// A user-visible notification event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Notification {
    /// Event kind.
    pub kind: NotificationKind,
    /// Optional human-readable detail (e.g. the underlying error text).
    pub detail: Option<String>,
}

impl Notification {
    /// Create an event with no detail.
    pub fn new(kind: NotificationKind) -> Self {
        Self { kind, detail: None }
    }

    /// Attach a detail string (builder).
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    fn content_hash(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// Configuration for the notification queue.
#[derive(Debug, Clone)]
pub struct QueueConfig {
    /// Maximum number of events waiting in the queue.
    pub max_queued: usize,
    /// Time window for content-based deduplication.
    pub dedup_window: Duration,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            max_queued: 10,
            dedup_window: Duration::from_millis(1000),
        }
    }
}

impl QueueConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum queued events.
    #[must_use]
    pub fn max_queued(mut self, max: usize) -> Self {
        self.max_queued = max;
        self
    }

    /// Set the deduplication time window.
    #[must_use]
    pub fn dedup_window(mut self, window: Duration) -> Self {
        self.dedup_window = window;
        self
    }
}

/// Queue statistics for monitoring and debugging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueStats {
    /// Events accepted into the queue.
    pub total_pushed: u64,
    /// Events rejected as duplicates within the dedup window.
    pub dedup_count: u64,
    /// Events rejected because the queue was full.
    pub overflow_count: u64,
}

/// FIFO notification queue with dedup window and bounded capacity.
///
/// Use [`push`](Self::push) to add events, [`tick`](Self::tick) to advance
/// the dedup clock, and [`drain`](Self::drain) to take pending events for
/// display.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    queue: VecDeque<Notification>,
    config: QueueConfig,
    /// Monotonic clock advanced by `tick`.
    clock: Duration,
    /// Recent content hashes and the clock value they were seen at.
    recent_hashes: HashMap<u64, Duration>,
    stats: QueueStats,
}

impl NotificationQueue {
    /// Create a queue with the given configuration.
    pub fn new(config: QueueConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Offer an event to the queue.
    ///
    /// Returns `false` when the event was dropped (duplicate inside the
    /// dedup window, or the queue is full).
    pub fn push(&mut self, event: Notification) -> bool {
        let hash = event.content_hash();
        if let Some(&seen_at) = self.recent_hashes.get(&hash) {
            if self.clock.saturating_sub(seen_at) < self.config.dedup_window {
                tracing::debug!(
                    target: "glossa.services",
                    kind = ?event.kind,
                    "notification deduplicated"
                );
                self.stats.dedup_count += 1;
                return false;
            }
        }
        if self.queue.len() >= self.config.max_queued {
            tracing::warn!(
                target: "glossa.services",
                kind = ?event.kind,
                max_queued = self.config.max_queued,
                "notification queue full, event dropped"
            );
            self.stats.overflow_count += 1;
            return false;
        }
        self.recent_hashes.insert(hash, self.clock);
        self.queue.push_back(event);
        self.stats.total_pushed += 1;
        true
    }

    /// Advance the dedup clock and expire stale dedup entries.
    pub fn tick(&mut self, elapsed: Duration) {
        self.clock = self.clock.saturating_add(elapsed);
        let window = self.config.dedup_window;
        let clock = self.clock;
        self.recent_hashes
            .retain(|_, seen_at| clock.saturating_sub(*seen_at) < window);
    }

    /// Take all pending events in arrival order.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.queue.drain(..).collect()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True when no events are pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Counters accumulated since construction.
    pub fn stats(&self) -> &QueueStats {
        &self.stats
    }
}

/// A [`Notifier`] backed by a [`NotificationQueue`].
///
/// The editor host pushes from worker context, the display layer drains
/// from the UI loop.
#[derive(Debug, Default)]
pub struct QueueNotifier {
    queue: Mutex<NotificationQueue>,
}

impl QueueNotifier {
    /// Create a sink with the given queue configuration.
    pub fn new(config: QueueConfig) -> Self {
        Self {
            queue: Mutex::new(NotificationQueue::new(config)),
        }
    }

    /// Advance the dedup clock.
    pub fn tick(&self, elapsed: Duration) {
        self.lock().tick(elapsed);
    }

    /// Take all pending events in arrival order.
    pub fn drain(&self) -> Vec<Notification> {
        self.lock().drain()
    }

    /// Snapshot of the queue counters.
    pub fn stats(&self) -> QueueStats {
        self.lock().stats().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, NotificationQueue> {
        self.queue.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Notifier for QueueNotifier {
    fn notify(&self, event: Notification) {
        self.lock().push(event);
    }
}

/// A [`Notifier`] that records every event, for tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything notified so far.
    pub fn events(&self) -> Vec<Notification> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: Notification) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
    }
}
