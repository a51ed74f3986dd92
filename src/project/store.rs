//! Snapshot store with atomic replace and change notifications.
//!
//! [`ProjectStore`] owns the single current snapshot of a project tree.
//! Readers get cheap `Arc` clones and always see a fully-formed tree; the
//! mutation engine swaps in replacements atomically, and every subscriber
//! receives the (old, new) pair in commit order.

use std::sync::{Arc, RwLock};

use tokio::sync::broadcast;

use crate::project::model::Project;

/// Default buffer capacity for the change channel.
const DEFAULT_CAPACITY: usize = 64;

// =============================================================================
// SNAPSHOT CHANGE
// =============================================================================

/// One committed snapshot replacement.
#[derive(Debug, Clone)]
pub struct SnapshotChange {
    /// The snapshot that was current before the commit.
    pub previous: Arc<Project>,
    /// The snapshot that is current after the commit.
    pub current: Arc<Project>,
}

// =============================================================================
// PROJECT STORE
// =============================================================================

/// Holds the current immutable snapshot and fans out change notifications.
pub struct ProjectStore {
    current: RwLock<Arc<Project>>,
    changes: broadcast::Sender<SnapshotChange>,
}

impl ProjectStore {
    /// Creates a store holding `initial`, with the default channel capacity.
    pub fn new(initial: Project) -> Self {
        Self::with_capacity(initial, DEFAULT_CAPACITY)
    }

    /// Creates a store with a specific notification buffer capacity.
    ///
    /// When the buffer fills, the oldest un-consumed notifications are
    /// dropped and slow receivers observe a `RecvError::Lagged`.
    pub fn with_capacity(initial: Project, capacity: usize) -> Self {
        let (changes, _) = broadcast::channel(capacity);
        Self {
            current: RwLock::new(Arc::new(initial)),
            changes,
        }
    }

    /// Returns the current snapshot.
    pub fn get(&self) -> Arc<Project> {
        self.current
            .read()
            .expect("project store lock poisoned")
            .clone()
    }

    /// Atomically swaps in `next` and notifies subscribers, returning the
    /// replaced snapshot.
    ///
    /// Publishing with zero subscribers is not an error; the notification is
    /// simply dropped.
    pub fn replace(&self, next: Project) -> Arc<Project> {
        let next = Arc::new(next);
        let mut slot = self.current.write().expect("project store lock poisoned");
        let previous = std::mem::replace(&mut *slot, next.clone());
        // Send while still holding the write guard so subscribers observe
        // replacements in commit order.
        let _ = self.changes.send(SnapshotChange {
            previous: previous.clone(),
            current: next,
        });
        previous
    }

    /// Subscribes to snapshot replacements.
    pub fn subscribe(&self) -> broadcast::Receiver<SnapshotChange> {
        self.changes.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.changes.receiver_count()
    }
}

// =============================================================================
// TESTS
// =============================================================================
