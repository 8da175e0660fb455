//! TrailProgressStore - the single source of truth for visited stops.
//!
//! One store per view. Views sharing a persisted record stay in step through
//! the [`ChangeNotifier`]: every successful write is published, and every
//! store re-reads storage when a publish arrives. Writes replace the whole
//! record, so concurrent writers resolve as last-write-wins.
//!
//! Nothing here fails observably. Storage errors are logged and the session
//! carries on in memory; malformed persisted data reads as an empty trail.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use chrono::{DateTime, Utc};
use trailhead_types::StopId;

use crate::clock::{Clock, SystemClock};
use crate::notifier::{CallbackRegistry, ChangeNotifier, NoopNotifier, Subscription};
use crate::storage::{MemoryStorage, ProgressStorage, StorageError};

use super::{ConfigError, ProgressRecord, StopSet, TrailConfig, TrailSnapshot};

/// Result of [`TrailProgressStore::mark_visited`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    /// First visit; the record was updated
    Recorded,
    /// Already visited; nothing changed
    AlreadyVisited,
    /// Not a stop on this trail; nothing changed
    UnknownStop,
}

type Observer = dyn Fn(&TrailSnapshot);

pub struct TrailProgressStore {
    // Declared first so the notifier callback is detached before the state drops
    _sync: Subscription,
    inner: Rc<StoreInner>,
}

struct StoreInner {
    stops: StopSet,
    threshold: usize,
    storage: Box<dyn ProgressStorage>,
    notifier: Box<dyn ChangeNotifier>,
    clock: Box<dyn Clock>,
    record: RefCell<ProgressRecord>,
    degraded: Cell<bool>,
    observers: CallbackRegistry<Observer>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Builder
// ═══════════════════════════════════════════════════════════════════════════

pub struct TrailProgressStoreBuilder {
    config: TrailConfig,
    storage: Option<Box<dyn ProgressStorage>>,
    notifier: Option<Box<dyn ChangeNotifier>>,
    clock: Option<Box<dyn Clock>>,
}

impl TrailProgressStoreBuilder {
    pub fn storage(mut self, storage: impl ProgressStorage + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    pub fn notifier(mut self, notifier: impl ChangeNotifier + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Validate the config, load persisted progress and start listening for
    /// changes from other views.
    pub fn build(self) -> Result<TrailProgressStore, ConfigError> {
        let stops = self.config.validate()?;

        let inner = Rc::new(StoreInner {
            stops,
            threshold: self.config.unlock_threshold,
            storage: self
                .storage
                .unwrap_or_else(|| Box::new(MemoryStorage::new())),
            notifier: self.notifier.unwrap_or_else(|| Box::new(NoopNotifier)),
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            record: RefCell::new(ProgressRecord::default()),
            degraded: Cell::new(false),
            observers: CallbackRegistry::new(),
        });

        let initial = match inner.read_persisted() {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "Trail progress unavailable, starting empty");
                ProgressRecord::default()
            }
        };
        *inner.record.borrow_mut() = initial;

        let weak: Weak<StoreInner> = Rc::downgrade(&inner);
        let sync = inner.notifier.subscribe(Rc::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.sync_from_storage();
            }
        }));

        tracing::debug!(
            visited = inner.record.borrow().visited.len(),
            total = inner.stops.len(),
            "Trail progress loaded"
        );

        Ok(TrailProgressStore { _sync: sync, inner })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Store
// ═══════════════════════════════════════════════════════════════════════════

impl TrailProgressStore {
    pub fn builder(config: TrailConfig) -> TrailProgressStoreBuilder {
        TrailProgressStoreBuilder {
            config,
            storage: None,
            notifier: None,
            clock: None,
        }
    }

    /// Record a visit. Only the first visit to a stop changes anything:
    /// it stamps the visit time, persists, publishes and notifies observers.
    pub fn mark_visited(&self, stop_id: &str) -> MarkOutcome {
        if !self.inner.stops.contains(stop_id) {
            tracing::debug!(stop = stop_id, "Ignoring visit to unknown trail stop");
            return MarkOutcome::UnknownStop;
        }
        if self.inner.record.borrow().contains(stop_id) {
            return MarkOutcome::AlreadyVisited;
        }

        let was_unlocked = self.is_unlocked();
        let mut next = self.inner.record.borrow().clone();
        next.visited.push(StopId::new(stop_id));
        next.last_visit = Some(self.inner.clock.now());
        self.inner.commit(next);

        tracing::debug!(
            stop = stop_id,
            visited = self.visited_count(),
            total = self.total_stop_count(),
            "Trail stop visited"
        );
        if !was_unlocked && self.is_unlocked() {
            tracing::info!(threshold = self.inner.threshold, "Recruiter packet unlocked");
        }
        MarkOutcome::Recorded
    }

    pub fn is_visited(&self, stop_id: &str) -> bool {
        self.inner.record.borrow().contains(stop_id)
    }

    pub fn visited_count(&self) -> usize {
        self.inner.record.borrow().visited.len()
    }

    pub fn total_stop_count(&self) -> usize {
        self.inner.stops.len()
    }

    pub fn is_unlocked(&self) -> bool {
        self.visited_count() >= self.inner.threshold
    }

    pub fn unlock_threshold(&self) -> usize {
        self.inner.threshold
    }

    /// Visits still needed before the recruiter packet unlocks
    pub fn stops_remaining(&self) -> usize {
        self.inner.threshold.saturating_sub(self.visited_count())
    }

    /// Visited stops in visit order
    pub fn visited(&self) -> Vec<StopId> {
        self.inner.record.borrow().visited.clone()
    }

    pub fn last_visit(&self) -> Option<DateTime<Utc>> {
        self.inner.record.borrow().last_visit
    }

    pub fn stops(&self) -> &StopSet {
        &self.inner.stops
    }

    pub fn snapshot(&self) -> TrailSnapshot {
        self.inner.snapshot()
    }

    /// Clear all progress, persist the empty record and notify everyone.
    pub fn reset_progress(&self) {
        self.inner.commit(ProgressRecord::default());
        tracing::debug!("Trail progress reset");
    }

    /// Re-read the persisted record after another view changed it.
    ///
    /// Returns true if the in-memory state changed. A failing read keeps the
    /// current state; a missing or malformed record reads as empty.
    pub fn sync_from_storage(&self) -> bool {
        self.inner.sync_from_storage()
    }

    /// True while the last write to storage failed and progress only lives
    /// in memory.
    pub fn is_persistence_degraded(&self) -> bool {
        self.inner.degraded.get()
    }

    /// Observe every state change, local or external.
    pub fn subscribe(&self, observer: impl Fn(&TrailSnapshot) + 'static) -> Subscription {
        self.inner.observers.register(Rc::new(observer))
    }
}

impl std::fmt::Debug for TrailProgressStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrailProgressStore")
            .field("record", &*self.inner.record.borrow())
            .field("threshold", &self.inner.threshold)
            .field("degraded", &self.inner.degraded.get())
            .finish()
    }
}

impl StoreInner {
    fn snapshot(&self) -> TrailSnapshot {
        let record = self.record.borrow();
        TrailSnapshot {
            visited: record.visited.clone(),
            last_visit: record.last_visit,
            total: self.stops.len(),
            threshold: self.threshold,
        }
    }

    /// Persisted record, with absent or malformed data read as empty.
    fn read_persisted(&self) -> Result<ProgressRecord, StorageError> {
        let Some(raw) = self.storage.load()? else {
            return Ok(ProgressRecord::default());
        };
        match ProgressRecord::decode(&raw, &self.stops) {
            Ok(record) => Ok(record),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable trail progress");
                Ok(ProgressRecord::default())
            }
        }
    }

    /// Replace the in-memory record, persist it and tell everyone.
    fn commit(&self, next: ProgressRecord) {
        *self.record.borrow_mut() = next;

        match self.persist() {
            Ok(()) => {
                self.degraded.set(false);
                self.notifier.publish();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to save trail progress, keeping it in memory");
                self.degraded.set(true);
            }
        }

        self.notify_observers();
    }

    fn persist(&self) -> Result<(), StorageError> {
        let raw = match self.record.borrow().encode() {
            Ok(raw) => raw,
            Err(e) => {
                return Err(StorageError::Rejected {
                    reason: e.to_string(),
                });
            }
        };
        self.storage.save(&raw)
    }

    fn sync_from_storage(&self) -> bool {
        let loaded = match self.read_persisted() {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "Could not re-read trail progress");
                return false;
            }
        };

        if *self.record.borrow() == loaded {
            return false;
        }

        *self.record.borrow_mut() = loaded;
        tracing::debug!(
            visited = self.record.borrow().visited.len(),
            "Trail progress changed in another view"
        );
        self.notify_observers();
        true
    }

    fn notify_observers(&self) {
        let snapshot = self.snapshot();
        for observer in self.observers.snapshot() {
            observer(&snapshot);
        }
    }
}
