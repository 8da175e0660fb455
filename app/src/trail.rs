//! Trail progress context.
//!
//! One [`TrailProgressStore`] per tab, shared through context. Components read
//! progress through a signal that the store's observer keeps current, so a
//! visit recorded anywhere (this tab or another) re-renders every surface.

use std::rc::Rc;

use dioxus::prelude::*;
use trailhead_core::{
    ConfigError, MarkOutcome, StopSet, Subscription, TrailConfig, TrailProgressStore,
    TrailSnapshot,
};

use crate::app::Route;
use crate::browser::{BrowserNotifier, LocalStorage};

/// Build the tab's store on top of `localStorage`.
pub fn open_store(config: TrailConfig) -> Result<TrailProgressStore, ConfigError> {
    let storage = LocalStorage::new(config.storage_key.clone());
    let notifier = BrowserNotifier::new(config.storage_key.clone());
    TrailProgressStore::builder(config)
        .storage(storage)
        .notifier(notifier)
        .build()
}

/// Store handle shared as a component prop; equal only to itself.
#[derive(Clone)]
pub struct SharedStore(pub Rc<TrailProgressStore>);

impl PartialEq for SharedStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone)]
pub struct Trail {
    store: Rc<TrailProgressStore>,
    snapshot: Signal<TrailSnapshot>,
    _observer: Rc<Subscription>,
}

impl Trail {
    /// Current progress. Reading subscribes the calling component.
    pub fn snapshot(&self) -> TrailSnapshot {
        self.snapshot.read().clone()
    }

    pub fn stops(&self) -> &StopSet {
        self.store.stops()
    }

    pub fn mark_visited(&self, stop_id: &str) -> MarkOutcome {
        self.store.mark_visited(stop_id)
    }

    pub fn reset(&self) {
        self.store.reset_progress();
    }

    pub fn is_persistence_degraded(&self) -> bool {
        self.store.is_persistence_degraded()
    }
}

/// Provide the trail at the root of the site.
pub fn use_trail_provider(store: SharedStore) -> Trail {
    let store = store.0;
    let snapshot = use_signal(|| store.snapshot());
    let observer = use_hook(|| {
        Rc::new(store.subscribe(move |next| {
            let mut snapshot = snapshot;
            snapshot.set(next.clone());
        }))
    });
    use_context_provider(|| Trail {
        store,
        snapshot,
        _observer: observer,
    })
}

pub fn use_trail() -> Trail {
    use_context::<Trail>()
}

/// Record a visit to whichever stop the current route belongs to.
pub fn use_route_visit() {
    let trail = use_trail();
    let route = use_route::<Route>();
    use_effect(move || {
        let location = route.to_string();
        if let Some(stop) = trail.stops().stop_for_route(&location) {
            trail.mark_visited(stop.id.as_str());
        }
    });
}
