//! Change notification between views sharing one persisted trail record.
//!
//! A [`ChangeNotifier`] is how one store instance tells every other instance
//! (other components, other tabs, other processes) that the persisted record
//! was rewritten. Receivers re-read storage; the notification itself carries
//! no payload.
//!
//! - [`LocalNotifier`]: in-process pub/sub, clones share subscribers
//! - [`NoopNotifier`]: never delivers
//!
//! The browser binding (`storage` event + same-tab custom event) lives in the
//! web frontend.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Callback invoked when the persisted record changed.
pub type ChangeCallback = Rc<dyn Fn()>;

pub trait ChangeNotifier {
    /// Register a callback. It stays registered until the returned
    /// [`Subscription`] is dropped or unsubscribed.
    fn subscribe(&self, callback: ChangeCallback) -> Subscription;

    /// Tell every subscriber that the persisted record changed.
    fn publish(&self);
}

// ─────────────────────────────────────────────────────────────────────────────
// Subscription Handle
// ─────────────────────────────────────────────────────────────────────────────

/// RAII handle for a registered callback. Dropping it detaches the callback.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle with nothing to cancel.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Callback Registry
// ─────────────────────────────────────────────────────────────────────────────

struct RegistryInner<F: ?Sized> {
    next_id: u64,
    entries: Vec<(u64, Rc<F>)>,
}

/// Ordered list of callbacks keyed by registration id.
pub(crate) struct CallbackRegistry<F: ?Sized> {
    inner: Rc<RefCell<RegistryInner<F>>>,
}

impl<F: ?Sized + 'static> CallbackRegistry<F> {
    pub(crate) fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(RegistryInner {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    pub(crate) fn register(&self, callback: Rc<F>) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.entries.push((id, callback));
            id
        };

        let weak: Weak<RefCell<RegistryInner<F>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().entries.retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    /// Copy of the current callbacks, so they can run without holding the
    /// registry borrow (callbacks may subscribe or unsubscribe).
    pub(crate) fn snapshot(&self) -> Vec<Rc<F>> {
        self.inner
            .borrow()
            .entries
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

impl<F: ?Sized> Clone for CallbackRegistry<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Notifiers
// ─────────────────────────────────────────────────────────────────────────────

/// In-process pub/sub. Every clone shares the same subscriber list, so two
/// stores given clones of one notifier behave like two tabs on one origin.
#[derive(Clone)]
pub struct LocalNotifier {
    callbacks: CallbackRegistry<dyn Fn()>,
}

impl LocalNotifier {
    pub fn new() -> Self {
        Self {
            callbacks: CallbackRegistry::new(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.callbacks.len()
    }
}

impl Default for LocalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeNotifier for LocalNotifier {
    fn subscribe(&self, callback: ChangeCallback) -> Subscription {
        self.callbacks.register(callback)
    }

    fn publish(&self) {
        let callbacks = self.callbacks.snapshot();
        tracing::trace!(subscribers = callbacks.len(), "Publishing trail change");
        for callback in callbacks {
            callback();
        }
    }
}

/// Notifier for single-view setups.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl ChangeNotifier for NoopNotifier {
    fn subscribe(&self, _callback: ChangeCallback) -> Subscription {
        Subscription::detached()
    }

    fn publish(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, ChangeCallback) {
        let hits = Rc::new(Cell::new(0));
        let hits_cb = Rc::clone(&hits);
        (hits, Rc::new(move || hits_cb.set(hits_cb.get() + 1)))
    }

    #[test]
    fn publish_reaches_every_clone() {
        let notifier = LocalNotifier::new();
        let other = notifier.clone();
        let (hits_a, cb_a) = counter();
        let (hits_b, cb_b) = counter();

        let _a = notifier.subscribe(cb_a);
        let _b = other.subscribe(cb_b);
        other.publish();

        assert_eq!(hits_a.get(), 1);
        assert_eq!(hits_b.get(), 1);
    }

    #[test]
    fn dropping_subscription_detaches() {
        let notifier = LocalNotifier::new();
        let (hits, cb) = counter();

        let sub = notifier.subscribe(cb);
        assert_eq!(notifier.subscriber_count(), 1);
        drop(sub);
        assert_eq!(notifier.subscriber_count(), 0);

        notifier.publish();
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn explicit_unsubscribe_detaches() {
        let notifier = LocalNotifier::new();
        let (_hits, cb) = counter();
        notifier.subscribe(cb).unsubscribe();
        assert_eq!(notifier.subscriber_count(), 0);
    }

    #[test]
    fn callback_may_subscribe_during_publish() {
        let notifier = LocalNotifier::new();
        let held: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));

        let inner_notifier = notifier.clone();
        let inner_held = Rc::clone(&held);
        let _outer = notifier.subscribe(Rc::new(move || {
            let sub = inner_notifier.subscribe(Rc::new(|| {}));
            inner_held.borrow_mut().push(sub);
        }));

        notifier.publish();
        assert_eq!(notifier.subscriber_count(), 2);
    }

    #[test]
    fn subscription_outliving_notifier_is_harmless() {
        let (_hits, cb) = counter();
        let sub = {
            let notifier = LocalNotifier::new();
            notifier.subscribe(cb)
        };
        drop(sub);
    }

    #[test]
    fn noop_notifier_never_calls_back() {
        let (hits, cb) = counter();
        let _sub = NoopNotifier.subscribe(cb);
        NoopNotifier.publish();
        assert_eq!(hits.get(), 0);
    }
}
