//! Toast notifications.
//!
//! A global toast manager accessible via context, with auto-dismiss and
//! manual close. The trail uses it to announce the recruiter packet unlock
//! and to warn when progress can no longer be saved.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::trail::use_trail;

const MAX_TOASTS: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Good news - 4 second duration
    Celebrate,
    /// Something degraded - 7 second duration
    Warning,
}

impl ToastKind {
    fn duration_ms(self) -> u32 {
        match self {
            ToastKind::Celebrate => 4000,
            ToastKind::Warning => 7000,
        }
    }
}

#[derive(Clone)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
}

/// Access via `use_toast()` from any component.
#[derive(Clone, Copy)]
pub struct ToastManager {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u32>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(vec![]),
            next_id: Signal::new(0),
        }
    }

    /// Show a toast; the oldest is dropped past `MAX_TOASTS`.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) {
        let id = *self.next_id.peek();
        *self.next_id.write() += 1;

        {
            let mut toasts = self.toasts.write();
            if toasts.len() >= MAX_TOASTS {
                toasts.remove(0);
            }
            toasts.push(Toast {
                id,
                message: message.into(),
                kind,
            });
        }

        let mut toasts_signal = self.toasts;
        spawn(async move {
            TimeoutFuture::new(kind.duration_ms()).await;
            toasts_signal.write().retain(|t| t.id != id);
        });
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.write().retain(|t| t.id != id);
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Call once at the site root before any children that might use toasts.
pub fn use_toast_provider() -> ToastManager {
    use_context_provider(ToastManager::new)
}

pub fn use_toast() -> ToastManager {
    use_context::<ToastManager>()
}

/// Watches the trail and raises toasts on unlock and on lost persistence.
#[component]
pub fn TrailToasts() -> Element {
    let trail = use_trail();
    let mut toast = use_toast();
    let mut was_unlocked = use_signal(|| trail.snapshot().is_unlocked());
    let mut warned = use_signal(|| false);

    use_effect(move || {
        let snapshot = trail.snapshot();

        let unlocked = snapshot.is_unlocked();
        if unlocked && !*was_unlocked.peek() {
            toast.show("Recruiter packet unlocked!", ToastKind::Celebrate);
        }
        if unlocked != *was_unlocked.peek() {
            was_unlocked.set(unlocked);
        }

        if trail.is_persistence_degraded() && !*warned.peek() {
            warned.set(true);
            toast.show(
                "Progress can't be saved in this browser. It will last until you close the tab.",
                ToastKind::Warning,
            );
        }
    });

    rsx! { ToastFrame {} }
}

#[component]
pub fn ToastFrame() -> Element {
    let mut manager = use_toast();
    let toasts = manager.toasts.read();

    rsx! {
        div { class: "toast-container",
            for toast in toasts.iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Celebrate => "toast toast-celebrate",
                        ToastKind::Warning => "toast toast-warning",
                    },
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: {
                            let id = toast.id;
                            move |_| manager.dismiss(id)
                        },
                        "X"
                    }
                }
            }
        }
    }
}
