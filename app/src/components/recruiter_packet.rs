//! The recruiter packet: contact details and links gated behind the trail.

use dioxus::prelude::*;

use crate::content::use_content;
use crate::trail::use_trail;

fn unlock_hint(remaining: usize) -> String {
    match remaining {
        1 => "Visit 1 more trail stop to unlock the recruiter packet".to_string(),
        n => format!("Visit {n} more trail stops to unlock the recruiter packet"),
    }
}

/// Floating button; locked until enough stops are visited.
#[component]
pub fn RecruiterPacketTrigger() -> Element {
    let trail = use_trail();
    let snapshot = trail.snapshot();
    let mut open = use_signal(|| false);

    let unlocked = snapshot.is_unlocked();
    let hint = if unlocked {
        "Open the recruiter packet".to_string()
    } else {
        unlock_hint(snapshot.stops_remaining())
    };

    rsx! {
        button {
            class: if unlocked { "packet-trigger unlocked" } else { "packet-trigger locked" },
            disabled: !unlocked,
            title: "{hint}",
            onclick: move |_| open.set(true),
            if unlocked { "Recruiter packet" } else { "Locked" }
        }
        if unlocked && open() {
            RecruiterPacket { on_close: move |_| open.set(false) }
        }
    }
}

#[component]
pub fn RecruiterPacket(on_close: EventHandler<()>) -> Element {
    let content = use_content();
    let profile = content.profile();
    let education = content.education();
    let current = content.experience().iter().find(|e| e.is_current());

    rsx! {
        div { class: "modal-backdrop", onclick: move |_| on_close.call(()),
            div {
                class: "modal packet",
                onclick: move |e| e.stop_propagation(),
                h2 { "{profile.name}" }
                p { class: "packet-title", "{profile.title} - {profile.location}" }
                if let Some(job) = current {
                    p { "Currently {job.role} at {job.company}" }
                }
                p { "{education.school}, class of {education.graduation_year}" }
                ul { class: "packet-links",
                    li { a { href: "mailto:{profile.email}", "{profile.email}" } }
                    li { "{profile.phone}" }
                    li { a { href: "{profile.github.personal}", target: "_blank", "GitHub" } }
                    li { a { href: "{profile.linkedin}", target: "_blank", "LinkedIn" } }
                }
                button { class: "modal-close", onclick: move |_| on_close.call(()), "Close" }
            }
        }
    }
}
