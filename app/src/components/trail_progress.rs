//! Progress surfaces: the compact header meter and the full trail map.

use dioxus::prelude::*;

use crate::trail::use_trail;

/// "3/6" meter with one marker per stop.
#[component]
pub fn TrailProgress() -> Element {
    let trail = use_trail();
    let snapshot = trail.snapshot();
    let visited = snapshot.visited_count();
    let total = snapshot.total_stop_count();

    rsx! {
        div {
            class: "trail-progress",
            title: "{visited} of {total} trail stops visited",
            for stop in trail.stops().iter() {
                span {
                    key: "{stop.id}",
                    class: if snapshot.is_visited(stop.id.as_str()) { "trail-marker visited" } else { "trail-marker" },
                    aria_label: "{stop.label}",
                }
            }
            span { class: "trail-count", "{visited}/{total}" }
        }
    }
}

/// Every stop in trail order, linked, with its visited state.
#[component]
pub fn TrailMap() -> Element {
    let trail = use_trail();
    let snapshot = trail.snapshot();

    rsx! {
        ol { class: "trail-map",
            for (index, stop) in trail.stops().iter().enumerate() {
                li {
                    key: "{stop.id}",
                    class: if snapshot.is_visited(stop.id.as_str()) { "trail-stop visited" } else { "trail-stop" },
                    span { class: "trail-stop-number", "{index + 1}" }
                    Link { to: stop.route.clone(), "{stop.label}" }
                    if snapshot.is_visited(stop.id.as_str()) {
                        span { class: "trail-stop-check", "Visited" }
                    }
                }
            }
        }
    }
}
