//! Search across navigation, experience, projects and skills.

use dioxus::prelude::*;
use trailhead_core::SearchKind;

use crate::content::use_content;
use crate::trail::use_trail;

fn group_label(kind: SearchKind) -> &'static str {
    match kind {
        SearchKind::Navigation => "Go to",
        SearchKind::Experience => "Experience",
        SearchKind::Project => "Project",
        SearchKind::Skill => "Skills",
    }
}

#[component]
pub fn SearchPalette() -> Element {
    let trail = use_trail();
    let content = use_content();
    let mut query = use_signal(String::new);
    let nav = use_navigator();

    let hits = content.search(&query.read(), trail.stops());

    rsx! {
        div { class: "search-palette",
            input {
                r#type: "search",
                placeholder: "Search...",
                value: "{query}",
                oninput: move |e| query.set(e.value()),
            }
            if !hits.is_empty() {
                ul { class: "search-results",
                    for hit in hits {
                        li {
                            key: "{hit.route}",
                            onclick: {
                                let route = hit.route.clone();
                                move |_| {
                                    query.set(String::new());
                                    nav.push(route.clone());
                                }
                            },
                            span { class: "search-kind", "{group_label(hit.kind)}" }
                            span { class: "search-title", "{hit.title}" }
                            if let Some(detail) = hit.detail {
                                span { class: "search-detail", "{detail}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
