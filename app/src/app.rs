#![allow(non_snake_case)]

use std::rc::Rc;

use dioxus::prelude::*;
use trailhead_core::TrailConfig;

use crate::components::{Header, RecruiterPacketTrigger, TrailToasts, use_toast_provider};
use crate::content::{self, SharedContent};
use crate::pages::{
    About, AppRunner, ContactPage, EducationPage, ExperiencePage, Home, InterestsPage,
    NotFound, Outpost, ProjectsPage, SkillsPage,
};
use crate::trail::{self, SharedStore, use_trail_provider};

static CSS: Asset = asset!("/assets/styles.css");

// ─────────────────────────────────────────────────────────────────────────────
// Routes
// ─────────────────────────────────────────────────────────────────────────────

/// Trail stop routes must match the stops in [`TrailConfig::default`].
#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/education")]
        EducationPage {},
        #[route("/experience")]
        ExperiencePage {},
        #[route("/projects")]
        ProjectsPage {},
        #[route("/skills")]
        SkillsPage {},
        #[route("/interests")]
        InterestsPage {},
        #[route("/contact")]
        ContactPage {},
        #[route("/outpost")]
        Outpost {},
        #[route("/apps/:slug")]
        AppRunner { slug: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

// ─────────────────────────────────────────────────────────────────────────────
// Startup
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
enum Startup {
    Ready {
        store: SharedStore,
        content: SharedContent,
    },
    Failed(String),
}

fn start() -> Startup {
    let content = match content::load() {
        Ok(content) => content,
        Err(e) => {
            tracing::error!(error = %e, "Site content failed to load");
            return Startup::Failed(e.to_string());
        }
    };
    let store = match trail::open_store(TrailConfig::default()) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Invalid trail configuration");
            return Startup::Failed(e.to_string());
        }
    };
    Startup::Ready {
        store: SharedStore(Rc::new(store)),
        content: SharedContent(Rc::new(content)),
    }
}

#[component]
pub fn App() -> Element {
    let startup = use_hook(start);

    match startup {
        Startup::Ready { store, content } => rsx! { Site { store, content } },
        Startup::Failed(message) => rsx! {
            document::Stylesheet { href: CSS }
            div { class: "startup-error",
                h1 { "This site failed to start" }
                p { "{message}" }
            }
        },
    }
}

#[component]
fn Site(store: SharedStore, content: SharedContent) -> Element {
    use_trail_provider(store);
    use_context_provider(|| content.0.clone());
    use_toast_provider();

    rsx! {
        document::Stylesheet { href: CSS }
        Router::<Route> {}
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        Header {}
        main { class: "site-main", Outlet::<Route> {} }
        RecruiterPacketTrigger {}
        TrailToasts {}
    }
}
