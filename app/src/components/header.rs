use dioxus::prelude::*;

use super::{SearchPalette, TrailProgress};
use crate::app::Route;
use crate::content::use_content;
use crate::trail::use_trail;

#[component]
pub fn Header() -> Element {
    let trail = use_trail();
    let content = use_content();
    let name = content.profile().name.clone();

    rsx! {
        header { class: "site-header",
            Link { class: "site-name", to: Route::Home {}, "{name}" }
            nav { class: "site-nav",
                for stop in trail.stops().iter() {
                    Link { key: "{stop.id}", to: stop.route.clone(), "{stop.label}" }
                }
                Link { to: Route::Outpost {}, "Outpost" }
            }
            SearchPalette {}
            TrailProgress {}
        }
    }
}
