mod app;
mod browser;
mod components;
mod content;
mod pages;
mod trail;

use dioxus_logger::tracing::Level;

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    dioxus_logger::init(level).expect("failed to init logger");
    dioxus::launch(app::App);
}
