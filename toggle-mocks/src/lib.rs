//! toggle mocks - Web app for viewing components in isolation
//!
//! Each mock page renders a component with interactive controls whose
//! values persist in the URL, so any state can be linked to directly.

pub mod mocks;
pub mod pages;

use dioxus::prelude::*;
use pages::{MockIndex, MockToggle};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
/// Utility classes used by the mock pages
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    MockIndex {},
    #[route("/toggle?:state")]
    MockToggle { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
