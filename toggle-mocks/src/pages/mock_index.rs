//! Mock pages with URL state persistence

use crate::mocks::framework::MockPage;
use crate::mocks::ToggleMock;
use crate::Route;
use dioxus::prelude::*;
use toggle_ui::Toggle;

#[component]
pub fn MockIndex() -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-8",
            h1 { class: "text-2xl font-bold mb-6", "toggle mocks" }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Design System" }
            div { class: "grid grid-cols-3 gap-4 mb-8",
                SpecimenCard { title: "Toggle", to: Route::MockToggle { state: None },
                    div { class: "flex flex-col gap-2",
                        Toggle {
                            option_one: "Mode A".to_string(),
                            option_two: "Mode B".to_string(),
                            selected: true,
                        }
                        Toggle {
                            option_one: "Mode A".to_string(),
                            option_two: "Mode B".to_string(),
                            selected: false,
                        }
                    }
                }
            }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Components" }
            div { class: "space-y-2",
                for page in MockPage::ALL.iter().copied() {
                    MockLink { page }
                }
            }
        }
    }
}

/// Navigation card for a mock page, opened with default controls
#[component]
fn MockLink(page: MockPage) -> Element {
    let label = page.label();
    let description = page.description();

    rsx! {
        Link {
            to: page.to_route(None),
            class: "block p-4 bg-gray-800 rounded-lg hover:bg-gray-700 transition-colors",
            div { class: "font-medium", "{label}" }
            div { class: "text-sm text-gray-400", "{description}" }
        }
    }
}

/// A card showing specimen samples with a link to the full page
#[component]
fn SpecimenCard(title: &'static str, to: Route, children: Element) -> Element {
    rsx! {
        Link {
            to,
            class: "block bg-gray-950 rounded-lg p-4 hover:bg-gray-900 transition-colors border border-gray-800",
            h3 { class: "text-sm font-medium text-gray-300 mb-3", "{title}" }
            div { class: "pointer-events-none", {children} }
        }
    }
}

#[component]
pub fn MockToggle(state: Option<String>) -> Element {
    rsx! {
        ToggleMock { initial_state: state }
    }
}
