//! Toggle component: two adjacent labels, one highlighted as selected

use crate::theme::Theme;
use dioxus::prelude::*;

/// Scoped rules for the toggle. Colors and radius come from the
/// `--toggle-*` custom properties set inline on each container.
pub const TOGGLE_CSS: &str = "\
.toggle { display: flex; align-items: center; text-align: center; margin: auto; \
width: fit-content; cursor: pointer; border: 1px solid var(--toggle-border); \
background-color: var(--toggle-bg); border-radius: var(--toggle-radius); }
.toggle:hover { background-color: var(--toggle-hover-bg); }
.toggle-option { text-align: center; padding: 8px 12px; border-radius: var(--toggle-radius); \
transition: all 0.2s ease-in-out; }
.toggle-option-selected { background-color: var(--toggle-selected-bg); \
box-shadow: 0px 0px 8px 0px var(--toggle-selected-glow); }";

/// Which of the two options a region displays
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleSide {
    First,
    Second,
}

impl ToggleSide {
    /// The side that carries the emphasized treatment
    pub fn emphasized(selected: bool) -> Self {
        if selected {
            ToggleSide::First
        } else {
            ToggleSide::Second
        }
    }

    pub fn is_emphasized(self, selected: bool) -> bool {
        self == Self::emphasized(selected)
    }
}

pub fn option_class(emphasized: bool) -> &'static str {
    if emphasized {
        "toggle-option toggle-option-selected"
    } else {
        "toggle-option"
    }
}

/// Two-option switch. `selected == true` highlights `option_one`.
///
/// The whole container is one click target: which option becomes selected
/// next is up to the caller, who owns `selected`.
#[component]
pub fn Toggle(
    option_one: String,
    option_two: String,
    selected: bool,
    #[props(default)] on_click: Option<EventHandler<()>>,
    #[props(default)] theme: Theme,
) -> Element {
    let first = ToggleSide::First.is_emphasized(selected);
    let second = ToggleSide::Second.is_emphasized(selected);

    rsx! {
        div {
            class: "toggle",
            style: theme.css_variables(),
            onclick: move |_| {
                tracing::trace!(selected, "toggle clicked");
                if let Some(handler) = on_click {
                    handler.call(());
                }
            },
            style { "{TOGGLE_CSS}" }
            div {
                class: option_class(first),
                "data-selected": "{first}",
                "{option_one}"
            }
            div {
                class: option_class(second),
                "data-selected": "{second}",
                "{option_two}"
            }
        }
    }
}
