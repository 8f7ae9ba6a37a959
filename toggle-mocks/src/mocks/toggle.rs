//! Toggle mock component

use super::framework::{ControlRegistryBuilder, MockPage, MockPanel, Preset};
use dioxus::prelude::*;
use toggle_ui::{Theme, Toggle};

/// Theme override used by the "light" control value
const LIGHT_THEME_JSON: &str = r##"{
    "button_color": "#2563eb",
    "light_gray": "#a1a1aa",
    "secondary_dark": "#f4f4f5",
    "border_radius_px": 8
}"##;

fn theme_for(name: &str) -> Theme {
    match name {
        "light" => Theme::from_json(LIGHT_THEME_JSON).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "light theme override rejected, using defaults");
            Theme::default()
        }),
        _ => Theme::default(),
    }
}

#[component]
pub fn ToggleMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .bool_control("selected", "Selected (option one)", true)
        .bool_control("handler", "Click handler", true)
        .doc("When off, the toggle renders without on_click and clicks do nothing")
        .string_control("one", "Option one", "Mode A")
        .string_control("two", "Option two", "Mode B")
        .enum_control(
            "theme",
            "Theme",
            "default",
            vec![("default", "Default"), ("light", "Light")],
        )
        .with_presets(vec![
            Preset::new("Default"),
            Preset::new("Second Selected").set_bool("selected", false),
            Preset::new("Empty Labels")
                .set_string("one", "")
                .set_string("two", ""),
            Preset::new("No Handler").set_bool("handler", false),
            Preset::new("Light Theme").set_string("theme", "light"),
        ])
        .build(initial_state);

    registry.use_url_sync(|state| MockPage::Toggle.to_route(state));

    let selected = registry.get_bool("selected");
    let handler_enabled = registry.get_bool("handler");
    let option_one = registry.get_string("one");
    let option_two = registry.get_string("two");
    let theme = theme_for(&registry.get_string("theme"));

    let mut clicks = use_signal(|| 0u32);

    // The caller owns the selection: each click flips it
    let on_click: Option<EventHandler<()>> = handler_enabled.then(|| {
        let registry = registry.clone();
        EventHandler::new(move |_: ()| {
            let next = !registry.get_bool("selected");
            tracing::debug!(selected = next, "toggle mock flipped selection");
            registry.set_bool("selected", next);
            clicks += 1;
        })
    });

    rsx! {
        MockPanel { current_mock: MockPage::Toggle, registry,
            div { class: "p-8 bg-gray-900 min-h-full",
                h2 { class: "text-lg font-semibold text-white mb-6", "Toggle Component" }

                div { class: "mb-8",
                    h3 { class: "text-sm text-gray-400 mb-3", "Interactive Demo" }
                    div { class: "flex items-center gap-4",
                        Toggle {
                            option_one: option_one.clone(),
                            option_two: option_two.clone(),
                            selected,
                            on_click,
                            theme: theme.clone(),
                        }
                        span { class: "text-sm text-gray-500",
                            "Selected: "
                            if selected { "{option_one}" } else { "{option_two}" }
                            " · clicks: {clicks}"
                        }
                    }
                }

                div {
                    h3 { class: "text-sm text-gray-400 mb-3", "States" }
                    div { class: "flex flex-wrap items-center gap-6",
                        for state in [true, false] {
                            div {
                                p { class: "text-xs text-gray-500 mb-2",
                                    if state { "selected = true" } else { "selected = false" }
                                }
                                Toggle {
                                    option_one: option_one.clone(),
                                    option_two: option_two.clone(),
                                    selected: state,
                                    theme: theme.clone(),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_override_parses() {
        let theme = theme_for("light");
        assert_ne!(theme, Theme::default());
        assert_eq!(theme.border_radius_px, 8);
    }

    #[test]
    fn unknown_theme_name_uses_default() {
        assert_eq!(theme_for("neon"), Theme::default());
    }
}
