//! State presets for quick configuration switching

use super::registry::{ControlRegistry, ControlValue};
use dioxus::prelude::*;
use std::collections::HashMap;

/// A named preset with predefined control values
#[derive(Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub values: HashMap<String, ControlValue>,
}

impl Preset {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            values: HashMap::new(),
        }
    }

    pub fn set_bool(mut self, key: &'static str, value: bool) -> Self {
        self.values
            .insert(key.to_string(), ControlValue::Bool(value));
        self
    }

    /// Set a string/enum value in this preset
    pub fn set_string(mut self, key: &'static str, value: &'static str) -> Self {
        self.values
            .insert(key.to_string(), ControlValue::String(value.to_string()));
        self
    }

    /// A preset matches when every control it names has the preset's value
    /// and every other control is at its default.
    pub fn matches(&self, registry: &ControlRegistry) -> bool {
        registry.controls.iter().all(|control| {
            let current = registry.values.get(control.key).map(|s| s.read().clone());
            let expected = self.values.get(control.key).unwrap_or(&control.default);
            current.as_ref() == Some(expected)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::framework::ControlRegistryBuilder;
    use crate::mocks::url_state::StateBuilder;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Props, Clone, PartialEq)]
    struct HarnessProps {
        initial_state: Option<String>,
        matched: Rc<RefCell<Vec<&'static str>>>,
    }

    /// Records which presets match the registry built from `initial_state`
    #[allow(non_snake_case)]
    fn Harness(props: HarnessProps) -> Element {
        let registry = ControlRegistryBuilder::new()
            .bool_control("selected", "Selected", true)
            .string_control("one", "Option one", "Mode A")
            .with_presets(vec![
                Preset::new("Default"),
                Preset::new("Second Selected").set_bool("selected", false),
                Preset::new("Empty Label").set_string("one", ""),
            ])
            .build(props.initial_state);

        *props.matched.borrow_mut() = registry
            .presets
            .iter()
            .filter(|preset| preset.matches(&registry))
            .map(|preset| preset.name)
            .collect();

        rsx! {}
    }

    fn matching_presets(initial_state: Option<String>) -> Vec<&'static str> {
        let matched = Rc::new(RefCell::new(Vec::new()));
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                initial_state,
                matched: matched.clone(),
            },
        );
        dom.rebuild_in_place();
        let names = matched.borrow().clone();
        names
    }

    #[test]
    fn defaults_match_only_the_empty_preset() {
        assert_eq!(matching_presets(None), vec!["Default"]);
    }

    #[test]
    fn preset_matches_when_its_values_are_set() {
        let mut builder = StateBuilder::new();
        builder.set_bool("selected", false, true);
        assert_eq!(matching_presets(builder.build_option()), vec!["Second Selected"]);
    }

    #[test]
    fn extra_non_default_value_breaks_the_match() {
        let mut builder = StateBuilder::new();
        builder.set_bool("selected", false, true);
        builder.set_string("one", "", "Mode A");
        assert!(matching_presets(builder.build_option()).is_empty());
    }
}
