//! Control registry for typed control management with URL sync

use super::preset::Preset;
use crate::mocks::url_state::{parse_state, StateBuilder};
use crate::Route;
use dioxus::prelude::*;
use std::collections::HashMap;

/// Value stored in the control registry
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Bool(bool),
    String(String),
}

/// Definition of a control with metadata
#[derive(Clone, PartialEq)]
pub struct ControlDef {
    pub key: &'static str,
    pub label: &'static str,
    pub default: ControlValue,
    pub doc: Option<&'static str>,
    pub enum_options: Option<Vec<(&'static str, &'static str)>>, // (value, label)
}

#[derive(Default)]
pub struct ControlRegistryBuilder {
    controls: Vec<ControlDef>,
    presets: Vec<Preset>,
}

impl ControlRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, key: &'static str, label: &'static str, default: ControlValue) {
        self.controls.push(ControlDef {
            key,
            label,
            default,
            doc: None,
            enum_options: None,
        });
    }

    pub fn bool_control(mut self, key: &'static str, label: &'static str, default: bool) -> Self {
        self.push(key, label, ControlValue::Bool(default));
        self
    }

    /// Free-form text, rendered as an input
    pub fn string_control(mut self, key: &'static str, label: &'static str, default: &str) -> Self {
        self.push(key, label, ControlValue::String(default.to_string()));
        self
    }

    /// Enum control (stored as its string value), rendered as a button group
    pub fn enum_control(
        mut self,
        key: &'static str,
        label: &'static str,
        default: &'static str,
        options: Vec<(&'static str, &'static str)>,
    ) -> Self {
        self.push(key, label, ControlValue::String(default.to_string()));
        if let Some(last) = self.controls.last_mut() {
            last.enum_options = Some(options);
        }
        self
    }

    /// Add documentation to the last control
    pub fn doc(mut self, doc: &'static str) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.doc = Some(doc);
        }
        self
    }

    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        self.presets = presets;
        self
    }

    /// Build the registry - must be called inside a component (uses hooks)
    pub fn build(self, initial_state: Option<String>) -> ControlRegistry {
        let state_pairs = initial_state
            .as_deref()
            .map(parse_state)
            .unwrap_or_default();

        let mut values = HashMap::new();
        for def in &self.controls {
            let initial = initial_value(def, &state_pairs);
            // One hook per control, always in declaration order
            let signal = use_signal(|| initial);
            values.insert(def.key, signal);
        }

        ControlRegistry {
            controls: self.controls,
            values,
            presets: self.presets,
        }
    }
}

/// Value from URL state if present and well-formed, else the default
fn initial_value(def: &ControlDef, state_pairs: &[(String, String)]) -> ControlValue {
    let from_url = state_pairs
        .iter()
        .find(|(k, _)| k == def.key)
        .map(|(_, v)| v);

    match (&def.default, from_url) {
        (ControlValue::Bool(_), Some(v)) => ControlValue::Bool(v == "1" || v == "true"),
        (ControlValue::String(_), Some(v)) => {
            let allowed = def
                .enum_options
                .as_ref()
                .map_or(true, |options| options.iter().any(|(value, _)| value == v));
            if allowed {
                ControlValue::String(v.clone())
            } else {
                def.default.clone()
            }
        }
        (default, None) => default.clone(),
    }
}

/// Registry holding all controls and their current values
#[derive(Clone, PartialEq)]
pub struct ControlRegistry {
    pub controls: Vec<ControlDef>,
    pub values: HashMap<&'static str, Signal<ControlValue>>,
    pub presets: Vec<Preset>,
}

impl ControlRegistry {
    /// Get a boolean value (reads signal, creating subscription)
    pub fn get_bool(&self, key: &'static str) -> bool {
        self.values
            .get(key)
            .map(|s| matches!(&*s.read(), ControlValue::Bool(true)))
            .unwrap_or(false)
    }

    /// Get a string value (reads signal, creating subscription)
    pub fn get_string(&self, key: &'static str) -> String {
        self.values
            .get(key)
            .map(|s| match &*s.read() {
                ControlValue::String(s) => s.clone(),
                ControlValue::Bool(_) => String::new(),
            })
            .unwrap_or_default()
    }

    pub fn set_bool(&self, key: &'static str, value: bool) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::Bool(value));
        }
    }

    pub fn set_string(&self, key: &'static str, value: String) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::String(value));
        }
    }

    /// Reset all controls to defaults, then apply the preset's values
    pub fn apply_preset(&self, preset: &Preset) {
        tracing::debug!(preset = preset.name, "applying mock preset");
        for control in &self.controls {
            if let Some(mut signal) = self.values.get(control.key).copied() {
                let value = preset
                    .values
                    .get(control.key)
                    .unwrap_or(&control.default)
                    .clone();
                signal.set(value);
            }
        }
    }

    /// URL state string for the current values, `None` when all are default
    pub fn build_state(&self) -> Option<String> {
        let mut builder = StateBuilder::new();

        for def in &self.controls {
            let Some(signal) = self.values.get(def.key) else {
                continue;
            };
            match (&*signal.read(), &def.default) {
                (ControlValue::Bool(v), ControlValue::Bool(default)) => {
                    builder.set_bool(def.key, *v, *default);
                }
                (ControlValue::String(v), ControlValue::String(default)) => {
                    builder.set_string(def.key, v, default);
                }
                _ => {}
            }
        }

        builder.build_option()
    }

    /// Keep the current route's `state` param in sync with control values
    pub fn use_url_sync(&self, to_route: fn(Option<String>) -> Route) {
        let registry = self.clone();
        let mut is_mounted = use_signal(|| false);

        use_effect(move || {
            // Read all values to subscribe to changes
            for signal in registry.values.values() {
                let _ = signal.read();
            }

            // The initial values came from the URL; nothing to write back yet
            if !*is_mounted.peek() {
                is_mounted.set(true);
                return;
            }

            navigator().replace(to_route(registry.build_state()));
        });
    }
}
