//! URL state persistence for mock pages
//!
//! Control values travel as base64url-encoded JSON in the `state` query
//! parameter, so the URL stays opaque and never collides with route params.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::collections::BTreeMap;

/// Decode a state string into key-value pairs. Anything undecodable is
/// treated as empty state.
pub fn parse_state(encoded: &str) -> Vec<(String, String)> {
    if encoded.is_empty() {
        return Vec::new();
    }

    let Ok(json_bytes) = URL_SAFE_NO_PAD.decode(encoded) else {
        tracing::debug!(encoded, "ignoring undecodable mock state");
        return Vec::new();
    };

    match serde_json::from_slice::<BTreeMap<String, String>>(&json_bytes) {
        Ok(map) => map.into_iter().collect(),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring malformed mock state JSON");
            Vec::new()
        }
    }
}

/// Encode key-value pairs into a state string. Later duplicates win.
pub fn build_state(pairs: &[(String, String)]) -> String {
    let map: BTreeMap<&str, &str> = pairs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let json = serde_json::to_string(&map).expect("string map serializes");
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

/// Collects non-default values and produces an encoded state string
#[derive(Default)]
pub struct StateBuilder {
    pairs: Vec<(String, String)>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bool(&mut self, key: &str, value: bool, default: bool) {
        if value != default {
            self.pairs
                .push((key.to_string(), if value { "1" } else { "0" }.to_string()));
        }
    }

    pub fn set_string(&mut self, key: &str, value: &str, default: &str) {
        if value != default {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    /// `None` when every control is at its default
    pub fn build_option(self) -> Option<String> {
        if self.pairs.is_empty() {
            None
        } else {
            Some(build_state(&self.pairs))
        }
    }
}
