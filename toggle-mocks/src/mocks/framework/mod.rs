//! Mock framework for Storybook-like component development
//!
//! Provides:
//! - ControlRegistry: Typed control bag with automatic URL sync
//! - Presets: Named state configurations for quick switching
//! - MockPanel: Auto-generated control panel UI

mod panel;
mod preset;
mod registry;

pub use panel::{MockPage, MockPanel};
pub use preset::Preset;
pub use registry::ControlRegistryBuilder;
