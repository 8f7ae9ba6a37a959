//! toggle-ui - Presentational components and theme constants
//!
//! Components here are pure views: they read props, render, and forward
//! events to caller-supplied handlers without holding state of their own.

pub mod components;
pub mod theme;

pub use components::*;
pub use theme::{Color, Theme, ThemeError};
