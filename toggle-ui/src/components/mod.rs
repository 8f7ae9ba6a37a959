//! Shared UI components

pub mod toggle;

pub use toggle::Toggle;
