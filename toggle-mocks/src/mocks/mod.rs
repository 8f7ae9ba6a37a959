//! Component mocks with interactive controls

pub mod framework;
mod toggle;
pub mod url_state;

pub use toggle::ToggleMock;
