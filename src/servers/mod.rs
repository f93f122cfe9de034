// Modules for server components
pub mod views;
pub mod web_ui;

// Re-export public APIs
pub use web_ui::{router, AppState, WebUiConfig, WebUiServer};
