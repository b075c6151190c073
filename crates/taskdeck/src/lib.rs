/*
[INPUT]:  Public API exports for the taskdeck crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod notify;
pub mod tui;

// Re-export main types for convenience
pub use app::{AppEvent, AppState, Dispatcher};
pub use config::TaskdeckConfig;
