/*
[INPUT]:  Application state, crossterm key events, log buffer
[OUTPUT]: Ratatui-based terminal UI for managing tasks
[POS]:    TUI module for the taskdeck binary
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

mod app;
mod events;
mod runtime;
mod terminal;
mod ui;

pub use app::{Focus, Tab, TuiApp};
pub use events::handle_key_event;
pub use runtime::{draw_ui, run_tui};
