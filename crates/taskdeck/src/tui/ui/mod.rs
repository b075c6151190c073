/*
[INPUT]:  TUI app state and log buffer
[OUTPUT]: UI component render functions and module exports
[POS]:    TUI UI module root
[UPDATE]: Re-export panel draw functions
*/

mod banner;
mod layout;
mod logs;
mod notifications;
mod task_form;
mod task_list;

pub mod modal;

pub(in crate::tui) use banner::draw_error_banner;
pub(in crate::tui) use layout::{draw_footer, draw_tabs};
pub(in crate::tui) use logs::draw_logs;
pub(in crate::tui) use modal::draw_output_modal;
pub(in crate::tui) use notifications::draw_notifications;
pub(in crate::tui) use task_form::{draw_search, draw_task_form};
pub(in crate::tui) use task_list::draw_task_table;
