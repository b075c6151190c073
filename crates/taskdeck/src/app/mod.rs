/*
[INPUT]:  Task client results and user actions
[OUTPUT]: Application state for the task manager views
[POS]:    Application layer root
[UPDATE]: When adding application modules
*/

pub mod dispatch;
pub mod event;
pub mod filter;
pub mod form;
pub mod list;
pub mod state;

pub use dispatch::Dispatcher;
pub use event::AppEvent;
pub use filter::filter_tasks;
pub use form::{FormField, TaskForm};
pub use list::{TableBody, TaskListState, table_body};
pub use state::{AppState, FetchPhase};
