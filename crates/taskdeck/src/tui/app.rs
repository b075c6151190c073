/*
[INPUT]:  AppState and log buffer
[OUTPUT]: TUI view state (focus, active tab) wrapped around AppState
[POS]:    TUI app state
[UPDATE]: When adding focusable panels or tabs
*/

use crate::app::AppState;
use crate::logging::LogBufferHandle;

/// Panel receiving keyboard input on the Tasks tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    Search,
    Table,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Form => Focus::Search,
            Focus::Search => Focus::Table,
            Focus::Table => Focus::Form,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Form => Focus::Table,
            Focus::Search => Focus::Form,
            Focus::Table => Focus::Search,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Tasks,
    Logs,
}

pub struct TuiApp {
    pub state: AppState,
    pub focus: Focus,
    pub current_tab: Tab,
    pub log_buffer: LogBufferHandle,
}

impl TuiApp {
    pub fn new(state: AppState, log_buffer: LogBufferHandle) -> Self {
        Self {
            state,
            focus: Focus::Form,
            current_tab: Tab::Tasks,
            log_buffer,
        }
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
    }
}
