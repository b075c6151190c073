/*
[INPUT]:  Task collection, search query, loading flag, execution results
[OUTPUT]: Table body selection, row selection and command output dialog state
[POS]:    Application layer - task list state
[UPDATE]: When list rendering states or row actions change
*/

use ratatui::widgets::TableState;
use taskdeck_adapter::Task;

use crate::app::filter::filter_tasks;

pub const NO_OUTPUT_TEXT: &str = "No output available";

/// What the task table shows in place of its body
#[derive(Debug, PartialEq, Eq)]
pub enum TableBody<'a> {
    Loading,
    Empty,
    Rows(Vec<&'a Task>),
}

/// Loading wins over data; an empty filtered set renders a single empty row.
pub fn table_body<'a>(tasks: &'a [Task], query: &str, is_loading: bool) -> TableBody<'a> {
    if is_loading {
        return TableBody::Loading;
    }
    let rows = filter_tasks(tasks, query);
    if rows.is_empty() {
        TableBody::Empty
    } else {
        TableBody::Rows(rows)
    }
}

#[derive(Debug, Default)]
pub struct TaskListState {
    executing: Option<String>,
    output: Option<String>,
    output_visible: bool,
    table_state: TableState,
}

impl TaskListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn executing(&self) -> Option<&str> {
        self.executing.as_deref()
    }

    pub fn is_executing(&self, id: &str) -> bool {
        self.executing.as_deref() == Some(id)
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn output_text(&self) -> &str {
        match self.output.as_deref() {
            Some(output) if !output.is_empty() => output,
            _ => NO_OUTPUT_TEXT,
        }
    }

    pub fn output_visible(&self) -> bool {
        self.output_visible
    }

    pub fn begin_execution(&mut self, id: impl Into<String>) {
        self.executing = Some(id.into());
    }

    /// Replace the previous output and open the dialog
    pub fn show_output(&mut self, output: String) {
        self.output = Some(output);
        self.output_visible = true;
    }

    pub fn end_execution(&mut self) {
        self.executing = None;
    }

    pub fn close_output(&mut self) {
        self.output_visible = false;
    }

    pub fn table_state_mut(&mut self) -> &mut TableState {
        &mut self.table_state
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Move the selection by `delta` rows within `len` visible rows
    pub fn move_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let current = self.table_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (len - 1) as isize) as usize;
        self.table_state.select(Some(next));
    }

    /// Keep the selection inside `len` visible rows after the rows change
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.table_state.select(None);
        } else if self.table_state.selected().is_none() {
            self.table_state.select(Some(0));
        } else if let Some(selected) = self.table_state.selected() {
            if selected >= len {
                self.table_state.select(Some(len - 1));
            }
        }
    }
}
