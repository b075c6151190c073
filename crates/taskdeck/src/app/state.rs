/// **Input**: User actions (submit, delete, execute, retry, search) and AppEvents.
/// **Output**: Authoritative task collection, fetch status and notifications.
/// **Position**: Application state owner; the only mutator of UI-visible data.
/// **Update**: Discard reload results superseded by a newer fetch.
/// **Update**: Gate execute behind configuration.
use taskdeck_adapter::Task;
use tracing::{debug, info};
use tui_input::{Input, InputRequest};

use crate::app::dispatch::Dispatcher;
use crate::app::event::AppEvent;
use crate::app::filter::filter_tasks;
use crate::app::form::TaskForm;
use crate::app::list::{TableBody, TaskListState, table_body};
use crate::notify::Notifications;

/// Where the reload cycle currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Loading,
    ErrorShown,
}

pub struct AppState {
    dispatcher: Dispatcher,
    enable_execute: bool,
    tasks: Vec<Task>,
    is_loading: bool,
    error: Option<String>,
    search: Input,
    form: TaskForm,
    list: TaskListState,
    notifications: Notifications,
    fetch_generation: u64,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher, enable_execute: bool) -> Self {
        Self {
            dispatcher,
            enable_execute,
            tasks: Vec::new(),
            is_loading: false,
            error: None,
            search: Input::default(),
            form: TaskForm::new(),
            list: TaskListState::new(),
            notifications: Notifications::new(),
            fetch_generation: 0,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> FetchPhase {
        if self.is_loading {
            FetchPhase::Loading
        } else if self.error.is_some() {
            FetchPhase::ErrorShown
        } else {
            FetchPhase::Idle
        }
    }

    pub fn execute_enabled(&self) -> bool {
        self.enable_execute
    }

    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    pub fn list(&self) -> &TaskListState {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut TaskListState {
        &mut self.list
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    pub fn search_input(&self) -> &Input {
        &self.search
    }

    pub fn search_query(&self) -> &str {
        self.search.value()
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search = Input::new(query.into());
        self.sync_selection();
    }

    pub fn edit_search(&mut self, request: InputRequest) {
        self.search.handle(request);
        self.sync_selection();
    }

    pub fn filtered_tasks(&self) -> Vec<&Task> {
        filter_tasks(&self.tasks, self.search.value())
    }

    pub fn table_body(&self) -> TableBody<'_> {
        table_body(&self.tasks, self.search.value(), self.is_loading)
    }

    /// The highlighted row; none while a reload hides the table
    pub fn selected_task(&self) -> Option<&Task> {
        if self.is_loading {
            return None;
        }
        let index = self.list.selected()?;
        self.filtered_tasks().get(index).copied()
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.filtered_tasks().len();
        self.list.move_selection(delta, len);
    }

    fn sync_selection(&mut self) {
        let len = self.filtered_tasks().len();
        self.list.clamp_selection(len);
    }

    /// Start a full reload, superseding any reload still in flight
    pub fn fetch_tasks(&mut self) {
        self.is_loading = true;
        self.error = None;
        self.fetch_generation += 1;
        debug!(generation = self.fetch_generation, "fetching tasks");
        self.dispatcher.list(self.fetch_generation);
    }

    /// Submit the staging record; blank fields block the request
    pub fn submit_form(&mut self) -> bool {
        if let Some(field) = self.form.missing_field() {
            self.form.set_focus(field);
            self.notifications
                .warning(format!("{} is required", field.label()));
            return false;
        }
        let data = self.form.data();
        info!(task_id = %data.id, "creating task");
        self.dispatcher.create(data);
        true
    }

    pub fn delete_task(&mut self, id: impl Into<String>) {
        let id = id.into();
        info!(task_id = %id, "deleting task");
        self.dispatcher.delete(id);
    }

    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selected_task().map(|task| task.id.clone()) else {
            return false;
        };
        self.delete_task(id);
        true
    }

    /// Run a task's command; refused unless execution is enabled
    pub fn execute_task(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if !self.enable_execute {
            debug!(task_id = %id, "execute requested while disabled");
            return false;
        }
        info!(task_id = %id, "executing task");
        self.list.begin_execution(id.clone());
        self.dispatcher.execute(id);
        true
    }

    pub fn execute_selected(&mut self) -> bool {
        let Some(id) = self.selected_task().map(|task| task.id.clone()) else {
            return false;
        };
        self.execute_task(id)
    }

    pub fn close_output(&mut self) {
        self.list.close_output();
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::TasksLoaded { generation, result } => {
                if generation != self.fetch_generation {
                    debug!(
                        generation,
                        latest = self.fetch_generation,
                        "discarding superseded task list"
                    );
                    return;
                }
                match result {
                    Ok(tasks) => {
                        debug!(count = tasks.len(), "tasks loaded");
                        self.tasks = tasks;
                        self.sync_selection();
                    }
                    Err(err) => {
                        let message = err.to_string();
                        self.notifications.error(message.clone());
                        self.error = Some(message);
                    }
                }
                self.is_loading = false;
            }
            AppEvent::TaskCreated(result) => match result {
                Ok(task) => {
                    info!(task_id = %task.id, "task created");
                    self.form.reset();
                    self.fetch_tasks();
                    self.notifications.success("Task created successfully");
                }
                Err(err) => {
                    self.notifications.error(err.to_string());
                }
            },
            AppEvent::TaskDeleted { id, result } => match result {
                Ok(()) => {
                    info!(task_id = %id, "task deleted");
                    self.fetch_tasks();
                    self.notifications.success("Task deleted successfully");
                }
                Err(err) => {
                    self.notifications.error(err.to_string());
                }
            },
            AppEvent::TaskExecuted { id, result } => {
                match result {
                    Ok(output) => {
                        info!(task_id = %id, "command executed");
                        self.list.show_output(output);
                        self.notifications.success("Command executed successfully");
                    }
                    Err(err) => {
                        self.notifications.error(err.to_string());
                    }
                }
                self.list.end_execution();
            }
        }
    }
}
