use taskdeck_adapter::{Task, TaskError};

/// Completion of a task service call, delivered back to the UI loop
#[derive(Debug)]
pub enum AppEvent {
    /// A reload finished; `generation` identifies the fetch that produced it
    TasksLoaded {
        generation: u64,
        result: Result<Vec<Task>, TaskError>,
    },

    /// A create (upsert) request finished
    TaskCreated(Result<Task, TaskError>),

    /// A delete request finished
    TaskDeleted {
        id: String,
        result: Result<(), TaskError>,
    },

    /// An execute request finished with the captured output
    TaskExecuted {
        id: String,
        result: Result<String, TaskError>,
    },
}
