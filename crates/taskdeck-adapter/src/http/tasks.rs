/*
[INPUT]:  Task identifiers, staging records and search terms
[OUTPUT]: Task records, command output and execution records
[POS]:    HTTP layer - task service endpoints
[UPDATE]: When adding new endpoints or changing response format
[UPDATE]: Add get/search/record endpoints served by the task API
*/

use reqwest::{Method, StatusCode};

use crate::http::error::{Operation, Result, TaskError};
use crate::http::TaskClient;
use crate::types::{Task, TaskExecution, TaskFormData};

impl TaskClient {
    /// List all tasks in service order
    ///
    /// GET /tasks
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let builder = self.request(Method::GET, &["tasks"])?;
        self.send_json(builder, Operation::List).await
    }

    /// Fetch a single task
    ///
    /// GET /tasks?id={id}
    pub async fn get_task(&self, id: &str) -> Result<Task> {
        let builder = self.request(Method::GET, &["tasks"])?.query(&[("id", id)]);
        self.send_json(builder, Operation::Get).await
    }

    /// Search tasks whose name contains `name`
    ///
    /// GET /tasks/search?name={name}
    ///
    /// The service answers 404 when nothing matches; that maps to an empty list.
    pub async fn search_tasks(&self, name: &str) -> Result<Vec<Task>> {
        let builder = self
            .request(Method::GET, &["tasks", "search"])?
            .query(&[("name", name)]);
        match self.send_json(builder, Operation::Search).await {
            Err(TaskError::Server {
                status: StatusCode::NOT_FOUND,
                ..
            }) => Ok(Vec::new()),
            other => other,
        }
    }

    /// Create or replace a task
    ///
    /// PUT /tasks
    pub async fn create_task(&self, data: &TaskFormData) -> Result<Task> {
        let builder = self.request(Method::PUT, &["tasks"])?.json(data);
        let task: Task = self.send_json(builder, Operation::Create).await?;
        tracing::debug!(task_id = %task.id, "task stored");
        Ok(task)
    }

    /// Run the task's command and return its captured output
    ///
    /// POST /tasks/{id}/execute
    pub async fn execute_task(&self, id: &str) -> Result<String> {
        let builder = self.request(Method::POST, &["tasks", id, "execute"])?;
        self.send_text(builder, Operation::Execute).await
    }

    /// Run the task's command and record the run on the task
    ///
    /// PUT /tasks/{id}/executions
    pub async fn record_execution(&self, id: &str) -> Result<TaskExecution> {
        let builder = self.request(Method::PUT, &["tasks", id, "executions"])?;
        self.send_json(builder, Operation::RecordExecution).await
    }

    /// Delete a task
    ///
    /// DELETE /tasks/{id}
    pub async fn delete_task(&self, id: &str) -> Result<()> {
        let builder = self.request(Method::DELETE, &["tasks", id])?;
        self.send(builder, Operation::Delete).await?;
        Ok(())
    }
}
