/*
[INPUT]:  Task client, UI event sender, shutdown token
[OUTPUT]: Spawned task service calls reporting back as AppEvents
[POS]:    Application layer - bridge between UI state and the HTTP client
[UPDATE]: When adding client operations reachable from the UI
*/

use std::future::Future;
use std::sync::Arc;

use taskdeck_adapter::{TaskClient, TaskFormData};
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::app::event::AppEvent;

/// Runs client calls off the UI loop.
///
/// Each call is a spawned task that sends exactly one `AppEvent` on
/// completion, unless the shutdown token fires first.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: Arc<TaskClient>,
    events: UnboundedSender<AppEvent>,
    shutdown: CancellationToken,
}

impl Dispatcher {
    pub fn new(
        client: Arc<TaskClient>,
        events: UnboundedSender<AppEvent>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            client,
            events,
            shutdown,
        }
    }

    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    pub fn list(&self, generation: u64) {
        let client = self.client.clone();
        self.spawn("list", async move {
            let result = client.list_tasks().await;
            AppEvent::TasksLoaded { generation, result }
        });
    }

    pub fn create(&self, data: TaskFormData) {
        let client = self.client.clone();
        self.spawn("create", async move {
            AppEvent::TaskCreated(client.create_task(&data).await)
        });
    }

    pub fn delete(&self, id: String) {
        let client = self.client.clone();
        self.spawn("delete", async move {
            let result = client.delete_task(&id).await;
            AppEvent::TaskDeleted { id, result }
        });
    }

    pub fn execute(&self, id: String) {
        let client = self.client.clone();
        self.spawn("execute", async move {
            let result = client.execute_task(&id).await;
            AppEvent::TaskExecuted { id, result }
        });
    }

    fn spawn<F>(&self, operation: &'static str, call: F)
    where
        F: Future<Output = AppEvent> + Send + 'static,
    {
        if self.shutdown.is_cancelled() {
            debug!(operation, "shutdown in progress; request not sent");
            return;
        }

        let events = self.events.clone();
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    debug!(operation, "request abandoned on shutdown");
                }
                event = call => {
                    if events.send(event).is_err() {
                        debug!(operation, "event receiver dropped");
                    }
                }
            }
        });
    }
}
