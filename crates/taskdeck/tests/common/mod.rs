/*
[INPUT]:  Mock task service and application state
[OUTPUT]: Harness wiring AppState to a wiremock-backed dispatcher
[POS]:    Test infrastructure - shared across shell tests
[UPDATE]: When AppState construction or AppEvent delivery changes
*/

#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use taskdeck::{AppEvent, AppState, Dispatcher};
use taskdeck_adapter::{ClientConfig, TaskClient};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio_util::sync::CancellationToken;

const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Harness {
    pub state: AppState,
    pub events: UnboundedReceiver<AppEvent>,
    pub shutdown: CancellationToken,
}

impl Harness {
    pub fn new(base_url: &str, enable_execute: bool) -> Self {
        let client = TaskClient::with_config(ClientConfig {
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(2),
        })
        .expect("client init");
        let (tx, events) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();
        let dispatcher = Dispatcher::new(Arc::new(client), tx, shutdown.clone());
        Self {
            state: AppState::new(dispatcher, enable_execute),
            events,
            shutdown,
        }
    }

    /// Wait for the next event and apply it, as the UI loop does
    pub async fn pump(&mut self) {
        let event = tokio::time::timeout(EVENT_TIMEOUT, self.events.recv())
            .await
            .expect("timed out waiting for app event")
            .expect("event channel closed");
        self.state.handle_event(event);
    }

    pub async fn pump_n(&mut self, count: usize) {
        for _ in 0..count {
            self.pump().await;
        }
    }

    /// Wait briefly and report whether any event arrived
    pub async fn has_pending_event(&mut self, wait: Duration) -> bool {
        matches!(
            tokio::time::timeout(wait, self.events.recv()).await,
            Ok(Some(_))
        )
    }

    pub fn fill_form(&mut self, id: &str, name: &str, owner: &str, command: &str) {
        use taskdeck::app::FormField;

        let form = self.state.form_mut();
        form.set_value(FormField::Id, id);
        form.set_value(FormField::Name, name);
        form.set_value(FormField::Owner, owner);
        form.set_value(FormField::Command, command);
    }
}

pub fn task_json(id: &str, name: &str, owner: &str, command: &str) -> serde_json::Value {
    serde_json::json!({ "id": id, "name": name, "owner": owner, "command": command })
}

pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}
