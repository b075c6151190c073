/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for taskdeck-adapter tests

use std::net::TcpListener;
use std::time::Duration;

use taskdeck_adapter::{ClientConfig, TaskClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at `base_url` with a short timeout
pub fn client_with_timeout(base_url: &str, timeout: Duration) -> TaskClient {
    TaskClient::with_config(ClientConfig {
        base_url: base_url.to_string(),
        timeout,
    })
    .expect("client init")
}

/// Address nothing is listening on
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}
