/*
[INPUT]:  HTTP configuration (base URL, timeout)
[OUTPUT]: Configured reqwest client ready for task service calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::http::error::{Operation, Result, TaskError};

/// Default address of the task service
pub const DEFAULT_BASE_URL: &str = "http://localhost:30080";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP client for the task service
#[derive(Debug, Clone)]
pub struct TaskClient {
    http_client: Client,
    base_url: Url,
    timeout: Duration,
}

impl TaskClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(TaskError::InvalidBaseUrl(config.base_url));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(TaskError::Http)?;

        Ok(Self {
            http_client,
            base_url,
            timeout: config.timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build a URL by appending percent-encoded path segments to the base URL
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TaskError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.url(segments)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and return the response when its status is a success.
    pub(crate) async fn send(
        &self,
        builder: RequestBuilder,
        operation: Operation,
    ) -> Result<Response> {
        let response = builder.send().await.map_err(TaskError::from_transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!(?operation, status = %status, body = %body, "task service returned error");
        Err(TaskError::from_response_body(status, &body, operation))
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        operation: Operation,
    ) -> Result<T> {
        let response = self.send(builder, operation).await?;
        response.json().await.map_err(TaskError::from_transport)
    }

    pub(crate) async fn send_text(
        &self,
        builder: RequestBuilder,
        operation: Operation,
    ) -> Result<String> {
        let response = self.send(builder, operation).await?;
        response.text().await.map_err(TaskError::from_transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_local_service() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:30080");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn url_encodes_id_segments() {
        let client = TaskClient::new().expect("client init");
        let url = client.url(&["tasks", "a b/c", "execute"]).expect("url");
        assert_eq!(url.as_str(), "http://localhost:30080/tasks/a%20b%2Fc/execute");
    }

    #[test]
    fn url_keeps_base_path_prefix() {
        let client = TaskClient::with_config(ClientConfig {
            base_url: "http://example.test/api/".to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
        .expect("client init");
        let url = client.url(&["tasks"]).expect("url");
        assert_eq!(url.as_str(), "http://example.test/api/tasks");
    }

    #[test]
    fn rejects_unusable_base_url() {
        let err = TaskClient::with_config(ClientConfig {
            base_url: "mailto:ops@example.test".to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
        .expect_err("mailto cannot be a base");
        assert!(matches!(err, TaskError::InvalidBaseUrl(_)));

        let err = TaskClient::with_config(ClientConfig {
            base_url: "not a url".to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
        .expect_err("unparseable base url");
        assert!(matches!(err, TaskError::UrlParse(_)));
    }
}
