//! HTTP adapter for the script execution service.

use platform_host::{ExecutionFuture, ExecutionService, RunRequest, RunResponse, StoreError};
use reqwest::Client;

use crate::http::{endpoint, send_json};

#[derive(Debug, Clone)]
/// [`ExecutionService`] that posts source text to the interpreter's `/run` endpoint.
pub struct HttpExecutionService {
    client: Client,
    base_url: String,
}

impl HttpExecutionService {
    /// Creates an adapter rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates an adapter sharing an existing client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl ExecutionService for HttpExecutionService {
    fn run<'a>(&'a self, source_text: &'a str) -> ExecutionFuture<'a, Result<String, StoreError>> {
        Box::pin(async move {
            let body = RunRequest {
                source_text: source_text.to_string(),
            };
            let request = self
                .client
                .post(endpoint(&self.base_url, "run"))
                .json(&body);
            let response: RunResponse = send_json(request, None).await?;
            Ok(response.output_text)
        })
    }
}
