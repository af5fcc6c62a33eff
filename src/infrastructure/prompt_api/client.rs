//! Prompt API HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::dto::PromptResponse;
use crate::domain::entities::Prompt;
use crate::domain::errors::FetchError;
use crate::domain::ports::PromptSourcePort;

/// HTTP adapter fetching prompts with a single `GET`.
pub struct PromptApiClient {
    client: Client,
    endpoint: String,
}

impl PromptApiClient {
    /// Creates client for a custom endpoint. Without a timeout the transport
    /// default applies.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| FetchError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    fn map_transport_error(e: &reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::network("request timed out")
        } else if e.is_connect() {
            FetchError::network(format!("failed to connect: {e}"))
        } else {
            FetchError::network(e.to_string())
        }
    }
}

#[async_trait]
impl PromptSourcePort for PromptApiClient {
    async fn fetch_random(&self) -> Result<Prompt, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach prompt endpoint");
                Self::map_transport_error(&e)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Self::map_transport_error(&e))?;

        let prompt_response: PromptResponse = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "Failed to parse prompt response");
            FetchError::malformed(e.to_string())
        })?;

        debug!(title = %prompt_response.title, "Prompt response decoded");

        Ok(Prompt::new(prompt_response.title))
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
