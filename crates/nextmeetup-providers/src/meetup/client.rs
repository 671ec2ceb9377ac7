//! HTTP client for meetup group pages.

use reqwest::{Client, Response, StatusCode};
use tracing::{trace, warn};

use crate::error::{ProviderError, ProviderResult};
use crate::provider::{BoxFuture, EventSource};

use super::config::MeetupConfig;

/// Name reported by this source in errors and logs.
const SOURCE_NAME: &str = "meetup";

/// HTTP client that fetches one meetup group page.
pub struct MeetupClient {
    /// The underlying HTTP client.
    client: Client,
    /// Configuration.
    config: MeetupConfig,
}

impl MeetupClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: MeetupConfig) -> ProviderResult<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        if !config.use_env_proxy {
            builder = builder.no_proxy();
        }

        let client = builder.build().map_err(|e| {
            ProviderError::configuration(format!("Failed to create HTTP client: {}", e))
                .with_provider(SOURCE_NAME)
        })?;

        Ok(Self { client, config })
    }

    /// Performs the GET request and returns the page body.
    pub async fn get(&self) -> ProviderResult<String> {
        let url = self.config.url.clone();
        trace!(url = %url, "Sending request");

        let response = self.client.get(url).send().await.map_err(|e| {
            ProviderError::network(format!("Request failed: {}", e))
                .with_provider(SOURCE_NAME)
                .with_source(e)
        })?;

        self.handle_response(response).await
    }

    /// Handles the HTTP response and extracts the body.
    async fn handle_response(&self, response: Response) -> ProviderResult<String> {
        let status = response.status();
        trace!(status = %status, "Received response");

        let result = match status {
            StatusCode::OK => response.text().await.map_err(|e| {
                ProviderError::network(format!("Failed to read response: {}", e)).with_source(e)
            }),
            StatusCode::NOT_FOUND => Err(ProviderError::not_found(format!(
                "Group page not found: {}",
                self.config.url_str()
            ))),
            s if s.is_server_error() => Err(ProviderError::server(format!("Server error ({})", s))),
            s => {
                warn!(status = %s, "Unexpected response status");
                Err(ProviderError::invalid_response(format!(
                    "Unexpected status {}",
                    s
                )))
            }
        };

        result.map_err(|e| e.with_provider(SOURCE_NAME))
    }

    /// Returns the configuration.
    pub fn config(&self) -> &MeetupConfig {
        &self.config
    }
}

impl EventSource for MeetupClient {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn page_url(&self) -> &str {
        self.config.url_str()
    }

    fn fetch_page(&self) -> BoxFuture<'_, ProviderResult<String>> {
        Box::pin(self.get())
    }
}
