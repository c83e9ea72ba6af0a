use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::Serialize;
use serde_json::Value;
use tokio::time::{Instant, sleep};
use tracing::{debug, info};

use crate::client::pubsub_client::{BindingClient, Connector};
use crate::config::SidecarSettings;
use crate::utils::SenderError;

const API_TOKEN_HEADER: &str = "dapr-api-token";
const HEALTH_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Body of `POST /v1.0/bindings/{name}`.
#[derive(Debug, Serialize)]
pub struct BindingRequest<'a> {
    pub data: &'a Value,
    pub operation: &'a str,
}

/// Client for the Dapr sidecar HTTP API.
#[derive(Debug, Clone)]
pub struct DaprHttpClient {
    http: reqwest::Client,
    base: Url,
    api_token: Option<String>,
}

impl DaprHttpClient {
    pub fn new(settings: &SidecarSettings) -> Result<Self, SenderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.http_timeout_secs))
            .build()
            .map_err(SenderError::ClientBuild)?;
        let base = parse_endpoint(&settings.endpoint)?;
        Ok(Self {
            http,
            base,
            api_token: settings.api_token.clone(),
        })
    }

    /// URL of the binding endpoint. The binding id is a single
    /// percent-encoded path segment, so `#`, `?` and `/` stay part of the
    /// name.
    pub fn binding_url(&self, binding: &str) -> Url {
        self.api_url(&["v1.0", "bindings", binding])
    }

    pub fn health_url(&self) -> Url {
        self.api_url(&["v1.0", "healthz", "outbound"])
    }

    fn api_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // parse_endpoint rejects cannot-be-a-base URLs
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Returns true when the sidecar answers its outbound health probe with
    /// a success status.
    pub async fn is_ready(&self) -> bool {
        let request = self.authorize(self.http.get(self.health_url()));
        match request.send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Sidecar health probe failed: {}", e);
                false
            }
        }
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => request.header(API_TOKEN_HEADER, token),
            None => request,
        }
    }
}

#[async_trait]
impl BindingClient for DaprHttpClient {
    async fn invoke_binding(
        &self,
        binding: &str,
        operation: &str,
        data: &Value,
    ) -> Result<(), SenderError> {
        let body = BindingRequest { data, operation };
        let response = self
            .authorize(self.http.post(self.binding_url(binding)))
            .json(&body)
            .send()
            .await
            .map_err(|source| SenderError::Transport {
                binding: binding.to_string(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(SenderError::Binding {
            binding: binding.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, SenderError> {
    let invalid = |reason: String| SenderError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };
    let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("not a base URL".to_string()));
    }
    Ok(url)
}

/// Opens a fresh `DaprHttpClient` for every dispatch.
#[derive(Debug, Clone)]
pub struct DaprConnector {
    settings: SidecarSettings,
}

impl DaprConnector {
    pub fn new(settings: SidecarSettings) -> Self {
        Self { settings }
    }

    /// Polls the sidecar health endpoint until it reports ready or the
    /// configured health timeout elapses.
    pub async fn wait_until_ready(&self) -> Result<(), SenderError> {
        let client = DaprHttpClient::new(&self.settings)?;
        let timeout = Duration::from_secs(self.settings.health_timeout_secs);
        let started = Instant::now();

        loop {
            if client.is_ready().await {
                info!("Sidecar at {} is ready", self.settings.endpoint);
                return Ok(());
            }
            if started.elapsed() >= timeout {
                return Err(SenderError::SidecarUnavailable(timeout));
            }
            sleep(HEALTH_POLL_INTERVAL).await;
        }
    }
}

#[async_trait]
impl Connector for DaprConnector {
    type Client = DaprHttpClient;

    async fn connect(&self) -> Result<Self::Client, SenderError> {
        DaprHttpClient::new(&self.settings)
    }
}
