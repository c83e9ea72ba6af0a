//! The `error` module defines the error type shared by every layer of the
//! sender, from configuration loading to binding invocation.

use std::time::Duration;

use thiserror::Error;

/// Everything that can go wrong while loading settings or talking to the
/// sidecar.
#[derive(Debug, Error)]
pub enum SenderError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid sidecar endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("failed to build sidecar client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request to binding '{binding}' failed: {source}")]
    Transport {
        binding: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("binding '{binding}' responded with status {status}: {body}")]
    Binding {
        binding: String,
        status: u16,
        body: String,
    },

    #[error("sidecar was not ready after {0:?}")]
    SidecarUnavailable(Duration),

    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}
