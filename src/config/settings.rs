use serde::Deserialize;

/// Top-level configuration settings for the sender.
///
/// Holds the raw destination list, the requested send interval, the sidecar
/// connection parameters and the log level.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Raw `OUTPUT_PIPES` value, `None` when it was not provided.
    pub output_pipes: Option<String>,
    /// Requested interval between sends in milliseconds, before clamping.
    pub interval_ms: i64,
    pub sidecar: SidecarSettings,
    pub log_level: String,
}

/// Configuration settings for the sidecar HTTP API.
#[derive(Debug, Deserialize, Clone)]
pub struct SidecarSettings {
    /// Base URL of the sidecar, without a trailing slash.
    pub endpoint: String,
    pub api_token: Option<String>,
    pub health_timeout_secs: u64,
    pub http_timeout_secs: u64,
}

/// Partial configuration settings loaded from files or environment.
///
/// Field names are the lower-cased environment variable names, so
/// `OUTPUT_PIPES` lands in `output_pipes`. Missing values are filled from
/// `Settings::default()`.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub output_pipes: Option<String>,
    pub interval: Option<i64>,
    pub dapr_http_endpoint: Option<String>,
    pub dapr_runtime_host: Option<String>,
    pub dapr_http_port: Option<u16>,
    pub dapr_api_token: Option<String>,
    pub dapr_health_timeout: Option<u64>,
    pub dapr_http_timeout: Option<u64>,
    pub log_level: Option<String>,
}

pub const DEFAULT_SIDECAR_HOST: &str = "127.0.0.1";
pub const DEFAULT_SIDECAR_PORT: u16 = 3500;

/// Provides default values for `Settings`.
impl Default for Settings {
    fn default() -> Self {
        Self {
            output_pipes: None,
            interval_ms: 1000,
            sidecar: SidecarSettings {
                endpoint: format!("http://{}:{}", DEFAULT_SIDECAR_HOST, DEFAULT_SIDECAR_PORT),
                api_token: None,
                health_timeout_secs: 60,
                http_timeout_secs: 60,
            },
            log_level: "info".to_string(),
        }
    }
}
