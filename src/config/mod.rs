//! The `config` module loads the sender's settings from an optional
//! `config/default` file and the process environment.

mod settings;

use crate::config::settings::PartialSettings;
use config::{Config, ConfigError, Environment, File};

pub use settings::{DEFAULT_SIDECAR_HOST, DEFAULT_SIDECAR_PORT, SidecarSettings, Settings};

/// Loads the configuration from the default file and environment variables
/// Merges the configuration with default values
/// Returns a `Settings` struct describing destinations, pacing and the sidecar
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default());

    let config = builder.build()?;
    let partial: PartialSettings = config.try_deserialize()?;
    Ok(merge(partial, Settings::default()))
}

fn merge(partial: PartialSettings, default: Settings) -> Settings {
    let endpoint = match partial.dapr_http_endpoint.filter(|e| !e.is_empty()) {
        Some(endpoint) => endpoint,
        None => format!(
            "http://{}:{}",
            partial
                .dapr_runtime_host
                .unwrap_or_else(|| DEFAULT_SIDECAR_HOST.to_string()),
            partial.dapr_http_port.unwrap_or(DEFAULT_SIDECAR_PORT)
        ),
    };

    Settings {
        output_pipes: partial.output_pipes.or(default.output_pipes),
        interval_ms: partial.interval.unwrap_or(default.interval_ms),
        sidecar: SidecarSettings {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_token: partial
                .dapr_api_token
                .filter(|t| !t.is_empty())
                .or(default.sidecar.api_token),
            health_timeout_secs: partial
                .dapr_health_timeout
                .unwrap_or(default.sidecar.health_timeout_secs),
            http_timeout_secs: partial
                .dapr_http_timeout
                .unwrap_or(default.sidecar.http_timeout_secs),
        },
        log_level: partial.log_level.unwrap_or(default.log_level),
    }
}
