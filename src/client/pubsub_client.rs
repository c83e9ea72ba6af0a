//! Publish seam
//!
//! The dispatcher only ever talks to these traits, so the transport behind
//! them can be the real sidecar or an in-memory recorder.

use async_trait::async_trait;
use serde_json::Value;

use crate::utils::SenderError;

/// Operation name passed to every output binding.
pub const CREATE_OPERATION: &str = "create";

/// A handle able to invoke an output binding on the sidecar.
#[async_trait]
pub trait BindingClient: Send + Sync {
    /// Invokes `operation` on the binding named `binding` with `data` as the
    /// payload.
    async fn invoke_binding(
        &self,
        binding: &str,
        operation: &str,
        data: &Value,
    ) -> Result<(), SenderError>;
}

/// Produces a `BindingClient` scoped to one dispatch. Dropping the client
/// releases it.
#[async_trait]
pub trait Connector: Send + Sync {
    type Client: BindingClient;

    async fn connect(&self) -> Result<Self::Client, SenderError>;
}
