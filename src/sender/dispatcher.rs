use serde::Serialize;
use tracing::{debug, error};

use crate::client::pubsub_client::{BindingClient, CREATE_OPERATION, Connector};
use crate::destination::Destination;
use crate::utils::SenderError;

/// JSON object handed to every binding: `{"data": <message>}`.
#[derive(Debug, Serialize)]
pub struct Envelope<'a> {
    pub data: &'a str,
}

/// A destination whose publish failed during a dispatch.
#[derive(Debug, Clone)]
pub struct FailedSend {
    pub destination: Destination,
    pub error: String,
}

/// Outcome of one dispatch.
#[derive(Debug, Default, Clone)]
pub struct DispatchReport {
    pub sent: usize,
    pub failed: Vec<FailedSend>,
}

impl DispatchReport {
    pub fn attempted(&self) -> usize {
        self.sent + self.failed.len()
    }
}

/// Publishes a message to a fixed list of destinations.
///
/// The destination list is set at construction and never changes.
#[derive(Debug)]
pub struct Dispatcher<C> {
    connector: C,
    destinations: Vec<Destination>,
}

impl<C: Connector> Dispatcher<C> {
    pub fn new(connector: C, destinations: Vec<Destination>) -> Self {
        Self {
            connector,
            destinations,
        }
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Sends `message` once to every destination through a client acquired
    /// for this call only.
    ///
    /// A failed publish is logged and recorded in the report; the remaining
    /// destinations are still attempted. Only failing to acquire the client
    /// is returned as an error.
    pub async fn dispatch(&self, message: &str) -> Result<DispatchReport, SenderError> {
        let mut report = DispatchReport::default();
        if self.destinations.is_empty() {
            debug!("No destinations configured, nothing to send");
            return Ok(report);
        }

        let payload = serde_json::to_value(Envelope { data: message })?;
        let client = self.connector.connect().await?;

        for destination in &self.destinations {
            let binding = destination.binding_id();
            match client
                .invoke_binding(binding, CREATE_OPERATION, &payload)
                .await
            {
                Ok(()) => {
                    debug!("Sent to {} via binding '{}'", destination.name, binding);
                    report.sent += 1;
                }
                Err(e) => {
                    error!(
                        "Failed to send to {} via binding '{}': {}",
                        destination.name, binding, e
                    );
                    report.failed.push(FailedSend {
                        destination: destination.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }
}
