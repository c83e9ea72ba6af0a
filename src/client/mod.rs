//! The `client` module defines how the sender reaches the sidecar.
//!
//! `BindingClient` is the single publish primitive, `Connector` hands out a
//! client for the duration of one dispatch. The `dapr` submodule implements
//! both against the Dapr sidecar HTTP API.

pub mod dapr;
pub mod pubsub_client;

pub use dapr::{DaprConnector, DaprHttpClient};
pub use pubsub_client::{BindingClient, Connector};
