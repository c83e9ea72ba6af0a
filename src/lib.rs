//! # Generic Sender
//!
//! `generic-sender` periodically publishes a counter-stamped text message to
//! one or more queues through the output bindings of a Dapr sidecar.
//!
//! ## Core Modules
//!
//! - `config`: Loads settings from an optional file and the environment.
//! - `destination`: Parses the `OUTPUT_PIPES` destination list.
//! - `client`: The publish seam and its Dapr HTTP implementation.
//! - `sender`: The dispatcher and the rate-bounded driver loop.
//! - `utils`: Error type and logging setup.

pub mod client;
pub mod config;
pub mod destination;
pub mod sender;
pub mod utils;
