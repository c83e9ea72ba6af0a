//! The `utils` module provides shared pieces used across the `generic-sender`
//! application: the crate-wide error type and logging initialisation.

pub mod error;
pub mod logging;

pub use error::SenderError;
