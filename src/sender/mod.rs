//! The `sender` module produces and publishes messages.
//!
//! The `Dispatcher` fans one message out to every destination. The `Driver`
//! owns the counter and paces the dispatches.

pub mod dispatcher;
pub mod driver;

pub use dispatcher::{DispatchReport, Dispatcher, Envelope, FailedSend};
pub use driver::{Driver, MIN_INTERVAL_MS, clamp_interval, sender_message};
