use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::client::pubsub_client::Connector;
use crate::sender::dispatcher::{DispatchReport, Dispatcher};
use crate::utils::SenderError;

/// Floor for the send interval, capping the rate at roughly 29 messages per
/// second.
pub const MIN_INTERVAL_MS: u64 = 34;

/// Returns the effective interval in milliseconds: `max(34, requested_ms)`.
pub fn clamp_interval(requested_ms: i64) -> u64 {
    requested_ms.max(MIN_INTERVAL_MS as i64) as u64
}

/// Text of the `count`-th message.
pub fn sender_message(count: u64) -> String {
    format!("Hello from Sender #{}", count)
}

/// Drives the send loop: send, wait, send, wait, ...
///
/// The wait starts after the dispatch returns, so send latency adds to the
/// period.
#[derive(Debug)]
pub struct Driver<C> {
    dispatcher: Dispatcher<C>,
    interval: Duration,
    count: u64,
}

impl<C: Connector> Driver<C> {
    pub fn new(dispatcher: Dispatcher<C>, interval: Duration) -> Self {
        Self {
            dispatcher,
            interval,
            count: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of messages dispatched so far, which is also the counter of the
    /// next message.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Runs one cycle: dispatch the current message, bump the counter, sleep.
    pub async fn tick(&mut self) -> Result<DispatchReport, SenderError> {
        let message = sender_message(self.count);
        let report = self.dispatcher.dispatch(&message).await?;

        if report.failed.is_empty() {
            info!("Sent: {} ({} destination(s))", message, report.sent);
        } else {
            warn!(
                "Sent: {} ({} of {} destination(s) failed)",
                message,
                report.failed.len(),
                report.attempted()
            );
        }

        self.count += 1;
        sleep(self.interval).await;
        Ok(report)
    }

    /// Loops forever. Returns only when a cycle fails fatally.
    pub async fn run(&mut self) -> Result<(), SenderError> {
        loop {
            self.tick().await?;
        }
    }
}
