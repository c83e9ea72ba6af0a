//! The `destination` module describes where messages go.
//!
//! A destination is a named address such as `orders,kafka://orders`. The
//! scheme of the address selects the sidecar output binding that carries the
//! message.

pub mod parser;

use tracing::info;

pub use parser::{Destination, parse_output_pipes};

/// Builds the destination list from the raw `OUTPUT_PIPES` value.
///
/// A missing or empty value is not an error: it yields no destinations and
/// the sender keeps running with nothing to publish to.
pub fn load_destinations(output_pipes: Option<&str>) -> Vec<Destination> {
    match output_pipes.filter(|raw| !raw.is_empty()) {
        Some(raw) => parse_output_pipes(raw),
        None => {
            info!("No OUTPUT_PIPES provided");
            Vec::new()
        }
    }
}
