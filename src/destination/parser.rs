use tracing::warn;

const ENTRY_SEPARATOR: char = ';';
const FIELD_SEPARATOR: char = ',';
const SCHEME_SEPARATOR: &str = "://";

/// A named target address that messages are published to.
///
/// The `address` is URI-like; its scheme prefix is the identifier of the
/// binding that handles the publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub name: String,
    pub address: String,
}

impl Destination {
    pub fn new(name: &str, address: &str) -> Self {
        Self {
            name: name.to_string(),
            address: address.to_string(),
        }
    }

    /// Returns the binding identifier: everything before the first `://`.
    /// An address without a scheme is used whole.
    pub fn binding_id(&self) -> &str {
        self.address
            .split_once(SCHEME_SEPARATOR)
            .map_or(self.address.as_str(), |(scheme, _)| scheme)
    }
}

/// Parses a `name,address;name,address;...` list into destinations,
/// preserving input order.
///
/// Empty entries are skipped. Entries without exactly two fields are
/// skipped with a warning; parsing never fails.
pub fn parse_output_pipes(raw: &str) -> Vec<Destination> {
    raw.split(ENTRY_SEPARATOR)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let fields: Vec<&str> = entry.split(FIELD_SEPARATOR).collect();
            match fields.as_slice() {
                [name, address] => Some(Destination::new(name, address)),
                _ => {
                    warn!(
                        "Skipping malformed output pipe '{}': expected 'name,address', got {} field(s)",
                        entry,
                        fields.len()
                    );
                    None
                }
            }
        })
        .collect()
}
