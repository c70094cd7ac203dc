//! Client address resolution from request metadata.
//!
//! The header priority list is plain data handed to [`resolve_client_ip`];
//! nothing here is global.

use crate::models::Address;
use crate::processing::is_private;
use std::collections::HashMap;

/// Server variables checked by default, highest priority first.
pub const DEFAULT_HEADERS: [&str; 7] = [
    "HTTP_CLIENT_IP",
    "HTTP_X_FORWARDED_FOR",
    "HTTP_X_FORWARDED",
    "HTTP_X_CLUSTER_CLIENT_IP",
    "HTTP_FORWARDED_FOR",
    "HTTP_FORWARDED",
    "REMOTE_ADDR",
];

/// Ordered, immutable list of request metadata keys to consult.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPriority {
    headers: Vec<String>,
}

impl HeaderPriority {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        HeaderPriority {
            headers: headers.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a comma-separated list, ignoring blanks.
    pub fn from_csv(list: &str) -> Self {
        HeaderPriority::new(
            list.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty()),
        )
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl Default for HeaderPriority {
    fn default() -> Self {
        HeaderPriority::new(DEFAULT_HEADERS)
    }
}

/// First public address found in `request_meta`, walking `priority` in order.
///
/// Only the first comma-separated token of each value is considered.
pub fn resolve_client_ip(
    request_meta: &HashMap<String, String>,
    priority: &HeaderPriority,
) -> Option<String> {
    for header in priority.headers() {
        let Some(value) = request_meta.get(header) else {
            continue;
        };
        let candidate = value.split(',').next().unwrap_or_default().trim();
        match Address::parse(candidate) {
            Ok(addr) if !is_private(&addr) => {
                log::debug!("client ip {candidate} from {header}");
                return Some(candidate.to_string());
            }
            Ok(_) => log::trace!("skipping private {candidate} from {header}"),
            Err(_) => log::trace!("skipping invalid {candidate:?} from {header}"),
        }
    }
    None
}
