//! Convenience layers over the core address API.
//!
//! - [`array`] - filtering, mapping, grouping and statistics over lists
//! - [`sanitize`] - pattern-list clean-up
//! - [`extract`] - addresses from free text
//! - [`client`] - client address resolution from request metadata

mod array;
mod client;
mod extract;
mod sanitize;

pub use array::{anonymize_all, filter_invalid, filter_valid, group_by_range, statistics, IpStatistics};
pub use client::{resolve_client_ip, HeaderPriority, DEFAULT_HEADERS};
pub use extract::extract_addresses;
pub use sanitize::{sanitize_patterns, PatternInput};
