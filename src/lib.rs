//! Parse, validate, classify, transform and match IPv4/IPv6 addresses.
//!
//! The functions at the crate root take and return text. They never fail
//! loudly: an unusable input yields `false`, `None`, `""` or `0`. The typed
//! building blocks live in [`models`] and [`processing`].

pub mod bulk;
pub mod cmd;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use models::{Address, AddressCount, Range};

pub use error::AddrError;
pub use processing::{
    anonymize, from_decimal, is_anonymized, mask_display, matches, to_decimal, wildcard_match,
};

/// Parse address text.
pub fn parse(text: &str) -> Result<Address, AddrError> {
    Address::parse(text)
}

pub fn is_valid(text: &str) -> bool {
    Address::parse(text).is_ok()
}

pub fn is_valid_ipv4(text: &str) -> bool {
    Address::parse_v4(text).is_ok()
}

pub fn is_valid_ipv6(text: &str) -> bool {
    Address::parse_v6(text).is_ok()
}

/// True for private, loopback, link-local or reserved addresses.
/// Invalid text is neither private nor public.
pub fn is_private(text: &str) -> bool {
    Address::parse(text).is_ok_and(|a| processing::is_private(&a))
}

pub fn is_public(text: &str) -> bool {
    Address::parse(text).is_ok_and(|a| processing::is_public(&a))
}

pub fn is_valid_range(text: &str) -> bool {
    Range::parse(text).is_ok()
}

/// Check whether `ip_text` is inside `range_text`.
///
/// # Examples
/// ```
/// use ip_range_kit::is_in_range;
/// assert!(is_in_range("192.168.1.100", "192.168.1.0/24"));
/// assert!(!is_in_range("192.168.2.1", "192.168.1.0/24"));
/// assert!(!is_in_range("::1", "0.0.0.0/0"));
/// ```
pub fn is_in_range(ip_text: &str, range_text: &str) -> bool {
    match (Address::parse(ip_text), Range::parse(range_text)) {
        (Ok(addr), Ok(range)) => range.contains(&addr),
        _ => false,
    }
}

/// Network address of a CIDR, `""` on failure.
pub fn network_address(cidr_text: &str) -> String {
    match Range::parse(cidr_text) {
        Ok(range) => range.network().to_string(),
        Err(e) => {
            log::debug!("network_address({cidr_text:?}): {e}");
            String::new()
        }
    }
}

/// Broadcast address of an IPv4 CIDR, `""` for IPv6 or on failure.
pub fn broadcast_address(cidr_text: &str) -> String {
    match Range::parse(cidr_text).and_then(|r| r.broadcast()) {
        Ok(addr) => addr.to_string(),
        Err(e) => {
            log::debug!("broadcast_address({cidr_text:?}): {e}");
            String::new()
        }
    }
}

/// Usable host count of a CIDR, `Count(0)` on failure.
///
/// # Examples
/// ```
/// use ip_range_kit::{usable_address_count, models::AddressCount};
/// assert_eq!(usable_address_count("192.168.1.0/24"), AddressCount::Count(254));
/// assert_eq!(usable_address_count("2001:db8::/48"), AddressCount::Unbounded);
/// ```
pub fn usable_address_count(cidr_text: &str) -> AddressCount {
    match Range::parse(cidr_text) {
        Ok(range) => range.usable_count(),
        Err(e) => {
            log::debug!("usable_address_count({cidr_text:?}): {e}");
            AddressCount::Count(0)
        }
    }
}
