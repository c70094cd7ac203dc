//! Domain models for IP address handling.
//!
//! This module contains the value types used throughout the crate:
//! - [`Address`] - validated IPv4/IPv6 address as a byte buffer
//! - [`Range`] - CIDR range with prefix-mask arithmetic
//! - [`Pattern`] - exact, CIDR or wildcard match pattern

mod address;
mod pattern;
mod range;

// Re-export public types
pub use address::{Address, Family, V4_BITS, V6_BITS};
pub use pattern::{Pattern, Wildcard};
pub use range::{apply_mask, prefix_mask, AddressCount, Range};
