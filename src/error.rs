//! Error type shared by the typed address, range and pattern APIs.
//!
//! The flat text API in [`crate`] never surfaces these; it folds every
//! error into `false`, `None`, `""` or `0`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddrError {
    /// Text that is not an address, range or pattern.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Prefix length larger than the bit width of the address family.
    #[error("prefix /{prefix} is too long, max is /{max}")]
    PrefixTooLong { prefix: u32, max: u8 },

    /// Address and range belong to different IP versions.
    #[error("address family does not match range family")]
    FamilyMismatch,

    /// Operation not defined for the address family (e.g. IPv6 broadcast).
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

impl AddrError {
    pub fn invalid(text: &str) -> Self {
        AddrError::InvalidFormat(text.to_string())
    }
}
