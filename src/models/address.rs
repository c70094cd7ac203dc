//! IP address value type.
//!
//! Provides [`Address`], a validated IPv4 or IPv6 address held as a
//! fixed-width big-endian byte buffer. Parsing is the only way to build one
//! from text, so every `Address` in circulation is valid.

use crate::error::AddrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Bit width of an IPv4 address.
pub const V4_BITS: u8 = 32;
/// Bit width of an IPv6 address.
pub const V6_BITS: u8 = 128;

/// IP version of an [`Address`] or [`crate::models::Range`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Number of bits in an address of this family.
    pub fn bits(self) -> u8 {
        match self {
            Family::V4 => V4_BITS,
            Family::V6 => V6_BITS,
        }
    }

    /// Number of bytes in an address of this family.
    pub fn byte_len(self) -> usize {
        self.bits() as usize / 8
    }
}

/// Validated IP address.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub enum Address {
    V4([u8; 4]),
    V6([u8; 16]),
}

impl Address {
    /// Parse dotted-quad IPv4 or colon-hex IPv6 text (with `::` compression).
    ///
    /// The family is detected from the syntax. Surrounding whitespace or any
    /// other garbage is rejected.
    ///
    /// # Examples
    /// ```
    /// use ip_range_kit::models::{Address, Family};
    /// let addr = Address::parse("192.168.1.1").unwrap();
    /// assert_eq!(addr.family(), Family::V4);
    /// assert!(Address::parse("192.168.1.256").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Address, AddrError> {
        if text.contains(':') {
            Self::parse_v6(text)
        } else {
            Self::parse_v4(text)
        }
    }

    /// Parse text as IPv4 only.
    pub fn parse_v4(text: &str) -> Result<Address, AddrError> {
        let addr = Ipv4Addr::from_str(text).map_err(|_| {
            log::debug!("not an IPv4 address: {text:?}");
            AddrError::invalid(text)
        })?;
        Ok(Address::V4(addr.octets()))
    }

    /// Parse text as IPv6 only.
    pub fn parse_v6(text: &str) -> Result<Address, AddrError> {
        let addr = Ipv6Addr::from_str(text).map_err(|_| {
            log::debug!("not an IPv6 address: {text:?}");
            AddrError::invalid(text)
        })?;
        Ok(Address::V6(addr.octets()))
    }

    pub fn family(&self) -> Family {
        match self {
            Address::V4(_) => Family::V4,
            Address::V6(_) => Family::V6,
        }
    }

    pub fn is_v4(&self) -> bool {
        self.family() == Family::V4
    }

    pub fn is_v6(&self) -> bool {
        self.family() == Family::V6
    }

    /// Big-endian bytes, 4 for IPv4 and 16 for IPv6.
    pub fn bytes(&self) -> &[u8] {
        match self {
            Address::V4(b) => b,
            Address::V6(b) => b,
        }
    }

    /// Build an address of `family` from a byte slice of matching length.
    pub fn from_bytes(family: Family, bytes: &[u8]) -> Result<Address, AddrError> {
        match family {
            Family::V4 => <[u8; 4]>::try_from(bytes)
                .map(Address::V4)
                .map_err(|_| AddrError::InvalidFormat(format!("{} bytes for IPv4", bytes.len()))),
            Family::V6 => <[u8; 16]>::try_from(bytes)
                .map(Address::V6)
                .map_err(|_| AddrError::InvalidFormat(format!("{} bytes for IPv6", bytes.len()))),
        }
    }

    /// Unsigned integer value of the address.
    pub fn to_u128(&self) -> u128 {
        match self {
            Address::V4(b) => u32::from_be_bytes(*b) as u128,
            Address::V6(b) => u128::from_be_bytes(*b),
        }
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => Address::V4(v4.octets()),
            IpAddr::V6(v6) => Address::V6(v6.octets()),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        match addr {
            Address::V4(b) => IpAddr::V4(Ipv4Addr::from(b)),
            Address::V6(b) => IpAddr::V6(Ipv6Addr::from(b)),
        }
    }
}

impl FromStr for Address {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", IpAddr::from(*self))
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::parse(&s).map_err(|_| de::Error::custom(format!("invalid IP address: {s}")))
    }
}
