//! CIDR range and prefix-mask arithmetic.
//!
//! Provides [`Range`], a network address paired with a prefix length, and the
//! byte-wise mask helpers used for membership, network and broadcast
//! calculations over 4- and 16-byte buffers.

use super::address::{Address, Family};
use crate::error::AddrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Build a prefix mask of `byte_len` bytes with the leading `prefix` bits set.
///
/// # Examples
/// ```
/// use ip_range_kit::models::prefix_mask;
/// assert_eq!(prefix_mask(4, 20), vec![0xFF, 0xFF, 0xF0, 0x00]);
/// ```
pub fn prefix_mask(byte_len: usize, prefix: u8) -> Vec<u8> {
    let full = (prefix / 8) as usize;
    let rem = prefix % 8;
    (0..byte_len)
        .map(|i| {
            if i < full {
                0xFF
            } else if i == full && rem > 0 {
                0xFFu8 << (8 - rem)
            } else {
                0x00
            }
        })
        .collect()
}

/// AND `bytes` with `mask`, byte by byte.
pub fn apply_mask(bytes: &[u8], mask: &[u8]) -> Vec<u8> {
    bytes.iter().zip(mask).map(|(b, m)| b & m).collect()
}

/// Number of addresses in a range, or `Unbounded` when it is too large to be
/// worth reporting.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum AddressCount {
    Count(u128),
    Unbounded,
}

impl AddressCount {
    /// Count as u128, `u128::MAX` for unbounded.
    pub fn saturating(self) -> u128 {
        match self {
            AddressCount::Count(n) => n,
            AddressCount::Unbounded => u128::MAX,
        }
    }
}

impl std::fmt::Display for AddressCount {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AddressCount::Count(n) => write!(f, "{n}"),
            AddressCount::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// CIDR range. The network address is kept as given, host bits included;
/// every calculation masks it again.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Range {
    addr: Address,
    prefix: u8,
}

impl Range {
    /// Build a range, checking the prefix against the address family.
    pub fn new(addr: Address, prefix: u8) -> Result<Range, AddrError> {
        let max = addr.family().bits();
        if prefix > max {
            return Err(AddrError::PrefixTooLong {
                prefix: prefix as u32,
                max,
            });
        }
        Ok(Range { addr, prefix })
    }

    /// Parse `address/prefix` text.
    ///
    /// # Examples
    /// ```
    /// use ip_range_kit::models::Range;
    /// assert!(Range::parse("10.0.0.0/8").is_ok());
    /// assert!(Range::parse("10.0.0.0/33").is_err());
    /// assert!(Range::parse("10.0.0.0").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Range, AddrError> {
        let (addr_part, prefix_part) = text
            .split_once('/')
            .ok_or_else(|| AddrError::invalid(text))?;
        let addr = Address::parse(addr_part)?;
        if prefix_part.is_empty() || !prefix_part.bytes().all(|b| b.is_ascii_digit()) {
            log::debug!("bad prefix in range {text:?}");
            return Err(AddrError::invalid(text));
        }
        let prefix: u32 = prefix_part
            .parse()
            .map_err(|_| AddrError::invalid(text))?;
        let max = addr.family().bits();
        if prefix > max as u32 {
            log::debug!("prefix /{prefix} exceeds /{max} in {text:?}");
            return Err(AddrError::PrefixTooLong { prefix, max });
        }
        Ok(Range {
            addr,
            prefix: prefix as u8,
        })
    }

    /// Network address as written, host bits included.
    pub fn addr(&self) -> Address {
        self.addr
    }

    /// Prefix length, never more than the family bit width.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn family(&self) -> Family {
        self.addr.family()
    }

    /// Prefix mask bytes for this range.
    pub fn mask(&self) -> Vec<u8> {
        prefix_mask(self.family().byte_len(), self.prefix)
    }

    /// Check whether `ip` falls inside the range.
    ///
    /// Addresses of the other family never match.
    pub fn contains(&self, ip: &Address) -> bool {
        if ip.family() != self.family() {
            return false;
        }
        let mask = self.mask();
        let lhs = apply_mask(ip.bytes(), &mask);
        let rhs = apply_mask(self.addr.bytes(), &mask);
        log::trace!("contains({ip}) {lhs:02x?} == {rhs:02x?} for {self}");
        lhs == rhs
    }

    /// Same as [`Range::contains`] but reports a family mismatch as an error.
    pub fn check_contains(&self, ip: &Address) -> Result<bool, AddrError> {
        if ip.family() != self.family() {
            return Err(AddrError::FamilyMismatch);
        }
        Ok(self.contains(ip))
    }

    /// Lowest (network) address of the range.
    pub fn network(&self) -> Address {
        let bytes = apply_mask(self.addr.bytes(), &self.mask());
        match self.addr {
            Address::V4(_) => Address::V4([bytes[0], bytes[1], bytes[2], bytes[3]]),
            Address::V6(_) => {
                let mut out = [0u8; 16];
                out.copy_from_slice(&bytes);
                Address::V6(out)
            }
        }
    }

    /// Highest address of an IPv4 range. IPv6 has no broadcast.
    pub fn broadcast(&self) -> Result<Address, AddrError> {
        match self.addr {
            Address::V4(b) => {
                let mask = self.mask();
                let mut out = [0u8; 4];
                for i in 0..4 {
                    out[i] = (b[i] & mask[i]) | !mask[i];
                }
                Ok(Address::V4(out))
            }
            Address::V6(_) => Err(AddrError::UnsupportedOperation("broadcast for IPv6")),
        }
    }

    /// Usable host addresses.
    ///
    /// IPv4 subtracts network and broadcast, floored at 0, so /31 and /32
    /// report 0. IPv6 reports the full block size for prefixes of 64 and
    /// longer and `Unbounded` otherwise.
    pub fn usable_count(&self) -> AddressCount {
        match self.family() {
            Family::V4 => {
                let size = 1u64 << (32 - self.prefix as u32);
                AddressCount::Count(size.saturating_sub(2) as u128)
            }
            Family::V6 => {
                if self.prefix >= 64 {
                    AddressCount::Count(1u128 << (128 - self.prefix as u32))
                } else {
                    AddressCount::Unbounded
                }
            }
        }
    }
}

impl FromStr for Range {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Range::parse(s)
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Range {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Range {
    fn deserialize<D>(deserializer: D) -> Result<Range, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Range::parse(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}
