//! Private and reserved address classification.
//!
//! Documentation networks (192.0.2/24, 198.51.100/24, 203.0.113/24 and
//! 2001:db8::/32) are routable-looking examples and count as public in
//! both families.

use crate::models::{Address, Range};
use lazy_static::lazy_static;

/// Private, loopback, link-local and reserved blocks, both families.
const NON_PUBLIC_BLOCKS: &[&str] = &[
    "0.0.0.0/8",       // "this" network
    "10.0.0.0/8",      // RFC1918
    "100.64.0.0/10",   // carrier-grade NAT
    "127.0.0.0/8",     // loopback
    "169.254.0.0/16",  // link-local
    "172.16.0.0/12",   // RFC1918
    "192.168.0.0/16",  // RFC1918
    "240.0.0.0/4",     // reserved, includes limited broadcast
    "::/128",          // unspecified
    "::1/128",         // loopback
    "::ffff:0:0/96",   // IPv4-mapped
    "fc00::/7",        // RFC4193 unique local
    "fe80::/10",       // link-local
];

lazy_static! {
    static ref NON_PUBLIC: Vec<Range> = NON_PUBLIC_BLOCKS
        .iter()
        .filter_map(|cidr| Range::parse(cidr).ok())
        .collect();
}

/// Block the address falls in, if any.
pub fn non_public_block(addr: &Address) -> Option<&'static Range> {
    NON_PUBLIC.iter().find(|r| r.contains(addr))
}

/// True for private, loopback, link-local and reserved addresses.
pub fn is_private(addr: &Address) -> bool {
    non_public_block(addr).is_some()
}

pub fn is_public(addr: &Address) -> bool {
    !is_private(addr)
}
