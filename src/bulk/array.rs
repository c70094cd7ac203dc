//! Per-element helpers over lists of address text.

use crate::models::{Address, Range};
use crate::processing::{anonymize, is_private};
use serde::Serialize;
use std::collections::BTreeMap;

/// Entries that parse as addresses, in input order.
pub fn filter_valid<S: AsRef<str>>(ips: &[S]) -> Vec<String> {
    ips.iter()
        .filter(|s| Address::parse(s.as_ref()).is_ok())
        .map(|s| s.as_ref().to_string())
        .collect()
}

/// Entries that do not parse as addresses, in input order.
pub fn filter_invalid<S: AsRef<str>>(ips: &[S]) -> Vec<String> {
    ips.iter()
        .filter(|s| Address::parse(s.as_ref()).is_err())
        .map(|s| s.as_ref().to_string())
        .collect()
}

/// Anonymize every valid entry. Invalid entries are dropped.
pub fn anonymize_all<S: AsRef<str>>(ips: &[S]) -> Vec<String> {
    ips.iter().filter_map(|s| anonymize(s.as_ref())).collect()
}

/// Group addresses by the first range that contains them.
///
/// Keys are the range text as given. Addresses outside every range, or
/// invalid, go under `None`.
pub fn group_by_range<S: AsRef<str>, R: AsRef<str>>(
    ips: &[S],
    ranges: &[R],
) -> BTreeMap<Option<String>, Vec<String>> {
    let parsed: Vec<(&str, Range)> = ranges
        .iter()
        .filter_map(|r| {
            let text: &str = r.as_ref();
            Range::parse(text).ok().map(|p| (text, p))
        })
        .collect();
    let mut groups: BTreeMap<Option<String>, Vec<String>> = BTreeMap::new();
    for ip in ips {
        let ip: &str = ip.as_ref();
        let key = Address::parse(ip).ok().and_then(|addr| {
            parsed
                .iter()
                .find(|(_, range)| range.contains(&addr))
                .map(|(text, _)| text.to_string())
        });
        groups.entry(key).or_default().push(ip.to_string());
    }
    groups
}

/// Counts over a list of address text.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct IpStatistics {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub ipv4: usize,
    pub ipv6: usize,
    pub private: usize,
    pub public: usize,
}

pub fn statistics<S: AsRef<str>>(ips: &[S]) -> IpStatistics {
    let mut stats = IpStatistics {
        total: ips.len(),
        ..Default::default()
    };
    for ip in ips {
        let Ok(addr) = Address::parse(ip.as_ref()) else {
            stats.invalid += 1;
            continue;
        };
        stats.valid += 1;
        if addr.is_v4() {
            stats.ipv4 += 1;
        } else {
            stats.ipv6 += 1;
        }
        if is_private(&addr) {
            stats.private += 1;
        } else {
            stats.public += 1;
        }
    }
    stats
}
