//! Integration tests for ip-range-kit
//!
//! These tests exercise the public text API end to end.

use ip_range_kit::bulk::{resolve_client_ip, sanitize_patterns, statistics, HeaderPriority};
use ip_range_kit::models::{Address, AddressCount};
use ip_range_kit::{
    anonymize, broadcast_address, from_decimal, is_in_range, is_valid_range, matches,
    network_address, parse, to_decimal, usable_address_count,
};
use std::collections::HashMap;

const V4_SAMPLES: [&str; 6] = [
    "0.0.0.0",
    "1.2.3.4",
    "10.20.30.40",
    "192.168.1.100",
    "203.0.113.5",
    "255.255.255.255",
];

const V6_SAMPLES: [&str; 5] = [
    "::",
    "::1",
    "2001:db8::1234",
    "fe80::1:2:3:4",
    "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
];

#[test]
fn test_v4_parse_renders_canonical_text() {
    for s in V4_SAMPLES {
        assert_eq!(parse(s).unwrap().to_string(), s);
    }
}

#[test]
fn test_family_mismatch_never_in_range() {
    for v4 in V4_SAMPLES {
        assert!(!is_in_range(v4, "::/0"), "{v4} in ::/0");
    }
    for v6 in V6_SAMPLES {
        assert!(!is_in_range(v6, "0.0.0.0/0"), "{v6} in 0.0.0.0/0");
    }
}

#[test]
fn test_network_address_is_idempotent() {
    for cidr in ["192.168.1.100/24", "10.9.8.7/13", "2001:db8:abcd::1/40", "1.2.3.4/0"] {
        let prefix = cidr.split_once('/').unwrap().1;
        let network = network_address(cidr);
        assert_eq!(network_address(&format!("{network}/{prefix}")), network);
    }
}

#[test]
fn test_anonymize_scenarios_and_idempotence() {
    assert_eq!(anonymize("192.168.1.100").as_deref(), Some("192.168.1.0"));
    assert_eq!(anonymize("2001:db8::1234").as_deref(), Some("2001:db8::0"));
    assert_eq!(anonymize("::").as_deref(), Some("::"));
    for s in V4_SAMPLES.iter().chain(V6_SAMPLES.iter()) {
        let once = anonymize(s).unwrap();
        assert_eq!(anonymize(&once).unwrap(), once);
    }
}

#[test]
fn test_decimal_round_trip() {
    for s in V4_SAMPLES.iter().chain(V6_SAMPLES.iter()) {
        let addr = parse(s).unwrap();
        assert_eq!(from_decimal(&to_decimal(s), addr.is_v6()), addr.to_string());
    }
    assert_eq!(to_decimal("192.168.1.1"), "3232235777");
    assert_eq!(from_decimal("3232235777", false), "192.168.1.1");
}

#[test]
fn test_range_scenarios() {
    assert!(is_in_range("192.168.1.100", "192.168.1.0/24"));
    assert!(!is_in_range("192.168.2.1", "192.168.1.0/24"));
    assert_eq!(network_address("192.168.1.100/24"), "192.168.1.0");
    assert_eq!(broadcast_address("192.168.1.0/24"), "192.168.1.255");
    assert_eq!(usable_address_count("192.168.1.0/24"), AddressCount::Count(254));
    assert!(!is_valid_range("192.168.1.0/33"));
    assert!(!is_valid_range("2001:db8::/129"));
}

#[test]
fn test_match_scenarios() {
    let list = ["192.168.1.0/24", "10.0.0.0/8", "203.0.113.5"];
    assert!(matches("203.0.113.5", &list));
    assert!(!matches("1.2.3.4", &list));
}

#[test]
fn test_sanitized_patterns_feed_matching() {
    let raw = "10.0.0.0/8\n\n  not-valid\n192.168.*.*\n10.0.0.0/8\n";
    let patterns = sanitize_patterns(raw);
    assert_eq!(patterns, vec!["10.0.0.0/8", "192.168.*.*"]);
    assert!(matches("192.168.44.3", &patterns));
    assert!(!matches("172.16.0.1", &patterns));
}

#[test]
fn test_client_ip_and_statistics() {
    let mut meta = HashMap::new();
    meta.insert("HTTP_X_FORWARDED_FOR".to_string(), "10.0.0.9".to_string());
    meta.insert("REMOTE_ADDR".to_string(), "198.51.100.20".to_string());
    let ip = resolve_client_ip(&meta, &HeaderPriority::default()).unwrap();
    assert_eq!(ip, "198.51.100.20");

    let stats = statistics(&[ip.as_str(), "10.0.0.9", "x"]);
    assert_eq!((stats.valid, stats.public, stats.private), (2, 1, 1));
    assert!(Address::parse(&ip).unwrap().is_v4());
}
