//! Pattern-list matching.

use crate::models::{Address, Pattern, Range, Wildcard};

/// Check `ip_text` against a list of exact, CIDR and wildcard patterns.
///
/// Per pattern: exact text equality, then CIDR membership, then wildcard
/// match. The first hit wins. Invalid addresses never match.
///
/// # Examples
/// ```
/// use ip_range_kit::processing::matches;
/// let list = ["192.168.1.0/24", "10.0.0.0/8", "203.0.113.5"];
/// assert!(matches("203.0.113.5", &list));
/// assert!(!matches("1.2.3.4", &list));
/// ```
pub fn matches<S: AsRef<str>>(ip_text: &str, patterns: &[S]) -> bool {
    let Ok(addr) = Address::parse(ip_text) else {
        log::debug!("matches: invalid address {ip_text:?}");
        return false;
    };
    patterns
        .iter()
        .any(|p| matches_one(&addr, ip_text, p.as_ref()))
}

fn matches_one(addr: &Address, ip_text: &str, pattern: &str) -> bool {
    let pattern = pattern.trim();
    if pattern == ip_text {
        return true;
    }
    if let Ok(range) = Range::parse(pattern) {
        if range.contains(addr) {
            return true;
        }
    }
    if pattern.contains('*') {
        return wildcard_match(ip_text, pattern);
    }
    // Same address written differently, e.g. zero-padded IPv6 groups.
    matches!(Pattern::parse(pattern), Ok(Pattern::Exact(exact)) if exact == *addr)
}

/// Match address text against an IPv4 wildcard template such as `10.*.*.1`.
pub fn wildcard_match(ip_text: &str, pattern: &str) -> bool {
    match Wildcard::new(pattern) {
        Ok(w) => w.is_match(ip_text),
        Err(e) => {
            log::debug!("wildcard_match: {e}");
            false
        }
    }
}
