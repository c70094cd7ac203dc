//! Pull addresses out of free text.

use crate::models::Address;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Loose candidates; every hit is validated by Address::parse.
    static ref RE_CANDIDATE: Regex = Regex::new(
        r"(?i)\b(?:\d{1,3}\.){3}\d{1,3}\b|(?:[0-9a-f]{0,4}:){2,7}(?:[0-9a-f]{1,4}|(?:\d{1,3}\.){3}\d{1,3})?"
    )
    .expect("Invalid Regex?");
}

/// A match glued to more address-like text (`1.2.3.4.5`, `a1.2.3.4`) is
/// a fragment, not an address. A sentence-ending `.` or a `:port` is fine.
fn is_standalone(text: &str, start: usize, end: usize, is_v6: bool) -> bool {
    let bytes = text.as_bytes();
    let before = start.checked_sub(1).map(|i| bytes[i]);
    let after = bytes.get(end).copied();
    let joins = |b: u8, next: Option<u8>| {
        b.is_ascii_alphanumeric()
            || (is_v6 && b == b':')
            || (b == b'.' && next.is_some_and(|n| n.is_ascii_digit()))
    };
    let before_ok = before.map_or(true, |b| {
        !joins(b, start.checked_sub(2).map(|i| bytes[i]))
    });
    let after_ok = after.map_or(true, |b| !joins(b, bytes.get(end + 1).copied()));
    before_ok && after_ok
}

/// Valid addresses found in `text`, in order of appearance, without repeats.
pub fn extract_addresses(text: &str) -> Vec<String> {
    RE_CANDIDATE
        .find_iter(text)
        .filter(|m| is_standalone(text, m.start(), m.end(), m.as_str().contains(':')))
        .map(|m| m.as_str())
        .filter(|s| Address::parse(s).is_ok())
        .unique()
        .map(str::to_string)
        .collect()
}
