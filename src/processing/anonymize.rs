//! Anonymization and display masking.
//!
//! Both work on the last segment of the address text as written: the last
//! dotted octet for IPv4 and the last colon group for IPv6.

use crate::models::{Address, Family};

/// Placeholder used by [`mask_display`] for IPv4.
pub const V4_MASK: &str = "***";
/// Placeholder used by [`mask_display`] for IPv6.
pub const V6_MASK: &str = "****";

/// Split validated address text into (head including separator, last segment).
fn split_last_segment(text: &str, family: Family) -> (&str, &str) {
    let sep = match family {
        Family::V4 => '.',
        Family::V6 => ':',
    };
    match text.rfind(sep) {
        Some(pos) => text.split_at(pos + 1),
        None => ("", text),
    }
}

/// Zero the last segment. `::` is returned unchanged.
///
/// # Examples
/// ```
/// use ip_range_kit::processing::anonymize;
/// assert_eq!(anonymize("192.168.1.100").as_deref(), Some("192.168.1.0"));
/// assert_eq!(anonymize("2001:db8::1234").as_deref(), Some("2001:db8::0"));
/// assert_eq!(anonymize("not an ip"), None);
/// ```
pub fn anonymize(ip_text: &str) -> Option<String> {
    let addr = Address::parse(ip_text).ok()?;
    if ip_text == "::" {
        return Some(ip_text.to_string());
    }
    let (head, _) = split_last_segment(ip_text, addr.family());
    Some(format!("{head}0"))
}

/// Replace the last segment with a visual placeholder. Output is for display
/// and does not parse as an address.
pub fn mask_display(ip_text: &str) -> Option<String> {
    let addr = Address::parse(ip_text).ok()?;
    let (head, _) = split_last_segment(ip_text, addr.family());
    let mask = match addr.family() {
        Family::V4 => V4_MASK,
        Family::V6 => V6_MASK,
    };
    Some(format!("{head}{mask}"))
}

/// Heuristic check for anonymized or masked text.
///
/// True when the text holds a mask placeholder, is `::`, or is a valid
/// address whose last segment is zero. A real address ending in `.0` or
/// `:0` is reported as anonymized too.
pub fn is_anonymized(text: &str) -> bool {
    if text.contains('*') || text == "::" {
        return true;
    }
    let Ok(addr) = Address::parse(text) else {
        return false;
    };
    let (_, last) = split_last_segment(text, addr.family());
    match addr.family() {
        Family::V4 => last == "0",
        // `::ffff:1.2.3.0` ends in an embedded dotted quad.
        Family::V6 if last.contains('.') => last.rsplit('.').next() == Some("0"),
        Family::V6 => last.is_empty() || u16::from_str_radix(last, 16) == Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymize_v4() {
        assert_eq!(anonymize("192.168.1.100").unwrap(), "192.168.1.0");
        assert_eq!(anonymize("10.0.0.0").unwrap(), "10.0.0.0");
    }

    #[test]
    fn test_anonymize_v6() {
        assert_eq!(anonymize("2001:db8::1234").unwrap(), "2001:db8::0");
        assert_eq!(anonymize("::1").unwrap(), "::0");
        assert_eq!(anonymize("::").unwrap(), "::");
        assert_eq!(
            anonymize("2001:db8:0:0:0:0:0:1").unwrap(),
            "2001:db8:0:0:0:0:0:0"
        );
    }

    #[test]
    fn test_anonymize_is_idempotent() {
        for s in ["192.168.1.100", "2001:db8::1234", "::", "fe80::1:2", "8.8.8.8"] {
            let once = anonymize(s).unwrap();
            assert_eq!(anonymize(&once).unwrap(), once, "{s}");
        }
    }

    #[test]
    fn test_anonymize_invalid() {
        assert_eq!(anonymize(""), None);
        assert_eq!(anonymize("300.1.1.1"), None);
        assert_eq!(anonymize("192.168.1.*"), None);
    }

    #[test]
    fn test_mask_display() {
        assert_eq!(mask_display("192.168.1.100").unwrap(), "192.168.1.***");
        assert_eq!(mask_display("2001:db8::1234").unwrap(), "2001:db8::****");
        assert_eq!(mask_display("bogus"), None);
        assert!(Address::parse(&mask_display("10.0.0.1").unwrap()).is_err());
    }

    #[test]
    fn test_is_anonymized() {
        assert!(is_anonymized("192.168.1.0"));
        assert!(is_anonymized("192.168.1.***"));
        assert!(is_anonymized("2001:db8::****"));
        assert!(is_anonymized("2001:db8::0"));
        assert!(is_anonymized("2001:db8::"));
        assert!(is_anonymized("::"));
        assert!(!is_anonymized("192.168.1.100"));
        assert!(!is_anonymized("2001:db8::1"));
        assert!(!is_anonymized("hello.0"));
        assert!(!is_anonymized(""));
    }

    #[test]
    fn test_is_anonymized_embedded_v4_tail() {
        assert!(is_anonymized("::ffff:1.2.3.0"));
        assert!(!is_anonymized("::ffff:1.2.3.4"));
        assert!(!is_anonymized("::ffff:1.2.0.4"));
    }

    #[test]
    fn test_is_anonymized_accepts_real_network_addresses() {
        assert!(is_anonymized("10.0.0.0"));
    }
}
