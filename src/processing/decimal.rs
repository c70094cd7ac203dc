//! Decimal integer form of addresses.

use crate::error::AddrError;
use crate::models::{Address, Family};

/// Base-10 unsigned integer value of an address.
pub fn address_to_decimal(addr: &Address) -> String {
    addr.to_u128().to_string()
}

/// Inverse of [`address_to_decimal`]. The value must fit the family width.
pub fn address_from_decimal(text: &str, family: Family) -> Result<Address, AddrError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddrError::invalid(text));
    }
    match family {
        Family::V4 => {
            let value: u32 = text.parse().map_err(|_| AddrError::invalid(text))?;
            Ok(Address::V4(value.to_be_bytes()))
        }
        Family::V6 => {
            let value: u128 = text.parse().map_err(|_| AddrError::invalid(text))?;
            Ok(Address::V6(value.to_be_bytes()))
        }
    }
}

/// Decimal value of address text, `""` when the text is not an address.
///
/// # Examples
/// ```
/// use ip_range_kit::processing::to_decimal;
/// assert_eq!(to_decimal("192.168.1.1"), "3232235777");
/// assert_eq!(to_decimal("::1"), "1");
/// ```
pub fn to_decimal(ip_text: &str) -> String {
    match Address::parse(ip_text) {
        Ok(addr) => address_to_decimal(&addr),
        Err(e) => {
            log::debug!("to_decimal: {e}");
            String::new()
        }
    }
}

/// Address text for a decimal value, `""` when out of range or not a number.
pub fn from_decimal(decimal_text: &str, is_ipv6: bool) -> String {
    let family = if is_ipv6 { Family::V6 } else { Family::V4 };
    match address_from_decimal(decimal_text, family) {
        Ok(addr) => addr.to_string(),
        Err(e) => {
            log::debug!("from_decimal: {e}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_v4() {
        assert_eq!(to_decimal("192.168.1.1"), "3232235777");
        assert_eq!(to_decimal("0.0.0.0"), "0");
        assert_eq!(to_decimal("255.255.255.255"), "4294967295");
    }

    #[test]
    fn test_to_decimal_v6() {
        assert_eq!(
            to_decimal("2001:db8::1"),
            "42540766411282592856903984951653826561"
        );
        assert_eq!(
            to_decimal("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"),
            "340282366920938463463374607431768211455"
        );
    }

    #[test]
    fn test_to_decimal_invalid() {
        assert_eq!(to_decimal("nope"), "");
    }

    #[test]
    fn test_from_decimal() {
        assert_eq!(from_decimal("3232235777", false), "192.168.1.1");
        assert_eq!(from_decimal("0", false), "0.0.0.0");
        assert_eq!(from_decimal("1", true), "::1");
        assert_eq!(
            from_decimal("42540766411282592856903984951653826561", true),
            "2001:db8::1"
        );
    }

    #[test]
    fn test_from_decimal_out_of_range() {
        assert_eq!(from_decimal("4294967296", false), "");
        assert_eq!(
            from_decimal("340282366920938463463374607431768211456", true),
            ""
        );
        assert_eq!(from_decimal("-1", false), "");
        assert_eq!(from_decimal("12a", false), "");
        assert_eq!(from_decimal("", true), "");
    }

    #[test]
    fn test_decimal_inverse() {
        for s in ["10.20.30.40", "8.8.8.8", "2001:db8::1234", "fe80::1:2:3", "::"] {
            let addr = Address::parse(s).unwrap();
            let back = from_decimal(&to_decimal(s), addr.is_v6());
            assert_eq!(back, addr.to_string(), "{s}");
        }
    }
}
