//! Match patterns: exact address, CIDR range or IPv4 wildcard.

use super::address::Address;
use super::range::Range;
use crate::error::AddrError;
use regex::Regex;

/// Dotted IPv4-shaped template where `*` stands for one numeric segment.
#[derive(Debug, Clone)]
pub struct Wildcard {
    template: String,
    re: Regex,
}

impl Wildcard {
    /// Compile a template such as `192.168.*.*` to an anchored regex.
    ///
    /// Every dot-separated token must be a literal octet or a bare `*`.
    pub fn new(template: &str) -> Result<Wildcard, AddrError> {
        let tokens: Vec<&str> = template.split('.').collect();
        if tokens.len() != 4 || !template.contains('*') {
            return Err(AddrError::invalid(template));
        }
        let mut parts = Vec::with_capacity(tokens.len());
        for token in tokens {
            if token == "*" {
                parts.push("[0-9]+".to_string());
            } else if token.parse::<u8>().is_ok() && token.bytes().all(|b| b.is_ascii_digit()) {
                parts.push(regex::escape(token));
            } else {
                log::debug!("bad wildcard token {token:?} in {template:?}");
                return Err(AddrError::invalid(template));
            }
        }
        let re = Regex::new(&format!(r"^{}$", parts.join(r"\.")))
            .map_err(|_| AddrError::invalid(template))?;
        Ok(Wildcard {
            template: template.to_string(),
            re,
        })
    }

    /// Match against address text. The text is matched as written.
    pub fn is_match(&self, ip_text: &str) -> bool {
        self.re.is_match(ip_text)
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl PartialEq for Wildcard {
    fn eq(&self, other: &Wildcard) -> bool {
        self.template == other.template
    }
}

/// Parsed entry of a pattern list.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Exact(Address),
    Cidr(Range),
    Wildcard(Wildcard),
}

impl Pattern {
    /// Classify raw pattern text. Leading and trailing whitespace is ignored.
    ///
    /// # Examples
    /// ```
    /// use ip_range_kit::models::Pattern;
    /// assert!(matches!(Pattern::parse("10.0.0.0/8"), Ok(Pattern::Cidr(_))));
    /// assert!(matches!(Pattern::parse("10.*.*.*"), Ok(Pattern::Wildcard(_))));
    /// assert!(matches!(Pattern::parse("10.0.0.1"), Ok(Pattern::Exact(_))));
    /// ```
    pub fn parse(text: &str) -> Result<Pattern, AddrError> {
        let text = text.trim();
        if text.contains('/') {
            Ok(Pattern::Cidr(Range::parse(text)?))
        } else if text.contains('*') {
            Ok(Pattern::Wildcard(Wildcard::new(text)?))
        } else {
            Ok(Pattern::Exact(Address::parse(text)?))
        }
    }

    /// Test a parsed address (and its original text, for wildcards).
    pub fn matches(&self, addr: &Address, ip_text: &str) -> bool {
        match self {
            Pattern::Exact(expected) => expected == addr,
            Pattern::Cidr(range) => range.contains(addr),
            Pattern::Wildcard(wildcard) => wildcard.is_match(ip_text),
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Pattern::Exact(addr) => write!(f, "{addr}"),
            Pattern::Cidr(range) => write!(f, "{range}"),
            Pattern::Wildcard(w) => write!(f, "{}", w.template()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_compile() {
        let w = Wildcard::new("192.168.*.*").unwrap();
        assert!(w.is_match("192.168.1.100"));
        assert!(w.is_match("192.168.0.0"));
        assert!(!w.is_match("192.169.1.1"));
        assert!(!w.is_match("192.168.1"));
        assert!(!w.is_match("x192.168.1.1"));
        assert!(!w.is_match("192.168.1.1x"));
    }

    #[test]
    fn test_wildcard_dot_is_literal() {
        let w = Wildcard::new("10.1.*.5").unwrap();
        assert!(w.is_match("10.1.200.5"));
        assert!(!w.is_match("10.1.200.55"));
        assert!(!w.is_match("10x1.2.5"));
    }

    #[test]
    fn test_wildcard_only_ascii_digits() {
        let w = Wildcard::new("192.168.*.*").unwrap();
        assert!(!w.is_match("192.168.\u{0661}\u{0662}.1"));
        assert!(!w.is_match("192.168.\u{FF11}.1"));
        assert!(w.is_match("192.168.12.1"));
    }

    #[test]
    fn test_wildcard_rejects_bad_templates() {
        assert!(Wildcard::new("192.168.1.1").is_err());
        assert!(Wildcard::new("192.168.*").is_err());
        assert!(Wildcard::new("192.168.1*.*").is_err());
        assert!(Wildcard::new("192.300.*.*").is_err());
        assert!(Wildcard::new("a.b.*.*").is_err());
        assert!(Wildcard::new("2001:db8::*").is_err());
    }

    #[test]
    fn test_pattern_parse() {
        assert_eq!(
            Pattern::parse(" 10.0.0.1 ").unwrap(),
            Pattern::Exact(Address::parse("10.0.0.1").unwrap())
        );
        assert_eq!(
            Pattern::parse("10.0.0.0/8").unwrap(),
            Pattern::Cidr(Range::parse("10.0.0.0/8").unwrap())
        );
        assert!(Pattern::parse("10.0.0.0/33").is_err());
        assert!(Pattern::parse("nonsense").is_err());
        assert_eq!(Pattern::parse("10.*.*.*").unwrap().to_string(), "10.*.*.*");
    }

    #[test]
    fn test_pattern_matches() {
        let addr = Address::parse("2001:db8::1").unwrap();
        let exact = Pattern::parse("2001:0db8:0::1").unwrap();
        assert!(exact.matches(&addr, "2001:db8::1"));
        let cidr = Pattern::parse("2001:db8::/32").unwrap();
        assert!(cidr.matches(&addr, "2001:db8::1"));
        let wild = Pattern::parse("10.*.*.*").unwrap();
        assert!(!wild.matches(&addr, "2001:db8::1"));
    }
}
