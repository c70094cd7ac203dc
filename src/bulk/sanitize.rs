//! Clean up user-supplied pattern lists.

use crate::models::{Address, Range, Wildcard};
use itertools::Itertools;

/// Pattern list as it arrives from a form or config: one blob of text, or a
/// list of entries. Both are normalised to a list of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternInput {
    Text(String),
    List(Vec<String>),
}

impl PatternInput {
    fn lines(&self) -> Vec<&str> {
        match self {
            PatternInput::Text(text) => text.lines().collect(),
            PatternInput::List(items) => items.iter().flat_map(|s| s.lines()).collect(),
        }
    }
}

impl From<&str> for PatternInput {
    fn from(text: &str) -> Self {
        PatternInput::Text(text.to_string())
    }
}

impl From<String> for PatternInput {
    fn from(text: String) -> Self {
        PatternInput::Text(text)
    }
}

impl From<Vec<String>> for PatternInput {
    fn from(items: Vec<String>) -> Self {
        PatternInput::List(items)
    }
}

impl From<Vec<&str>> for PatternInput {
    fn from(items: Vec<&str>) -> Self {
        PatternInput::List(items.into_iter().map(str::to_string).collect())
    }
}

fn is_valid_entry(entry: &str) -> bool {
    Range::parse(entry).is_ok() || Address::parse(entry).is_ok() || Wildcard::new(entry).is_ok()
}

/// Trim, drop blanks and invalid entries, and deduplicate keeping the first
/// occurrence.
///
/// # Examples
/// ```
/// use ip_range_kit::bulk::sanitize_patterns;
/// let clean = sanitize_patterns("10.0.0.0/8\n  bad \n10.0.0.0/8\n1.2.3.4");
/// assert_eq!(clean, vec!["10.0.0.0/8", "1.2.3.4"]);
/// ```
pub fn sanitize_patterns<I: Into<PatternInput>>(input: I) -> Vec<String> {
    let input = input.into();
    input
        .lines()
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter(|s| {
            let ok = is_valid_entry(s);
            if !ok {
                log::debug!("dropping invalid pattern {s:?}");
            }
            ok
        })
        .unique()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_text() {
        let input = "192.168.1.0/24\r\n  10.0.0.1  \n\nnot an ip\n192.168.1.0/24\n10.*.*.*\n";
        assert_eq!(
            sanitize_patterns(input),
            vec!["192.168.1.0/24", "10.0.0.1", "10.*.*.*"]
        );
    }

    #[test]
    fn test_sanitize_list() {
        let input = vec![" ::1 ", "2001:db8::/129", "2001:db8::/32", "::1"];
        assert_eq!(sanitize_patterns(input), vec!["::1", "2001:db8::/32"]);
    }

    #[test]
    fn test_sanitize_list_with_embedded_newlines() {
        let input = PatternInput::List(vec!["1.1.1.1\n2.2.2.2".to_string()]);
        assert_eq!(sanitize_patterns(input), vec!["1.1.1.1", "2.2.2.2"]);
    }

    #[test]
    fn test_sanitize_empty() {
        assert!(sanitize_patterns("").is_empty());
        assert!(sanitize_patterns(Vec::<String>::new()).is_empty());
    }
}
