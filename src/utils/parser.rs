//! Text extraction primitives.
//!
//! The foundational layer for pulling version strings out of text content.
//! Version discovery in both tools is built on these.

use regex::Regex;

/// Extract first match from content using regex pattern with capture group.
/// Pattern must contain exactly one capture group for the value to extract.
pub fn extract_first(content: &str, pattern: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Count literal (non-overlapping) occurrences of `needle` in `content`.
pub fn count_occurrences(content: &str, needle: &str) -> usize {
    content.matches(needle).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_first_returns_first_capture() {
        let content = "release 1.2.3\nrelease 2.0.0\n";
        let found = extract_first(content, r"release (\d+\.\d+\.\d+)");
        assert_eq!(found.as_deref(), Some("1.2.3"));
    }

    #[test]
    fn extract_first_returns_none_without_match() {
        assert_eq!(extract_first("no versions here", r"release (\S+)"), None);
    }

    #[test]
    fn extract_first_returns_none_for_invalid_pattern() {
        assert_eq!(extract_first("content", r"release ("), None);
    }

    #[test]
    fn count_occurrences_is_literal() {
        assert_eq!(count_occurrences("a.b a.b axb", "a.b"), 2);
        assert_eq!(count_occurrences("", "a"), 0);
    }
}
