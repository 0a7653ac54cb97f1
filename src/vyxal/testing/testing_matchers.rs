//! Text matching for leaf and name assertions

use regex::Regex;

/// How an asserted string is compared with the actual one
#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    /// Whole-string regular expression, e.g. `[0-9]+`
    Pattern(String),
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix.as_str()),
            TextMatch::Pattern(pattern) => Regex::new(&format!("^(?:{})$", pattern))
                .unwrap_or_else(|e| panic!("invalid pattern '{}': {}", pattern, e))
                .is_match(actual),
        }
    }

    fn describe(&self) -> String {
        match self {
            TextMatch::Exact(expected) => format!("to be '{}'", expected),
            TextMatch::StartsWith(prefix) => format!("to start with '{}'", prefix),
            TextMatch::Pattern(pattern) => format!("to match /{}/", pattern),
        }
    }

    /// Panic with `context` unless `actual` matches
    pub fn assert(&self, actual: &str, context: &str) {
        assert!(
            self.matches(actual),
            "{}: Expected text {}, but got '{}'",
            context,
            self.describe(),
            actual
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_is_anchored() {
        assert!(TextMatch::Pattern("[0-9]+".to_string()).matches("123"));
        assert!(!TextMatch::Pattern("[0-9]+".to_string()).matches("12a"));
    }

    #[test]
    #[should_panic(expected = "program[0]: Expected text to be 'a', but got 'b'")]
    fn test_assert_reports_context() {
        TextMatch::Exact("a".to_string()).assert("b", "program[0]");
    }
}
