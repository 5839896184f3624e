//! Pattern matching against code columns.
//!
//! Patterns are regular expressions with search semantics: `"EU27"` matches
//! anywhere in a value, `"^EU27"` only at its start. A pattern that does not
//! compile is matched as a literal substring instead of failing.

use log::warn;
use regex::Regex;

#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    matcher: Matcher,
}

#[derive(Debug, Clone)]
enum Matcher {
    Regex(Regex),
    Literal,
}

impl Pattern {
    pub fn new(source: &str) -> Self {
        let matcher = match Regex::new(source) {
            Ok(re) => Matcher::Regex(re),
            Err(e) => {
                warn!("pattern {source:?} is not a valid regex ({e}); matching it literally");
                Matcher::Literal
            }
        };
        Self {
            source: source.to_string(),
            matcher,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, value: &str) -> bool {
        match &self.matcher {
            Matcher::Regex(re) => re.is_match(value),
            Matcher::Literal => value.contains(self.source.as_str()),
        }
    }
}

/// Ordered set of patterns; a value matches when any member matches.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    pub fn new<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: sources
                .into_iter()
                .map(|s| Pattern::new(s.as_ref()))
                .collect(),
        }
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(value))
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_anchors_at_start() {
        let p = Pattern::new("^EU27");
        assert!(p.is_match("EU27_2020"));
        assert!(!p.is_match("XEU27"));
        assert!(!p.is_match("eu27_2020"));
    }

    #[test]
    fn unanchored_pattern_searches_anywhere() {
        let p = Pattern::new("EU27");
        assert!(p.is_match("XEU27"));
    }

    #[test]
    fn invalid_regex_falls_back_to_literal() {
        let p = Pattern::new("MKD(");
        assert_eq!(p.as_str(), "MKD(");
        assert!(p.is_match("xMKD(y"));
        assert!(!p.is_match("MKD"));
    }

    #[test]
    fn set_matches_any_member() {
        let set = PatternSet::new(["^MKD", "^TFYR"]);
        assert!(set.is_match("MKD"));
        assert!(set.is_match("TFYRMKD2"));
        assert!(!set.is_match("DEU"));
        assert!(!PatternSet::default().is_match("MKD"));
    }
}
