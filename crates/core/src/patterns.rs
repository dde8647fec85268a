use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The persisted record: old pattern mapped to new pattern, in file order.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternConfig {
    #[serde(default)]
    pub patterns: IndexMap<String, String>,
}

impl PatternConfig {
    /// Stores `old_pattern -> new_pattern`, replacing the target of an existing
    /// entry in place. Returns the replaced target, if any.
    pub fn register(&mut self, old_pattern: &str, new_pattern: &str) -> Option<String> {
        self.patterns
            .insert(old_pattern.to_string(), new_pattern.to_string())
    }

    pub fn pairs(&self) -> impl Iterator<Item = PatternPair> + '_ {
        self.patterns
            .iter()
            .map(|(old_pattern, new_pattern)| PatternPair::new(old_pattern, new_pattern))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternPair {
    pub old_pattern: String,
    pub new_pattern: String,
}

impl PatternPair {
    pub fn new(old_pattern: &str, new_pattern: &str) -> Self {
        Self {
            old_pattern: old_pattern.to_string(),
            new_pattern: new_pattern.to_string(),
        }
    }
}

impl Display for PatternPair {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "[{} -> {}]", self.old_pattern, self.new_pattern)
    }
}

/// A pattern pair whose preview succeeded during this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub pair: PatternPair,
    /// Preview output split on `\n`; never empty, may hold a single empty line.
    pub preview_lines: Vec<String>,
}

impl Candidate {
    pub fn from_preview(pair: PatternPair, preview_output: &str) -> Self {
        Self {
            pair,
            preview_lines: preview_output.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn first_preview_line(&self) -> &str {
        self.preview_lines.first().map_or("", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_overwrites_in_place() {
        let mut config = PatternConfig::default();
        config.register("*.txt", "*.bak");
        config.register("(*).jpeg", "$1.jpg");

        let previous = config.register("*.txt", "*.old");

        assert_eq!(previous, Some("*.bak".to_string()));
        let keys: Vec<&String> = config.patterns.keys().collect();
        assert_eq!(keys, vec!["*.txt", "(*).jpeg"]);
        assert_eq!(config.patterns["*.txt"], "*.old");
        assert_eq!(config.patterns["(*).jpeg"], "$1.jpg");
    }

    #[test]
    fn test_register_appends_new_pattern() {
        let mut config = PatternConfig::default();
        assert_eq!(config.register("a*", "b*"), None);
        assert_eq!(config.register("c*", "d*"), None);

        let pairs: Vec<PatternPair> = config.pairs().collect();
        assert_eq!(
            pairs,
            vec![PatternPair::new("a*", "b*"), PatternPair::new("c*", "d*")]
        );
    }

    #[test]
    fn test_default_is_fresh_and_empty() {
        let mut first = PatternConfig::default();
        first.register("x", "y");

        let second = PatternConfig::default();
        assert!(second.is_empty());
    }

    #[test]
    fn test_pattern_pair_display() {
        let pair = PatternPair::new("*.txt", "*.bak");
        assert_eq!(format!("{pair}"), "[*.txt -> *.bak]");
    }

    #[test]
    fn test_candidate_keeps_trailing_empty_line() {
        let candidate = Candidate::from_preview(
            PatternPair::new("*.txt", "*.bak"),
            "mv -- a.txt a.bak\nmv -- b.txt b.bak\n",
        );

        assert_eq!(
            candidate.preview_lines,
            vec!["mv -- a.txt a.bak", "mv -- b.txt b.bak", ""]
        );
        assert_eq!(candidate.first_preview_line(), "mv -- a.txt a.bak");
    }

    #[test]
    fn test_candidate_from_empty_preview() {
        let candidate = Candidate::from_preview(PatternPair::new("a", "b"), "");
        assert_eq!(candidate.preview_lines, vec![""]);
        assert_eq!(candidate.first_preview_line(), "");
    }

    #[test]
    fn test_missing_patterns_field_deserializes_empty() {
        let config: PatternConfig = serde_json::from_str("{}").unwrap();
        assert!(config.is_empty());
    }
}
