//! Registration of a pattern pair given on the command line.

use log::{info, warn};
use xmv_core::patterns::PatternConfig;

/// What the trailing command-line values ask for.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Registration {
    /// No values given, run with the stored patterns
    None,
    /// Exactly two values: store `old_pattern -> new_pattern`
    Pair {
        old_pattern: String,
        new_pattern: String,
    },
    /// Some other number of values, which is not a pair and is skipped
    Ignored(usize),
}

/// Determines the registration from the trailing command-line values.
///
/// # Examples
///
/// ```rust
/// use xmv_cli::registration::{determine, Registration};
///
/// let values = vec!["*.txt".to_string()];
/// assert_eq!(determine(&values), Registration::Ignored(1));
/// ```
#[must_use]
pub fn determine(values: &[String]) -> Registration {
    match values {
        [] => Registration::None,
        [old_pattern, new_pattern] => Registration::Pair {
            old_pattern: old_pattern.clone(),
            new_pattern: new_pattern.clone(),
        },
        _ => Registration::Ignored(values.len()),
    }
}

/// Applies `registration` to the in-memory patterns. Returns whether anything changed.
pub fn apply(config: &mut PatternConfig, registration: &Registration) -> bool {
    match registration {
        Registration::None => false,
        Registration::Pair {
            old_pattern,
            new_pattern,
        } => {
            match config.register(old_pattern, new_pattern) {
                Some(previous) => {
                    info!("Replaced `{old_pattern}` -> `{previous}` with -> `{new_pattern}`");
                }
                None => info!("Registered `{old_pattern}` -> `{new_pattern}`"),
            }
            true
        }
        Registration::Ignored(count) => {
            warn!("Expected an old and a new pattern, got {count} value(s); nothing registered");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_determine_by_count() {
        assert_eq!(determine(&[]), Registration::None);
        assert_eq!(determine(&values(&["a"])), Registration::Ignored(1));
        assert_eq!(
            determine(&values(&["a", "b"])),
            Registration::Pair {
                old_pattern: "a".to_string(),
                new_pattern: "b".to_string(),
            }
        );
        assert_eq!(
            determine(&values(&["a", "b", "c", "d"])),
            Registration::Ignored(4)
        );
    }

    #[test]
    fn test_apply_pair_overwrites_existing() {
        let mut config = PatternConfig::default();
        config.register("*.txt", "*.bak");
        config.register("*.md", "*.markdown");

        let changed = apply(&mut config, &determine(&values(&["*.txt", "*.old"])));

        assert!(changed);
        assert_eq!(config.patterns["*.txt"], "*.old");
        assert_eq!(config.patterns["*.md"], "*.markdown");
        assert_eq!(config.patterns.len(), 2);
    }

    #[test]
    fn test_apply_ignored_leaves_patterns_alone() {
        let mut config = PatternConfig::default();
        config.register("*.txt", "*.bak");
        let before = config.clone();

        assert!(!apply(&mut config, &Registration::Ignored(1)));
        assert!(!apply(&mut config, &Registration::None));
        assert_eq!(config, before);
    }
}
