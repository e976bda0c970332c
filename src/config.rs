//! Engine configuration.

use crate::engine::{Recall, SuggestionEngine};
use crate::error::{Result, SpellError};
use crate::index::CandidateIndex;

/// Default fingerprint window, in characters.
pub const DEFAULT_WINDOW_SIZE: usize = 3;

/// Default maximum edit distance for suggestions.
pub const DEFAULT_THRESHOLD: usize = 2;

/// How the maximum accepted edit distance is chosen for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    /// The same bound for every query.
    Fixed(usize),
    /// One edit per `chars_per_edit` query characters, rounded up, never
    /// below 1. A `chars_per_edit` of 0 is treated as 1.
    Scaled { chars_per_edit: usize },
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::Fixed(DEFAULT_THRESHOLD)
    }
}

impl Threshold {
    /// Threshold to use for `query`.
    pub fn resolve(&self, query: &str) -> usize {
        match *self {
            Threshold::Fixed(n) => n,
            Threshold::Scaled { chars_per_edit } => {
                let len = query.chars().count();
                len.div_ceil(chars_per_edit.max(1)).max(1)
            }
        }
    }
}

/// Settings for building a suggestion engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fingerprint window size, in characters.
    pub window_size: usize,
    pub recall: Recall,
    pub threshold: Threshold,
    /// Lowercase dictionary words and queries.
    pub lowercase: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            window_size: DEFAULT_WINDOW_SIZE,
            recall: Recall::default(),
            threshold: Threshold::default(),
            lowercase: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(SpellError::invalid_argument("window_size must be at least 1"));
        }
        Ok(())
    }

    /// Normalize a word the way this configuration expects.
    pub fn normalize(&self, word: &str) -> String {
        if self.lowercase {
            word.to_lowercase()
        } else {
            word.to_string()
        }
    }

    /// Build an index over `words` and wrap it in an engine.
    pub fn build_engine<I, S>(&self, words: I) -> Result<SuggestionEngine<CandidateIndex>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.validate()?;
        let words = words.into_iter().map(|w| self.normalize(w.as_ref()));
        let index = CandidateIndex::build(words, self.window_size)?;
        Ok(SuggestionEngine::new(index).with_recall(self.recall))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_threshold() {
        assert_eq!(Threshold::Fixed(0).resolve("anything"), 0);
        assert_eq!(Threshold::Fixed(3).resolve(""), 3);
    }

    #[test]
    fn test_scaled_threshold() {
        let t = Threshold::Scaled { chars_per_edit: 4 };
        assert_eq!(t.resolve(""), 1);
        assert_eq!(t.resolve("cat"), 1);
        assert_eq!(t.resolve("cats"), 1);
        assert_eq!(t.resolve("catty"), 2);
        assert_eq!(t.resolve("catastrophe"), 3);
    }

    #[test]
    fn test_scaled_zero_clamps_to_one() {
        let t = Threshold::Scaled { chars_per_edit: 0 };
        let one = Threshold::Scaled { chars_per_edit: 1 };
        assert_eq!(t.resolve("abcdef"), one.resolve("abcdef"));
        assert_eq!(t.resolve("abcdef"), 6);
        assert_eq!(t.resolve(""), 1);

        // a config carrying the same policy is accepted and behaves the same
        let config = Config {
            threshold: t,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
        let engine = config.build_engine(["cat", "cot"]).unwrap();
        assert_eq!(engine.suggest_with("cet", t), vec!["cat", "cot"]);
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());

        let config = Config {
            window_size: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(SpellError::InvalidArgument(_))));
    }

    #[test]
    fn test_build_engine_lowercases() {
        let config = Config {
            lowercase: true,
            ..Config::default()
        };
        let engine = config.build_engine(["Cat", "COT", "dog"]).unwrap();
        assert!(engine.contains("cat"));
        assert!(!engine.contains("Cat"));
        assert_eq!(engine.suggest("cet", 1), vec!["cat", "cot"]);
    }

    #[test]
    fn test_build_engine_recall() {
        let config = Config {
            recall: Recall::IndexOnly,
            ..Config::default()
        };
        let engine = config.build_engine(["cat", "cot"]).unwrap();
        assert_eq!(engine.recall(), Recall::IndexOnly);
        assert!(engine.suggest("cet", 1).is_empty());
    }
}
