/*!
Suggestion engine.

Combines a [`CandidateSource`] with edit-distance scoring: fetch candidates,
score them against the query, keep those with `0 < distance <= threshold`,
and order by distance then alphabetically.

The engine holds no mutable state. The threshold is a per-call argument, so
one engine can serve any number of concurrent queries.

# Recall

A fingerprint lookup finds a word only if it shares at least one whole
window with the query. A query of `n` characters split into `t + 1`
disjoint windows of size `K` keeps at least one window intact under `t`
edits, so when `n >= K * (t + 1)` the index cannot miss a match. Below that
length [`Recall::Guarded`] scores the whole dictionary instead; with
[`Recall::IndexOnly`] the index result is used as-is.

Queries shorter than the window are always compared against the short-word
pool only.
*/

use log::trace;

use crate::config::Threshold;
use crate::distance::bounded_distance;
use crate::index::{CandidateIndex, CandidateSource};

/// A suggested dictionary word and its distance from the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub term: String,
    /// Edit distance from the queried term to the candidate.
    pub distance: usize,
}

/// Controls which suggestions are returned by [`SuggestionEngine::lookup`].
///
/// - `Top`: the single best suggestion (closest, then alphabetically first)
/// - `Closest`: all suggestions at the minimal distance, alphabetically
/// - `All`: all suggestions within the threshold, by distance then alphabetically
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Top,
    Closest,
    All,
}

/// How candidates are gathered for queries at least one window long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recall {
    /// Fall back to scoring every word when the index can't guarantee
    /// that all matches share a window with the query.
    #[default]
    Guarded,
    /// Always trust the fingerprint index.
    IndexOnly,
}

/// Ranks dictionary words against misspelled queries.
#[derive(Debug, Clone)]
pub struct SuggestionEngine<S = CandidateIndex> {
    source: S,
    recall: Recall,
}

impl<S: CandidateSource> SuggestionEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            recall: Recall::default(),
        }
    }

    pub fn with_recall(mut self, recall: Recall) -> Self {
        self.recall = recall;
        self
    }

    pub fn recall(&self) -> Recall {
        self.recall
    }

    /// The underlying candidate source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns true if `word` is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.source.contains(word)
    }

    /// Look up suggestions for `query` within `threshold` edits.
    ///
    /// An exact dictionary match is never returned (distance 0 is excluded).
    pub fn lookup(&self, query: &str, threshold: usize, verbosity: Verbosity) -> Vec<Suggestion> {
        let pool = self.candidate_pool(query, threshold);

        let mut results: Vec<Suggestion> = pool
            .into_iter()
            .filter_map(|cand| {
                let distance = bounded_distance(query, cand, threshold)?;
                (distance > 0).then(|| Suggestion {
                    term: cand.to_string(),
                    distance,
                })
            })
            .collect();

        results.sort_by(|a, b| {
            a.distance
                .cmp(&b.distance)
                .then_with(|| a.term.cmp(&b.term))
        });

        match verbosity {
            Verbosity::Top => {
                results.truncate(1);
                results
            }
            Verbosity::Closest => {
                let min_distance = results.first().map(|r| r.distance);
                results.retain(|r| Some(r.distance) == min_distance);
                results
            }
            Verbosity::All => results,
        }
    }

    /// All dictionary words within `threshold` edits of `query`, closest
    /// first, ties broken alphabetically.
    pub fn suggest(&self, query: &str, threshold: usize) -> Vec<String> {
        self.lookup(query, threshold, Verbosity::All)
            .into_iter()
            .map(|s| s.term)
            .collect()
    }

    /// Like [`suggest`](Self::suggest), with the threshold derived from the query.
    pub fn suggest_with(&self, query: &str, threshold: Threshold) -> Vec<String> {
        self.suggest(query, threshold.resolve(query))
    }

    fn candidate_pool(&self, query: &str, threshold: usize) -> Vec<&str> {
        let window = self.source.window_size();
        let query_len = query.chars().count();
        let index_complete = query_len >= window.saturating_mul(threshold.saturating_add(1));

        if query_len >= window && !index_complete && self.recall == Recall::Guarded {
            trace!(
                "query {:?} ({} chars, threshold {}): scanning all {} words",
                query,
                query_len,
                threshold,
                self.source.len()
            );
            return self.source.words();
        }

        let candidates: Vec<&str> = self.source.candidates(query).into_iter().collect();
        trace!(
            "query {:?} ({} chars, threshold {}): {} candidates",
            query,
            query_len,
            threshold,
            candidates.len()
        );
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SuggestionEngine {
        let index = CandidateIndex::build(["cat", "cats", "cot", "dog"], 3).unwrap();
        SuggestionEngine::new(index)
    }

    #[test]
    fn test_suggest_tie_break_alphabetical() {
        assert_eq!(engine().suggest("cet", 1), vec!["cat", "cot"]);
    }

    #[test]
    fn test_suggest_excludes_exact_match() {
        assert_eq!(engine().suggest("cat", 1), vec!["cats", "cot"]);
        assert!(engine().suggest("cat", 0).is_empty());
    }

    #[test]
    fn test_lookup_distances_and_order() {
        let results = engine().lookup("cot", 2, Verbosity::All);
        let pairs: Vec<(&str, usize)> = results
            .iter()
            .map(|s| (s.term.as_str(), s.distance))
            .collect();
        assert_eq!(pairs, vec![("cat", 1), ("cats", 2), ("dog", 2)]);
    }

    #[test]
    fn test_verbosity() {
        let e = engine();
        let top = e.lookup("cot", 2, Verbosity::Top);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].term, "cat");

        let closest = e.lookup("cut", 2, Verbosity::Closest);
        let terms: Vec<&str> = closest.iter().map(|s| s.term.as_str()).collect();
        assert_eq!(terms, vec!["cat", "cot"]);

        assert!(e.lookup("zzzzzz", 1, Verbosity::Closest).is_empty());
    }

    #[test]
    fn test_index_only_misses_without_shared_window() {
        let index = CandidateIndex::build(["cat", "cats", "cot", "dog"], 3).unwrap();
        let e = SuggestionEngine::new(index).with_recall(Recall::IndexOnly);
        assert_eq!(e.recall(), Recall::IndexOnly);
        // "cet" shares no 3-window with any word
        assert!(e.suggest("cet", 1).is_empty());
        // "cats" shares "cat"
        assert_eq!(e.suggest("cats", 1), vec!["cat"]);
    }

    #[test]
    fn test_long_query_uses_index() {
        let words = ["spelling", "spilling", "smelling", "dwelling"];
        let index = CandidateIndex::build(words, 2).unwrap();
        let e = SuggestionEngine::new(index);
        // 8 chars >= 2 * (1 + 1): index lookup is complete here
        assert_eq!(e.suggest("speling", 1), vec!["spelling"]);
        assert_eq!(e.suggest("spelling", 1), vec!["smelling", "spilling"]);
    }

    #[test]
    fn test_short_query_compares_short_words() {
        let index = CandidateIndex::build(["a", "an", "ant", "bee"], 3).unwrap();
        let e = SuggestionEngine::new(index);
        assert_eq!(e.suggest("ab", 1), vec!["a", "an"]);
        // empty query: distance equals each short word's length
        let results = e.lookup("", 2, Verbosity::All);
        let pairs: Vec<(&str, usize)> = results
            .iter()
            .map(|s| (s.term.as_str(), s.distance))
            .collect();
        assert_eq!(pairs, vec![("a", 1), ("an", 2)]);
    }

    #[test]
    fn test_empty_dictionary() {
        let index = CandidateIndex::build(Vec::<String>::new(), 3).unwrap();
        let e = SuggestionEngine::new(index);
        assert!(e.suggest("anything", 5).is_empty());
        assert!(e.suggest("", 5).is_empty());
    }

    #[test]
    fn test_suggest_with_threshold_policy() {
        let e = engine();
        assert_eq!(e.suggest_with("cet", Threshold::Fixed(1)), vec!["cat", "cot"]);
        // 3 chars at 4 chars per edit still allows one edit
        assert_eq!(
            e.suggest_with("cet", Threshold::Scaled { chars_per_edit: 4 }),
            vec!["cat", "cot"]
        );
    }

    #[test]
    fn test_contains() {
        let e = engine();
        assert!(e.contains("dog"));
        assert!(!e.contains("dig"));
        assert_eq!(e.source().len(), 4);
    }
}
