/*!
Candidate index.

`CandidateIndex` maps every window fingerprint to the dictionary words that
produce it, plus a fallback pool of words too short to have a window. A
query's candidates are the union of the buckets for its own fingerprints, or
the fallback pool when the query itself is shorter than the window.

The index is built once and is read-only afterwards, so a built index can
be shared across threads without locking.

`CandidateSource` abstracts over this runtime index and the compile-time
`EmbeddedIndex` so the suggestion engine works with either.
*/

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::error::Result;
use crate::fingerprint::{Fingerprint, RollingHasher};

/// Anything that can hand out candidate words for a query.
pub trait CandidateSource {
    /// Window size the source was built with.
    fn window_size(&self) -> usize;

    /// Candidate words for `query`, duplicate-free.
    fn candidates(&self, query: &str) -> HashSet<&str>;

    /// Every dictionary word, in dictionary order.
    fn words(&self) -> Vec<&str>;

    /// Whether `word` is in the dictionary.
    fn contains(&self, word: &str) -> bool;

    /// Number of dictionary words.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: CandidateSource + ?Sized> CandidateSource for &T {
    fn window_size(&self) -> usize {
        (**self).window_size()
    }

    fn candidates(&self, query: &str) -> HashSet<&str> {
        (**self).candidates(query)
    }

    fn words(&self) -> Vec<&str> {
        (**self).words()
    }

    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

type WordId = usize;

/// Fingerprint index over an owned dictionary.
#[derive(Debug, Clone)]
pub struct CandidateIndex {
    hasher: RollingHasher,
    words: Vec<String>,
    ids: HashMap<String, WordId>,
    table: HashMap<Fingerprint, Vec<WordId>>,
    short_words: Vec<WordId>,
}

impl CandidateIndex {
    /// Build an index from `words` with windows of `window_size` characters.
    ///
    /// Repeated words are indexed once (first occurrence kept). Fails only
    /// when `window_size` is zero.
    pub fn build<I, S>(words: I, window_size: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let hasher = RollingHasher::new(window_size)?;
        let mut index = Self {
            hasher,
            words: Vec::new(),
            ids: HashMap::new(),
            table: HashMap::new(),
            short_words: Vec::new(),
        };

        let mut duplicates = 0usize;
        for word in words {
            let word = word.into();
            if index.ids.contains_key(&word) {
                duplicates += 1;
                continue;
            }
            index.insert(word);
        }

        if duplicates > 0 {
            debug!("skipped {} duplicate dictionary words", duplicates);
        }
        debug!(
            "built candidate index: {} words, {} fingerprint buckets, {} short words (window {})",
            index.words.len(),
            index.table.len(),
            index.short_words.len(),
            window_size
        );
        Ok(index)
    }

    fn insert(&mut self, word: String) {
        let id = self.words.len();

        for fp in self.hasher.fingerprints(&word) {
            let bucket = self.table.entry(fp).or_default();
            // Ids arrive in increasing order, so a repeat can only be the last entry.
            if bucket.last() != Some(&id) {
                bucket.push(id);
            }
        }
        if word.chars().count() < self.hasher.window_size() {
            self.short_words.push(id);
        }

        self.ids.insert(word.clone(), id);
        self.words.push(word);
    }

    /// Words stored under `fingerprint`; empty when no word produced it.
    pub fn bucket(&self, fingerprint: Fingerprint) -> impl Iterator<Item = &str> + '_ {
        self.table
            .get(&fingerprint)
            .into_iter()
            .flatten()
            .map(move |&id| self.words[id].as_str())
    }

    /// Words shorter than the window.
    pub fn short_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.short_words.iter().map(move |&id| self.words[id].as_str())
    }

    /// Number of distinct fingerprints present.
    pub fn bucket_count(&self) -> usize {
        self.table.len()
    }
}

impl CandidateSource for CandidateIndex {
    fn window_size(&self) -> usize {
        self.hasher.window_size()
    }

    fn candidates(&self, query: &str) -> HashSet<&str> {
        if query.chars().count() < self.hasher.window_size() {
            return self.short_words().collect();
        }
        self.hasher
            .fingerprints(query)
            .into_iter()
            .flat_map(|fp| self.bucket(fp))
            .collect()
    }

    fn words(&self) -> Vec<&str> {
        self.words.iter().map(String::as_str).collect()
    }

    fn contains(&self, word: &str) -> bool {
        self.ids.contains_key(word)
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}
