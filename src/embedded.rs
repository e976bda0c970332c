//! Compile-time candidate index backed by `phf` maps.
//!
//! The `include_dictionary!` macro hashes the dictionary while the crate is
//! compiled and emits a static fingerprint table, so no index is built at
//! runtime. Lookups behave exactly like [`CandidateIndex`](crate::CandidateIndex)
//! built from the same words and window size.
//!
//! The tradeoff is code size: every (fingerprint, word) association becomes
//! part of the binary. The macro refuses to emit more than `max_entries`
//! associations.

use std::collections::HashSet;

use crate::fingerprint::RollingHasher;
use crate::index::CandidateSource;

/// Fingerprint index generated by `include_dictionary!`.
pub struct EmbeddedIndex {
    hasher: RollingHasher,
    /// dictionary words in file order
    words: &'static [&'static str],
    /// words shorter than the window
    short_words: &'static [&'static str],
    /// fingerprint -> words producing it
    table: &'static ::phf::Map<u32, &'static [&'static str]>,
    /// membership set
    members: &'static ::phf::Set<&'static str>,
}

impl EmbeddedIndex {
    /// Construct an `EmbeddedIndex` from generated statics.
    ///
    /// The macro validates `window_size` at compile time; a zero window here
    /// is a bug in hand-written callers and panics.
    pub fn from_phf(
        window_size: usize,
        words: &'static [&'static str],
        short_words: &'static [&'static str],
        table: &'static ::phf::Map<u32, &'static [&'static str]>,
        members: &'static ::phf::Set<&'static str>,
    ) -> Self {
        let hasher = match RollingHasher::new(window_size) {
            Ok(hasher) => hasher,
            Err(e) => panic!("EmbeddedIndex::from_phf: {e}"),
        };
        Self {
            hasher,
            words,
            short_words,
            table,
            members,
        }
    }

    /// Words stored under a fingerprint, if any word produced it.
    pub fn bucket(&self, fingerprint: u32) -> Option<&'static [&'static str]> {
        self.table.get(&fingerprint).copied()
    }

    /// Number of distinct fingerprints in the table.
    pub fn bucket_count(&self) -> usize {
        self.table.len()
    }
}

impl CandidateSource for EmbeddedIndex {
    fn window_size(&self) -> usize {
        self.hasher.window_size()
    }

    fn candidates(&self, query: &str) -> HashSet<&str> {
        if query.chars().count() < self.hasher.window_size() {
            return self.short_words.iter().copied().collect();
        }
        self.hasher
            .fingerprints(query)
            .into_iter()
            .filter_map(|fp| self.bucket(fp))
            .flatten()
            .copied()
            .collect()
    }

    fn words(&self) -> Vec<&str> {
        self.words.to_vec()
    }

    fn contains(&self, word: &str) -> bool {
        self.members.contains(word)
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}
