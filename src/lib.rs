//! rollspell - spelling suggestions from a rolling-hash candidate index
//!
//! A dictionary is indexed by the fingerprints of its fixed-size character
//! windows. For a misspelled query, only words sharing a window fingerprint
//! with it are scored with Levenshtein distance, and those within the
//! threshold come back ordered by distance, then alphabetically.
//!
//! Examples
//!
//! - Runtime construction (dictionaries loaded from files or other dynamic
//!   sources):
//!
//! ```
//! use rollspell::{build_index, suggest};
//!
//! let index = build_index(["cat", "cats", "cot", "dog"], 3).unwrap();
//! assert_eq!(suggest(&index, "cet", 1), vec!["cat", "cot"]);
//! ```
//!
//! - Compile-time embedding (the dictionary and its fingerprint table are
//!   baked into the binary as `phf` maps):
//!
//! ```ignore
//! use rollspell::include_dictionary;
//!
//! let engine = include_dictionary!("path/to/words.txt", window = 3, lowercase = true);
//! let suggestions = engine.suggest("helo", 1);
//! ```

pub mod config;
pub mod dictionary;
pub mod distance;
pub mod embedded;
pub mod engine;
pub mod error;
pub mod fingerprint;
pub mod index;

pub use config::{Config, Threshold};
pub use distance::{bounded_distance, edit_distance};
pub use embedded::EmbeddedIndex;
pub use engine::{Recall, Suggestion, SuggestionEngine, Verbosity};
pub use error::{Result, SpellError};
pub use fingerprint::{fingerprints, Fingerprint, RollingHasher};
pub use index::{CandidateIndex, CandidateSource};

/// Re-export the compile-time dictionary macro from the proc-macro crate.
///
///   use rollspell::include_dictionary;
pub use rollspell_macros::include_dictionary;

/// Index `words` with fingerprint windows of `window_size` characters.
///
/// Fails only when `window_size` is zero.
pub fn build_index<I, S>(words: I, window_size: usize) -> Result<CandidateIndex>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    CandidateIndex::build(words, window_size)
}

/// Dictionary words within `threshold` edits of `query`, closest first and
/// alphabetical among equals. The query itself is never suggested.
pub fn suggest(index: &CandidateIndex, query: &str, threshold: usize) -> Vec<String> {
    SuggestionEngine::new(index).suggest(query, threshold)
}
