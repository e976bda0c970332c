/*!
Rolling window fingerprints.

Each window of `window_size` consecutive characters is read as a base-`BASE`
number over character codes, reduced modulo `MODULUS`. The first window is
hashed directly; every later window is derived from its predecessor in
constant time by removing the leaving character and appending the entering
one, so all windows of a word cost O(len(word)).

The constants are shared with the `include_dictionary!` macro, which hashes
embedded dictionaries at compile time. Changing them here requires the same
change in `rollspell-macros`.
*/

use crate::error::{Result, SpellError};

/// Radix applied to each character code.
pub const BASE: u64 = 256;

/// Modulus bounding every fingerprint to `[0, MODULUS)`.
pub const MODULUS: u64 = 50_021;

/// Hash of one window. Collisions are expected; candidates are always
/// verified by exact edit distance afterwards.
pub type Fingerprint = u32;

/// Computes window fingerprints for a fixed window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHasher {
    window_size: usize,
    /// `BASE^(window_size - 1) mod MODULUS`, the weight of the leaving character.
    leading_weight: u64,
}

impl RollingHasher {
    /// Create a hasher for windows of `window_size` characters.
    ///
    /// A window of zero characters has no fingerprint, so `0` is rejected.
    pub fn new(window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(SpellError::invalid_argument("fingerprint window size must be at least 1"));
        }
        let mut leading_weight = 1u64;
        for _ in 1..window_size {
            leading_weight = leading_weight * BASE % MODULUS;
        }
        Ok(Self {
            window_size,
            leading_weight,
        })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Fingerprints of every window of `word`, left to right.
    ///
    /// Empty when `word` is shorter than the window.
    pub fn fingerprints(&self, word: &str) -> Vec<Fingerprint> {
        let codes: Vec<u64> = word.chars().map(|c| c as u64).collect();
        if codes.len() < self.window_size {
            return Vec::new();
        }

        let mut out = Vec::with_capacity(codes.len() - self.window_size + 1);
        let mut hash = hash_codes(&codes[..self.window_size]);
        out.push(hash as Fingerprint);

        for (leaving, entering) in codes.iter().zip(&codes[self.window_size..]) {
            let removed = leaving * self.leading_weight % MODULUS;
            hash = (hash + MODULUS - removed) % MODULUS;
            hash = (hash * BASE + entering) % MODULUS;
            out.push(hash as Fingerprint);
        }
        out
    }
}

/// Hash a single window directly, without rolling.
pub fn hash_window(window: &str) -> Fingerprint {
    let codes: Vec<u64> = window.chars().map(|c| c as u64).collect();
    hash_codes(&codes) as Fingerprint
}

fn hash_codes(codes: &[u64]) -> u64 {
    codes.iter().fold(0, |h, &c| (h * BASE + c) % MODULUS)
}

/// Fingerprints of every `window_size` window of `word`.
///
/// Convenience wrapper over [`RollingHasher`] for one-off calls.
pub fn fingerprints(word: &str, window_size: usize) -> Result<Vec<Fingerprint>> {
    Ok(RollingHasher::new(window_size)?.fingerprints(word))
}
