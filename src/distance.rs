//! Levenshtein edit distance.
//!
//! Characters are compared exactly (Unicode scalar values, case-sensitive).
//! Callers that want case-insensitive matching lowercase both sides first.

use std::cmp::min;

/// Levenshtein distance between `a` and `b`: the minimum number of
/// single-character insertions, deletions or substitutions turning `a`
/// into `b`.
///
/// Tabulates the full `(len(a)+1) x (len(b)+1)` grid.
#[allow(clippy::needless_range_loop)]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (alen, blen) = (a_chars.len(), b_chars.len());

    let mut grid: Vec<Vec<usize>> = vec![vec![0; blen + 1]; alen + 1];

    for i in 0..=alen {
        grid[i][0] = i;
    }
    for j in 0..=blen {
        grid[0][j] = j;
    }

    for i in 1..=alen {
        for j in 1..=blen {
            grid[i][j] = if a_chars[i - 1] == b_chars[j - 1] {
                grid[i - 1][j - 1]
            } else {
                1 + min(
                    min(
                        grid[i - 1][j], // deletion
                        grid[i][j - 1], // insertion
                    ),
                    grid[i - 1][j - 1], // substitution
                )
            };
        }
    }

    grid[alen][blen]
}

/// Levenshtein distance with an upper bound.
///
/// Returns `Some(d)` when `d <= max_distance`, and `None` as soon as the
/// distance is known to exceed it. Only two grid rows are kept.
#[allow(clippy::needless_range_loop)]
pub fn bounded_distance(a: &str, b: &str, max_distance: usize) -> Option<usize> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (alen, blen) = (a_chars.len(), b_chars.len());

    if alen.abs_diff(blen) > max_distance {
        return None;
    }

    let mut prev_row: Vec<usize> = (0..=blen).collect();
    let mut curr_row: Vec<usize> = vec![0; blen + 1];

    for i in 1..=alen {
        curr_row[0] = i;
        let mut row_min = i;

        for j in 1..=blen {
            curr_row[j] = if a_chars[i - 1] == b_chars[j - 1] {
                prev_row[j - 1]
            } else {
                1 + min(min(prev_row[j], curr_row[j - 1]), prev_row[j - 1])
            };
            row_min = min(row_min, curr_row[j]);
        }

        // Row minima never decrease, so the final cell can't come back under.
        if row_min > max_distance {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[blen];
    (distance <= max_distance).then_some(distance)
}
