//! Word list loading.
//!
//! A dictionary file holds one word per line. Blank lines and lines starting
//! with `#` are ignored. If the first remaining line is all ASCII digits and
//! at least that many lines follow, it is a count header and exactly that
//! many words are read. Otherwise the first line is an ordinary word, so a
//! plain list may start with a numeric entry such as `2024`.
//!
//! ```text
//! 3
//! apple
//! apply
//! applied
//! ```
//!
//! The result is an ordered list of distinct words; repeats keep their first
//! position.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::error::Result;

/// Read a word list from `reader`.
pub fn parse<R: BufRead>(reader: R, lowercase: bool) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines.push(trimmed.to_string());
    }

    let entries: &[String] = match count_header(&lines) {
        Some(declared) => {
            let body = &lines[1..];
            if body.len() > declared {
                warn!(
                    "ignoring {} lines after the {} declared words",
                    body.len() - declared,
                    declared
                );
            }
            &body[..declared]
        }
        None => &lines,
    };

    let mut seen: HashSet<String> = HashSet::with_capacity(entries.len());
    let mut words = Vec::with_capacity(entries.len());
    for entry in entries {
        let word = if lowercase {
            entry.to_lowercase()
        } else {
            entry.clone()
        };
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    if words.len() < entries.len() {
        debug!("dropped {} repeated words", entries.len() - words.len());
    }
    Ok(words)
}

/// Word count declared by the first line, if it is a usable header.
fn count_header(lines: &[String]) -> Option<usize> {
    let first = lines.first()?;
    if !first.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let declared = first.parse::<usize>().ok()?;
    if declared > lines.len() - 1 {
        debug!(
            "first line {:?} exceeds the {} lines that follow, reading it as a word",
            first,
            lines.len() - 1
        );
        return None;
    }
    Some(declared)
}

/// Read a word list from the file at `path`.
pub fn load<P: AsRef<Path>>(path: P, lowercase: bool) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let words = parse(BufReader::new(file), lowercase)?;
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
