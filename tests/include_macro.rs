use std::collections::HashSet;

use rollspell::{dictionary, include_dictionary, CandidateIndex, CandidateSource, Verbosity};

#[test]
fn test_include_macro_basic_suggest() {
    // Embed tests/data/words.txt with a precomputed fingerprint table
    let engine = include_dictionary!("tests/data/words.txt", window = 3, lowercase = true);

    assert_eq!(engine.suggest("helo", 1), vec!["hell", "hello", "help"]);

    // The exact word is never suggested, only its neighbours
    assert_eq!(engine.suggest("world", 1), vec!["word"]);
}

#[test]
fn test_include_macro_verbosity() {
    let engine = include_dictionary!("tests/data/words.txt", window = 3, lowercase = true);

    let top = engine.lookup("appl", 1, Verbosity::Top);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].term, "apple");
    assert_eq!(top[0].distance, 1);

    let closest = engine.lookup("teso", 2, Verbosity::Closest);
    let terms: Vec<&str> = closest.iter().map(|s| s.term.as_str()).collect();
    assert_eq!(terms, vec!["test"]);

    let all = engine.lookup("teso", 2, Verbosity::All);
    assert_eq!(all[0].term, "test");
    assert!(all.iter().any(|s| s.term == "tost" && s.distance == 2));
}

#[test]
fn test_include_macro_short_words() {
    let engine = include_dictionary!("tests/data/words.txt", window = 3, lowercase = true);

    assert_eq!(engine.suggest("an", 1), vec!["a"]);
    assert_eq!(engine.suggest("", 2), vec!["a", "an"]);
}

#[test]
fn test_include_macro_membership_and_case() {
    let lowered = include_dictionary!("tests/data/words.txt", window = 3, lowercase = true);
    assert!(lowered.contains("cat"));
    assert!(!lowered.contains("Cat"));
    // "Cat" and "cat" collapse into one word
    assert_eq!(lowered.source().len(), 13);

    let exact = include_dictionary!("tests/data/words.txt", window = 3);
    assert!(exact.contains("Cat"));
    assert!(exact.contains("cat"));
    assert_eq!(exact.source().len(), 14);
    assert_eq!(exact.suggest("cat", 1), vec!["Cat"]);
}

#[test]
fn test_embedded_candidates_match_runtime_index() {
    let embedded = include_dictionary!("tests/data/words.txt", window = 3, lowercase = true);

    let words = dictionary::load("tests/data/words.txt", true).unwrap();
    let runtime = CandidateIndex::build(words.clone(), 3).unwrap();

    assert_eq!(embedded.source().words(), runtime.words());

    let mut queries: Vec<&str> = words.iter().map(String::as_str).collect();
    queries.extend(["helo", "wrld", "aplied", "xyz", "", "q"]);
    for query in queries {
        let from_embedded: HashSet<&str> = embedded.source().candidates(query);
        let from_runtime: HashSet<&str> = runtime.candidates(query);
        assert_eq!(from_embedded, from_runtime, "candidates differ for {query:?}");
    }
}

#[test]
fn test_include_macro_without_precompute() {
    let runtime = include_dictionary!(
        "tests/data/words.txt",
        window = 3,
        lowercase = true,
        precompute = false
    );
    let embedded = include_dictionary!("tests/data/words.txt", window = 3, lowercase = true);

    for query in ["helo", "appl", "teso", "wrld", "an"] {
        assert_eq!(runtime.suggest(query, 2), embedded.suggest(query, 2));
    }
}

#[test]
fn test_include_macro_window_two() {
    let engine = include_dictionary!("tests/data/words.txt", window = 2, lowercase = true);
    assert_eq!(engine.source().window_size(), 2);
    // only "a" is shorter than two characters
    assert_eq!(engine.suggest("b", 1), vec!["a"]);
    assert_eq!(engine.suggest("aplied", 1), vec!["applied"]);
}

#[test]
fn test_include_macro_numeric_first_word() {
    // "2024" exceeds the lines that follow, so it is a word, not a count header
    let engine = include_dictionary!("tests/data/numeric_first.txt", window = 3);
    assert!(engine.contains("2024"));
    assert_eq!(engine.source().len(), 4);
    assert_eq!(engine.suggest("2025", 1), vec!["2024"]);

    let words = dictionary::load("tests/data/numeric_first.txt", false).unwrap();
    assert_eq!(engine.source().words(), words);
}
