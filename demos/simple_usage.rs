/*!
simple_usage.rs

Example demonstrating:
- compile-time dictionary embedding using `include_dictionary!` (returns a ready engine)
- runtime construction of an engine from a word list

Run with:
    cargo run --example simple_usage

The `include_dictionary!` path is relative to the crate root. This example
uses `tests/data/words.txt`, the dictionary shipped for the tests.
*/

use rollspell::{include_dictionary, Config, Recall, Suggestion, Threshold, Verbosity};

fn print_suggestions(title: &str, suggestions: &[Suggestion]) {
    println!("-- {} ({} suggestions) --", title, suggestions.len());
    for s in suggestions {
        println!("  term: {:<12} distance: {:>2}", s.term, s.distance);
    }
}

fn example_compile_time() {
    // Fingerprint table computed while compiling, stored as phf maps.
    let engine = include_dictionary!("tests/data/words.txt", window = 3, lowercase = true);

    println!("=== Compile-time embedded dictionary ===");

    let top = engine.lookup("worl", 1, Verbosity::Top);
    print_suggestions("Top suggestion for 'worl'", &top);

    let closest = engine.lookup("helo", 2, Verbosity::Closest);
    print_suggestions("Closest suggestions for 'helo'", &closest);

    let all = engine.lookup("teso", 2, Verbosity::All);
    print_suggestions("All suggestions for 'teso'", &all);
}

fn example_runtime_build() -> rollspell::Result<()> {
    println!("\n=== Runtime-built index ===");

    let words = [
        "hello", "hell", "help", "world", "test", "tost", "applied", "apple", "apply",
    ];

    let config = Config {
        threshold: Threshold::Scaled { chars_per_edit: 4 },
        ..Config::default()
    };
    let engine = config.build_engine(words)?;

    for query in ["helo", "appl", "testo", "aplied"] {
        let threshold = config.threshold.resolve(query);
        let all = engine.lookup(query, threshold, Verbosity::All);
        print_suggestions(&format!("'{}' within {} edits", query, threshold), &all);
    }

    // Without the full-scan fallback, "apl" shares no 3-character window with
    // "apple" or "apply" and nothing comes back.
    let index_only = Config {
        recall: Recall::IndexOnly,
        ..Config::default()
    }
    .build_engine(words)?;
    println!("index-only 'apl': {:?}", index_only.suggest("apl", 2));
    println!("guarded    'apl': {:?}", engine.suggest("apl", 2));

    Ok(())
}

fn main() {
    println!("rollspell example: compile-time macro and runtime builder\n");

    example_compile_time();
    if let Err(e) = example_runtime_build() {
        eprintln!("Error: {e}");
    }

    println!("\nDone.");
}
