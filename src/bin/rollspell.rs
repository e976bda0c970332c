//! rollspell interactive prompt.
//!
//! Loads a dictionary, then reads one word per line from stdin and prints
//! suggestions for each until end of input.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::{info, LevelFilter};

use rollspell::config::DEFAULT_THRESHOLD;
use rollspell::{dictionary, Config, Recall, SuggestionEngine, Threshold, Verbosity};

/// Suggest dictionary words close to misspelled input
#[derive(Parser, Debug)]
#[command(name = "rollspell")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Word list, one word per line, optionally preceded by a word count
    dictionary: PathBuf,

    /// Fingerprint window size in characters
    #[arg(short, long, default_value_t = rollspell::config::DEFAULT_WINDOW_SIZE)]
    window: usize,

    /// Maximum edit distance for every query
    #[arg(short, long, conflicts_with = "scaled")]
    threshold: Option<usize>,

    /// Allow one edit per this many query characters instead of a fixed threshold
    #[arg(short, long)]
    scaled: Option<usize>,

    /// Only score words sharing a window with the query
    #[arg(long)]
    index_only: bool,

    /// Lowercase the dictionary and queries
    #[arg(short, long)]
    lowercase: bool,

    /// Verbosity level (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }

    fn config(&self) -> Config {
        let threshold = match (self.threshold, self.scaled) {
            (_, Some(chars_per_edit)) => Threshold::Scaled { chars_per_edit },
            (Some(n), None) => Threshold::Fixed(n),
            (None, None) => Threshold::Fixed(DEFAULT_THRESHOLD),
        };
        Config {
            window_size: self.window,
            recall: if self.index_only {
                Recall::IndexOnly
            } else {
                Recall::Guarded
            },
            threshold,
            lowercase: self.lowercase,
        }
    }
}

fn run(args: Args) -> rollspell::Result<()> {
    let config = args.config();
    config.validate()?;

    let words = dictionary::load(&args.dictionary, config.lowercase)?;
    let engine = config.build_engine(&words)?;
    info!("loaded {} words from {}", words.len(), args.dictionary.display());

    prompt_loop(&engine, &config, io::stdin().lock(), io::stdout().lock())
}

fn prompt_loop<R: BufRead, W: Write>(
    engine: &SuggestionEngine,
    config: &Config,
    mut input: R,
    mut out: W,
) -> rollspell::Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let query = config.normalize(line.trim());
        if query.is_empty() {
            continue;
        }

        if engine.contains(&query) {
            writeln!(out, "'{}' is in the dictionary", query)?;
            continue;
        }

        let threshold = config.threshold.resolve(&query);
        let suggestions = engine.lookup(&query, threshold, Verbosity::All);
        if suggestions.is_empty() {
            writeln!(out, "no suggestions within {} edits", threshold)?;
            continue;
        }
        for s in &suggestions {
            writeln!(out, "  {:<20} distance: {}", s.term, s.distance)?;
        }
    }
}

fn main() {
    let args = Args::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
