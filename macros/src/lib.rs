use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use syn::parse::{Parse, ParseStream};
use syn::{Expr, Ident, Lit, LitStr, Token};

// Must stay identical to `rollspell::fingerprint::{BASE, MODULUS}`.
const BASE: u64 = 256;
const MODULUS: u64 = 50_021;

/// Macro input representation:
/// include_dictionary!("path/to/file.txt", window = 3, lowercase = true, precompute = true, max_entries = 100000)
struct IncludeDictionaryArgs {
    path: LitStr,
    assignments: Vec<(Ident, Expr)>,
}

impl Parse for IncludeDictionaryArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let path: LitStr = input.parse()?;

        let mut assignments = Vec::new();

        while input.parse::<Token![,]>().is_ok() {
            if input.is_empty() {
                break;
            }
            let ident: Ident = input.parse()?;
            let _eq: Token![=] = input.parse()?;
            let value: Expr = input.parse()?;
            assignments.push((ident, value));
        }

        Ok(IncludeDictionaryArgs { path, assignments })
    }
}

struct Options {
    window: usize,
    lowercase: bool,
    precompute: bool,
    max_entries: usize,
}

impl Options {
    fn from_assignments(assignments: &[(Ident, Expr)]) -> syn::Result<Self> {
        let mut options = Options {
            window: 3,
            lowercase: false,
            precompute: true,
            max_entries: 100_000,
        };

        for (ident, expr) in assignments {
            match ident.to_string().as_str() {
                "window" => {
                    options.window = int_arg(ident, expr)?;
                    if options.window == 0 {
                        return Err(syn::Error::new_spanned(expr, "window must be at least 1"));
                    }
                }
                "lowercase" => options.lowercase = bool_arg(ident, expr)?,
                "precompute" => options.precompute = bool_arg(ident, expr)?,
                "max_entries" => options.max_entries = int_arg(ident, expr)?,
                other => {
                    return Err(syn::Error::new_spanned(
                        ident,
                        format!("unknown argument to include_dictionary: {}", other),
                    ))
                }
            }
        }
        Ok(options)
    }
}

fn int_arg(ident: &Ident, expr: &Expr) -> syn::Result<usize> {
    match expr {
        Expr::Lit(el) => match &el.lit {
            Lit::Int(li) => li.base10_parse::<usize>(),
            _ => Err(syn::Error::new_spanned(
                expr,
                format!("{} must be an integer literal", ident),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            expr,
            format!("{} must be an integer literal expression", ident),
        )),
    }
}

fn bool_arg(ident: &Ident, expr: &Expr) -> syn::Result<bool> {
    match expr {
        Expr::Lit(el) => match &el.lit {
            Lit::Bool(lb) => Ok(lb.value),
            _ => Err(syn::Error::new_spanned(
                expr,
                format!("{} must be a boolean literal", ident),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            expr,
            format!("{} must be a boolean literal expression", ident),
        )),
    }
}

/// Read the word list with the same rules as `rollspell::dictionary::parse`.
fn read_words(path: &Path, lowercase: bool) -> Result<Vec<String>, String> {
    let file = File::open(path)
        .map_err(|e| format!("failed to open dictionary file '{}': {}", path.display(), e))?;

    let mut lines = Vec::new();
    for (lineno, line) in io::BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| {
            format!("error reading line {} of {}: {}", lineno + 1, path.display(), e)
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines.push(trimmed.to_string());
    }

    // A first line of digits is a count header only when that many lines follow.
    let header = lines.first().and_then(|first| {
        if !first.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        first
            .parse::<usize>()
            .ok()
            .filter(|&declared| declared <= lines.len() - 1)
    });
    let entries: &[String] = match header {
        Some(declared) => &lines[1..=declared],
        None => &lines,
    };

    let mut seen = HashSet::new();
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
    Ok(words)
}

/// Rolling window fingerprints, identical to `rollspell::RollingHasher`.
fn fingerprints(word: &str, window: usize) -> Vec<u32> {
    let codes: Vec<u64> = word.chars().map(|c| c as u64).collect();
    if codes.len() < window {
        return Vec::new();
    }

    let mut leading_weight = 1u64;
    for _ in 1..window {
        leading_weight = leading_weight * BASE % MODULUS;
    }

    let mut out = Vec::with_capacity(codes.len() - window + 1);
    let mut hash = codes[..window]
        .iter()
        .fold(0, |h, &c| (h * BASE + c) % MODULUS);
    out.push(hash as u32);
    for (leaving, entering) in codes.iter().zip(&codes[window..]) {
        hash = (hash + MODULUS - leaving * leading_weight % MODULUS) % MODULUS;
        hash = (hash * BASE + entering) % MODULUS;
        out.push(hash as u32);
    }
    out
}

fn str_lits(words: &[String]) -> Vec<LitStr> {
    words
        .iter()
        .map(|w| LitStr::new(w, Span::call_site()))
        .collect()
}

/// include_dictionary!("path/to/file.txt", window = 3, lowercase = true, precompute = true, max_entries = 100000)
///
/// Reads the word list at compile time (path relative to the crate root) and
/// returns a ready `rollspell::SuggestionEngine`. The expansion also
/// `include_bytes!`s the file so editing it triggers a rebuild.
///
/// By default the fingerprint table is computed here and emitted as statics:
///  - `WORDS: &[&str]` (dictionary order)
///  - `SHORT_WORDS: &[&str]` (words shorter than the window)
///  - `FINGERPRINTS: ::phf::Map<u32, &'static [&'static str]>`
///  - `MEMBERS: ::phf::Set<&'static str>`
///
/// and the engine wraps an `EmbeddedIndex` over them. With `precompute = false`
/// only `WORDS` is emitted and a `CandidateIndex` is built when the expression
/// is evaluated.
///
/// `max_entries` caps the number of (fingerprint, word) associations that may
/// be embedded; exceeding it is a compile error suggesting `precompute = false`.
#[proc_macro]
pub fn include_dictionary(input: TokenStream) -> TokenStream {
    let args = syn::parse_macro_input!(input as IncludeDictionaryArgs);

    let options = match Options::from_assignments(&args.assignments) {
        Ok(options) => options,
        Err(e) => return e.to_compile_error().into(),
    };

    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => dir,
        Err(_) => {
            return syn::Error::new_spanned(&args.path, "CARGO_MANIFEST_DIR is not set")
                .to_compile_error()
                .into()
        }
    };
    let file_path = Path::new(&manifest_dir).join(args.path.value());

    let words = match read_words(&file_path, options.lowercase) {
        Ok(words) => words,
        Err(msg) => {
            return syn::Error::new_spanned(&args.path, format!("include_dictionary!: {}", msg))
                .to_compile_error()
                .into()
        }
    };

    // Recompile when the dictionary file changes.
    let tracked = LitStr::new(&file_path.to_string_lossy(), Span::call_site());

    let window = options.window;
    let window_lit = syn::LitInt::new(&format!("{}usize", window), Span::call_site());
    let word_lits = str_lits(&words);

    if !options.precompute {
        let expanded = quote! {
            {
                const _: &[u8] = include_bytes!(#tracked);

                static WORDS: &[&str] = &[#( #word_lits ),*];

                match ::rollspell::CandidateIndex::build(WORDS.iter().copied(), #window_lit) {
                    Ok(index) => ::rollspell::SuggestionEngine::new(index),
                    Err(e) => unreachable!("include_dictionary!: {}", e),
                }
            }
        };
        return TokenStream::from(expanded);
    }

    // fingerprint -> words, in dictionary order (BTreeMap for deterministic output)
    let mut table: BTreeMap<u32, Vec<String>> = BTreeMap::new();
    let mut short_words: Vec<String> = Vec::new();
    let mut total_entries = 0usize;

    for word in &words {
        for fp in fingerprints(word, window) {
            let bucket = table.entry(fp).or_default();
            if bucket.last() != Some(word) {
                bucket.push(word.clone());
                total_entries += 1;
            }
        }
        if word.chars().count() < window {
            short_words.push(word.clone());
        }
    }

    if total_entries > options.max_entries {
        return syn::Error::new_spanned(
            &args.path,
            format!(
                "include_dictionary!: the fingerprint table would hold {} entries, which exceeds max_entries = {}. Consider setting `precompute = false` or increasing `max_entries`.",
                total_entries, options.max_entries
            ),
        )
        .to_compile_error()
        .into();
    }

    let short_lits = str_lits(&short_words);
    let table_quote_iter = table.iter().map(|(fp, bucket)| {
        let key = syn::LitInt::new(&format!("{}u32", fp), Span::call_site());
        let wl = str_lits(bucket);
        quote! {
            #key => &[#( #wl ),*]
        }
    });
    let member_lits = word_lits.iter();

    let expanded = quote! {
        {
            const _: &[u8] = include_bytes!(#tracked);

            static WORDS: &[&str] = &[#( #word_lits ),*];

            static SHORT_WORDS: &[&str] = &[#( #short_lits ),*];

            static FINGERPRINTS: ::phf::Map<u32, &'static [&'static str]> = ::phf::phf_map! {
                #(#table_quote_iter, )*
            };

            static MEMBERS: ::phf::Set<&'static str> = ::phf::phf_set! {
                #(#member_lits, )*
            };

            ::rollspell::SuggestionEngine::new(::rollspell::EmbeddedIndex::from_phf(
                #window_lit,
                WORDS,
                SHORT_WORDS,
                &FINGERPRINTS,
                &MEMBERS,
            ))
        }
    };

    TokenStream::from(expanded)
}
