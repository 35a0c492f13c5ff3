// wordtrie-cli: shared utilities for CLI tools.

pub mod command;

use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;
use wordtrie::{LetterCase, LoadReport, Trie};

/// Corpus file looked up in the working directory when nothing else is set.
pub const DEFAULT_CORPUS: &str = "corpus.txt";

/// Environment variable naming the corpus file.
pub const CORPUS_ENV: &str = "WORDTRIE_CORPUS";

/// Parse a `--corpus=PATH`, `--corpus PATH` or `-c PATH` argument.
///
/// Returns `(corpus_path, remaining_args)`.
pub fn parse_corpus_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut corpus = None;
    let mut remaining = Vec::new();
    let mut args = args.iter();

    while let Some(arg) = args.next() {
        if let Some(val) = arg.strip_prefix("--corpus=") {
            corpus = Some(val.to_string());
        } else if arg == "--corpus" || arg == "-c" {
            match args.next() {
                Some(val) => corpus = Some(val.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (corpus, remaining)
}

/// Pick the corpus file.
///
/// Search order:
/// 1. `corpus` argument (if provided)
/// 2. `WORDTRIE_CORPUS` environment variable
/// 3. `corpus.txt` in the current working directory
pub fn resolve_corpus_path(corpus: Option<&str>) -> PathBuf {
    if let Some(p) = corpus {
        return PathBuf::from(p);
    }
    if let Ok(env_path) = std::env::var(CORPUS_ENV) {
        if !env_path.is_empty() {
            return PathBuf::from(env_path);
        }
    }
    PathBuf::from(DEFAULT_CORPUS)
}

/// Create an empty trie in the case requested by `--upper`.
pub fn new_trie(args: &[String]) -> Trie {
    if wants_upper(args) {
        Trie::with_case(LetterCase::Upper)
    } else {
        Trie::new()
    }
}

/// Load the corpus at `path` into `trie`, exiting on failure.
pub fn load_corpus_or_exit(trie: &mut Trie, path: &std::path::Path) -> LoadReport {
    wordtrie::load_from_path(trie, path).unwrap_or_else(|e| fatal(&e.to_string()))
}

/// Install the stderr log subscriber. Verbosity comes from `RUST_LOG`,
/// defaulting to `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Check if `--upper` is in the args.
pub fn wants_upper(args: &[String]) -> bool {
    args.iter().any(|a| a == "--upper")
}
