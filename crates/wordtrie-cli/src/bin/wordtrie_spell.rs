// wordtrie-spell: Check words from stdin against a word list.
//
// Loads the corpus, then reads words from stdin (one per line):
//   C: word    (stored)
//   W: word    (not stored)
//   S: word    (completion, with -s)
//
// Usage:
//   wordtrie-spell [-c CORPUS] [OPTIONS]
//
// Options:
//   -c, --corpus PATH   Word list to check against
//   -s, --suggest       Also print completions for unknown words
//   --upper             Print suggestions in uppercase
//   -h, --help          Print help

use std::io::{self, BufRead, Write};

use tracing::info;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (corpus, args) = wordtrie_cli::parse_corpus_path(&args);

    if wordtrie_cli::wants_help(&args) {
        println!("wordtrie-spell: Check words from stdin against a word list.");
        println!();
        println!("Usage: wordtrie-spell [-c CORPUS] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (stored)");
        println!("  W: word    (not stored)");
        println!();
        println!("Options:");
        println!("  -c, --corpus PATH   Word list (default: $WORDTRIE_CORPUS or corpus.txt)");
        println!("  -s, --suggest       Also print completions for unknown words");
        println!("  --upper             Print suggestions in uppercase");
        println!("  -h, --help          Print this help");
        return;
    }

    wordtrie_cli::init_logging();

    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");

    let corpus = wordtrie_cli::resolve_corpus_path(corpus.as_deref());
    let mut trie = wordtrie_cli::new_trie(&args);
    let report = wordtrie_cli::load_corpus_or_exit(&mut trie, &corpus);
    info!(
        corpus = %corpus.display(),
        words = trie.len(),
        rejected = report.rejected,
        "corpus loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let spelling = trie.spellcheck(word);
        if spelling.is_correct() {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
            if show_suggestions {
                for suggestion in spelling.suggestions() {
                    let _ = writeln!(out, "S: {suggestion}");
                }
            }
        }
    }
}
