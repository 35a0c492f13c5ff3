// wordtrie-shell: Run word index commands read from stdin.
//
// Reads one command per line and writes one reply line per command.
// See `wordtrie_cli::command` for the protocol.
//
// Usage:
//   wordtrie-shell [-c CORPUS] [OPTIONS]
//
// Options:
//   -c, --corpus PATH   Word list used by the `load` command
//   --upper             Print words in uppercase
//   -h, --help          Print help

use std::io;

use tracing::debug;
use wordtrie_cli::command::Session;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (corpus, args) = wordtrie_cli::parse_corpus_path(&args);

    if wordtrie_cli::wants_help(&args) {
        println!("wordtrie-shell: Run word index commands read from stdin.");
        println!();
        println!("Usage: wordtrie-shell [-c CORPUS] [OPTIONS]");
        println!();
        println!("Commands (one per line):");
        println!("  load               Load the corpus");
        println!("  i WORD             Insert a word");
        println!("  c PREFIX           Count words starting with PREFIX");
        println!("  e WORD             Erase a word");
        println!("  p                  Print all words");
        println!("  spellcheck WORD    Check a word or complete its longest known prefix");
        println!("  empty              Report whether the index is empty");
        println!("  clear              Remove every word");
        println!("  size               Report the number of words");
        println!("  exit               Quit");
        println!();
        println!("Options:");
        println!("  -c, --corpus PATH   Word list for `load` (default: $WORDTRIE_CORPUS or corpus.txt)");
        println!("  --upper             Print words in uppercase");
        println!("  -h, --help          Print this help");
        return;
    }

    wordtrie_cli::init_logging();

    let corpus = wordtrie_cli::resolve_corpus_path(corpus.as_deref());
    debug!(corpus = %corpus.display(), "starting shell");
    let mut session = Session::new(wordtrie_cli::new_trie(&args), corpus);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if let Err(e) = session.serve(stdin.lock(), &mut out, &mut io::stderr()) {
        wordtrie_cli::fatal(&format!("i/o failure: {e}"));
    }
}
