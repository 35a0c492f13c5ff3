//! In-memory word index over the 26-letter alphabet.
//!
//! Supports exact lookup, prefix counting, deletion with pruning of
//! unreachable nodes, lexicon enumeration and completion-based
//! spellchecking.
//!
//! # Architecture
//!
//! - [`node`] -- a single trie vertex with one owned slot per symbol
//! - [`trie`] -- the word index: insert, search, delete, count, clear
//! - [`words`] -- lazy lexicographic enumeration
//! - [`spell`] -- spellcheck by longest matched prefix
//! - [`loader`] -- bulk loading of word lists
//!
//! ```
//! use wordtrie::{Insertion, Spelling, Trie};
//!
//! let mut trie = Trie::new();
//! for word in ["cat", "car", "card"] {
//!     assert_eq!(trie.insert(word), Ok(Insertion::Added));
//! }
//! assert_eq!(trie.count_prefix("car"), 2);
//! assert!(trie.delete("car"));
//! assert_eq!(trie.len(), 2);
//! assert_eq!(trie.spellcheck("care"), Spelling::Suggestions(vec!["card".to_string()]));
//! ```

pub mod loader;
pub mod node;
pub mod spell;
pub mod trie;
pub mod words;

pub use loader::{LoadError, LoadReport, load_from_path, load_from_reader};
pub use node::Node;
pub use spell::Spelling;
pub use trie::{Insertion, Trie, TrieStats};
pub use words::Words;
pub use wordtrie_core::{AlphabetError, LetterCase};
