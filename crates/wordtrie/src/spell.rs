// Spellcheck by longest matched prefix and subtree completion

use crate::trie::Trie;
use crate::words::Words;

/// Outcome of [`Trie::spellcheck`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Spelling {
    /// The whole word was walked and ends on a stored word.
    Correct,
    /// Stored words extending the longest matched prefix, in alphabet
    /// order. Empty when not even the first character matched.
    Suggestions(Vec<String>),
}

impl Spelling {
    pub fn is_correct(&self) -> bool {
        matches!(self, Spelling::Correct)
    }

    /// Suggested completions; empty for [`Spelling::Correct`].
    pub fn suggestions(&self) -> &[String] {
        match self {
            Spelling::Correct => &[],
            Spelling::Suggestions(words) => words,
        }
    }
}

impl Trie {
    /// Check `word` and, if it is not stored, complete the longest prefix
    /// of it that exists in the trie.
    ///
    /// A stored prefix of `word` is not a match: the walk has to consume
    /// every character and end on a terminal node. The walk stops at the
    /// first character with no child, including characters outside the
    /// alphabet.
    pub fn spellcheck(&self, word: &str) -> Spelling {
        let walk = self.walk(word);
        if walk.complete && walk.node.is_terminal() {
            return Spelling::Correct;
        }
        if walk.matched == 0 {
            return Spelling::Suggestions(Vec::new());
        }

        let prefix: String = word.chars().take(walk.matched).collect();
        let completions = Words::new(Some(walk.node), self.render(&prefix), self.case());
        Spelling::Suggestions(completions.collect())
    }
}
