// Trie: owns the root node and the stored word count

use tracing::{debug, trace};
use wordtrie_core::{AlphabetError, LetterCase, Symbol, symbols};

use crate::loader::LoadReport;
use crate::node::Node;
use crate::words::Words;

/// Outcome of [`Trie::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Insertion {
    /// The word was not stored before and is now.
    Added,
    /// The word was already stored; the trie is unchanged.
    AlreadyPresent,
}

/// Structural summary produced by [`Trie::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrieStats {
    /// Terminal nodes reachable from the root.
    pub words: usize,
    /// Nodes below the root.
    pub nodes: usize,
    /// Non-root nodes with no children that are not terminal. Always 0
    /// for a trie built through the public API.
    pub garbage_leaves: usize,
}

/// In-memory word index over the 26-letter alphabet.
///
/// The root is always present and never pruned. `len()` is maintained on
/// every mutation and always equals the number of terminal nodes.
#[derive(Debug, Default)]
pub struct Trie {
    root: Node,
    len: usize,
    case: LetterCase,
}

/// Where a walk along a word stopped.
pub(crate) struct Walk<'a> {
    /// Deepest node reached.
    pub node: &'a Node,
    /// Symbols consumed before the walk stopped.
    pub matched: usize,
    /// Whether every character of the word was consumed.
    pub complete: bool,
}

impl Trie {
    /// Create an empty trie rendering words in lowercase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty trie rendering words in the given case.
    pub fn with_case(case: LetterCase) -> Self {
        Self {
            case,
            ..Self::default()
        }
    }

    /// The case used when rendering enumerated words and suggestions.
    pub fn case(&self) -> LetterCase {
        self.case
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the root has no children.
    pub fn is_empty(&self) -> bool {
        !self.root.has_children()
    }

    /// Store `word`.
    ///
    /// Reports whether the word was newly added or already present. An
    /// empty word or a character outside the alphabet is rejected before
    /// any node is created.
    pub fn insert(&mut self, word: &str) -> Result<Insertion, AlphabetError> {
        let path = symbols(word)?;
        let node = path
            .iter()
            .fold(&mut self.root, |node, &symbol| node.child_or_insert(symbol));

        if node.is_terminal() {
            trace!(word, "insert: already present");
            return Ok(Insertion::AlreadyPresent);
        }
        node.set_terminal(true);
        self.len += 1;
        trace!(word, len = self.len, "insert: added");
        Ok(Insertion::Added)
    }

    /// Insert every word of `words`, tallying the outcomes.
    pub fn insert_all<'w, I>(&mut self, words: I) -> LoadReport
    where
        I: IntoIterator<Item = &'w str>,
    {
        let mut report = LoadReport::default();
        for word in words {
            report.record(word, self.insert(word));
        }
        report
    }

    /// Whether `word` is stored.
    pub fn search(&self, word: &str) -> bool {
        self.node(word).is_some_and(Node::is_terminal)
    }

    /// Remove `word`, pruning every node that is left childless and
    /// non-terminal. Returns `false` without touching the tree when the
    /// word is not stored.
    pub fn delete(&mut self, word: &str) -> bool {
        let Ok(path) = symbols(word) else {
            return false;
        };
        let found = remove(&mut self.root, &path);
        if found {
            self.len -= 1;
        }
        trace!(word, found, len = self.len, "delete");
        found
    }

    /// Number of stored words starting with `prefix`, `prefix` itself
    /// included. The empty prefix counts every word.
    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.node(prefix).map_or(0, Node::count_words)
    }

    /// All stored words in lexicographic order.
    pub fn words(&self) -> Words<'_> {
        Words::new(Some(&self.root), String::new(), self.case)
    }

    /// Stored words starting with `prefix`, in lexicographic order.
    pub fn words_with_prefix(&self, prefix: &str) -> Words<'_> {
        match self.node(prefix) {
            Some(node) => Words::new(Some(node), self.render(prefix), self.case),
            None => Words::new(None, String::new(), self.case),
        }
    }

    /// Number of leading characters of `word` that exist as a path.
    pub fn longest_matched_prefix(&self, word: &str) -> usize {
        self.walk(word).matched
    }

    /// Drop every node and start over with a fresh root.
    pub fn clear(&mut self) {
        debug!(words = self.len, "clearing trie");
        self.root = Node::default();
        self.len = 0;
    }

    /// The node at the end of `prefix`, if that path exists. The empty
    /// prefix yields the root.
    pub fn node(&self, prefix: &str) -> Option<&Node> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.child(Symbol::from_char(c)?))
    }

    /// Walk the whole tree and summarize its shape.
    pub fn stats(&self) -> TrieStats {
        let mut stats = TrieStats::default();
        let mut stack: Vec<&Node> = self.root.children().map(|(_, child)| child).collect();
        while let Some(node) = stack.pop() {
            stats.nodes += 1;
            if node.is_terminal() {
                stats.words += 1;
            } else if !node.has_children() {
                stats.garbage_leaves += 1;
            }
            stack.extend(node.children().map(|(_, child)| child));
        }
        stats
    }

    /// Follow `word` from the root until a character is missing or
    /// outside the alphabet.
    pub(crate) fn walk(&self, word: &str) -> Walk<'_> {
        let mut node = &self.root;
        let mut matched = 0;
        for c in word.chars() {
            match Symbol::from_char(c).and_then(|symbol| node.child(symbol)) {
                Some(child) => {
                    node = child;
                    matched += 1;
                }
                None => {
                    return Walk {
                        node,
                        matched,
                        complete: false,
                    };
                }
            }
        }
        Walk {
            node,
            matched,
            complete: true,
        }
    }

    /// Re-spell the alphabet characters of `text` in the trie's case.
    pub(crate) fn render(&self, text: &str) -> String {
        text.chars()
            .filter_map(Symbol::from_char)
            .map(|symbol| symbol.to_char(self.case))
            .collect()
    }
}

/// Unmark the word spelled by `path` below `root`. Returns `false` if it
/// is not stored.
///
/// The tail of the path that would be left childless and non-terminal is
/// cut off at its highest node. Pruning therefore stops below the first
/// terminal or branching ancestor, and never removes the root.
fn remove(root: &mut Node, path: &[Symbol]) -> bool {
    // Nodes along the path, root first.
    let mut trail = Vec::with_capacity(path.len() + 1);
    let mut node = &*root;
    trail.push(node);
    for &symbol in path {
        let Some(child) = node.child(symbol) else {
            return false;
        };
        node = child;
        trail.push(node);
    }
    if !node.is_terminal() {
        return false;
    }

    // Shallowest depth whose node, and everything below it on the path,
    // exists only for this word.
    let mut cut = None;
    if !node.has_children() {
        cut = Some(path.len());
        for depth in (1..path.len()).rev() {
            let ancestor = trail[depth];
            if ancestor.is_terminal() || ancestor.child_count() > 1 {
                break;
            }
            cut = Some(depth);
        }
    }

    match cut {
        Some(depth) => {
            if let Some(parent) = descend_mut(root, &path[..depth - 1]) {
                parent.remove_child(path[depth - 1]);
            }
        }
        None => {
            if let Some(last) = descend_mut(root, path) {
                last.set_terminal(false);
            }
        }
    }
    true
}

/// The node at the end of `path`, if that path exists.
fn descend_mut<'a>(node: &'a mut Node, path: &[Symbol]) -> Option<&'a mut Node> {
    path.iter()
        .try_fold(node, |node, &symbol| node.child_mut(symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_with(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for w in words {
            assert_eq!(trie.insert(w), Ok(Insertion::Added), "{w}");
        }
        trie
    }

    #[test]
    fn new_trie_is_empty() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
        assert_eq!(trie.case(), LetterCase::Lower);
        assert_eq!(trie.stats(), TrieStats::default());
    }

    #[test]
    fn insert_then_search() {
        let trie = trie_with(&["cat", "car", "cart", "dog"]);
        assert!(trie.search("cat"));
        assert!(trie.search("cart"));
        assert!(trie.search("dog"));
        assert!(!trie.search("ca"));
        assert!(!trie.search("do"));
        assert!(!trie.search("dogs"));
        assert!(!trie.search(""));
        assert_eq!(trie.len(), 4);
    }

    #[test]
    fn insert_duplicate_reports_already_present() {
        let mut trie = trie_with(&["car"]);
        assert_eq!(trie.insert("car"), Ok(Insertion::AlreadyPresent));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn insert_prefix_of_existing_word_is_added() {
        // The path already exists but is not terminal yet.
        let mut trie = trie_with(&["card"]);
        assert_eq!(trie.insert("car"), Ok(Insertion::Added));
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.stats().nodes, 4);
    }

    #[test]
    fn insert_is_case_insensitive() {
        let mut trie = trie_with(&["CAT"]);
        assert!(trie.search("cat"));
        assert!(trie.search("Cat"));
        assert_eq!(trie.insert("cat"), Ok(Insertion::AlreadyPresent));
    }

    #[test]
    fn insert_rejects_invalid_words_without_mutation() {
        let mut trie = Trie::new();
        assert_eq!(trie.insert(""), Err(AlphabetError::Empty));
        assert_eq!(
            trie.insert("ab3"),
            Err(AlphabetError::InvalidSymbol {
                ch: '3',
                position: 2
            })
        );
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
    }

    #[test]
    fn search_with_foreign_characters_is_false() {
        let trie = trie_with(&["cat"]);
        assert!(!trie.search("c-t"));
        assert!(!trie.search("cät"));
    }

    #[test]
    fn delete_missing_word_is_noop() {
        let mut trie = trie_with(&["cat", "car"]);
        let before = trie.stats();
        assert!(!trie.delete("cow"));
        assert!(!trie.delete("ca"));
        assert!(!trie.delete("cats"));
        assert!(!trie.delete(""));
        assert!(!trie.delete("c4t"));
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.stats(), before);
    }

    #[test]
    fn delete_prefix_word_keeps_longer_word() {
        let mut trie = trie_with(&["car", "cars"]);
        assert!(trie.delete("car"));
        assert!(!trie.search("car"));
        assert!(trie.search("cars"));
        assert_eq!(trie.len(), 1);
        // The c-a-r path is retained because it still leads to "cars".
        let car = trie.node("car").unwrap();
        assert!(!car.is_terminal());
        assert!(car.has_children());
        assert_eq!(trie.stats().nodes, 4);
    }

    #[test]
    fn delete_longer_word_prunes_up_to_terminal_ancestor() {
        let mut trie = trie_with(&["car", "cards"]);
        assert!(trie.delete("cards"));
        assert!(trie.search("car"));
        assert!(trie.node("card").is_none());
        assert!(!trie.node("car").unwrap().has_children());
        let stats = trie.stats();
        assert_eq!(stats.nodes, 3);
        assert_eq!(stats.garbage_leaves, 0);
    }

    #[test]
    fn delete_prunes_up_to_branching_ancestor() {
        let mut trie = trie_with(&["cat", "card"]);
        assert!(trie.delete("card"));
        assert!(trie.search("cat"));
        assert!(trie.node("car").is_none());
        assert!(trie.node("ca").is_some());
        assert_eq!(trie.stats().nodes, 3);
    }

    #[test]
    fn delete_unshared_word_empties_trie() {
        let mut trie = trie_with(&["word"]);
        assert!(trie.delete("word"));
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
        assert_eq!(trie.stats().nodes, 0);
        assert!(trie.node("").is_some());
    }

    #[test]
    fn delete_twice_fails_second_time() {
        let mut trie = trie_with(&["cat"]);
        assert!(trie.delete("CAT"));
        assert!(!trie.delete("cat"));
        assert_eq!(trie.len(), 0);
    }

    #[test]
    fn count_prefix_example() {
        let trie = trie_with(&["CAT", "CAR", "CARD"]);
        assert_eq!(trie.count_prefix("CA"), 3);
        assert_eq!(trie.count_prefix("CAR"), 2);
        assert_eq!(trie.count_prefix("CARD"), 1);
        assert_eq!(trie.count_prefix("CARDS"), 0);
        assert_eq!(trie.count_prefix("X"), 0);
        assert_eq!(trie.count_prefix("C?"), 0);
        assert_eq!(trie.count_prefix(""), trie.len());
    }

    #[test]
    fn delete_example() {
        let mut trie = trie_with(&["CAT", "CAR", "CARD"]);
        assert!(trie.delete("CAR"));
        assert!(!trie.search("CAR"));
        assert!(trie.search("CARD"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn words_are_lexicographic() {
        let trie = trie_with(&["dog", "cat", "car", "a", "cart"]);
        let words: Vec<String> = trie.words().collect();
        assert_eq!(words, vec!["a", "car", "cart", "cat", "dog"]);
    }

    #[test]
    fn words_render_in_configured_case() {
        let mut trie = Trie::with_case(LetterCase::Upper);
        trie.insert("cat").unwrap();
        trie.insert("Cow").unwrap();
        let words: Vec<String> = trie.words().collect();
        assert_eq!(words, vec!["CAT", "COW"]);
    }

    #[test]
    fn words_with_prefix_scopes_subtree() {
        let trie = trie_with(&["car", "card", "care", "cat", "dog"]);
        let words: Vec<String> = trie.words_with_prefix("CAR").collect();
        assert_eq!(words, vec!["car", "card", "care"]);
        assert_eq!(trie.words_with_prefix("x").count(), 0);
        assert_eq!(trie.words_with_prefix("").count(), 5);
    }

    #[test]
    fn longest_matched_prefix_stops_at_first_miss() {
        let trie = trie_with(&["card"]);
        assert_eq!(trie.longest_matched_prefix("care"), 3);
        assert_eq!(trie.longest_matched_prefix("card"), 4);
        assert_eq!(trie.longest_matched_prefix("cards"), 4);
        assert_eq!(trie.longest_matched_prefix("xyz"), 0);
        assert_eq!(trie.longest_matched_prefix("c1rd"), 1);
        assert_eq!(trie.longest_matched_prefix(""), 0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut trie = trie_with(&["one", "two", "three"]);
        trie.clear();
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
        assert_eq!(trie.words().count(), 0);
        // Clearing twice is harmless and the trie stays usable.
        trie.clear();
        assert_eq!(trie.insert("one"), Ok(Insertion::Added));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn insert_all_tallies_outcomes() {
        let mut trie = Trie::new();
        let report = trie.insert_all(["cat", "dog", "cat", "d0g", ""]);
        assert_eq!(report.added, 2);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.rejected, 2);
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn very_long_word_is_handled_without_recursion() {
        let long = "a".repeat(200_000);
        let mut trie = trie_with(&["aaa"]);
        assert_eq!(trie.insert(&long), Ok(Insertion::Added));
        assert!(trie.search(&long));
        assert_eq!(trie.count_prefix("a"), 2);
        assert_eq!(trie.count_prefix(""), 2);
        assert_eq!(trie.stats().nodes, 200_000);
        assert_eq!(trie.words().map(|w| w.len()).collect::<Vec<_>>(), vec![3, 200_000]);
        assert!(trie.spellcheck(&long).is_correct());

        // Pruning stops below the stored "aaa".
        assert!(trie.delete(&long));
        assert!(!trie.search(&long));
        assert!(trie.search("aaa"));
        assert_eq!(trie.stats().nodes, 3);
        assert_eq!(trie.len(), 1);

        trie.insert(&long).unwrap();
        trie.clear();
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);

        // Dropping a trie that still holds the word.
        trie.insert(&long).unwrap();
        drop(trie);
    }

    #[test]
    fn delete_long_word_sharing_prefix_with_branch() {
        let mut trie = trie_with(&["abx"]);
        let long = format!("ab{}", "c".repeat(50_000));
        trie.insert(&long).unwrap();
        assert!(trie.delete(&long));
        assert!(trie.node("abc").is_none());
        assert_eq!(trie.node("ab").map(Node::child_count), Some(1));
        assert_eq!(trie.stats().garbage_leaves, 0);
    }

    #[test]
    fn stats_match_len() {
        let mut trie = trie_with(&["a", "ab", "abc", "b", "ba"]);
        trie.delete("ab");
        trie.delete("b");
        let stats = trie.stats();
        assert_eq!(stats.words, trie.len());
        assert_eq!(stats.garbage_leaves, 0);
        assert_eq!(stats.nodes, 5);
    }
}
