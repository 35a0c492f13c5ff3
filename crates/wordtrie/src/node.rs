// Trie vertex: one owned slot per alphabet symbol plus an end-of-word marker

use std::fmt;

use wordtrie_core::{ALPHABET_SIZE, LetterCase, Symbol};

/// A single trie vertex.
///
/// Each present child is exclusively owned by its parent slot; dropping a
/// node releases its whole subtree.
#[derive(Default)]
pub struct Node {
    children: [Option<Box<Node>>; ALPHABET_SIZE],
    terminal: bool,
}

impl Node {
    /// Whether the path from the root to this node spells a stored word.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Whether at least one child slot is occupied.
    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// Number of occupied child slots.
    pub fn child_count(&self) -> usize {
        self.children.iter().filter(|slot| slot.is_some()).count()
    }

    /// The child reached by `symbol`, if present.
    pub fn child(&self, symbol: Symbol) -> Option<&Node> {
        self.children[symbol.index()].as_deref()
    }

    /// Present children in alphabet order.
    pub fn children(&self) -> impl Iterator<Item = (Symbol, &Node)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| Some((Symbol::from_index(i)?, slot.as_deref()?)))
    }

    /// First present child whose symbol index is `>= from`.
    pub(crate) fn next_child(&self, from: usize) -> Option<(Symbol, &Node)> {
        self.children().find(|(symbol, _)| symbol.index() >= from)
    }

    /// Number of terminal nodes in this subtree, this node included.
    pub fn count_words(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += usize::from(node.terminal);
            stack.extend(node.children().map(|(_, child)| child));
        }
        count
    }

    pub(crate) fn set_terminal(&mut self, terminal: bool) {
        self.terminal = terminal;
    }

    pub(crate) fn child_mut(&mut self, symbol: Symbol) -> Option<&mut Node> {
        self.children[symbol.index()].as_deref_mut()
    }

    /// The child reached by `symbol`, created empty if missing.
    pub(crate) fn child_or_insert(&mut self, symbol: Symbol) -> &mut Node {
        self.children[symbol.index()].get_or_insert_with(Box::default)
    }

    /// Detach and drop the child reached by `symbol` together with its subtree.
    pub(crate) fn remove_child(&mut self, symbol: Symbol) {
        self.children[symbol.index()] = None;
    }
}

// Subtrees are released from an explicit stack; the default drop glue
// would recurse once per letter of the longest word.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

// Shallow: lists the child symbols instead of descending into them.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let children: String = self
            .children()
            .map(|(symbol, _)| symbol.to_char(LetterCase::Lower))
            .collect();
        f.debug_struct("Node")
            .field("terminal", &self.terminal)
            .field("children", &children)
            .finish()
    }
}
