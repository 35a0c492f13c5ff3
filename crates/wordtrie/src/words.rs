// Lazy depth-first enumeration of stored words

use std::iter::FusedIterator;

use wordtrie_core::LetterCase;

use crate::node::Node;

/// One level of the explicit DFS stack.
#[derive(Debug)]
struct Frame<'a> {
    node: &'a Node,
    /// Lowest child index not yet descended into.
    next: usize,
    /// Whether this node's own word has been considered.
    visited: bool,
}

impl<'a> Frame<'a> {
    fn new(node: &'a Node) -> Self {
        Self {
            node,
            next: 0,
            visited: false,
        }
    }
}

/// Iterator over the words stored below a node, in alphabet order.
///
/// Created by [`Trie::words`](crate::Trie::words) and
/// [`Trie::words_with_prefix`](crate::Trie::words_with_prefix). The trie is
/// borrowed for the iterator's lifetime, so asking again always replays
/// the same sequence.
#[derive(Debug)]
pub struct Words<'a> {
    stack: Vec<Frame<'a>>,
    /// Spelling of the path to the top frame.
    buffer: String,
    case: LetterCase,
}

impl<'a> Words<'a> {
    pub(crate) fn new(start: Option<&'a Node>, prefix: String, case: LetterCase) -> Self {
        Self {
            stack: start.map(Frame::new).into_iter().collect(),
            buffer: prefix,
            case,
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let frame = self.stack.last_mut()?;
            let node = frame.node;

            if !frame.visited {
                frame.visited = true;
                if node.is_terminal() {
                    return Some(self.buffer.clone());
                }
            }

            match node.next_child(frame.next) {
                Some((symbol, child)) => {
                    frame.next = symbol.index() + 1;
                    self.buffer.push(symbol.to_char(self.case));
                    self.stack.push(Frame::new(child));
                }
                None => {
                    self.stack.pop();
                    // The starting frame owns the prefix, not a pushed symbol.
                    if !self.stack.is_empty() {
                        self.buffer.pop();
                    }
                }
            }
        }
    }
}

impl FusedIterator for Words<'_> {}
