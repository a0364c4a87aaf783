//! Node implementation for the prefix trie.
//!
//! Each node owns its children outright, so the whole trie is a plain tree
//! dropped in one go together with its root.

/// A node in the prefix trie.
///
/// Children are kept in insertion order: the order in which each edge was
/// first created while building. Breadth-first collection walks them in that
/// order, which decides which records survive when a result limit is hit
/// partway through a level.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrieNode {
    /// Outgoing edges keyed by a single lower-cased character
    children: Vec<(char, TrieNode)>,

    /// Original record text if some record ends exactly here
    terminal_value: Option<String>,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            terminal_value: None,
        }
    }

    /// Returns the child reached over the edge labelled `c`, if there is one.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children
            .iter()
            .find(|(label, _)| *label == c)
            .map(|(_, node)| node)
    }

    /// Returns the child for `c`, creating an empty one at the end of the
    /// edge list when absent. The flag is `true` if the child was created.
    pub(crate) fn child_or_insert(&mut self, c: char) -> (&mut TrieNode, bool) {
        let (idx, created) = match self.children.iter().position(|(label, _)| *label == c) {
            Some(idx) => (idx, false),
            None => {
                self.children.push((c, TrieNode::new()));
                (self.children.len() - 1, true)
            }
        };
        (&mut self.children[idx].1, created)
    }

    /// Iterates over `(label, child)` pairs in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> + '_ {
        self.children.iter().map(|(label, node)| (*label, node))
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The original record stored at this node, if it is terminal.
    pub fn terminal_value(&self) -> Option<&str> {
        self.terminal_value.as_deref()
    }

    /// Whether a complete record ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal_value.is_some()
    }

    /// Stores `value` as this node's record, returning whatever it replaced.
    pub(crate) fn set_terminal_value(&mut self, value: String) -> Option<String> {
        self.terminal_value.replace(value)
    }
}
