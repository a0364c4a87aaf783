//! Prefix Trie Implementation
//!
//! A character trie over lower-cased record text. The trie is built once from
//! the full record set and is read-only afterwards; every terminal node keeps
//! the record exactly as it was supplied so matches come back un-normalized.

mod node;

pub use node::TrieNode;

/// A read-only prefix trie over a static record set.
///
/// Key features:
/// * Case-insensitive indexing, original text returned on match
/// * Last insertion wins when two records collide after lower-casing
/// * Deterministic child order (insertion order) for reproducible queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Number of terminal nodes
    len: usize,

    /// Number of nodes including the root
    node_count: usize,
}

impl PrefixTrie {
    /// Builds a trie from the full record set.
    ///
    /// Records may repeat, mix case, or be empty. An empty record marks the
    /// root itself as terminal. The build is total: no input can make it fail.
    ///
    /// # Arguments
    ///
    /// * `records` - The records to index, in insertion order.
    ///
    /// # Returns
    ///
    /// The populated trie.
    pub fn build<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::default();

        let mut inserted = 0usize;
        for record in records {
            trie.insert(record.as_ref());
            inserted += 1;
        }

        tracing::info!(
            records = inserted,
            distinct = trie.len,
            nodes = trie.node_count,
            "Prefix trie built"
        );

        trie
    }

    fn insert(&mut self, record: &str) {
        let lowered = record.to_lowercase();

        let mut node = &mut self.root;
        for c in lowered.chars() {
            let (next, created) = node.child_or_insert(c);
            if created {
                self.node_count += 1;
            }
            node = next;
        }

        if node.set_terminal_value(record.to_string()).is_none() {
            self.len += 1;
        }
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Walks from the root along `prefix`, one edge per character.
    ///
    /// `prefix` is matched as given against the lower-cased index; callers
    /// lower-case it first. Returns `None` as soon as an edge is missing.
    pub fn descend(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.child(c))
    }

    /// Whether `record` (after lower-casing) was inserted.
    pub fn contains(&self, record: &str) -> bool {
        self.descend(&record.to_lowercase())
            .map_or(false, TrieNode::is_terminal)
    }

    /// Number of distinct records, counting case-insensitive duplicates once.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no record was inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes including the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
            node_count: 1,
        }
    }
}
