//! Prefix query engine.
//!
//! Queries descend the trie along the query's characters and then collect
//! terminal nodes breadth-first below the descent point. Breadth-first is a
//! ranking policy, not an optimality guarantee: it surfaces shorter, more
//! general completions before deep suffixes, and it decides which records are
//! dropped when the limit cuts a level in half.

mod linear_scan;

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::data_structures::prefix_trie::{PrefixTrie, TrieNode};

pub use linear_scan::LinearScan;

/// Number of matches returned when the caller does not ask for another limit.
pub const DEFAULT_LIMIT: usize = 10;

/// Finds up to `limit` records starting with `query`.
///
/// `query` must already be lower-cased: it is matched as-is against the
/// lower-cased index. The returned strings are the original records in
/// breadth-first visitation order, each terminal node yielding at most one.
///
/// # Arguments
///
/// * `trie` - The trie to search.
/// * `query` - The lower-cased prefix.
/// * `limit` - Maximum number of matches.
///
/// # Returns
///
/// The matches; empty when the prefix is unknown or `limit` is zero.
pub fn find_matches(trie: &PrefixTrie, query: &str, limit: usize) -> Vec<String> {
    if limit == 0 {
        return Vec::new();
    }

    let start = match trie.descend(query) {
        Some(node) => node,
        None => {
            tracing::trace!(query, "No node for prefix");
            return Vec::new();
        }
    };

    collect_breadth_first(start, limit)
}

fn collect_breadth_first(start: &TrieNode, limit: usize) -> Vec<String> {
    let mut result = Vec::new();
    let mut frontier = VecDeque::new();
    frontier.push_back(start);

    while result.len() < limit {
        let Some(node) = frontier.pop_front() else {
            break;
        };

        frontier.extend(node.children().map(|(_, child)| child));

        if let Some(value) = node.terminal_value() {
            result.push(value.to_string());
        }
    }

    result
}

/// A source of prefix matches.
pub trait PrefixSearch {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns up to `limit` records matching the lower-cased `query`.
    fn find_matches(&self, query: &str, limit: usize) -> Vec<String>;
}

/// [`PrefixSearch`] backed by a [`PrefixTrie`].
#[derive(Debug, Clone, Default)]
pub struct TrieSearch {
    trie: PrefixTrie,
}

impl TrieSearch {
    /// Builds the trie from `records`.
    pub fn build<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            trie: PrefixTrie::build(records),
        }
    }

    /// The underlying trie.
    pub fn trie(&self) -> &PrefixTrie {
        &self.trie
    }
}

impl From<PrefixTrie> for TrieSearch {
    fn from(trie: PrefixTrie) -> Self {
        Self { trie }
    }
}

impl PrefixSearch for TrieSearch {
    fn name(&self) -> &'static str {
        "trie"
    }

    fn find_matches(&self, query: &str, limit: usize) -> Vec<String> {
        find_matches(&self.trie, query, limit)
    }
}

/// Which [`PrefixSearch`] implementation to run queries against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    /// Breadth-first trie search
    #[default]
    Trie,

    /// Linear scan over the records in file order
    Scan,
}

impl SearchStrategy {
    /// Builds the searcher for this strategy from the loaded records.
    pub fn build(self, records: Vec<String>) -> Box<dyn PrefixSearch> {
        match self {
            SearchStrategy::Trie => Box::new(TrieSearch::build(&records)),
            SearchStrategy::Scan => Box::new(LinearScan::new(records)),
        }
    }
}
