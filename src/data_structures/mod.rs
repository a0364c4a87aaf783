//! Data structures for the city search engine.
//!
//! Index structures are built once from the record set and never mutated
//! afterwards, so they are plain owned trees with no interior mutability.

pub mod prefix_trie;

pub use prefix_trie::{PrefixTrie, TrieNode};
