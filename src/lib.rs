//! City Search Library
//!
//! Prefix search over a static set of short records such as city names. The
//! record set is indexed once into a [`PrefixTrie`] and then queried
//! repeatedly; each query returns up to a limit of original records whose text
//! starts with the query.
//!
//! # Architecture
//!
//! - `data_structures`: the trie, built once and read-only afterwards
//! - `search`: the breadth-first query engine and the linear-scan baseline
//! - `records`, `shell`: reading the record file and the console loop
//! - `config`, `error`, `timing`: ambient plumbing
//!
//! No global state: the trie, the records and the configuration are owned
//! values handed to the operations that need them.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod records;
pub mod search;
pub mod shell;
pub mod timing;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

pub use data_structures::prefix_trie::{PrefixTrie, TrieNode};
pub use search::{find_matches, LinearScan, PrefixSearch, SearchStrategy, TrieSearch, DEFAULT_LIMIT};

/// Version information for the city search engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
