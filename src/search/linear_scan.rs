//! Linear scan baseline.
//!
//! Filters the record list in file order and keeps the first `limit` hits.
//! O(total records) per query, but it needs no index and serves as the
//! reference the trie is checked and benchmarked against.

use super::PrefixSearch;

/// Prefix search by scanning every record in order.
///
/// Records are compared exactly as stored: the scan does not lower-case them,
/// so a lower-cased query only hits records that are lower-case at the prefix.
#[derive(Debug, Clone, Default)]
pub struct LinearScan {
    records: Vec<String>,
}

impl LinearScan {
    /// Creates a scanner over `records`, keeping their order.
    pub fn new(records: Vec<String>) -> Self {
        Self { records }
    }

    /// The records being scanned.
    pub fn records(&self) -> &[String] {
        &self.records
    }
}

impl PrefixSearch for LinearScan {
    fn name(&self) -> &'static str {
        "scan"
    }

    fn find_matches(&self, query: &str, limit: usize) -> Vec<String> {
        self.records
            .iter()
            .filter(|record| record.starts_with(query))
            .take(limit)
            .cloned()
            .collect()
    }
}
