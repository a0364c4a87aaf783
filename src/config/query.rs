//! Query configuration module.
//!
//! This module defines how queries are answered: which search strategy runs
//! and how many matches each query may return.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use crate::search::{SearchStrategy, DEFAULT_LIMIT};
use serde::{Deserialize, Serialize};

/// Query configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Maximum number of matches returned per query
    pub limit: usize,

    /// Upper bound accepted for `limit`
    pub max_limit: usize,

    /// Search implementation to use
    pub strategy: SearchStrategy,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            max_limit: 1000,
            strategy: SearchStrategy::default(),
        }
    }
}

impl Validate for QueryConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Validate max_limit
        if self.max_limit == 0 {
            return Err(ConfigError::ValidationError(
                "max_limit must be greater than 0".to_string(),
            ));
        }

        // A zero limit is allowed and simply yields no matches
        if self.limit > self.max_limit {
            return Err(ConfigError::ValueOutOfRange {
                key: "query.limit".to_string(),
                message: format!("{} exceeds max_limit {}", self.limit, self.max_limit),
            });
        }

        Ok(())
    }
}
