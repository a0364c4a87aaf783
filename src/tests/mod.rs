//! Test modules for the city search engine.
//!
//! This module contains the cross-module tests:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Property-based tests for the trie and the query engine
//! - Shared strategies and fixtures

pub mod config_tests;
