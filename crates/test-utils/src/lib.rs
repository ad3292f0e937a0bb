//! Shared test utilities for the Version Deck workspace

pub mod git_test_utils;

// No re-exports - import modules directly
