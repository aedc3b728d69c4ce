//! Search query parameters
//!
//! - `query_parameters`: decoded query string
//! - `summary`: human-readable description of the active filters
//! - `hidden_columns`: columns made redundant by exact-match filters

pub mod hidden_columns;
pub mod query_parameters;
pub mod summary;

/// Suffix of the companion parameter that selects a filter's match type
pub const MATCH_TYPE_SUFFIX: &str = "type";
