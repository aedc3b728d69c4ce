//! Search result data structures and algorithms
//!
//! This module contains the core types and algorithms of the result page:
//!
//! - `config`: repository URL templates and the search payload
//! - `core`: shared utilities (escaping, truncation, pager wrapper)
//! - `links`: URL templating and per-column cell formatting
//! - `query`: query parameters, filter summary and hidden columns
//! - `revision`: source-control dialects and derived revisions
//! - `rows`: result rows and their grouping into commits
//! - `table`: HTML rendering of the result table

pub mod config;
pub mod core;
pub mod links;
pub mod query;
pub mod revision;
pub mod rows;
pub mod table;
