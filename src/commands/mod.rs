//! Command implementations
//!
//! Commands are organized into two categories:
//!
//! - `plumbing`: inspection commands for single building blocks (group spans, revisions)
//! - `porcelain`: user-facing output of a whole result page (table, filter summary)
//!
//! Plumbing commands expose the intermediate values that porcelain commands
//! compose into the rendered page.

pub mod plumbing;
pub mod porcelain;
