//! Page-level components
//!
//! - `search_page`: the loaded search result, the active query and the output writer
//!   that all commands operate on

pub mod search_page;
