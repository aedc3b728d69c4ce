//! HTML rendering of a search result
//!
//! - `result_table`: the commit table with merged description cells

pub mod result_table;

use crate::artifacts::rows::column::Column;

/// Column whose cells are merged across the rows of one commit
pub const MERGED_COLUMN: Column = Column::Description;
