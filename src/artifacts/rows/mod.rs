//! Search result rows and their visual grouping
//!
//! - `row`: the positional commit-file record received from the search backend
//! - `column`: names for the positional fields of a row
//! - `group_span`: adjacency-based grouping of rows that belong to one commit

pub mod column;
pub mod group_span;
pub mod row;

/// Number of positional fields in a row on the wire
pub const ROW_WIDTH: usize = 8;

/// Number of timestamp characters compared when grouping (the calendar day)
pub const GROUP_DATE_LENGTH: usize = 10;

/// Number of timestamp characters shown in the table (date, hour and minute)
pub const DISPLAY_TIMESTAMP_LENGTH: usize = 16;
