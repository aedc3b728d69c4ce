use crate::artifacts::query::query_parameters::QueryParameters;
use crate::artifacts::rows::column::Column;
use bitflags::bitflags;

/// Match type that pins a column to a single value
const EXACT_MATCH: &str = "match";

bitflags! {
    /// Columns that carry the same value in every row of the result
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HiddenColumns: u8 {
        const REPOSITORY = 0b01;
        const BRANCH = 0b10;
    }
}

impl HiddenColumns {
    /// Hide columns that an exact-match filter already fixes
    pub fn from_query(params: &QueryParameters) -> Self {
        let mut hidden = HiddenColumns::empty();
        if Self::is_exact_filter(params, "branch") {
            hidden |= HiddenColumns::BRANCH;
        }
        if Self::is_exact_filter(params, "repository") {
            hidden |= HiddenColumns::REPOSITORY;
        }
        hidden
    }

    pub fn hides(&self, column: Column) -> bool {
        match column {
            Column::Repository => self.contains(HiddenColumns::REPOSITORY),
            Column::Branch => self.contains(HiddenColumns::BRANCH),
            Column::Timestamp
            | Column::Author
            | Column::File
            | Column::Revision
            | Column::Changes
            | Column::Description => false,
        }
    }

    /// Columns left to display, in wire order
    pub fn visible_columns(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|column| !self.hides(*column))
            .collect()
    }

    fn is_exact_filter(params: &QueryParameters, key: &str) -> bool {
        params.get(key).is_some() && params.match_type(key) == Some(EXACT_MATCH)
    }
}
