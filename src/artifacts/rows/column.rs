use std::fmt;

/// Positional field of a result row
///
/// The discriminant is the field's index in the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Repository = 0,
    Timestamp = 1,
    Author = 2,
    File = 3,
    Revision = 4,
    Branch = 5,
    Changes = 6,
    Description = 7,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Repository,
        Column::Timestamp,
        Column::Author,
        Column::File,
        Column::Revision,
        Column::Branch,
        Column::Changes,
        Column::Description,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Header text used by the rendered result table
    pub fn label(self) -> &'static str {
        match self {
            Column::Repository => "Repository",
            Column::Timestamp => "Date",
            Column::Author => "Author",
            Column::File => "File",
            Column::Revision => "Rev",
            Column::Branch => "Branch",
            Column::Changes => "+/-",
            Column::Description => "Description",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
