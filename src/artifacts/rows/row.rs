//! Commit-file record
//!
//! ## Format
//!
//! On the wire a row is a JSON array with positional fields:
//! ```text
//! [repository, timestamp, author, file, revision, branch, changes, description, ...]
//! ```
//!
//! Backends may append further columns (e.g. the repository root or the commit
//! hash); anything past the eighth field is ignored, and missing trailing
//! fields are empty. `null` becomes an empty field, numbers are kept in their
//! textual form and lists (the backend sends file and revision as one-element
//! lists) are joined with `,`.

use crate::artifacts::rows::ROW_WIDTH;
use crate::artifacts::rows::column::Column;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Vec<Value>")]
pub struct Row {
    fields: [String; ROW_WIDTH],
}

impl Row {
    /// Build a row from borrowed field values, in wire order
    pub fn from_fields(fields: [&str; ROW_WIDTH]) -> Self {
        Row {
            fields: fields.map(str::to_string),
        }
    }

    pub fn field(&self, column: Column) -> &str {
        &self.fields[column.index()]
    }

    pub fn repository(&self) -> &str {
        self.field(Column::Repository)
    }

    pub fn timestamp(&self) -> &str {
        self.field(Column::Timestamp)
    }

    pub fn author(&self) -> &str {
        self.field(Column::Author)
    }

    pub fn file(&self) -> &str {
        self.field(Column::File)
    }

    pub fn revision(&self) -> &str {
        self.field(Column::Revision)
    }

    pub fn branch(&self) -> &str {
        self.field(Column::Branch)
    }

    pub fn description(&self) -> &str {
        self.field(Column::Description)
    }

    fn field_from_value(value: Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s,
            Value::Array(values) => values
                .into_iter()
                .map(Self::field_from_value)
                .collect::<Vec<_>>()
                .join(","),
            other => other.to_string(),
        }
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        if values.len() < ROW_WIDTH {
            tracing::debug!(fields = values.len(), "padding short row");
        }

        let mut fields: [String; ROW_WIDTH] = Default::default();
        for (field, value) in fields.iter_mut().zip(values) {
            *field = Self::field_from_value(value);
        }

        Row { fields }
    }
}
