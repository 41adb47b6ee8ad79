use super::{Column, ColumnId};

use serde::Serialize;
use std::fmt;
use std_util::str;

/// A database table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    /// Uniquely identifies the table within the model
    pub id: TableId,

    /// Owning schema, e.g. `dbo`
    pub schema: String,

    /// Name of the table in the database
    pub name: String,

    pub description: Option<String>,

    /// The table's columns, in ordinal order
    pub columns: Vec<Column>,
}

/// Uniquely identifies a table
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize)]
pub struct TableId(pub usize);

impl Table {
    pub(crate) fn new(
        id: TableId,
        schema: String,
        name: String,
        description: Option<String>,
    ) -> Self {
        Self {
            id,
            schema,
            name,
            description,
            columns: vec![],
        }
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        assert_eq!(self.id, id.table);
        &self.columns[id.index]
    }

    /// Finds a column by name, ignoring case. Metadata views do not agree on
    /// the case of column names.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| str::eq_ignore_case(&column.name, name))
    }
}

impl TableId {
    /// Create a `ColumnId` representing the current table's column at index
    /// `index`.
    pub const fn column(self, index: usize) -> ColumnId {
        ColumnId { table: self, index }
    }
}

impl From<&Table> for TableId {
    fn from(value: &Table) -> Self {
        value.id
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}
