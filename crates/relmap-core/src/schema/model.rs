use super::{Column, ColumnId, Table, TableId};

use serde::Serialize;

/// Raw table/column graph assembled from introspected rows.
///
/// Tables and columns live in an arena and reference each other through
/// [`TableId`] and [`ColumnId`], so relation edges never alias the objects
/// they point at.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Model {
    pub tables: Vec<Table>,
}

impl Model {
    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        &self.tables[id.into().0]
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        &self.tables[id.table.0].columns[id.index]
    }

    pub fn column_mut(&mut self, id: impl Into<ColumnId>) -> &mut Column {
        let id = id.into();
        &mut self.tables[id.table.0].columns[id.index]
    }

    /// Finds a table by its exact (case-sensitive) name.
    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }

    pub fn table_ids(&self) -> impl ExactSizeIterator<Item = TableId> {
        (0..self.tables.len()).map(TableId)
    }
}
