use super::{Column, ColumnId, Model, Ref, Table, TableId};
use crate::introspect::{ColumnRow, ForeignKeyRow, Introspect, KeyRow, RowSet, TableRow};
use crate::{Error, Result};

use indexmap::IndexMap;
use tracing::{debug, warn};

/// Assembles a raw [`Model`] from introspected rows.
#[derive(Debug)]
pub struct Builder {
    /// Tables skipped entirely, along with every row that mentions them
    excluded_tables: Vec<String>,
}

/// Used to track state during the build process
struct BuildModel<'a> {
    /// Build options
    builder: &'a Builder,

    /// Maps table names to identifiers.
    table_lookup: IndexMap<String, TableId>,

    /// Tables as they are built
    tables: Vec<Table>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            excluded_tables: vec!["sysdiagrams".to_string()],
        }
    }

    pub fn exclude_table(&mut self, name: &str) -> &mut Self {
        self.excluded_tables.push(name.to_string());
        self
    }

    /// Fetches all row sets from `source` and builds the model.
    pub async fn introspect(&self, source: &dyn Introspect) -> Result<Model> {
        let rows = RowSet {
            tables: source.tables().await?,
            columns: source.columns().await?,
            primary_keys: source.primary_keys().await?,
            identities: source.identities().await?,
            foreign_keys: source.foreign_keys().await?,
        };

        self.build(&rows)
    }

    pub fn build(&self, rows: &RowSet) -> Result<Model> {
        let mut builder = BuildModel {
            builder: self,
            table_lookup: IndexMap::new(),
            tables: vec![],
        };

        for row in &rows.tables {
            builder.build_table(row)?;
        }

        for row in &rows.columns {
            builder.build_column(row)?;
        }

        // Rows usually arrive in ordinal order, but the ids handed out below
        // must follow it regardless.
        for table in &mut builder.tables {
            table.columns.sort_by_key(|column| column.order);
            for (index, column) in table.columns.iter_mut().enumerate() {
                column.id = table.id.column(index);
            }
        }

        for row in &rows.primary_keys {
            if let Some(id) = builder.key_column(row, "primary key")? {
                builder.column_mut(id).primary = true;
            }
        }

        for row in &rows.identities {
            if let Some(id) = builder.key_column(row, "identity")? {
                builder.column_mut(id).identity = true;
            }
        }

        for row in &rows.foreign_keys {
            builder.build_foreign_key(row)?;
        }

        debug!(tables = builder.tables.len(), "assembled raw model");

        Ok(Model {
            tables: builder.tables,
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildModel<'_> {
    fn is_excluded(&self, table: &str) -> bool {
        self.builder.excluded_tables.iter().any(|name| name == table)
    }

    fn build_table(&mut self, row: &TableRow) -> Result<()> {
        if self.is_excluded(&row.name) {
            return Ok(());
        }

        if self.table_lookup.contains_key(&row.name) {
            return Err(Error::invalid_model(format!(
                "table `{}` is listed more than once",
                row.name
            )));
        }

        let id = TableId(self.tables.len());
        self.table_lookup.insert(row.name.clone(), id);
        self.tables.push(Table::new(
            id,
            row.schema.clone(),
            row.name.clone(),
            row.description.clone(),
        ));

        Ok(())
    }

    fn build_column(&mut self, row: &ColumnRow) -> Result<()> {
        if self.is_excluded(&row.table) {
            return Ok(());
        }

        let table_id = self.table_id(&row.table, "column")?;
        let table = &mut self.tables[table_id.0];

        if table.column_by_name(&row.name).is_some() {
            return Err(Error::invalid_model(format!(
                "column `{}.{}` is listed more than once",
                row.table, row.name
            )));
        }

        // Indices are reassigned once all columns are sorted.
        let id = table_id.column(table.columns.len());
        table.columns.push(Column {
            id,
            name: row.name.clone(),
            order: row.order,
            description: row.description.clone(),
            ty: row.ty.clone(),
            precision: row.precision,
            scale: row.scale,
            length: row.length,
            nullable: row.nullable,
            default: row.default.clone(),
            computed: row.computed.clone(),
            primary: false,
            identity: false,
            many_to_one: None,
            one_to_many: vec![],
        });

        Ok(())
    }

    fn build_foreign_key(&mut self, row: &ForeignKeyRow) -> Result<()> {
        if self.is_excluded(&row.table) || self.is_excluded(&row.ref_table) {
            return Ok(());
        }

        let source = self.column_id(&row.table, &row.column, "foreign key")?;
        let target = self.column_id(&row.ref_table, &row.ref_column, "foreign key target")?;

        if let Some(existing) = &self.column(source).many_to_one {
            let existing = self.column(existing.column);
            warn!(
                table = %row.table,
                column = %row.column,
                kept = %existing.name,
                "column carries more than one foreign key; keeping the first"
            );
            return Ok(());
        }

        self.column_mut(source).many_to_one = Some(Ref::new(target));
        self.column_mut(target).one_to_many.push(Ref::new(source));

        Ok(())
    }

    fn key_column(&self, row: &KeyRow, what: &str) -> Result<Option<ColumnId>> {
        if self.is_excluded(&row.table) {
            return Ok(None);
        }

        self.column_id(&row.table, &row.column, what).map(Some)
    }

    fn table_id(&self, name: &str, what: &str) -> Result<TableId> {
        self.table_lookup.get(name).copied().ok_or_else(|| {
            Error::invalid_model(format!("{what} row references unknown table `{name}`"))
        })
    }

    fn column_id(&self, table: &str, column: &str, what: &str) -> Result<ColumnId> {
        let table_id = self.table_id(table, what)?;

        self.tables[table_id.0]
            .column_by_name(column)
            .map(|column| column.id)
            .ok_or_else(|| {
                Error::invalid_model(format!(
                    "{what} row references unknown column `{table}.{column}`"
                ))
            })
    }

    fn column(&self, id: ColumnId) -> &Column {
        &self.tables[id.table.0].columns[id.index]
    }

    fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        &mut self.tables[id.table.0].columns[id.index]
    }
}
