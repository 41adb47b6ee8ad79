use crate::{err, Error, Result};

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// The full result of one introspection run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowSet {
    #[serde(default)]
    pub tables: Vec<TableRow>,

    #[serde(default)]
    pub columns: Vec<ColumnRow>,

    #[serde(default)]
    pub primary_keys: Vec<KeyRow>,

    #[serde(default)]
    pub identities: Vec<KeyRow>,

    #[serde(default)]
    pub foreign_keys: Vec<ForeignKeyRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub schema: String,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRow {
    pub table: String,
    pub order: u32,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Native type name, e.g. `nvarchar`
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub precision: Option<u32>,

    #[serde(default)]
    pub scale: Option<u32>,

    /// Character length; `-1` for `max` columns.
    #[serde(default)]
    pub length: Option<i64>,

    /// Metadata views report this as `1`/`0` as often as `true`/`false`.
    #[serde(default, deserialize_with = "bool_or_int")]
    pub nullable: bool,

    #[serde(default)]
    pub default: Option<String>,

    /// Definition of a computed column
    #[serde(default)]
    pub computed: Option<String>,
}

/// A `(table, column)` pair flagging a primary key or identity column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyRow {
    pub table: String,
    pub column: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignKeyRow {
    pub table: String,
    pub column: String,
    pub ref_table: String,
    pub ref_column: String,
}

impl RowSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(src: &str) -> Result<RowSet> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<RowSet> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)
            .map_err(|e| Error::from(e).context(err!("reading {}", path.display())))?;
        RowSet::from_json(&src).map_err(|e| e.context(err!("parsing {}", path.display())))
    }

    pub fn table(mut self, schema: &str, name: &str) -> Self {
        self.tables.push(TableRow {
            schema: schema.to_string(),
            name: name.to_string(),
            description: None,
        });
        self
    }

    /// Appends a non-nullable column, numbering it after the table's
    /// existing columns.
    pub fn column(self, table: &str, name: &str, ty: &str) -> Self {
        self.push_column(table, name, ty, false)
    }

    pub fn nullable_column(self, table: &str, name: &str, ty: &str) -> Self {
        self.push_column(table, name, ty, true)
    }

    pub fn primary_key(mut self, table: &str, column: &str) -> Self {
        self.primary_keys.push(KeyRow::new(table, column));
        self
    }

    pub fn identity(mut self, table: &str, column: &str) -> Self {
        self.identities.push(KeyRow::new(table, column));
        self
    }

    /// Flags `column` as an auto-generated primary key.
    pub fn generated_key(self, table: &str, column: &str) -> Self {
        self.primary_key(table, column).identity(table, column)
    }

    pub fn foreign_key(
        mut self,
        table: &str,
        column: &str,
        ref_table: &str,
        ref_column: &str,
    ) -> Self {
        self.foreign_keys.push(ForeignKeyRow {
            table: table.to_string(),
            column: column.to_string(),
            ref_table: ref_table.to_string(),
            ref_column: ref_column.to_string(),
        });
        self
    }

    fn push_column(mut self, table: &str, name: &str, ty: &str, nullable: bool) -> Self {
        let order = self.columns.iter().filter(|c| c.table == table).count() as u32 + 1;
        self.columns.push(ColumnRow {
            table: table.to_string(),
            order,
            name: name.to_string(),
            description: None,
            ty: ty.to_string(),
            precision: None,
            scale: None,
            length: None,
            nullable,
            default: None,
            computed: None,
        });
        self
    }
}

impl KeyRow {
    pub fn new(table: &str, column: &str) -> Self {
        KeyRow {
            table: table.to_string(),
            column: column.to_string(),
        }
    }
}

fn bool_or_int<'de, D>(deserializer: D) -> core::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Int(value) => value != 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_row_set() {
        let rows = RowSet::from_json(
            r#"{
                "tables": [{"schema": "dbo", "name": "tUsers", "description": null}],
                "columns": [
                    {"table": "tUsers", "order": 1, "name": "id", "type": "int", "nullable": 0},
                    {"table": "tUsers", "order": 2, "name": "email", "type": "nvarchar", "length": 255, "nullable": 1}
                ],
                "primaryKeys": [{"table": "tUsers", "column": "id"}],
                "identities": [{"table": "tUsers", "column": "id"}]
            }"#,
        )
        .unwrap();

        assert_eq!(rows.tables.len(), 1);
        assert!(!rows.columns[0].nullable);
        assert!(rows.columns[1].nullable);
        assert_eq!(rows.columns[1].length, Some(255));
        assert!(rows.foreign_keys.is_empty());
    }

    #[test]
    fn builder_numbers_columns_per_table() {
        let rows = RowSet::new()
            .table("dbo", "a")
            .table("dbo", "b")
            .column("a", "id", "int")
            .column("b", "id", "int")
            .column("a", "name", "nvarchar");

        let orders: Vec<_> = rows.columns.iter().map(|c| (c.table.as_str(), c.order)).collect();
        assert_eq!(orders, [("a", 1), ("b", 1), ("a", 2)]);
    }
}
