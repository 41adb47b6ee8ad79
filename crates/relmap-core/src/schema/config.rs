//! Strongly-typed generation configuration.
//!
//! The configuration is keyed by the *original* table name. A table with an
//! entry (even an empty one) is generated; a table without one exists in the
//! model but is left out of the output.
//!
//! ```json
//! {
//!     "tUsers": { "name": "User", "lowercase": true },
//!     "tRoles": { "name": "Role", "manyToOne": { "parentId": ["parent", "children"] } },
//!     "tRoleUsers": { "manyToMany": [["userId", "roles"], ["roleId", "users"]] }
//! }
//! ```

use crate::{err, Error, Result};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    pub tables: IndexMap<String, TableConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TableConfig {
    /// Output name of the entity. Defaults to the table name.
    #[serde(default)]
    pub name: Option<String>,

    /// Lower-case the first character of column names without an explicit
    /// rename.
    #[serde(default)]
    pub lowercase: bool,

    /// Column renames, original name to output name
    #[serde(default)]
    pub columns: IndexMap<String, String>,

    /// Explicit `[forward, reciprocal]` relation names, keyed by the
    /// original name of the foreign key column.
    #[serde(default)]
    pub many_to_one: IndexMap<String, (String, String)>,

    /// Marks the table as a junction table. Each entry is
    /// `[pivotColumn, propertyName]`, where `propertyName` is the collection
    /// exposed on the table `pivotColumn` references. The shape is checked
    /// when the configuration is applied to a model.
    #[serde(default)]
    pub many_to_many: Option<Vec<Vec<String>>>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(src: &str) -> Result<Config> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)
            .map_err(|e| Error::from(e).context(err!("reading {}", path.display())))?;
        Config::from_json(&src).map_err(|e| e.context(err!("parsing {}", path.display())))
    }

    /// Adds or replaces the entry for `table`.
    pub fn table(mut self, table: &str, config: TableConfig) -> Self {
        self.tables.insert(table.to_string(), config);
        self
    }

    pub fn get(&self, table: &str) -> Option<&TableConfig> {
        self.tables.get(table)
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn lowercase(mut self) -> Self {
        self.lowercase = true;
        self
    }

    pub fn column(mut self, from: &str, to: &str) -> Self {
        self.columns.insert(from.to_string(), to.to_string());
        self
    }

    pub fn many_to_one(mut self, column: &str, name: &str, ref_name: &str) -> Self {
        self.many_to_one
            .insert(column.to_string(), (name.to_string(), ref_name.to_string()));
        self
    }

    pub fn many_to_many(mut self, pivots: &[(&str, &str)]) -> Self {
        self.many_to_many = Some(
            pivots
                .iter()
                .map(|(column, name)| vec![column.to_string(), name.to_string()])
                .collect(),
        );
        self
    }

    /// Looks up the rename for `column`. An exact match wins over one that
    /// only differs in case.
    pub fn column_rename(&self, column: &str) -> Option<&str> {
        self.columns
            .get(column)
            .or_else(|| {
                self.columns
                    .iter()
                    .find(|(key, _)| std_util::str::eq_ignore_case(key, column))
                    .map(|(_, renamed)| renamed)
            })
            .map(String::as_str)
    }

    /// Looks up the explicit relation names for `column`, ignoring case.
    pub fn many_to_one_names(&self, column: &str) -> Option<&(String, String)> {
        self.many_to_one
            .iter()
            .find(|(key, _)| std_util::str::eq_ignore_case(key, column))
            .map(|(_, names)| names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config() {
        let config = Config::from_json(
            r#"{
                "tUsers": {"name": "User", "lowercase": true, "columns": {"ID": "id"}},
                "tRoleUsers": {"manyToMany": [["userId", "roles"], ["roleId", "users"]]},
                "tCities": {}
            }"#,
        )
        .unwrap();

        let users = config.get("tUsers").unwrap();
        assert_eq!(users.name.as_deref(), Some("User"));
        assert!(users.lowercase);
        assert_eq!(users.columns["ID"], "id");

        let junction = config.get("tRoleUsers").unwrap();
        let pivots = junction.many_to_many.as_ref().unwrap();
        assert_eq!(pivots[1], ["roleId", "users"]);

        assert_eq!(config.get("tCities"), Some(&TableConfig::default()));
        assert_eq!(
            config.tables.keys().collect::<Vec<_>>(),
            ["tUsers", "tRoleUsers", "tCities"]
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_json(r#"{"tUsers": {"nmae": "User"}}"#).unwrap_err();
        assert!(err.to_string().contains("nmae"));
    }

    #[test]
    fn many_to_many_entries_keep_their_shape() {
        let config = Config::from_json(
            r#"{"tRoleUsers": {"manyToMany": [["userId", "roles", "extra"], ["roleId"]]}}"#,
        )
        .unwrap();

        let junction = config.get("tRoleUsers").unwrap();
        let pivots = junction.many_to_many.as_ref().unwrap();
        assert_eq!(pivots[0].len(), 3);
        assert_eq!(pivots[1], ["roleId"]);
    }

    #[test]
    fn many_to_one_lookup_ignores_case() {
        let config = TableConfig::new().many_to_one("RoleId", "role", "users");
        assert_eq!(
            config.many_to_one_names("roleid"),
            Some(&("role".to_string(), "users".to_string()))
        );
    }
}
