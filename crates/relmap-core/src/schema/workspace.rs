use super::{Association, ColumnId, Config, Model, Names, Table, TableConfig, TableId};
use crate::{Entity, Error, Result};

use indexmap::IndexMap;
use std_util::str;
use tracing::{debug, warn};

/// Mutable working copy of a [`Model`] for one generation run.
///
/// Created by [`Workspace::project`], then refined in place by
/// [`reconstruct_many_to_many`](Workspace::reconstruct_many_to_many) and
/// [`resolve_associations`](Workspace::resolve_associations) before
/// [`entities`](Workspace::entities) projects it for emission.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Copy of the raw model. Relation edges are updated in place.
    pub model: Model,

    /// Output-facing view of each table, indexed by `TableId`
    pub tables: Vec<TableMapping>,

    /// Property names in use, per included table
    pub names: Names,
}

/// Output-facing view of a single table.
#[derive(Debug, Clone)]
pub struct TableMapping {
    pub id: TableId,

    /// Original table name
    pub entity: String,

    /// Projected name
    pub name: String,

    /// Configuration entry, if the table is generated
    pub config: Option<TableConfig>,

    /// Projected column names, indexed like `Table::columns`
    pub columns: Vec<String>,

    /// Many-to-many associations exposed by this table
    pub many_to_many: Vec<Association>,
}

impl Workspace {
    /// Applies `config`'s renames and inclusion rules to a copy of `model`.
    ///
    /// The configuration is checked against the model before anything else
    /// runs: unknown columns, malformed `manyToMany` entries and clashing
    /// entity names are reported here.
    pub fn project(model: &Model, config: &Config) -> Result<Workspace> {
        for key in config.tables.keys() {
            if model.table_by_name(key).is_none() {
                warn!(table = %key, "configuration entry matches no table; ignoring");
            }
        }

        let mut workspace = Workspace {
            model: model.clone(),
            tables: Vec::with_capacity(model.tables.len()),
            names: Names::new(),
        };

        let mut projected: IndexMap<String, TableId> = IndexMap::new();

        for table in &model.tables {
            let table_config = config.get(&table.name).cloned();

            if let Some(table_config) = &table_config {
                verify_table_config(table, table_config)?;
            }

            let mapping = TableMapping::new(table, table_config);

            if mapping.is_included() {
                if let Some(other) = projected.insert(mapping.name.clone(), table.id) {
                    return Err(Error::name_collision(
                        &mapping.name,
                        &mapping.name,
                        format!(
                            "tables `{}` and `{}` are both configured with this name",
                            model.table(other).name,
                            table.name
                        ),
                    ));
                }

                workspace.names.track(table.id);
                for column in &mapping.columns {
                    if !workspace.names.insert(table.id, column) {
                        return Err(Error::name_collision(
                            &mapping.name,
                            column,
                            format!("two columns of table `{}` project to this name", table.name),
                        ));
                    }
                }
            }

            workspace.tables.push(mapping);
        }

        debug!(included = projected.len(), "projected model");

        Ok(workspace)
    }

    pub fn mapping(&self, id: impl Into<TableId>) -> &TableMapping {
        &self.tables[id.into().0]
    }

    pub fn is_included(&self, id: impl Into<TableId>) -> bool {
        self.mapping(id).is_included()
    }

    /// Projected name of the table owning `column`.
    pub fn table_name(&self, id: impl Into<TableId>) -> &str {
        &self.mapping(id).name
    }

    /// Projected name of a column.
    pub fn column_name(&self, id: impl Into<ColumnId>) -> &str {
        let id = id.into();
        &self.tables[id.table.0].columns[id.index]
    }

    /// Included tables, in model order.
    pub fn included(&self) -> impl Iterator<Item = &TableMapping> {
        self.tables.iter().filter(|mapping| mapping.is_included())
    }

    /// Projects every included table for emission.
    ///
    /// Expects [`resolve_associations`](Workspace::resolve_associations) to
    /// have run; an unnamed relation between included tables is an error.
    pub fn entities(&self) -> Result<Vec<Entity>> {
        self.included()
            .map(|mapping| Entity::project(self, mapping.id))
            .collect()
    }
}

impl TableMapping {
    fn new(table: &Table, config: Option<TableConfig>) -> Self {
        let name = config
            .as_ref()
            .and_then(|config| config.name.clone())
            .unwrap_or_else(|| table.name.clone());

        let columns = table
            .columns
            .iter()
            .map(|column| project_column_name(config.as_ref(), &column.name))
            .collect();

        TableMapping {
            id: table.id,
            entity: table.name.clone(),
            name,
            config,
            columns,
            many_to_many: vec![],
        }
    }

    pub fn is_included(&self) -> bool {
        self.config.is_some()
    }
}

fn project_column_name(config: Option<&TableConfig>, column: &str) -> String {
    let Some(config) = config else {
        return column.to_string();
    };

    if let Some(renamed) = config.column_rename(column) {
        renamed.to_string()
    } else if config.lowercase {
        str::lower_first(column)
    } else {
        column.to_string()
    }
}

fn verify_table_config(table: &Table, config: &TableConfig) -> Result<()> {
    let verify_column = |column: &str, key: &str| -> Result<()> {
        match table.column_by_name(column) {
            Some(_) => Ok(()),
            None => Err(Error::dangling_reference(&table.name, column, key, "does not exist")),
        }
    };

    for column in config.columns.keys() {
        verify_column(column, "columns")?;
    }

    for column in config.many_to_one.keys() {
        verify_column(column, "manyToOne")?;
    }

    if let Some(pivots) = &config.many_to_many {
        if pivots.len() != 2 {
            return Err(Error::config_shape(
                &table.name,
                "manyToMany",
                format!(
                    "a junction table needs exactly two pivot columns, found {}",
                    pivots.len()
                ),
            ));
        }

        for entry in pivots {
            let [column, _] = &entry[..] else {
                return Err(Error::config_shape(
                    &table.name,
                    "manyToMany",
                    super::many_to_many::pair_shape_message(entry),
                ));
            };

            verify_column(column, "manyToMany")?;
        }
    }

    Ok(())
}
