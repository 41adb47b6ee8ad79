//! Per-table records handed to the code emitter.

mod property;
pub use property::{ColumnDef, Property, PropertyKind};

use crate::schema::{Column, Ref, Table, TableId, Workspace};
use crate::{Error, Result};

use indexmap::IndexSet;
use serde::Serialize;

/// Everything the code emitter needs to render one included table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    /// Owning database schema
    pub schema: String,

    /// Original table name
    pub entity: String,

    /// Projected entity name
    pub name: String,

    pub description: Option<String>,

    /// Property declarations, in emission order
    pub properties: Vec<Property>,

    /// Other entities referenced by relation properties, in order of first
    /// reference
    pub imports: Vec<String>,
}

impl Entity {
    /// Projects the included table `id` of a resolved workspace.
    ///
    /// Columns are visited in ordinal order. Each column yields its key,
    /// scalar or many-to-one property followed by its one-to-many
    /// properties; the table's many-to-many properties come last. Relations
    /// whose far side is not included are left out, and a foreign key to an
    /// excluded table is emitted as a plain column.
    ///
    /// Fails if a relation between two included tables has not been named
    /// by [`Workspace::resolve_associations`].
    pub fn project(workspace: &Workspace, id: TableId) -> Result<Entity> {
        let table = workspace.model.table(id);
        let mapping = workspace.mapping(id);

        let mut properties = vec![];
        let mut imports = IndexSet::new();

        for column in &table.columns {
            let column_name = workspace.column_name(column.id);
            let def = ColumnDef::from_column(column);

            let many_to_one = column
                .many_to_one
                .as_ref()
                .filter(|edge| workspace.is_included(edge.table()));

            if column.primary {
                let kind = if column.is_primary_generated() {
                    PropertyKind::PrimaryGenerated {
                        column: def.clone(),
                    }
                } else {
                    PropertyKind::Primary {
                        column: def.clone(),
                    }
                };

                properties.push(Property {
                    name: column_name.to_string(),
                    kind,
                });
            } else if many_to_one.is_none() {
                properties.push(Property {
                    name: column_name.to_string(),
                    kind: PropertyKind::Column {
                        column: def.clone(),
                    },
                });
            }

            if let Some(edge) = many_to_one {
                let (name, ref_name) = resolved_names(edge, table, column)?;

                let target = workspace.table_name(edge.table());
                if edge.table() != id {
                    imports.insert(target.to_string());
                }

                properties.push(Property {
                    name: name.to_string(),
                    kind: PropertyKind::ManyToOne {
                        target: target.to_string(),
                        ref_name: ref_name.to_string(),
                        column: def,
                        join_column: column_name.to_string(),
                    },
                });
            }

            for back_ref in &column.one_to_many {
                if !workspace.is_included(back_ref.table()) {
                    continue;
                }

                let (name, ref_name) = resolved_names(back_ref, table, column)?;

                let target = workspace.table_name(back_ref.table());
                if back_ref.table() != id {
                    imports.insert(target.to_string());
                }

                properties.push(Property {
                    name: name.to_string(),
                    kind: PropertyKind::OneToMany {
                        target: target.to_string(),
                        ref_name: ref_name.to_string(),
                    },
                });
            }
        }

        for association in &mapping.many_to_many {
            if association.target != id {
                imports.insert(association.col_type.clone());
            }

            properties.push(Property {
                name: association.property.clone(),
                kind: PropertyKind::ManyToMany {
                    target: association.col_type.clone(),
                    join_table: association.name.clone(),
                    join_columns: association.join_columns.clone(),
                    inverse_join_columns: association.inverse_join_columns.clone(),
                },
            });
        }

        Ok(Entity {
            schema: table.schema.clone(),
            entity: mapping.entity.clone(),
            name: mapping.name.clone(),
            description: table.description.clone(),
            properties,
            imports: imports.into_iter().collect(),
        })
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.name == name)
    }
}

/// Both names of a relation edge on `table.column`.
fn resolved_names<'a>(edge: &'a Ref, table: &Table, column: &Column) -> Result<(&'a str, &'a str)> {
    match (&edge.name, &edge.ref_name) {
        (Some(name), Some(ref_name)) => Ok((name.as_str(), ref_name.as_str())),
        _ => Err(Error::invalid_model(format!(
            "relation on `{}.{}` has not been named; resolve associations first",
            table.name, column.name
        ))),
    }
}
