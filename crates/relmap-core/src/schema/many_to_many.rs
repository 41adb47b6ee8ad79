use super::{ColumnId, TableId, Workspace};
use crate::{Error, Result};

use serde::Serialize;
use std_util::str;
use tracing::debug;

/// A many-to-many association exposed by one side of a junction table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Association {
    /// Original name of the junction table
    pub name: String,

    /// Property name as configured
    pub col_name: String,

    /// Property name as emitted, the plural of `col_name`
    pub property: String,

    /// Projected name of the associated table
    pub col_type: String,

    pub target: TableId,

    /// Junction column referencing the owning table
    pub join_columns: JoinColumn,

    /// Junction column referencing the associated table
    pub inverse_join_columns: JoinColumn,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinColumn {
    /// Projected name of the junction table's pivot column
    pub name: String,

    /// Projected name of the column the pivot references
    pub referenced_column_name: String,
}

/// One resolved `[column, property]` entry of a junction table.
struct Pivot {
    /// Pivot column on the junction table
    column: ColumnId,

    /// Column the pivot references
    target: ColumnId,

    /// Configured property name for the referenced table
    property: String,
}

impl Workspace {
    /// Replaces each configured junction table's pair of many-to-one edges
    /// with a many-to-many association on both referenced tables.
    ///
    /// The consumed edges are removed from the model: the pivot columns lose
    /// their `many_to_one` and the referenced columns lose the matching
    /// `one_to_many` entry, so neither is emitted again as a plain relation.
    pub fn reconstruct_many_to_many(&mut self) -> Result<()> {
        for junction in self.model.table_ids() {
            let Some(pivots) = self.tables[junction.0]
                .config
                .as_ref()
                .and_then(|config| config.many_to_many.clone())
            else {
                continue;
            };

            self.reconstruct_junction(junction, &pivots)?;
        }

        Ok(())
    }

    fn reconstruct_junction(&mut self, junction: TableId, pivots: &[Vec<String>]) -> Result<()> {
        let entity = self.mapping(junction).entity.clone();

        let [first, second] = pivots else {
            return Err(Error::config_shape(
                &entity,
                "manyToMany",
                format!(
                    "a junction table needs exactly two pivot columns, found {}",
                    pivots.len()
                ),
            ));
        };

        let sides = [self.pivot(junction, first)?, self.pivot(junction, second)?];

        if sides[0].column == sides[1].column {
            return Err(Error::config_shape(
                &entity,
                "manyToMany",
                format!(
                    "both entries name the pivot column `{}`",
                    self.model.column(sides[0].column).name
                ),
            ));
        }

        for (side, other) in [(&sides[0], &sides[1]), (&sides[1], &sides[0])] {
            let owner = side.target.table;
            let associated = other.target.table;

            if !self.is_included(owner) || !self.is_included(associated) {
                debug!(
                    junction = %entity,
                    owner = %self.mapping(owner).entity,
                    associated = %self.mapping(associated).entity,
                    "skipping many-to-many side touching an excluded table"
                );
                continue;
            }

            let property = str::pluralize(&side.property);
            if !self.names.insert(owner, &property) {
                return Err(Error::name_collision(
                    self.table_name(owner),
                    &property,
                    format!(
                        "`manyToMany` entry for column `{}` of table `{}`",
                        self.model.column(side.column).name,
                        entity
                    ),
                ));
            }

            let association = Association {
                name: entity.clone(),
                col_name: side.property.clone(),
                property,
                col_type: self.table_name(associated).to_string(),
                target: associated,
                join_columns: self.join_column(side),
                inverse_join_columns: self.join_column(other),
            };

            self.tables[owner.0].many_to_many.push(association);
        }

        for side in &sides {
            let back_refs = &mut self.model.column_mut(side.target).one_to_many;
            if let Some(index) = back_refs.iter().position(|r| r.column == side.column) {
                back_refs.remove(index);
            }

            self.model.column_mut(side.column).many_to_one = None;
        }

        debug!(junction = %entity, "reconstructed many-to-many");

        Ok(())
    }

    fn pivot(&self, junction: TableId, entry: &[String]) -> Result<Pivot> {
        let table = self.model.table(junction);

        let [column, property] = entry else {
            return Err(Error::config_shape(&table.name, "manyToMany", pair_shape_message(entry)));
        };

        let pivot = table.column_by_name(column).ok_or_else(|| {
            Error::dangling_reference(&table.name, column, "manyToMany", "does not exist")
        })?;

        let edge = pivot.many_to_one.as_ref().ok_or_else(|| {
            Error::dangling_reference(
                &table.name,
                column,
                "manyToMany",
                "has no many-to-one relation",
            )
        })?;

        Ok(Pivot {
            column: pivot.id,
            target: edge.column,
            property: property.clone(),
        })
    }

    fn join_column(&self, pivot: &Pivot) -> JoinColumn {
        JoinColumn {
            name: self.column_name(pivot.column).to_string(),
            referenced_column_name: self.column_name(pivot.target).to_string(),
        }
    }
}

/// Describes an entry that is not a `[column, property]` pair.
pub(super) fn pair_shape_message(entry: &[String]) -> String {
    format!(
        "expected a `[column, property]` pair, found {} value(s) {entry:?}",
        entry.len()
    )
}
