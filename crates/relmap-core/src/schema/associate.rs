use super::{ColumnId, Workspace};
use crate::{Error, Result};

use std_util::str;
use tracing::debug;

impl Workspace {
    /// Names both ends of every remaining many-to-one relation between two
    /// included tables.
    ///
    /// Explicit `manyToOne` names are used as given and must not clash with
    /// names already in use. Otherwise the forward name is the target
    /// table's name and the reciprocal name the plural of the source table's
    /// name, each with a numeric suffix if taken. Names are reserved as soon
    /// as they are picked, so tables and columns later in the model see
    /// them.
    ///
    /// Relations that already carry names are left untouched, which makes
    /// running this more than once a no-op.
    pub fn resolve_associations(&mut self) -> Result<()> {
        self.verify_many_to_one_config()?;

        for source in self.model.table_ids() {
            if !self.is_included(source) {
                continue;
            }

            for index in 0..self.model.table(source).columns.len() {
                self.resolve_column(source.column(index))?;
            }
        }

        Ok(())
    }

    fn resolve_column(&mut self, column: ColumnId) -> Result<()> {
        let Some(edge) = &self.model.column(column).many_to_one else {
            return Ok(());
        };

        if edge.is_named() {
            return Ok(());
        }

        let target_column = edge.column;
        let source = column.table;
        let target = target_column.table;

        if !self.is_included(target) {
            return Ok(());
        }

        let column_name = &self.model.column(column).name;
        let explicit = self
            .mapping(source)
            .config
            .as_ref()
            .and_then(|config| config.many_to_one_names(column_name))
            .cloned();

        let (name, ref_name) = match explicit {
            Some((name, ref_name)) => {
                let origin = |side: &str| {
                    format!(
                        "{side} name configured in `manyToOne` for column `{}` of table `{}`",
                        self.model.column(column).name,
                        self.mapping(source).entity
                    )
                };

                if self.names.contains(source, &name) {
                    return Err(Error::name_collision(
                        self.table_name(source),
                        &name,
                        origin("forward"),
                    ));
                }

                if self.names.contains(target, &ref_name)
                    || (source == target && name == ref_name)
                {
                    return Err(Error::name_collision(
                        self.table_name(target),
                        &ref_name,
                        origin("reciprocal"),
                    ));
                }

                self.names.insert(source, &name);
                self.names.insert(target, &ref_name);
                (name, ref_name)
            }
            None => {
                let target_name = self.table_name(target).to_string();
                let plural = str::pluralize(self.table_name(source));

                let name = self.names.reserve_free(source, &target_name);
                let ref_name = self.names.reserve_free(target, &plural);
                (name, ref_name)
            }
        };

        debug!(
            table = %self.table_name(source),
            column = %self.model.column(column).name,
            name = %name,
            ref_name = %ref_name,
            "named association"
        );

        if let Some(edge) = &mut self.model.column_mut(column).many_to_one {
            edge.set_names(&name, &ref_name);
        }

        let back_ref = self
            .model
            .column_mut(target_column)
            .one_to_many
            .iter_mut()
            .find(|back_ref| back_ref.column == column);

        if let Some(back_ref) = back_ref {
            back_ref.set_names(&ref_name, &name);
        }

        Ok(())
    }

    /// Every `manyToOne` override must sit on a column that still references
    /// another table.
    fn verify_many_to_one_config(&self) -> Result<()> {
        for mapping in self.included() {
            let Some(config) = &mapping.config else {
                continue;
            };

            let table = self.model.table(mapping.id);
            for key in config.many_to_one.keys() {
                let has_edge = table
                    .column_by_name(key)
                    .map(|column| column.many_to_one.is_some())
                    .unwrap_or(false);

                if !has_edge {
                    return Err(Error::dangling_reference(
                        &table.name,
                        key,
                        "manyToOne",
                        "has no many-to-one relation",
                    ));
                }
            }
        }

        Ok(())
    }
}
