mod column;
mod relation;
mod swagger;

use crate::{EntityOutput, Options};
use relmap_core::entity::{Property, PropertyKind};
use relmap_core::Entity;

use indexmap::IndexSet;
use std::fmt::Write;

const SWAGGER_MODULE: &str = "@nestjs/swagger/dist/decorators/api-model-property.decorator";

pub(crate) fn generate<'a>(entity: &'a Entity, options: &Options) -> EntityOutput<'a> {
    let mut expand = Expand {
        entity,
        options,
        orm: IndexSet::from(["Entity"]),
        swagger: IndexSet::new(),
        props: String::new(),
    };

    for property in &entity.properties {
        expand.property(property);
    }

    EntityOutput {
        entity,
        file_name: format!("{}.ts", entity.name),
        body: expand.finish(),
    }
}

/// State for rendering one entity
struct Expand<'a> {
    entity: &'a Entity,

    options: &'a Options,

    /// TypeORM symbols used, in order of first use
    orm: IndexSet<&'static str>,

    /// Swagger decorators used
    swagger: IndexSet<&'static str>,

    /// Rendered class body
    props: String,
}

impl Expand<'_> {
    fn property(&mut self, property: &Property) {
        match &property.kind {
            PropertyKind::PrimaryGenerated { column } => {
                self.column(&property.name, column, "PrimaryGeneratedColumn")
            }
            PropertyKind::Primary { column } => {
                self.column(&property.name, column, "PrimaryColumn")
            }
            PropertyKind::Column { column } => self.column(&property.name, column, "Column"),
            PropertyKind::ManyToOne {
                target,
                ref_name,
                column,
                join_column,
            } => self.many_to_one(&property.name, target, ref_name, column, join_column),
            PropertyKind::OneToMany { target, ref_name } => {
                self.one_to_many(&property.name, target, ref_name)
            }
            PropertyKind::ManyToMany {
                target,
                join_table,
                join_columns,
                inverse_join_columns,
            } => self.many_to_many(
                &property.name,
                target,
                join_table,
                join_columns,
                inverse_join_columns,
            ),
        }
    }

    fn finish(self) -> String {
        let mut code = String::new();

        code.push_str("import {\n");
        for symbol in &self.orm {
            writeln!(code, "  {symbol},").unwrap();
        }
        code.push_str("} from 'typeorm';\n");

        if !self.swagger.is_empty() {
            code.push_str("import {\n");
            for symbol in &self.swagger {
                writeln!(code, "  {symbol},").unwrap();
            }
            writeln!(code, "}} from '{SWAGGER_MODULE}';").unwrap();
        }

        for import in &self.entity.imports {
            writeln!(code, "import {{{import}}} from './{import}';").unwrap();
        }

        code.push('\n');
        writeln!(
            code,
            "@Entity({}, {{schema: {}}})",
            crate::util::quote(&self.entity.entity),
            crate::util::quote(&self.entity.schema)
        )
        .unwrap();
        writeln!(code, "export class {} {{", self.entity.name).unwrap();
        code.push_str(&self.props);
        code.push_str("}\n");

        code
    }
}
