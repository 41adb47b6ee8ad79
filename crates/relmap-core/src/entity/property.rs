use crate::schema::{Column, JoinColumn};
use crate::Type;

use serde::Serialize;

/// A single property declaration on an entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    /// Output name of the property
    pub name: String,

    pub kind: PropertyKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PropertyKind {
    /// Database generated primary key
    PrimaryGenerated { column: ColumnDef },

    /// Natural or composite primary key
    Primary { column: ColumnDef },

    /// Plain scalar column
    Column { column: ColumnDef },

    ManyToOne {
        /// Referenced entity
        target: String,

        /// Reciprocal collection on `target`
        ref_name: String,

        /// Foreign key column
        column: ColumnDef,

        /// Projected name of the foreign key column
        join_column: String,
    },

    OneToMany {
        /// Referencing entity
        target: String,

        /// Reciprocal scalar on `target`
        ref_name: String,
    },

    ManyToMany {
        /// Associated entity
        target: String,

        /// Original name of the junction table
        join_table: String,

        join_columns: JoinColumn,

        inverse_join_columns: JoinColumn,
    },
}

/// Column facts needed to render a column declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDef {
    /// Name of the column in the database
    pub name: String,

    /// Native type name
    pub native_ty: String,

    pub ty: Type,

    pub length: Option<i64>,

    pub nullable: bool,

    pub description: Option<String>,
}

impl Property {
    pub fn is_relation(&self) -> bool {
        matches!(
            self.kind,
            PropertyKind::ManyToOne { .. }
                | PropertyKind::OneToMany { .. }
                | PropertyKind::ManyToMany { .. }
        )
    }

    /// Backing column, for every kind except the collection relations.
    pub fn column(&self) -> Option<&ColumnDef> {
        match &self.kind {
            PropertyKind::PrimaryGenerated { column }
            | PropertyKind::Primary { column }
            | PropertyKind::Column { column }
            | PropertyKind::ManyToOne { column, .. } => Some(column),
            PropertyKind::OneToMany { .. } | PropertyKind::ManyToMany { .. } => None,
        }
    }

    /// Entity this property refers to, for relations.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            PropertyKind::ManyToOne { target, .. }
            | PropertyKind::OneToMany { target, .. }
            | PropertyKind::ManyToMany { target, .. } => Some(target),
            _ => None,
        }
    }
}

impl ColumnDef {
    pub(crate) fn from_column(column: &Column) -> Self {
        ColumnDef {
            name: column.name.clone(),
            native_ty: column.ty.clone(),
            ty: column.semantic_ty(),
            length: column.length,
            nullable: column.nullable,
            description: column.description.clone(),
        }
    }
}
