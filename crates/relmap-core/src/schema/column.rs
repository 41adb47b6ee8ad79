use super::TableId;
use crate::Type;

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    /// Uniquely identifies the column in the model.
    pub id: ColumnId,

    /// The name of the column in the database.
    pub name: String,

    /// Ordinal position within the table, starting at 1
    pub order: u32,

    pub description: Option<String>,

    /// Native type name as reported by the database
    #[serde(rename = "type")]
    pub ty: String,

    pub precision: Option<u32>,

    pub scale: Option<u32>,

    pub length: Option<i64>,

    /// Whether or not the column is nullable
    pub nullable: bool,

    pub default: Option<String>,

    pub computed: Option<String>,

    /// True if the column is part of the table's primary key
    pub primary: bool,

    /// True if the database generates the column's value
    pub identity: bool,

    /// Outgoing foreign key: this column is the "many" side.
    pub many_to_one: Option<Ref>,

    /// Incoming foreign keys: columns on other tables referencing this one.
    pub one_to_many: Vec<Ref>,
}

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize)]
pub struct ColumnId {
    pub table: TableId,
    pub index: usize,
}

/// One end of a relation edge.
///
/// On a `many_to_one` edge `column` is the referenced column; on a
/// `one_to_many` edge it is the referencing column. Once associations are
/// resolved, `name` is the property exposed from this side and `ref_name`
/// the reciprocal property on the other side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ref {
    pub column: ColumnId,

    pub name: Option<String>,

    pub ref_name: Option<String>,
}

impl Column {
    /// Semantic type of the column's native type.
    pub fn semantic_ty(&self) -> Type {
        Type::from_native(&self.ty)
    }

    /// True for auto-generated keys.
    pub fn is_primary_generated(&self) -> bool {
        self.primary && self.identity
    }
}

impl Ref {
    pub fn new(column: ColumnId) -> Self {
        Ref {
            column,
            name: None,
            ref_name: None,
        }
    }

    pub fn table(&self) -> TableId {
        self.column.table
    }

    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }

    pub(crate) fn set_names(&mut self, name: &str, ref_name: &str) {
        self.name = Some(name.to_string());
        self.ref_name = Some(ref_name.to_string());
    }
}

impl From<&Column> for ColumnId {
    fn from(value: &Column) -> Self {
        value.id
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({}/{})", self.table.0, self.index)
    }
}
