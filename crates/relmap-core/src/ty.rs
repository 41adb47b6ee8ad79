use serde::Serialize;

/// Semantic type a native column type maps to in generated entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Type {
    Number,
    Boolean,
    String,
    Date,
    Bytes,

    /// The native type has no mapping.
    Unknown,
}

impl Type {
    /// Maps a native column type name, as reported by the introspector.
    pub fn from_native(native: &str) -> Type {
        match &native.to_ascii_lowercase()[..] {
            "int" | "bigint" | "smallint" | "tinyint" | "money" | "smallmoney" | "float"
            | "real" | "decimal" | "numeric" => Type::Number,
            "bit" => Type::Boolean,
            "char" | "nchar" | "varchar" | "nvarchar" | "text" | "ntext" | "uniqueidentifier" => {
                Type::String
            }
            "date" | "time" | "timestamp" | "datetime" | "datetime2" | "smalldatetime"
            | "datetimeoffset" => Type::Date,
            "binary" | "varbinary" | "image" => Type::Bytes,
            _ => Type::Unknown,
        }
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, Type::Unknown)
    }
}
