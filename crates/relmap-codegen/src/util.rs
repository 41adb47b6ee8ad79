use relmap_core::Type;

/// TypeScript type for a semantic column type.
pub(crate) fn ts_type(ty: Type) -> &'static str {
    match ty {
        Type::Number => "number",
        Type::Boolean => "boolean",
        Type::String => "string",
        Type::Date => "Date",
        Type::Bytes => "Buffer",
        Type::Unknown => "any",
    }
}

/// Single-quoted TypeScript string literal.
pub(crate) fn quote(src: &str) -> String {
    format!("'{}'", src.replace('\\', "\\\\").replace('\'', "\\'"))
}
