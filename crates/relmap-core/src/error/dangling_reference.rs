use super::Error;

/// Error when the configuration points at something the model cannot
/// anchor a relation on.
///
/// This occurs when:
/// - A configured column does not exist on its table
/// - A many-to-many pivot column carries no many-to-one relation
/// - A `manyToOne` override names a column without a foreign key
#[derive(Debug)]
pub(super) struct DanglingReferenceError {
    table: Box<str>,
    column: Box<str>,
    key: Box<str>,
    message: Box<str>,
}

impl std::error::Error for DanglingReferenceError {}

impl core::fmt::Display for DanglingReferenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "dangling reference in `{}` of table `{}`: column `{}` {}",
            self.key, self.table, self.column, self.message
        )
    }
}

impl Error {
    /// Creates a dangling reference error.
    ///
    /// `key` names the configuration section (`columns`, `manyToOne`,
    /// `manyToMany`) the reference was found in.
    pub fn dangling_reference(
        table: impl Into<String>,
        column: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::DanglingReference(DanglingReferenceError {
            table: table.into().into(),
            column: column.into().into(),
            key: key.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error in its chain, is a
    /// dangling reference error.
    pub fn is_dangling_reference(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::DanglingReference(_)))
    }
}
