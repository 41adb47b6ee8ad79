use super::Error;

/// Error when configuration forces two property names to coincide within a
/// single table's namespace.
#[derive(Debug)]
pub(super) struct NameCollisionError {
    table: Box<str>,
    name: Box<str>,
    origin: Box<str>,
}

impl std::error::Error for NameCollisionError {}

impl core::fmt::Display for NameCollisionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "name collision in `{}`: `{}` is already in use ({})",
            self.table, self.name, self.origin
        )
    }
}

impl Error {
    /// Creates a name collision error.
    ///
    /// `table` is the namespace the name was registered in, `origin` says
    /// which configuration entry (and which side of a relation) asked for it.
    pub fn name_collision(
        table: impl Into<String>,
        name: impl Into<String>,
        origin: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::NameCollision(NameCollisionError {
            table: table.into().into(),
            name: name.into().into(),
            origin: origin.into().into(),
        }))
    }

    pub fn is_name_collision(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::NameCollision(_)))
    }
}
