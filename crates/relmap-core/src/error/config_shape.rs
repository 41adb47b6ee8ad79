use super::Error;

/// Error when a table's configuration entry has the wrong shape, e.g. a
/// `manyToMany` entry that does not describe exactly two pivot columns.
#[derive(Debug)]
pub(super) struct ConfigShapeError {
    table: Box<str>,
    key: Box<str>,
    message: Box<str>,
}

impl std::error::Error for ConfigShapeError {}

impl core::fmt::Display for ConfigShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid configuration for table `{}` (`{}`): {}",
            self.table, self.key, self.message
        )
    }
}

impl Error {
    /// Creates a configuration shape error for `table`'s `key` section.
    pub fn config_shape(
        table: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::ConfigShape(ConfigShapeError {
            table: table.into().into(),
            key: key.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error in its chain, is a
    /// configuration shape error.
    pub fn is_config_shape(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::ConfigShape(_)))
    }
}
