use super::Error;

/// Error when introspected rows are not internally consistent, e.g. a key
/// row naming a table or column that the table/column rows never listed.
#[derive(Debug)]
pub(super) struct InvalidModelError {
    message: Box<str>,
}

impl std::error::Error for InvalidModelError {}

impl core::fmt::Display for InvalidModelError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid model: {}", self.message)
    }
}

impl Error {
    pub fn invalid_model(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidModel(InvalidModelError {
            message: message.into().into(),
        }))
    }

    pub fn is_invalid_model(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidModel(_)))
    }
}
