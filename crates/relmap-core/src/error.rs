mod adhoc;
mod config_shape;
mod dangling_reference;
mod invalid_model;
mod name_collision;

use adhoc::AdhocError;
use config_shape::ConfigShapeError;
use dangling_reference::DanglingReferenceError;
use invalid_model::InvalidModelError;
use name_collision::NameCollisionError;
use std::sync::Arc;

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while assembling or resolving a model.
///
/// Every error is fatal to the current generation run. The error keeps a
/// chain of context so the user can see which table, column and
/// configuration key caused it.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner {
            Some(inner) => match Arc::try_unwrap(inner) {
                Ok(inner) => inner.kind,
                Err(shared) => ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
            },
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args.to_string())))
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// Returns true if any error in the chain matches `f`.
    fn any_kind(&self, f: impl Fn(&ErrorKind) -> bool) -> bool {
        self.chain().any(|err| f(err.kind()))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    ConfigShape(ConfigShapeError),
    DanglingReference(DanglingReferenceError),
    InvalidModel(InvalidModelError),
    NameCollision(NameCollisionError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            ConfigShape(err) => core::fmt::Display::fmt(err, f),
            DanglingReference(err) => core::fmt::Display::fmt(err, f),
            InvalidModel(err) => core::fmt::Display::fmt(err, f),
            NameCollision(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown relmap error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = err!("unknown table `{}`", "tUsers");
        assert_eq!(err.to_string(), "unknown table `tUsers`");
    }

    #[test]
    fn error_chain_display() {
        let err = Error::name_collision("User", "Role", "forward name of column `roleId`")
            .context(err!("resolving associations"));

        assert_eq!(
            err.to_string(),
            "resolving associations: name collision in `User`: `Role` is already in use \
             (forward name of column `roleId`)"
        );
        assert!(err.is_name_collision());
    }

    #[test]
    fn io_bridge() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
        assert!(!err.is_config_shape());
    }

    #[test]
    fn config_shape_message() {
        let err = Error::config_shape("tRoleUsers", "manyToMany", "expected 2 entries, found 3");
        assert_eq!(
            err.to_string(),
            "invalid configuration for table `tRoleUsers` (`manyToMany`): expected 2 entries, found 3"
        );
        assert!(err.is_config_shape());
    }

    #[test]
    fn dangling_reference_message() {
        let err = Error::dangling_reference(
            "tRoleUsers",
            "userId",
            "manyToMany",
            "has no many-to-one relation",
        );
        assert_eq!(
            err.to_string(),
            "dangling reference in `manyToMany` of table `tRoleUsers`: column `userId` has no many-to-one relation"
        );
        assert!(err.is_dangling_reference());
    }

    #[test]
    fn invalid_model_message() {
        let err = Error::invalid_model("primary key references unknown table `tGhosts`");
        assert_eq!(
            err.to_string(),
            "invalid model: primary key references unknown table `tGhosts`"
        );
        assert!(err.is_invalid_model());
    }
}
