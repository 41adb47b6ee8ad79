mod error;
pub use error::{Error, IntoError};

pub mod entity;
pub use entity::Entity;

pub mod introspect;
pub use introspect::{Introspect, RowSet};

pub mod schema;
pub use schema::{Config, Model, Workspace};

mod ty;
pub use ty::Type;

/// A Result type alias that uses relmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;

/// Resolves `model` against `config` and returns one [`Entity`] per included
/// table.
///
/// Runs projection, many-to-many reconstruction and association naming on a
/// private working copy. Either every stage succeeds or the first failure is
/// returned; `model` is never modified.
pub fn resolve(model: &Model, config: &Config) -> Result<Vec<Entity>> {
    let mut workspace = Workspace::project(model, config)?;
    workspace.reconstruct_many_to_many()?;
    workspace.resolve_associations()?;
    workspace.entities()
}
