//! Row shapes returned by the metadata introspector.
//!
//! The introspector itself is a black box behind the [`Introspect`] trait.
//! [`RowSet`] is the in-memory implementation, loaded from JSON or built by
//! hand in tests.

mod rows;
pub use rows::{ColumnRow, ForeignKeyRow, KeyRow, RowSet, TableRow};

use crate::{async_trait, Result};

use std::fmt::Debug;

/// Source of raw schema metadata.
///
/// Each method is one query against the data source, awaited as a single
/// batch.
#[async_trait]
pub trait Introspect: Debug + Send + Sync {
    /// Base tables, excluding views.
    async fn tables(&self) -> Result<Vec<TableRow>>;

    /// Columns ordered by table, then ordinal position.
    async fn columns(&self) -> Result<Vec<ColumnRow>>;

    async fn primary_keys(&self) -> Result<Vec<KeyRow>>;

    async fn identities(&self) -> Result<Vec<KeyRow>>;

    async fn foreign_keys(&self) -> Result<Vec<ForeignKeyRow>>;
}

#[async_trait]
impl Introspect for RowSet {
    async fn tables(&self) -> Result<Vec<TableRow>> {
        Ok(self.tables.clone())
    }

    async fn columns(&self) -> Result<Vec<ColumnRow>> {
        Ok(self.columns.clone())
    }

    async fn primary_keys(&self) -> Result<Vec<KeyRow>> {
        Ok(self.primary_keys.clone())
    }

    async fn identities(&self) -> Result<Vec<KeyRow>> {
        Ok(self.identities.clone())
    }

    async fn foreign_keys(&self) -> Result<Vec<ForeignKeyRow>> {
        Ok(self.foreign_keys.clone())
    }
}
