use super::TableId;

use indexmap::{IndexMap, IndexSet};
use std_util::str;

/// Per-table registry of output property names already in use.
///
/// The projector creates one set per included table, seeded with the
/// table's column names. Many-to-many reconstruction and association naming
/// reserve relation names here, so a later relation can never reuse a name
/// handed out earlier.
#[derive(Debug, Clone, Default)]
pub struct Names {
    tables: IndexMap<TableId, IndexSet<String>>,
}

impl Names {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `table`. Tables that are not tracked are not part of
    /// the output.
    pub fn track(&mut self, table: TableId) {
        self.tables.entry(table).or_default();
    }

    pub fn is_tracked(&self, table: TableId) -> bool {
        self.tables.contains_key(&table)
    }

    pub fn contains(&self, table: TableId, name: &str) -> bool {
        self.tables
            .get(&table)
            .map(|names| names.contains(name))
            .unwrap_or(false)
    }

    /// Reserves `name`. Returns `false`, leaving the registry unchanged, if
    /// the name is already taken.
    pub fn insert(&mut self, table: TableId, name: &str) -> bool {
        self.set_mut(table).insert(name.to_string())
    }

    /// Reserves the first free name among `base`, `base2`, `base3`, ...
    pub fn reserve_free(&mut self, table: TableId, base: &str) -> String {
        let names = self.set_mut(table);

        let mut n = 1;
        while names.contains(&str::numbered(base, n)) {
            n += 1;
        }

        let name = str::numbered(base, n);
        names.insert(name.clone());
        name
    }

    /// Names reserved for `table`, in reservation order.
    pub fn iter(&self, table: TableId) -> impl Iterator<Item = &str> {
        self.tables
            .get(&table)
            .into_iter()
            .flat_map(|names| names.iter().map(String::as_str))
    }

    fn set_mut(&mut self, table: TableId) -> &mut IndexSet<String> {
        self.tables
            .get_mut(&table)
            .unwrap_or_else(|| panic!("table {table:?} is not tracked"))
    }
}
