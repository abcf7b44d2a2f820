//! CSV-backed persistent store
//!
//! # Tables
//!
//! | Table | Key | In memory | File |
//! |-------|-----|-----------|------|
//! | menu | item name | `BTreeMap<String, MenuItem>` | `menu.csv` |
//! | tables | table id | `BTreeMap<String, DiningTable>` | `tables.csv` |
//! | orders | (none, file order) | `Vec<Order>` | `orders.csv` |
//!
//! Every table is loaded wholesale at startup and rewritten wholesale after
//! each mutation. Mutations go through [`PosStore::transact`], which restores
//! the touched collections when any write fails, so the in-memory state never
//! runs ahead of the files.

pub mod csv_file;
mod error;
mod rows;

pub use error::{StoreError, StoreResult};

use shared::models::{DiningTable, MenuItem, Order};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::utils::PosError;

/// One of the three backing tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreTable {
    Menu,
    Tables,
    Orders,
}

impl StoreTable {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Tables => "tables",
            Self::Orders => "orders",
        }
    }
}

impl fmt::Display for StoreTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreTable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "menu" => Ok(Self::Menu),
            "tables" => Ok(Self::Tables),
            "orders" => Ok(Self::Orders),
            other => Err(format!("unknown table: {other}")),
        }
    }
}

/// Locations of the three table files
#[derive(Debug, Clone)]
pub struct StorePaths {
    pub menu: PathBuf,
    pub tables: PathBuf,
    pub orders: PathBuf,
}

impl StorePaths {
    /// Default file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            menu: dir.join("menu.csv"),
            tables: dir.join("tables.csv"),
            orders: dir.join("orders.csv"),
        }
    }

    pub fn path(&self, table: StoreTable) -> &Path {
        match table {
            StoreTable::Menu => &self.menu,
            StoreTable::Tables => &self.tables,
            StoreTable::Orders => &self.orders,
        }
    }
}

/// Owner of the menu, table and order collections
#[derive(Debug)]
pub struct PosStore {
    paths: StorePaths,
    pub(crate) menu: BTreeMap<String, MenuItem>,
    pub(crate) tables: BTreeMap<String, DiningTable>,
    pub(crate) orders: Vec<Order>,
}

/// Copies of the collections a mutation may touch
struct Snapshot {
    menu: Option<BTreeMap<String, MenuItem>>,
    tables: Option<BTreeMap<String, DiningTable>>,
    orders: Option<Vec<Order>>,
}

impl PosStore {
    /// Load all three tables. Any unreadable or malformed file fails the open.
    pub fn open(paths: StorePaths) -> StoreResult<Self> {
        let mut store = Self {
            paths,
            menu: BTreeMap::new(),
            tables: BTreeMap::new(),
            orders: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory collections with the file contents
    ///
    /// Nothing is replaced unless all three files load.
    pub fn load(&mut self) -> StoreResult<()> {
        let menu: Vec<MenuItem> = csv_file::load_rows(&self.paths.menu)?;
        let tables: Vec<DiningTable> = csv_file::load_rows(&self.paths.tables)?;
        let orders: Vec<Order> = csv_file::load_rows(&self.paths.orders)?;

        // Later rows win for repeated keys
        self.menu = menu.into_iter().map(|m| (m.name.clone(), m)).collect();
        self.tables = tables.into_iter().map(|t| (t.table_id.clone(), t)).collect();
        self.orders = orders;

        tracing::info!(
            menu_items = self.menu.len(),
            tables = self.tables.len(),
            orders = self.orders.len(),
            "Store loaded"
        );
        Ok(())
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    pub fn menu(&self) -> &BTreeMap<String, MenuItem> {
        &self.menu
    }

    pub fn tables(&self) -> &BTreeMap<String, DiningTable> {
        &self.tables
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Write one table to its file
    pub fn save(&self, table: StoreTable) -> StoreResult<()> {
        let path = self.paths.path(table);
        match table {
            StoreTable::Menu => csv_file::save_rows(path, self.menu.values()),
            StoreTable::Tables => csv_file::save_rows(path, self.tables.values()),
            StoreTable::Orders => csv_file::save_rows(path, &self.orders),
        }
    }

    /// Raw file bytes for download
    pub fn export(&self, table: StoreTable) -> StoreResult<Vec<u8>> {
        csv_file::read_raw(self.paths.path(table))
    }

    /// Apply `mutate` and persist the touched tables
    ///
    /// If `mutate` fails, or any write fails, the touched collections are
    /// restored to their state before the call and tables already rewritten
    /// are written back.
    pub(crate) fn transact<T>(
        &mut self,
        touched: &[StoreTable],
        mutate: impl FnOnce(&mut Self) -> Result<T, PosError>,
    ) -> Result<T, PosError> {
        let snapshot = self.snapshot(touched);

        let value = match mutate(self) {
            Ok(value) => value,
            Err(e) => {
                self.restore(snapshot);
                return Err(e);
            }
        };

        for (i, table) in touched.iter().enumerate() {
            if let Err(e) = self.save(*table) {
                tracing::error!(table = %table, error = %e, "Save failed, rolling back");
                self.restore(snapshot);
                for written in &touched[..i] {
                    if let Err(e) = self.save(*written) {
                        tracing::error!(table = %written, error = %e, "Rollback write failed");
                    }
                }
                return Err(PosError::Persistence(e));
            }
        }

        Ok(value)
    }

    fn snapshot(&self, touched: &[StoreTable]) -> Snapshot {
        Snapshot {
            menu: touched.contains(&StoreTable::Menu).then(|| self.menu.clone()),
            tables: touched.contains(&StoreTable::Tables).then(|| self.tables.clone()),
            orders: touched.contains(&StoreTable::Orders).then(|| self.orders.clone()),
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        if let Some(menu) = snapshot.menu {
            self.menu = menu;
        }
        if let Some(tables) = snapshot.tables {
            self.tables = tables;
        }
        if let Some(orders) = snapshot.orders {
            self.orders = orders;
        }
    }
}
