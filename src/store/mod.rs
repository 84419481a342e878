//! In-memory record store
//!
//! Three independent append-only tables (inventory, sales, debtors). The
//! store is built once at startup and shared behind an `Arc`; nothing is
//! persisted and every table dies with the store.

mod records;
mod table;

use std::fmt;

use serde::Serialize;

pub use records::{DebtorRecord, InventoryItem, Record, RecordId, SaleRecord};
pub use table::Table;

/// The tables held by a `RecordStore`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Inventory,
    Sales,
    Debtors,
}

impl TableKind {
    pub const ALL: [TableKind; 3] = [TableKind::Inventory, TableKind::Sales, TableKind::Debtors];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::Inventory => "inventory",
            TableKind::Sales => "sales",
            TableKind::Debtors => "debtors",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Owner of the three tables
#[derive(Debug, Default)]
pub struct RecordStore {
    inventory: Table<InventoryItem>,
    sales: Table<SaleRecord>,
    debtors: Table<DebtorRecord>,
}

impl RecordStore {
    /// Create a store with three empty tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its table and return the whole table.
    pub fn append<R: Record>(&self, record: R) -> Vec<R> {
        R::table(self).append(record)
    }

    /// All records of one type, in insertion order.
    pub fn list<R: Record>(&self) -> Vec<R> {
        R::table(self).list()
    }

    /// Row count of a table
    pub fn len(&self, table: TableKind) -> usize {
        match table {
            TableKind::Inventory => self.inventory.len(),
            TableKind::Sales => self.sales.len(),
            TableKind::Debtors => self.debtors.len(),
        }
    }

    pub fn is_empty(&self, table: TableKind) -> bool {
        self.len(table) == 0
    }

    pub fn inventory(&self) -> &Table<InventoryItem> {
        &self.inventory
    }

    pub fn sales(&self) -> &Table<SaleRecord> {
        &self.sales
    }

    pub fn debtors(&self) -> &Table<DebtorRecord> {
        &self.debtors
    }
}
