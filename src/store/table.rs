//! Append-only table

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Ordered, append-only rows of one record type.
///
/// Rows are never removed or mutated. A poisoned lock is recovered: a
/// panicking writer can at worst have completed or skipped its push.
#[derive(Debug)]
pub struct Table<R> {
    rows: RwLock<Vec<R>>,
}

impl<R: Clone> Table<R> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Appends `row` and returns the full table, ending with `row`.
    pub fn append(&self, row: R) -> Vec<R> {
        let mut rows = self.write();
        rows.push(row);
        rows.clone()
    }

    /// All rows in insertion order
    pub fn list(&self) -> Vec<R> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<R>> {
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<R>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: Clone> Default for Table<R> {
    fn default() -> Self {
        Self::new()
    }
}
