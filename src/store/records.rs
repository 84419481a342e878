//! Record types held by the store
//!
//! Every field is optional: an absent value is stored and rendered as null.
//! Field order in the JSON output follows declaration order.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::{RecordStore, Table, TableKind};
use crate::schema::{FieldDef, FieldKind};

/// A row type stored in one of the store's tables.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Table this record lives in
    const TABLE: TableKind;

    /// Declared fields, in output order
    const FIELDS: &'static [FieldDef];

    /// The store's table for this record type
    fn table(store: &RecordStore) -> &Table<Self>;
}

/// Caller-chosen identifier; not checked for uniqueness
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Int(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId::Text(id.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Option<RecordId>,
    pub product_name: Option<String>,
    pub quantity: Option<i64>,
}

impl Record for InventoryItem {
    const TABLE: TableKind = TableKind::Inventory;
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::required("id", FieldKind::Id),
        FieldDef::required("product_name", FieldKind::Text),
        FieldDef::optional("quantity", FieldKind::Integer),
    ];

    fn table(store: &RecordStore) -> &Table<Self> {
        &store.inventory
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: Option<RecordId>,
    pub product_name: Option<String>,
    pub quantity_sold: Option<i64>,
}

impl Record for SaleRecord {
    const TABLE: TableKind = TableKind::Sales;
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::required("id", FieldKind::Id),
        FieldDef::required("product_name", FieldKind::Text),
        FieldDef::optional("quantity_sold", FieldKind::Integer),
    ];

    fn table(store: &RecordStore) -> &Table<Self> {
        &store.sales
    }
}

/// `amount_due` keeps the number exactly as the caller sent it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebtorRecord {
    pub id: Option<RecordId>,
    pub customer_name: Option<String>,
    pub amount_due: Option<Number>,
}

impl Record for DebtorRecord {
    const TABLE: TableKind = TableKind::Debtors;
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::required("id", FieldKind::Id),
        FieldDef::required("customer_name", FieldKind::Text),
        FieldDef::optional("amount_due", FieldKind::Number),
    ];

    fn table(store: &RecordStore) -> &Table<Self> {
        &store.debtors
    }
}
