//! Record validation errors

use thiserror::Error;

use crate::store::TableKind;

/// Result type for record validation
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Why a JSON body could not become a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The body is valid JSON but not an object
    #[error("Expected a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("Unknown field '{field}' for {table}")]
    UnknownField { table: TableKind, field: String },

    #[error("Missing required field '{field}' for {table}")]
    MissingField { table: TableKind, field: &'static str },

    #[error("Field '{field}' for {table}: expected {expected}, got {found}")]
    TypeMismatch {
        table: TableKind,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// An integer that does not fit in 64 signed bits
    #[error("Field '{field}' for {table}: integer out of range")]
    IntegerOutOfRange { table: TableKind, field: &'static str },

    /// The normalised object still failed to decode into the record type
    #[error("Could not decode {table} record: {message}")]
    Decode { table: TableKind, message: String },
}

impl SchemaError {
    /// Whether the caller sent something the schema refuses
    /// (as opposed to a decoding fault on our side)
    pub fn is_client_error(&self) -> bool {
        !matches!(self, SchemaError::Decode { .. })
    }
}
