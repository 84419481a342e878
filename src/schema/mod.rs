//! Record schemas
//!
//! Each entity declares its fields (name, kind, required). A `FieldPolicy`
//! decides what happens to undeclared keys and to absent fields when a
//! request body is turned into a record.

mod errors;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaResult};
pub use types::{FieldDef, FieldKind, FieldPolicy, MissingFields, UnknownFields};
pub use validator::SchemaValidator;
