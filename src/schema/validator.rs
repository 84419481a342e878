//! Turns request bodies into typed records
//!
//! Validation semantics:
//! - The body must be a JSON object
//! - Undeclared keys are refused or dropped, per `UnknownFields`
//! - Absent and null fields are stored as null, or refused when required
//!   under `MissingFields::Reject`
//! - Field types must match; there is no coercion
//!
//! Checks run in a fixed order (undeclared keys first, then declared fields
//! in declaration order), so the same body always yields the same error.

use serde_json::{Map, Value};

use super::errors::{SchemaError, SchemaResult};
use super::types::{FieldDef, FieldKind, FieldPolicy, MissingFields, UnknownFields};
use crate::store::{Record, TableKind};

/// Validates bodies against a record's declared fields under a policy.
///
/// The validator does not mutate its input; it builds a fresh object
/// holding only declared fields.
#[derive(Debug, Clone, Copy)]
pub struct SchemaValidator {
    policy: FieldPolicy,
}

impl SchemaValidator {
    pub fn new(policy: FieldPolicy) -> Self {
        Self { policy }
    }

    /// Validates `body` and decodes it into `R`.
    pub fn validate_record<R: Record>(&self, body: &Value) -> SchemaResult<R> {
        let normalized = self.normalize(R::TABLE, R::FIELDS, body)?;
        serde_json::from_value(Value::Object(normalized)).map_err(|e| SchemaError::Decode {
            table: R::TABLE,
            message: e.to_string(),
        })
    }

    /// Produces an object holding exactly the declared fields.
    pub fn normalize(
        &self,
        table: TableKind,
        fields: &[FieldDef],
        body: &Value,
    ) -> SchemaResult<Map<String, Value>> {
        let obj = body.as_object().ok_or(SchemaError::NotAnObject {
            found: json_type_name(body),
        })?;

        if self.policy.unknown_fields == UnknownFields::Reject {
            if let Some(key) = obj.keys().find(|k| !fields.iter().any(|f| f.name == k.as_str())) {
                return Err(SchemaError::UnknownField {
                    table,
                    field: key.clone(),
                });
            }
        }

        let mut normalized = Map::new();
        for field in fields {
            let value = match obj.get(field.name) {
                Some(value) if !value.is_null() => {
                    check_kind(table, field, value)?;
                    value.clone()
                }
                _ => {
                    if field.required && self.policy.missing_fields == MissingFields::Reject {
                        return Err(SchemaError::MissingField {
                            table,
                            field: field.name,
                        });
                    }
                    Value::Null
                }
            };
            normalized.insert(field.name.to_string(), value);
        }

        Ok(normalized)
    }
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new(FieldPolicy::default())
    }
}

fn check_kind(table: TableKind, field: &FieldDef, value: &Value) -> SchemaResult<()> {
    let wants_integer = matches!(field.kind, FieldKind::Id | FieldKind::Integer);
    if wants_integer && value.is_u64() && !value.is_i64() {
        return Err(SchemaError::IntegerOutOfRange {
            table,
            field: field.name,
        });
    }

    let ok = match field.kind {
        FieldKind::Id => value.is_i64() || value.is_string(),
        FieldKind::Text => value.is_string(),
        FieldKind::Integer => value.is_i64(),
        FieldKind::Number => value.is_number(),
    };

    if ok {
        Ok(())
    } else {
        Err(SchemaError::TypeMismatch {
            table,
            field: field.name,
            expected: field.kind.type_name(),
            found: json_type_name(value),
        })
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
