//! Field declarations and field policy
//!
//! Supported field kinds:
//! - id: integer or string
//! - text: UTF-8 string
//! - integer: 64-bit signed integer
//! - number: any JSON number, kept as sent

use serde::{Deserialize, Serialize};

/// Kind of value a declared field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Integer or string identifier
    Id,
    /// UTF-8 string
    Text,
    /// 64-bit signed integer
    Integer,
    /// Any JSON number
    Number,
}

impl FieldKind {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Id => "integer or string",
            FieldKind::Text => "string",
            FieldKind::Integer => "integer",
            FieldKind::Number => "number",
        }
    }
}

/// A declared record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Only enforced under `MissingFields::Reject`
    pub required: bool,
}

impl FieldDef {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// What to do with keys an entity does not declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFields {
    /// Refuse the whole record
    #[default]
    Reject,
    /// Drop undeclared keys and keep the rest
    Ignore,
}

/// What to do with declared fields that are absent or null
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingFields {
    /// Store every absent field as null
    #[default]
    Default,
    /// Refuse records missing a required field; optional fields still default
    Reject,
}

/// How incoming JSON objects are turned into records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldPolicy {
    #[serde(default)]
    pub unknown_fields: UnknownFields,
    #[serde(default)]
    pub missing_fields: MissingFields,
}

impl FieldPolicy {
    /// Strictest policy: undeclared keys and missing required fields are refused
    pub fn strict() -> Self {
        Self {
            unknown_fields: UnknownFields::Reject,
            missing_fields: MissingFields::Reject,
        }
    }
}
