use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Declared type of an attribute value. Absent declarations fall back to
/// `String`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    #[default]
    String,
    Integer,
    Double,
}

impl AttributeType {
    /// Parse a declared type token from the source document. Returns `None`
    /// for anything outside the recognized set.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "string" => Some(Self::String),
            "integer" => Some(Self::Integer),
            "double" => Some(Self::Double),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Double => "double",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed attribute value ready to hand to the writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Int(i64),
    Double(f64),
}

/// One attribute record of the configuration.
///
/// An empty `value` is the deletion sentinel: the record requests removal of
/// the attribute instead of carrying data. Delete requests are never
/// type-coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
    #[serde(default, rename = "type")]
    pub kind: AttributeType,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>, kind: AttributeType) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind,
        }
    }

    /// Whether this record requests deletion instead of carrying a value.
    pub fn is_delete_request(&self) -> bool {
        self.value.is_empty()
    }

    /// Coerce the textual value into the declared type.
    pub fn coerced_value(&self) -> Result<AttributeValue, CoercionError> {
        let mismatch = || CoercionError {
            name: self.name.clone(),
            value: self.value.clone(),
            kind: self.kind,
        };

        match self.kind {
            AttributeType::String => Ok(AttributeValue::Text(self.value.clone())),
            AttributeType::Integer => self
                .value
                .trim()
                .parse::<i64>()
                .map(AttributeValue::Int)
                .map_err(|_| mismatch()),
            AttributeType::Double => self
                .value
                .trim()
                .parse::<f64>()
                .map(AttributeValue::Double)
                .map_err(|_| mismatch()),
        }
    }
}

/// A value that does not parse as its declared type. Recoverable: the
/// applier warns and skips the record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("attribute '{name}' declares type {kind} but value '{value}' does not parse")]
pub struct CoercionError {
    pub name: String,
    pub value: String,
    pub kind: AttributeType,
}
