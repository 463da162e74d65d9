//! Schemaless documents and field access helpers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Whether a field value counts as set.
///
/// Upstream records encode flags as booleans or as 0/1 integers depending on
/// which system produced them; both forms are accepted.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}

/// A record held by the document store.
///
/// Fields are an open JSON map; consumers project the keys they care about
/// through the typed accessors instead of assuming a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document type (e.g. "User", "Notification").
    pub doctype: String,
    /// Store-assigned identifier, unique within the doctype.
    pub id: String,
    /// The document body.
    pub fields: Map<String, Value>,
}

impl Document {
    /// Create a new document.
    pub fn new(
        doctype: impl Into<String>,
        id: impl Into<String>,
        fields: Map<String, Value>,
    ) -> Self {
        Self {
            doctype: doctype.into(),
            id: id.into(),
            fields,
        }
    }

    /// String field, or `None` when absent or not a string.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Flag field interpreted with [`truthy`]; absent means `false`.
    pub fn bool_field(&self, key: &str) -> bool {
        self.fields.get(key).is_some_and(truthy)
    }
}
