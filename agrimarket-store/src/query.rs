//! Query, predicate and document types shared by every store backend.

use agrimarket_types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field every listing carries for creation-time ordering.
pub const CREATED_AT_FIELD: &str = "createdAt";

/// A stored document: identity plus its top-level fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: RecordId,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: RecordId, fields: Map<String, Value>) -> Self {
        Self { id, fields }
    }

    /// `createdAt` as epoch milliseconds. Accepts a number or a string
    /// holding either an RFC 3339 date-time or integer milliseconds.
    pub fn created_at_millis(&self) -> Option<i64> {
        match self.fields.get(CREATED_AT_FIELD)? {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
            Value::String(s) => Timestamp::parse_stored(s).map(|ts| ts.as_millis()),
            _ => None,
        }
    }
}

/// Equality predicate on one top-level field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEquals {
    pub field: String,
    pub value: Value,
}

impl FieldEquals {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn matches(&self, fields: &Map<String, Value>) -> bool {
        fields.get(&self.field) == Some(&self.value)
    }
}

/// Result ordering supported by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Newest `createdAt` first.
    CreatedAtDesc,
}

/// A collection query: AND of equality predicates, optional ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filters: Vec<FieldEquals>,
    pub order: Option<Order>,
}

impl Query {
    /// Every document, in store order.
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(FieldEquals::new(field, value));
        self
    }

    #[must_use]
    pub fn newest_first(mut self) -> Self {
        self.order = Some(Order::CreatedAtDesc);
        self
    }

    pub fn matches(&self, fields: &Map<String, Value>) -> bool {
        self.filters.iter().all(|f| f.matches(fields))
    }
}
