use agrimarket_types::{RecordId, Timestamp};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{ListingKind, Status};

/// A record type that can be listed on the market.
///
/// Implementors own the two normalization boundaries: loosely-typed form
/// input on the way in (`from_input`) and stored documents on the way out
/// (`from_document`). Raw maps never reach the store except through
/// `to_fields`.
pub trait Listing: Clone + std::fmt::Debug + Serialize + Send + Sync + 'static {
    const KIND: ListingKind;

    /// Normalizes create input.
    ///
    /// Coerces numeric strings, fills defaults for missing fields, and
    /// stamps `status = available` and `created_at`. Any client-supplied
    /// id, status or server-owned metric is ignored.
    fn from_input(input: &Map<String, Value>, created_at: Timestamp) -> Self;

    /// Normalizes a stored document using the same coercion rules.
    fn from_document(id: RecordId, fields: &Map<String, Value>) -> Self;

    fn id(&self) -> Option<&RecordId>;

    fn status(&self) -> Status;

    fn created_at(&self) -> Timestamp;

    /// Fields written to the store on insert (everything except the id).
    fn to_fields(&self) -> serde_json::Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(mut fields) => {
                fields.remove("id");
                Ok(fields)
            }
            _ => Err(serde::ser::Error::custom(format!(
                "{} did not serialize to an object",
                Self::KIND
            ))),
        }
    }

    /// Partial update applied by the transition at time `at`.
    fn transition_patch(_at: Timestamp) -> Map<String, Value> {
        let mut patch = Map::new();
        patch.insert(
            "status".into(),
            Value::from(Self::KIND.busy_status().as_str()),
        );
        patch
    }
}

/// Reads the `status` field, falling back to the kind's busy state when the
/// field is missing or unrecognised so that such records are never offered.
pub(crate) fn status_field(fields: &Map<String, Value>, kind: ListingKind) -> Status {
    fields
        .get("status")
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .unwrap_or(kind.busy_status())
}
