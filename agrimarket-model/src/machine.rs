use agrimarket_types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coerce::{int_value, non_negative_number, optional_string, string_value, timestamp_value};
use crate::listing::status_field;
use crate::{Listing, ListingKind, Status};

/// Farm machinery offered for rent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub manufacture_year: i32,
    /// Daily rate.
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: Status,
    pub created_at: Timestamp,
}

impl Machine {
    fn normalize(id: Option<RecordId>, fields: &Map<String, Value>) -> Self {
        Self {
            id,
            name: string_value(fields.get("name")),
            manufacture_year: int_value(fields.get("manufactureYear"))
                .and_then(|y| i32::try_from(y).ok())
                .unwrap_or(0),
            price: non_negative_number(fields, "price"),
            description: optional_string(fields, "description"),
            status: status_field(fields, ListingKind::Machine),
            created_at: timestamp_value(fields.get("createdAt"))
                .unwrap_or(Timestamp::from_millis(0)),
        }
    }
}

impl Listing for Machine {
    const KIND: ListingKind = ListingKind::Machine;

    fn from_input(input: &Map<String, Value>, created_at: Timestamp) -> Self {
        Self {
            status: Status::Available,
            created_at,
            ..Self::normalize(None, input)
        }
    }

    fn from_document(id: RecordId, fields: &Map<String, Value>) -> Self {
        Self::normalize(Some(id), fields)
    }

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn status(&self) -> Status {
        self.status
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
