use agrimarket_types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coerce::{non_negative_number, string_value, timestamp_value};
use crate::listing::status_field;
use crate::{Listing, ListingKind, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProduceType {
    Vegetable,
    Fruit,
    Crop,
    Grains,
}

impl ProduceType {
    /// Case-insensitive parse; anything else is treated as not supplied.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vegetable" => Some(ProduceType::Vegetable),
            "fruit" => Some(ProduceType::Fruit),
            "crop" => Some(ProduceType::Crop),
            "grains" => Some(ProduceType::Grains),
            _ => None,
        }
    }
}

/// Harvested produce offered for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Produce {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub produce_type: Option<ProduceType>,
    /// Harvest date.
    pub manufactured_date: String,
    /// Per kilogram.
    pub price: f64,
    pub status: Status,
    pub created_at: Timestamp,
}

impl Produce {
    fn normalize(id: Option<RecordId>, fields: &Map<String, Value>) -> Self {
        Self {
            id,
            name: string_value(fields.get("name")),
            produce_type: fields
                .get("type")
                .and_then(Value::as_str)
                .and_then(ProduceType::parse),
            manufactured_date: string_value(fields.get("manufacturedDate")),
            price: non_negative_number(fields, "price"),
            status: status_field(fields, ListingKind::Produce),
            created_at: timestamp_value(fields.get("createdAt"))
                .unwrap_or(Timestamp::from_millis(0)),
        }
    }
}

impl Listing for Produce {
    const KIND: ListingKind = ListingKind::Produce;

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
