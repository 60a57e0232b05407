use agrimarket_types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coerce::{
    bool_value, non_negative_int, non_negative_number, number_value, string_list_value,
    string_value, timestamp_value,
};
use crate::listing::status_field;
use crate::{Listing, ListingKind, Status};

/// Language assumed when a labourer lists none.
pub const DEFAULT_LANGUAGE: &str = "Hindi";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Case-insensitive parse; anything else is treated as not supplied.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// One past engagement on a farm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub crop: String,
    /// Years.
    pub duration: u32,
    /// Acres.
    pub farm_size: f64,
    pub employer: String,
}

impl ExperienceEntry {
    /// Normalizes one entry. Non-object values are not entries.
    pub fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;
        Some(Self {
            crop: string_value(fields.get("crop")),
            duration: non_negative_int(fields, "duration"),
            farm_size: non_negative_number(fields, "farmSize"),
            employer: string_value(fields.get("employer")),
        })
    }
}

/// A farm labourer offering daily work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Labour {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub contact: String,
    pub address: String,
    /// Daily rate.
    pub wages: f64,
    pub available_from: String,
    pub available_to: String,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
    pub preferred_crops: Vec<String>,
    pub languages: Vec<String>,
    pub education: String,
    pub status: Status,
    /// 0 to 5.
    pub rating: f64,
    pub total_jobs: u32,
    pub verified: bool,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hired_at: Option<Timestamp>,
}

impl Labour {
    /// Sum of experience durations in years.
    pub fn total_experience(&self) -> u64 {
        self.experience.iter().map(|e| u64::from(e.duration)).sum()
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    pub fn prefers_crop(&self, crop: &str) -> bool {
        self.preferred_crops.iter().any(|c| c == crop)
    }

    fn normalize(id: Option<RecordId>, fields: &Map<String, Value>) -> Self {
        let experience = match fields.get("experience") {
            Some(Value::Array(entries)) => entries
                .iter()
                .filter_map(ExperienceEntry::from_value)
                .collect(),
            _ => Vec::new(),
        };

        Self {
            id,
            name: string_value(fields.get("name")),
            age: non_negative_int(fields, "age"),
            gender: fields
                .get("gender")
                .and_then(Value::as_str)
                .and_then(Gender::parse),
            contact: string_value(fields.get("contact")),
            address: string_value(fields.get("address")),
            wages: non_negative_number(fields, "wages"),
            available_from: string_value(fields.get("availableFrom")),
            available_to: string_value(fields.get("availableTo")),
            experience,
            skills: string_list_value(fields.get("skills")).unwrap_or_default(),
            preferred_crops: string_list_value(fields.get("preferredCrops")).unwrap_or_default(),
            languages: string_list_value(fields.get("languages"))
                .unwrap_or_else(|| vec![DEFAULT_LANGUAGE.to_string()]),
            education: string_value(fields.get("education")),
            status: status_field(fields, ListingKind::Labour),
            rating: number_value(fields.get("rating"))
                .map(|r| r.clamp(0.0, 5.0))
                .unwrap_or(0.0),
            total_jobs: non_negative_int(fields, "totalJobs"),
            verified: bool_value(fields.get("verified")).unwrap_or(false),
            created_at: timestamp_value(fields.get("createdAt"))
                .unwrap_or(Timestamp::from_millis(0)),
            hired_at: timestamp_value(fields.get("hiredAt")),
        }
    }
}

impl Listing for Labour {
    const KIND: ListingKind = ListingKind::Labour;

    fn from_input(input: &Map<String, Value>, created_at: Timestamp) -> Self {
        Self {
            status: Status::Available,
            rating: 0.0,
            total_jobs: 0,
            verified: false,
            created_at,
            hired_at: None,
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

    fn transition_patch(at: Timestamp) -> Map<String, Value> {
        let mut patch = Map::new();
        patch.insert("status".into(), Value::from(Status::Hired.as_str()));
        patch.insert("hiredAt".into(), Value::from(at.as_millis()));
        patch
    }
}
