use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a listing.
///
/// Every kind starts `Available` and moves forward exactly once to its busy
/// state; there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Available,
    Hired,
    Rented,
    Sold,
}

impl Status {
    /// Wire name as stored in the `status` field.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::Hired => "hired",
            Status::Rented => "rented",
            Status::Sold => "sold",
        }
    }

    pub const fn is_available(&self) -> bool {
        matches!(self, Status::Available)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(Status::Available),
            "hired" => Ok(Status::Hired),
            "rented" => Ok(Status::Rented),
            "sold" => Ok(Status::Sold),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

/// The three kinds of listing on the market, with the collection each one
/// lives in and the transition that takes it off the market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    Labour,
    Machine,
    Produce,
}

impl ListingKind {
    pub const ALL: [ListingKind; 3] = [
        ListingKind::Labour,
        ListingKind::Machine,
        ListingKind::Produce,
    ];

    /// Name of the record-store collection.
    pub const fn collection(&self) -> &'static str {
        match self {
            ListingKind::Labour => "labours",
            ListingKind::Machine => "machines",
            ListingKind::Produce => "produce",
        }
    }

    /// The status a successful transition moves the record to.
    pub const fn busy_status(&self) -> Status {
        match self {
            ListingKind::Labour => Status::Hired,
            ListingKind::Machine => Status::Rented,
            ListingKind::Produce => Status::Sold,
        }
    }

    /// Verb naming the transition (`hire`, `rent`, `buy`).
    pub const fn transition_verb(&self) -> &'static str {
        match self {
            ListingKind::Labour => "hire",
            ListingKind::Machine => "rent",
            ListingKind::Produce => "buy",
        }
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ListingKind::Labour => "labour",
            ListingKind::Machine => "machine",
            ListingKind::Produce => "produce",
        };
        f.write_str(name)
    }
}
