//! Sample labour listings for demos and empty environments.
//!
//! Samples are inserted straight into the store rather than through
//! `create`, so they keep their ratings, job counts and verified flags.
//! Each one is still stamped `available` with the current time.

use agrimarket_model::{ExperienceEntry, Gender, Labour, Listing, ListingKind, Status};
use agrimarket_store::RecordStore;
use agrimarket_types::{RecordId, Timestamp};
use serde::Serialize;
use tracing::{info, warn};

/// Outcome of inserting one sample listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedDetail {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SeedDetail {
    pub fn succeeded(&self) -> bool {
        self.id.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    pub attempted: usize,
    pub inserted: usize,
    pub details: Vec<SeedDetail>,
}

impl SeedReport {
    pub fn message(&self) -> String {
        format!(
            "Added {} out of {} sample labours",
            self.inserted, self.attempted
        )
    }
}

/// Inserts the full sample set (five listings).
pub async fn seed_sample_labours(store: &dyn RecordStore) -> SeedReport {
    insert_all(store, full_samples()).await
}

/// Inserts the quick sample set (two listings).
pub async fn seed_quick_samples(store: &dyn RecordStore) -> SeedReport {
    insert_all(store, quick_samples()).await
}

async fn insert_all(store: &dyn RecordStore, samples: Vec<Labour>) -> SeedReport {
    let collection = ListingKind::Labour.collection();
    let attempted = samples.len();
    let mut details = Vec::with_capacity(attempted);

    for labour in samples {
        let outcome = match labour.to_fields() {
            Ok(fields) => store.insert(collection, fields).await.map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        match outcome {
            Ok(id) => {
                info!("Seeded sample labour {} ({})", labour.name, id);
                details.push(SeedDetail {
                    name: labour.name,
                    id: Some(id),
                    error: None,
                });
            }
            Err(e) => {
                warn!("Failed to seed sample labour {}: {}", labour.name, e);
                details.push(SeedDetail {
                    name: labour.name,
                    id: None,
                    error: Some(e),
                });
            }
        }
    }

    let report = SeedReport {
        attempted,
        inserted: details.iter().filter(|d| d.succeeded()).count(),
        details,
    };
    info!("{}", report.message());
    report
}

struct Sample<'a> {
    name: &'a str,
    age: u32,
    gender: Gender,
    contact: &'a str,
    address: &'a str,
    wages: f64,
    available: (&'a str, &'a str),
    experience: &'a [(&'a str, u32, f64, &'a str)],
    skills: &'a [&'a str],
    preferred_crops: &'a [&'a str],
    languages: &'a [&'a str],
    education: &'a str,
    rating: f64,
    total_jobs: u32,
}

impl Sample<'_> {
    fn into_labour(self, created_at: Timestamp) -> Labour {
        Labour {
            id: None,
            name: self.name.into(),
            age: self.age,
            gender: Some(self.gender),
            contact: self.contact.into(),
            address: self.address.into(),
            wages: self.wages,
            available_from: self.available.0.into(),
            available_to: self.available.1.into(),
            experience: self
                .experience
                .iter()
                .map(|&(crop, duration, farm_size, employer)| ExperienceEntry {
                    crop: crop.into(),
                    duration,
                    farm_size,
                    employer: employer.into(),
                })
                .collect(),
            skills: strings(self.skills),
            preferred_crops: strings(self.preferred_crops),
            languages: strings(self.languages),
            education: self.education.into(),
            status: Status::Available,
            rating: self.rating,
            total_jobs: self.total_jobs,
            verified: true,
            created_at,
            hired_at: None,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn full_samples() -> Vec<Labour> {
    let now = Timestamp::now();
    [
        Sample {
            name: "Rajesh Kumar",
            age: 32,
            gender: Gender::Male,
            contact: "9876543210",
            address: "Village: Rampur, District: Aligarh, Uttar Pradesh",
            wages: 550.0,
            available: ("2024-01-15", "2024-12-15"),
            experience: &[
                ("Rice", 8, 12.0, "Green Fields Farm"),
                ("Wheat", 6, 8.0, "Sharma Farms"),
                ("Sugarcane", 4, 15.0, "Sweet Cane Co-op"),
            ],
            skills: &["Ploughing", "Sowing", "Harvesting", "Irrigation", "Tractor Operation"],
            preferred_crops: &["Rice", "Wheat", "Sugarcane", "Vegetables"],
            languages: &["Hindi", "English", "Bhojpuri"],
            education: "High School",
            rating: 4.5,
            total_jobs: 23,
        },
        Sample {
            name: "Sunita Devi",
            age: 28,
            gender: Gender::Female,
            contact: "8765432109",
            address: "Village: Barabanki, District: Barabanki, Uttar Pradesh",
            wages: 480.0,
            available: ("2024-02-01", "2024-11-30"),
            experience: &[
                ("Vegetables", 6, 5.0, "Organic Greens"),
                ("Flowers", 3, 3.0, "Bloom Gardens"),
                ("Fruits", 4, 8.0, "Orchard Fresh"),
            ],
            skills: &["Weeding", "Harvesting", "Pruning", "Pest Control", "Organic Farming"],
            preferred_crops: &["Vegetables", "Flowers", "Fruits", "Spices"],
            languages: &["Hindi", "Awadhi"],
            education: "Secondary School",
            rating: 4.8,
            total_jobs: 18,
        },
        Sample {
            name: "Amit Singh",
            age: 45,
            gender: Gender::Male,
            contact: "7654321098",
            address: "Village: Sultanpur, District: Sultanpur, Uttar Pradesh",
            wages: 700.0,
            available: ("2024-01-01", "2024-12-31"),
            experience: &[
                ("Rice", 20, 25.0, "Multiple Farms"),
                ("Wheat", 18, 20.0, "Multiple Farms"),
                ("Pulses", 12, 15.0, "Dal Producers Co-op"),
                ("Cotton", 8, 18.0, "Textile Growers"),
            ],
            skills: &[
                "Ploughing",
                "Sowing",
                "Harvesting",
                "Irrigation",
                "Tractor Operation",
                "Crop Management",
            ],
            preferred_crops: &["Rice", "Wheat", "Pulses", "Cotton", "Maize"],
            languages: &["Hindi", "English", "Awadhi"],
            education: "Primary School",
            rating: 4.9,
            total_jobs: 156,
        },
        Sample {
            name: "Priya Sharma",
            age: 26,
            gender: Gender::Female,
            contact: "6543210987",
            address: "Village: Lucknow, District: Lucknow, Uttar Pradesh",
            wages: 520.0,
            available: ("2024-03-01", "2024-10-31"),
            experience: &[
                ("Vegetables", 5, 6.0, "City Greens"),
                ("Spices", 3, 4.0, "Spice Garden"),
                ("Medicinal Plants", 2, 3.0, "Herbal Farms"),
            ],
            skills: &[
                "Weeding",
                "Harvesting",
                "Pruning",
                "Greenhouse Management",
                "Organic Farming",
            ],
            preferred_crops: &["Vegetables", "Spices", "Medicinal Plants", "Flowers"],
            languages: &["Hindi", "English", "Urdu"],
            education: "High School",
            rating: 4.6,
            total_jobs: 32,
        },
        Sample {
            name: "Vikram Yadav",
            age: 38,
            gender: Gender::Male,
            contact: "9432109876",
            address: "Village: Gorakhpur, District: Gorakhpur, Uttar Pradesh",
            wages: 600.0,
            available: ("2024-01-10", "2024-11-30"),
            experience: &[
                ("Rice", 12, 18.0, "Paddy Fields Inc"),
                ("Maize", 8, 12.0, "Corn Producers"),
                ("Sugarcane", 6, 20.0, "Sugar Mill Co-op"),
            ],
            skills: &[
                "Tractor Operation",
                "Ploughing",
                "Sowing",
                "Harvesting",
                "Irrigation",
                "Machine Maintenance",
            ],
            preferred_crops: &["Rice", "Maize", "Sugarcane", "Pulses"],
            languages: &["Hindi", "Bhojpuri"],
            education: "Middle School",
            rating: 4.7,
            total_jobs: 89,
        },
    ]
    .into_iter()
    .map(|s| s.into_labour(now))
    .collect()
}

fn quick_samples() -> Vec<Labour> {
    let now = Timestamp::now();
    [
        Sample {
            name: "Ramesh Patel",
            age: 35,
            gender: Gender::Male,
            contact: "9123456789",
            address: "Village: Varanasi, District: Varanasi, Uttar Pradesh",
            wages: 580.0,
            available: ("2024-02-01", "2024-12-15"),
            experience: &[
                ("Rice", 10, 15.0, "Ganga Farms"),
                ("Vegetables", 5, 8.0, "Local Market Garden"),
            ],
            skills: &["Ploughing", "Sowing", "Harvesting", "Irrigation"],
            preferred_crops: &["Rice", "Vegetables", "Pulses"],
            languages: &["Hindi", "Bhojpuri"],
            education: "Primary School",
            rating: 4.4,
            total_jobs: 45,
        },
        Sample {
            name: "Laxmi Kumari",
            age: 29,
            gender: Gender::Female,
            contact: "8987654321",
            address: "Village: Ayodhya, District: Ayodhya, Uttar Pradesh",
            wages: 500.0,
            available: ("2024-03-01", "2024-10-31"),
            experience: &[
                ("Flowers", 4, 4.0, "Temple Gardens"),
                ("Vegetables", 3, 6.0, "Community Farm"),
            ],
            skills: &["Weeding", "Harvesting", "Pruning", "Organic Farming"],
            preferred_crops: &["Flowers", "Vegetables", "Fruits"],
            languages: &["Hindi", "Awadhi"],
            education: "Secondary School",
            rating: 4.6,
            total_jobs: 28,
        },
    ]
    .into_iter()
    .map(|s| s.into_labour(now))
    .collect()
}
