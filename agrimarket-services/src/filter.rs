//! Client-side filtering of listed labour.
//!
//! Four independent criteria combined by AND. A criterion that is absent,
//! or present but empty, keeps every record. Filtering never reorders.

use agrimarket_model::Labour;
use agrimarket_model::coerce::{parse_float_prefix, parse_int_prefix};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabourFilter {
    /// Keep records whose skills contain this tag.
    #[serde(default)]
    pub skill: Option<String>,
    /// Keep records whose preferred crops contain this tag.
    #[serde(default)]
    pub crop_experience: Option<String>,
    /// Keep records with at least this many years of total experience.
    #[serde(default)]
    pub min_experience: Option<u64>,
    /// Keep records whose daily wage is at most this much.
    #[serde(default)]
    pub max_wage: Option<f64>,
}

impl LabourFilter {
    /// Builds a filter from raw form or query-string values.
    ///
    /// Empty strings mean "not set". A numeric threshold that does not
    /// parse is also treated as not set; negative experience thresholds
    /// keep everyone.
    pub fn from_params(
        skill: Option<&str>,
        crop_experience: Option<&str>,
        min_experience: Option<&str>,
        max_wage: Option<&str>,
    ) -> Self {
        let tag = |s: Option<&str>| {
            s.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let min_experience = min_experience
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| {
                let parsed = parse_int_prefix(s);
                if parsed.is_none() {
                    debug!("Ignoring unparseable minExperience {:?}", s);
                }
                parsed
            })
            .map(|years| years.max(0) as u64);

        let max_wage = max_wage
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| {
                let parsed = parse_float_prefix(s);
                if parsed.is_none() {
                    debug!("Ignoring unparseable maxWage {:?}", s);
                }
                parsed
            });

        Self {
            skill: tag(skill),
            crop_experience: tag(crop_experience),
            min_experience,
            max_wage,
        }
    }

    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = Some(skill.into());
        self
    }

    pub fn with_crop_experience(mut self, crop: impl Into<String>) -> Self {
        self.crop_experience = Some(crop.into());
        self
    }

    pub fn with_min_experience(mut self, years: u64) -> Self {
        self.min_experience = Some(years);
        self
    }

    pub fn with_max_wage(mut self, wage: f64) -> Self {
        self.max_wage = Some(wage);
        self
    }

    /// True when no criterion would exclude anything.
    pub fn is_empty(&self) -> bool {
        non_empty(&self.skill).is_none()
            && non_empty(&self.crop_experience).is_none()
            && self.min_experience.is_none()
            && self.max_wage.is_none()
    }

    /// Whether a single record passes every set criterion.
    pub fn matches(&self, labour: &Labour) -> bool {
        if let Some(skill) = non_empty(&self.skill) {
            if !labour.has_skill(skill) {
                return false;
            }
        }
        if let Some(crop) = non_empty(&self.crop_experience) {
            if !labour.prefers_crop(crop) {
                return false;
            }
        }
        if let Some(min) = self.min_experience {
            if labour.total_experience() < min {
                return false;
            }
        }
        if let Some(max) = self.max_wage {
            if labour.wages > max {
                return false;
            }
        }
        true
    }

    /// Keeps the records that match, in their original order.
    pub fn apply(&self, labours: Vec<Labour>) -> Vec<Labour> {
        if self.is_empty() {
            return labours;
        }
        labours.into_iter().filter(|l| self.matches(l)).collect()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
