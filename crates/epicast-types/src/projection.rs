//! Projection output records.

use serde::{Deserialize, Serialize};

use crate::EstimateInput;

/// One projection branch: the impact metrics at the requested time.
///
/// All fields are computed once by the estimator and never mutated.
/// The truncated metrics are integers; the raw infection curve is kept
/// unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Impact {
    /// Estimated number of people infected today.
    pub currently_infected: u64,
    /// Projected infections at the requested time, unrounded.
    pub infections_by_requested_time: f64,
    /// Projected infections expected to become severe, truncated.
    pub severe_cases_by_requested_time: u64,
    /// Hospital beds left for severe cases at the requested time.
    ///
    /// Negative values signal a bed shortage, not an error.
    pub hospital_beds_by_requested_time: i64,
    /// Projected cases requiring intensive care, truncated.
    #[serde(rename = "casesForICUByRequestedTime")]
    pub cases_for_icu_by_requested_time: u64,
    /// Projected cases requiring ventilators, truncated.
    pub cases_for_ventilators_by_requested_time: u64,
    /// Estimated daily economic loss in US dollars, truncated.
    pub dollars_in_flight: u64,
}

impl Impact {
    /// Creates a new impact record.
    #[must_use]
    pub const fn new(
        currently_infected: u64,
        infections_by_requested_time: f64,
        severe_cases_by_requested_time: u64,
        hospital_beds_by_requested_time: i64,
        cases_for_icu_by_requested_time: u64,
        cases_for_ventilators_by_requested_time: u64,
        dollars_in_flight: u64,
    ) -> Self {
        Self {
            currently_infected,
            infections_by_requested_time,
            severe_cases_by_requested_time,
            hospital_beds_by_requested_time,
            cases_for_icu_by_requested_time,
            cases_for_ventilators_by_requested_time,
            dollars_in_flight,
        }
    }

    /// Returns true if the projected severe cases exceed bed capacity.
    #[must_use]
    pub const fn has_bed_shortage(&self) -> bool {
        self.hospital_beds_by_requested_time < 0
    }
}

/// Full estimator output: the input echoed back plus both branches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// The input record, unchanged.
    pub data: EstimateInput,
    /// Moderate scenario branch.
    pub impact: Impact,
    /// Severe scenario branch.
    #[serde(rename = "severeImpact")]
    pub severe_impact: Impact,
}

impl Projection {
    /// Creates a new projection.
    #[must_use]
    pub const fn new(data: EstimateInput, impact: Impact, severe_impact: Impact) -> Self {
        Self {
            data,
            impact,
            severe_impact,
        }
    }

    /// Serializes the projection to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
