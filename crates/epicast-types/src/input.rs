//! Estimator input record.

use serde::{Deserialize, Serialize};

use crate::{EpicastError, PeriodType, Result};

/// Input parameters for an impact estimate.
///
/// Counts are unsigned so negative cases or beds are unrepresentable;
/// the floating-point fields are checked by [`Self::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateInput {
    /// Opaque region metadata, echoed back in the projection unchanged.
    ///
    /// Never read by the calculation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<serde_json::Value>,
    /// Unit of [`Self::time_to_elapse`].
    pub period_type: PeriodType,
    /// Length of the projection horizon, in `period_type` units.
    pub time_to_elapse: f64,
    /// Confirmed case count as of today.
    pub reported_cases: u64,
    /// Total hospital bed capacity.
    pub total_hospital_beds: u64,
    /// Share of the population earning the average daily income, in percent.
    pub avg_daily_income_population: f64,
    /// Average daily income in US dollars.
    #[serde(rename = "avgDailyIncomeInUSD")]
    pub avg_daily_income_in_usd: f64,
}

impl EstimateInput {
    /// Creates a new input record with no region metadata.
    #[must_use]
    pub const fn new(
        period_type: PeriodType,
        time_to_elapse: f64,
        reported_cases: u64,
        total_hospital_beds: u64,
        avg_daily_income_population: f64,
        avg_daily_income_in_usd: f64,
    ) -> Self {
        Self {
            region: None,
            period_type,
            time_to_elapse,
            reported_cases,
            total_hospital_beds,
            avg_daily_income_population,
            avg_daily_income_in_usd,
        }
    }

    /// Attaches opaque region metadata to be echoed back in the projection.
    #[must_use]
    pub fn with_region(mut self, region: serde_json::Value) -> Self {
        self.region = Some(region);
        self
    }

    /// Parses an input record from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or a required field is
    /// missing. An unrecognized `periodType` label is not an error; it
    /// falls back to days (see [`PeriodType::from_label`]).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the time horizon normalized to days.
    #[must_use]
    pub const fn elapsed_days(&self) -> f64 {
        self.period_type.to_days(self.time_to_elapse)
    }

    /// Checks the floating-point fields for finiteness and range.
    ///
    /// # Errors
    ///
    /// Returns an error if `timeToElapse` or `avgDailyIncomeInUSD` is
    /// negative or non-finite, or if `avgDailyIncomePopulation` is
    /// outside `0..=100`.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("timeToElapse", self.time_to_elapse),
            ("avgDailyIncomeInUSD", self.avg_daily_income_in_usd),
        ] {
            if !value.is_finite() {
                return Err(EpicastError::NonFinite { field, value });
            }
            if value < 0.0 {
                return Err(EpicastError::Negative { field, value });
            }
        }

        let share = self.avg_daily_income_population;
        if !share.is_finite() {
            return Err(EpicastError::NonFinite {
                field: "avgDailyIncomePopulation",
                value: share,
            });
        }
        if !(0.0..=100.0).contains(&share) {
            return Err(EpicastError::IncomeShareOutOfRange { value: share });
        }

        Ok(())
    }
}
