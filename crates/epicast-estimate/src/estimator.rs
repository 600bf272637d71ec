//! Scenario branches and the projection assembler.

use epicast_types::{EpicastError, EstimateInput, Impact, Projection, Result};

use crate::{growth, metrics};

/// Starting-infection assumption for one projection branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Moderate assumption: ten infections per reported case.
    Moderate,
    /// Severe assumption: fifty infections per reported case.
    Severe,
}

impl Scenario {
    /// Estimated infections per reported case under this scenario.
    ///
    /// These are domain constants, not inputs; they are the only thing
    /// that differs between the two projection branches.
    #[must_use]
    pub const fn infected_multiplier(&self) -> u64 {
        match self {
            Self::Moderate => 10,
            Self::Severe => 50,
        }
    }

    /// Returns the scenario as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }

    /// Returns both scenarios.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Moderate, Self::Severe]
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Computes the full impact projection for an input record.
///
/// Validates the input, normalizes the time horizon to days once, runs
/// the identical metric chain for both [`Scenario`] branches, and
/// packages the branches together with the unchanged input.
///
/// # Errors
///
/// Returns an error if a floating-point field is non-finite or out of
/// range (see [`EstimateInput::validate`]), or if the horizon
/// normalizes to zero days ([`EpicastError::ZeroHorizon`]), which
/// would divide by zero in the economic-loss metric.
pub fn estimate(input: &EstimateInput) -> Result<Projection> {
    input.validate()?;

    let elapsed_days = input.elapsed_days();
    if elapsed_days == 0.0 {
        return Err(EpicastError::ZeroHorizon);
    }

    let impact = project_scenario(input, elapsed_days, Scenario::Moderate);
    let severe_impact = project_scenario(input, elapsed_days, Scenario::Severe);

    Ok(Projection::new(input.clone(), impact, severe_impact))
}

/// Runs the metric chain for one scenario branch.
///
/// Every intermediate value is threaded explicitly from one step to
/// the next.
fn project_scenario(input: &EstimateInput, elapsed_days: f64, scenario: Scenario) -> Impact {
    let currently_infected =
        growth::currently_infected(scenario.infected_multiplier(), input.reported_cases);
    let infections = growth::infections_at(currently_infected, elapsed_days);

    let severe_cases = metrics::severe_cases(metrics::SEVERE_CASE_RATE_PCT, infections);
    let hospital_beds = metrics::available_hospital_beds(
        metrics::BED_AVAILABILITY_PCT,
        input.total_hospital_beds,
        severe_cases,
    );
    let icu_cases = metrics::icu_cases(metrics::ICU_RATE_PCT, infections);
    let ventilator_cases = metrics::ventilator_cases(metrics::VENTILATOR_RATE_PCT, infections);
    let dollars_in_flight = metrics::dollars_in_flight(
        infections,
        input.avg_daily_income_population,
        input.avg_daily_income_in_usd,
        elapsed_days,
    );

    Impact::new(
        currently_infected,
        infections,
        severe_cases,
        hospital_beds,
        icu_cases,
        ventilator_cases,
        dollars_in_flight,
    )
}
