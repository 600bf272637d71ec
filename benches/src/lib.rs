//! Benchmark utilities for epicast.

use epicast_lib::prelude::*;

/// The reference input: 674 reported cases over a 30-day horizon.
pub fn reference_input() -> EstimateInput {
    EstimateInput::new(PeriodType::Days, 30.0, 674, 1563, 60.0, 10.0)
}

/// Inputs expressing the same 210-day horizon in each period type.
pub fn period_inputs() -> Vec<(&'static str, EstimateInput)> {
    vec![
        (
            "days",
            EstimateInput::new(PeriodType::Days, 210.0, 674, 1563, 60.0, 10.0),
        ),
        (
            "weeks",
            EstimateInput::new(PeriodType::Weeks, 30.0, 674, 1563, 60.0, 10.0),
        ),
        (
            "months",
            EstimateInput::new(PeriodType::Months, 7.0, 674, 1563, 60.0, 10.0),
        ),
    ]
}

/// Inputs sweeping reported-case magnitudes on the reference horizon.
pub fn caseload_inputs() -> Vec<(u64, EstimateInput)> {
    [10, 1_000, 100_000, 10_000_000]
        .into_iter()
        .map(|cases| {
            let mut input = reference_input();
            input.reported_cases = cases;
            (cases, input)
        })
        .collect()
}
