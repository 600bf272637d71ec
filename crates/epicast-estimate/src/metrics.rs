//! Derived healthcare and economic metrics.
//!
//! Each metric is a stateless transform of the projected infection
//! count and/or raw input fields. Every metric truncates toward zero
//! at the end of its formula; nothing is rounded.

/// Share of projected infections expected to become severe, in percent.
pub const SEVERE_CASE_RATE_PCT: f64 = 15.0;

/// Share of total hospital beds available for severe cases, in percent.
pub const BED_AVAILABILITY_PCT: f64 = 35.0;

/// Share of projected infections requiring intensive care, in percent.
pub const ICU_RATE_PCT: f64 = 5.0;

/// Share of projected infections requiring ventilators, in percent.
pub const VENTILATOR_RATE_PCT: f64 = 2.0;

/// Projected infections expected to become severe by the requested time.
#[must_use]
pub fn severe_cases(rate_pct: f64, infections: f64) -> u64 {
    ((rate_pct / 100.0) * infections).trunc() as u64
}

/// Hospital beds left for severe cases at the requested time.
///
/// A negative result is the size of the bed shortfall, not an error.
#[must_use]
pub fn available_hospital_beds(rate_pct: f64, total_beds: u64, severe_cases: u64) -> i64 {
    ((rate_pct / 100.0) * total_beds as f64).trunc() as i64 - severe_cases as i64
}

/// Projected cases requiring intensive care by the requested time.
#[must_use]
pub fn icu_cases(rate_pct: f64, infections: f64) -> u64 {
    ((rate_pct / 100.0) * infections).trunc() as u64
}

/// Projected cases requiring ventilators by the requested time.
#[must_use]
pub fn ventilator_cases(rate_pct: f64, infections: f64) -> u64 {
    ((rate_pct / 100.0) * infections).trunc() as u64
}

/// Estimated daily economic loss in US dollars.
///
/// Operations run in a fixed order (income share, then income, then
/// the division by elapsed days) so results reproduce exactly across
/// conforming implementations. The caller guarantees `elapsed_days`
/// is non-zero.
#[must_use]
pub fn dollars_in_flight(
    infections: f64,
    income_share_pct: f64,
    daily_income_usd: f64,
    elapsed_days: f64,
) -> u64 {
    let mut dollars = infections * (income_share_pct / 100.0);
    dollars *= daily_income_usd;
    dollars /= elapsed_days;
    dollars.trunc() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severe_cases() {
        assert_eq!(severe_cases(SEVERE_CASE_RATE_PCT, 6_901_760.0), 1_035_264);
        assert_eq!(severe_cases(SEVERE_CASE_RATE_PCT, 0.0), 0);
    }

    #[test]
    fn test_available_hospital_beds_shortage() {
        // trunc(0.35 * 1563) = 547 beds against a million severe cases.
        assert_eq!(
            available_hospital_beds(BED_AVAILABILITY_PCT, 1563, 1_035_264),
            -1_034_717
        );
    }

    #[test]
    fn test_available_hospital_beds_surplus() {
        assert_eq!(available_hospital_beds(BED_AVAILABILITY_PCT, 1563, 0), 547);
        assert_eq!(available_hospital_beds(BED_AVAILABILITY_PCT, 1563, 547), 0);
    }

    #[test]
    fn test_beds_decrease_as_severe_cases_increase() {
        let mut previous = i64::MAX;
        for severe in [0, 1, 100, 10_000, 1_000_000] {
            let beds = available_hospital_beds(BED_AVAILABILITY_PCT, 1563, severe);
            assert!(beds < previous);
            previous = beds;
        }
    }

    #[test]
    fn test_icu_cases() {
        assert_eq!(icu_cases(ICU_RATE_PCT, 6_901_760.0), 345_088);
    }

    #[test]
    fn test_ventilator_cases() {
        // 2% of 6,901,760 is 138,035.2; the fraction truncates away.
        assert_eq!(ventilator_cases(VENTILATOR_RATE_PCT, 6_901_760.0), 138_035);
    }

    #[test]
    fn test_dollars_in_flight() {
        assert_eq!(dollars_in_flight(6_901_760.0, 60.0, 10.0, 30.0), 1_380_352);
        assert_eq!(dollars_in_flight(34_508_800.0, 60.0, 10.0, 30.0), 6_901_760);
    }

    #[test]
    fn test_dollars_in_flight_truncates() {
        // 100 * 0.55 * 3 / 7 = 23.57...
        assert_eq!(dollars_in_flight(100.0, 55.0, 3.0, 7.0), 23);
    }
}
