//! Time horizon units and normalization to days.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Unit of the requested time horizon.
///
/// Months are a fixed 30-day approximation, not calendar-accurate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    /// Calendar days.
    #[default]
    Days,
    /// 7-day weeks.
    Weeks,
    /// 30-day months.
    Months,
}

impl PeriodType {
    /// Number of days represented by one unit of this period.
    #[must_use]
    pub const fn days_per_unit(&self) -> f64 {
        match self {
            Self::Days => 1.0,
            Self::Weeks => 7.0,
            Self::Months => 30.0,
        }
    }

    /// Normalizes a time horizon expressed in this unit to days.
    ///
    /// Zero and fractional horizons pass through without special-casing.
    #[must_use]
    pub const fn to_days(&self, time_to_elapse: f64) -> f64 {
        time_to_elapse * self.days_per_unit()
    }

    /// Returns the period type as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
        }
    }

    /// Returns all period types.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Days, Self::Weeks, Self::Months]
    }

    /// Maps a wire label to a period type.
    ///
    /// Matching is case-sensitive on the exact labels `days`, `weeks`,
    /// and `months`. Any other label falls back to [`Self::Days`]: the
    /// horizon is then taken as already being in days, and input
    /// parsing never fails on the period label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "weeks" => Self::Weeks,
            "months" => Self::Months,
            _ => Self::Days,
        }
    }
}

impl std::fmt::Display for PeriodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PeriodType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl<'de> Deserialize<'de> for PeriodType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}
