//! Error types for epicast.

use thiserror::Error;

/// Result type alias for epicast operations.
pub type Result<T> = std::result::Result<T, EpicastError>;

/// Errors that can occur while validating input or producing a projection.
///
/// Validation is strict: every rejection happens up front at the
/// [`estimate`] boundary, never partway through the formula chain.
///
/// [`estimate`]: https://docs.rs/epicast-estimate
#[derive(Error, Debug)]
pub enum EpicastError {
    /// A floating-point input field was NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NonFinite {
        /// The wire name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A floating-point input field was negative.
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// The wire name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The income-earning population share was outside `[0, 100]`.
    #[error("avgDailyIncomePopulation must be within 0..=100, got {value}")]
    IncomeShareOutOfRange {
        /// The rejected value.
        value: f64,
    },

    /// The time horizon normalized to zero days.
    ///
    /// A zero-day horizon would divide by zero in the economic-loss
    /// formula, so it is rejected instead of propagating infinity.
    #[error("time horizon normalizes to zero days")]
    ZeroHorizon,

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
