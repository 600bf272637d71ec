//! Deterministic epidemic impact projections from reported case counts.
//!
//! This is a facade crate that re-exports functionality from the
//! epicast workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use epicast_lib::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let input = EstimateInput::new(PeriodType::Days, 30.0, 674, 1563, 60.0, 10.0);
//!     let projection = estimate(&input)?;
//!
//!     assert_eq!(projection.impact.currently_infected, 6740);
//!     assert_eq!(projection.severe_impact.currently_infected, 33700);
//!     assert!(projection.impact.has_bed_shortage());
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/epicast-dev/epicast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use epicast_types::*;

// Re-export the calculation pipeline
pub use epicast_estimate::{Scenario, estimate, growth, metrics};

/// Prelude module for convenient imports.
///
/// ```
/// use epicast_lib::prelude::*;
/// ```
pub mod prelude {
    pub use epicast_estimate::{Scenario, estimate};
    pub use epicast_types::{
        EpicastError, EstimateInput, Impact, PeriodType, Projection, Result,
    };
}
