//! Core types for the epicast epidemic impact estimator.
//!
//! This crate provides the fundamental data structures used throughout
//! epicast:
//!
//! - [`EstimateInput`] - Input record: reported cases, time horizon,
//!   hospital capacity, and population economic data
//! - [`PeriodType`] - Unit of the time horizon (days, weeks, months)
//! - [`Impact`] - One projection branch: infection growth, healthcare
//!   burden, and economic loss
//! - [`Projection`] - Full output: the input echoed back plus the
//!   moderate and severe branches

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/epicast-dev/epicast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod input;
mod period;
mod projection;

pub use error::{EpicastError, Result};
pub use input::EstimateInput;
pub use period::PeriodType;
pub use projection::{Impact, Projection};
