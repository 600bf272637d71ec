//! Impact calculation pipeline for the epicast epidemic estimator.
//!
//! This crate turns an [`EstimateInput`](epicast_types::EstimateInput)
//! into a [`Projection`](epicast_types::Projection) with two parallel
//! branches:
//!
//! - [`estimate`] - The single entry point: validate, normalize the
//!   horizon, run both scenario branches, assemble the projection
//! - [`Scenario`] - The moderate and severe starting-infection
//!   assumptions
//! - [`growth`] - Currently-infected estimate and exponential growth
//!   model
//! - [`metrics`] - The derived healthcare and economic metrics

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/epicast-dev/epicast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;
pub mod growth;
pub mod metrics;

pub use estimator::{Scenario, estimate};
