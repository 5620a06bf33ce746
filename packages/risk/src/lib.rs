#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Route risk scoring and classification.
//!
//! Given a route polyline, a travel window, and the historical crash
//! dataset, [`score::score`] computes a raw additive risk score plus the
//! count of qualifying nearby crashes, and [`classify::classify`] maps the
//! raw score onto a scaled integer score and a discrete [`RiskTier`].
//!
//! Both functions are pure: identical inputs always produce identical
//! outputs, and nothing here touches I/O or shared state.

pub mod classify;
pub mod score;

pub use classify::{DEFAULT_MAX_SCORE, classify};
pub use route_risk_models::{ClassifiedRisk, RiskAssessment, RiskTier, TravelWindow};
pub use score::{DEFAULT_PROXIMITY_THRESHOLD_DEGREES, is_night_hour, score};
