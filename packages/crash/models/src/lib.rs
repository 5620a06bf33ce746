#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Crash record types shared across the route-risk pipeline.
//!
//! This crate defines the canonical shape of one historical crash record
//! as loaded from the state crash dataset. Records are immutable once
//! loaded; every pipeline stage consumes them by reference.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Severity classification for a crash.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CrashSeverity {
    /// One or more fatalities.
    Fatal,
    /// Injuries reported, no fatalities.
    Injury,
    /// Property damage only.
    PropertyDamage,
    /// Unknown or source-specific severity codes.
    Other,
}

impl CrashSeverity {
    /// Maps a free-text severity description from the source dataset onto
    /// the taxonomy (e.g. `"Suspected Serious Injury"` -> [`Self::Injury`]).
    ///
    /// Unrecognized descriptions map to [`Self::Other`] rather than failing,
    /// since severity is informational for the current scoring scheme.
    #[must_use]
    pub fn from_description(description: &str) -> Self {
        let lower = description.to_lowercase();
        if lower.contains("fatal") {
            Self::Fatal
        } else if lower.contains("injur") {
            Self::Injury
        } else if lower.contains("property damage") || lower.contains("pdo") {
            Self::PropertyDamage
        } else {
            Self::Other
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Fatal, Self::Injury, Self::PropertyDamage, Self::Other]
    }
}

/// One row of the historical crash dataset.
///
/// Owned by the dataset loader and passed by reference into the risk
/// scorer; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrashRecord {
    /// Latitude (WGS84 degrees).
    pub latitude: f64,
    /// Longitude (WGS84 degrees).
    pub longitude: f64,
    /// Hour of day the crash occurred, 0-23.
    pub crash_hour: u8,
    /// Severity classification.
    pub severity: CrashSeverity,
    /// Whether the crash occurred in a work zone.
    pub work_zone: bool,
    /// Whether a motorcycle was involved.
    pub motorcycle: bool,
    /// Whether unrestrained occupants were involved.
    pub unrestrained_occupants: bool,
    /// County name, when the source provides it.
    pub county: Option<String>,
    /// Collision impact description (e.g. "Rear End"), when provided.
    pub impact_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_severity_descriptions() {
        assert_eq!(
            CrashSeverity::from_description("Fatal Injury"),
            CrashSeverity::Fatal
        );
        assert_eq!(
            CrashSeverity::from_description("Suspected Serious Injury"),
            CrashSeverity::Injury
        );
        assert_eq!(
            CrashSeverity::from_description("Property Damage Only"),
            CrashSeverity::PropertyDamage
        );
        assert_eq!(
            CrashSeverity::from_description("Unknown"),
            CrashSeverity::Other
        );
    }

    #[test]
    fn severity_string_round_trip() {
        assert_eq!(CrashSeverity::PropertyDamage.to_string(), "PROPERTY_DAMAGE");
        assert_eq!(
            "FATAL".parse::<CrashSeverity>().unwrap(),
            CrashSeverity::Fatal
        );
    }
}
