#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Value types flowing through the route-risk pipeline.
//!
//! Each pipeline stage produces a fresh value from its input: the geocoder
//! produces [`Coordinate`]s, the directions client produces a
//! [`RoutePolyline`], the scorer produces a [`RiskAssessment`], and the
//! classifier produces a [`ClassifiedRisk`]. None of these persist across
//! requests or mutate after construction.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A geographic point in WGS84 degrees, longitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Longitude (x axis).
    pub longitude: f64,
    /// Latitude (y axis).
    pub latitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from a `(longitude, latitude)` pair.
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// An ordered sequence of coordinates approximating a driving path.
///
/// An empty polyline is the directions provider's "no route found" signal
/// and is valid input downstream; a polyline with at least two points is
/// routable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoutePolyline {
    points: Vec<Coordinate>,
}

impl RoutePolyline {
    /// Creates a polyline from an ordered coordinate sequence.
    #[must_use]
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// The empty polyline, signalling "no route found".
    #[must_use]
    pub const fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// The ordered points of the path.
    #[must_use]
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Number of points in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` when the provider found no route.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `true` when the polyline describes an actual path (two or more
    /// points). Degenerate polylines score zero.
    #[must_use]
    pub fn is_routable(&self) -> bool {
        self.points.len() >= 2
    }
}

/// A closed hour interval `[start_hour, end_hour]` during which the user
/// expects to travel. Both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelWindow {
    start_hour: u8,
    end_hour: u8,
}

impl TravelWindow {
    /// Creates a travel window.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 <= start_hour <= end_hour <= 23`.
    pub const fn new(start_hour: u8, end_hour: u8) -> Result<Self, InvalidWindowError> {
        if start_hour > end_hour || end_hour > 23 {
            return Err(InvalidWindowError {
                start_hour,
                end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    /// First hour of the window.
    #[must_use]
    pub const fn start_hour(self) -> u8 {
        self.start_hour
    }

    /// Last hour of the window (inclusive).
    #[must_use]
    pub const fn end_hour(self) -> u8 {
        self.end_hour
    }

    /// Whether `hour` falls inside the window, inclusive on both ends.
    #[must_use]
    pub const fn contains(self, hour: u8) -> bool {
        hour >= self.start_hour && hour <= self.end_hour
    }
}

/// Error returned when constructing a [`TravelWindow`] from an invalid
/// hour pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidWindowError {
    /// The offending start hour.
    pub start_hour: u8,
    /// The offending end hour.
    pub end_hour: u8,
}

impl std::fmt::Display for InvalidWindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid travel window [{}, {}]: expected 0 <= start <= end <= 23",
            self.start_hour, self.end_hour
        )
    }
}

impl std::error::Error for InvalidWindowError {}

/// Output of the risk scorer: the raw additive score plus the number of
/// crashes that overlapped the route and travel window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Non-negative additive score.
    pub raw_score: f64,
    /// Count of crashes within the proximity threshold and travel window.
    pub overlapping_crash_count: u64,
}

impl RiskAssessment {
    /// Assessment for a route with no qualifying crashes (or no route).
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            raw_score: 0.0,
            overlapping_crash_count: 0,
        }
    }
}

/// Discrete risk tier derived from the scaled score.
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
pub enum RiskTier {
    /// Scaled score below 20.
    Low,
    /// Scaled score 20-49.
    Moderate,
    /// Scaled score 50-79.
    Elevated,
    /// Scaled score 80 and above.
    High,
}

impl RiskTier {
    /// Maps a scaled score onto its tier.
    #[must_use]
    pub const fn from_scaled_score(scaled_score: u16) -> Self {
        match scaled_score {
            0..=19 => Self::Low,
            20..=49 => Self::Moderate,
            50..=79 => Self::Elevated,
            _ => Self::High,
        }
    }
}

/// Output of the risk classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedRisk {
    /// Scaled integer score. With the default maximum score the cap
    /// keeps this in `0..=30`; see the classifier for details.
    pub scaled_score: u16,
    /// Discrete tier derived from `scaled_score`.
    pub tier: RiskTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_accepts_valid_bounds() {
        let window = TravelWindow::new(0, 23).unwrap();
        assert!(window.contains(0));
        assert!(window.contains(23));

        let window = TravelWindow::new(8, 8).unwrap();
        assert!(window.contains(8));
        assert!(!window.contains(7));
        assert!(!window.contains(9));
    }

    #[test]
    fn window_rejects_invalid_bounds() {
        assert!(TravelWindow::new(10, 9).is_err());
        assert!(TravelWindow::new(0, 24).is_err());
    }

    #[test]
    fn window_is_inclusive_on_both_ends() {
        let window = TravelWindow::new(20, 23).unwrap();
        assert!(window.contains(20));
        assert!(window.contains(23));
        assert!(!window.contains(19));
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(RiskTier::from_scaled_score(0), RiskTier::Low);
        assert_eq!(RiskTier::from_scaled_score(19), RiskTier::Low);
        assert_eq!(RiskTier::from_scaled_score(20), RiskTier::Moderate);
        assert_eq!(RiskTier::from_scaled_score(49), RiskTier::Moderate);
        assert_eq!(RiskTier::from_scaled_score(50), RiskTier::Elevated);
        assert_eq!(RiskTier::from_scaled_score(79), RiskTier::Elevated);
        assert_eq!(RiskTier::from_scaled_score(80), RiskTier::High);
        assert_eq!(RiskTier::from_scaled_score(100), RiskTier::High);
    }

    #[test]
    fn polyline_routability() {
        assert!(!RoutePolyline::empty().is_routable());
        assert!(!RoutePolyline::new(vec![Coordinate::new(0.0, 0.0)]).is_routable());
        assert!(
            RoutePolyline::new(vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)])
                .is_routable()
        );
    }
}
