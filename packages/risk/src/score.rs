//! Weighted crash-overlap scoring for a route.
//!
//! Scans every crash record once per query (the dataset is a bounded,
//! in-memory table, so the linear scan is acceptable) and accumulates:
//!
//! - a base contribution of 1.0 per crash within the proximity threshold
//!   whose hour falls inside the travel window,
//! - an extra 1.0 when that hour is in the night band (>= 20:00 or
//!   < 06:00),
//! - a density bonus of 0.6 per qualifying crash, added at the end.
//!
//! Severity, work-zone, and occupant-restraint fields are deliberately
//! not weighted in this scheme; time-of-day overlap and crash density
//! drive the score.

use route_risk_crash_models::CrashRecord;
use route_risk_models::{RiskAssessment, RoutePolyline, TravelWindow};

/// Default maximum planar distance in degrees for a crash to count as
/// "near" the route. Roughly 1 km at mid-latitudes; calibrated for the
/// flat-plane distance in `route_risk_spatial`.
pub const DEFAULT_PROXIMITY_THRESHOLD_DEGREES: f64 = 0.01;

/// First hour of the night band (inclusive).
const NIGHT_BAND_START_HOUR: u8 = 20;

/// End of the night band (exclusive): hours before 06:00 are night.
const NIGHT_BAND_END_HOUR: u8 = 6;

/// Score added for every qualifying crash.
const BASE_CONTRIBUTION: f64 = 1.0;

/// Additional score for a qualifying crash in the night band.
const NIGHT_CONTRIBUTION: f64 = 1.0;

/// Density bonus per qualifying crash, added after the scan.
const DENSITY_BONUS_PER_CRASH: f64 = 0.6;

/// Whether `hour` falls in the elevated-risk night band
/// (20:00 through 05:59).
#[must_use]
pub const fn is_night_hour(hour: u8) -> bool {
    hour >= NIGHT_BAND_START_HOUR || hour < NIGHT_BAND_END_HOUR
}

/// Scores a route against the historical crash dataset.
///
/// A crash contributes only when its planar distance to the route is
/// strictly below `proximity_threshold` **and** its hour falls inside
/// `window` (inclusive on both ends). Routes with fewer than two points
/// are degenerate and score [`RiskAssessment::zero`].
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score(
    route: &RoutePolyline,
    crashes: &[CrashRecord],
    window: TravelWindow,
    proximity_threshold: f64,
) -> RiskAssessment {
    if !route.is_routable() {
        return RiskAssessment::zero();
    }

    let path = route_risk_spatial::route_path(route);

    let mut raw_score = 0.0;
    let mut overlapping_crash_count: u64 = 0;

    for crash in crashes {
        let Some(distance) =
            route_risk_spatial::min_distance_to_path(crash.longitude, crash.latitude, &path)
        else {
            continue;
        };

        if distance >= proximity_threshold {
            continue;
        }

        if !window.contains(crash.crash_hour) {
            continue;
        }

        overlapping_crash_count += 1;
        raw_score += BASE_CONTRIBUTION;
        if is_night_hour(crash.crash_hour) {
            raw_score += NIGHT_CONTRIBUTION;
        }
    }

    raw_score += DENSITY_BONUS_PER_CRASH * overlapping_crash_count as f64;

    RiskAssessment {
        raw_score,
        overlapping_crash_count,
    }
}
