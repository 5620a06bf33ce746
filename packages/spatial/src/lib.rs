#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Planar distance from crash points to route paths.
//!
//! Routes are treated as piecewise-linear paths through raw WGS84 degree
//! coordinates on a flat Euclidean plane. The proximity threshold used by
//! the scorer (0.01 degrees, roughly 1 km at mid-latitudes) is calibrated
//! for this approximation; replacing it with geodesic or projected distance
//! requires re-deriving that threshold, so do not "correct" the math here
//! in isolation.

use geo::{Coord, Line, LineString};
use route_risk_models::RoutePolyline;

/// Builds the piecewise-linear path for a route, in `(longitude, latitude)`
/// order.
#[must_use]
pub fn route_path(route: &RoutePolyline) -> LineString<f64> {
    LineString::new(
        route
            .points()
            .iter()
            .map(|p| Coord {
                x: p.longitude,
                y: p.latitude,
            })
            .collect(),
    )
}

/// Minimum planar distance in degrees from a point to a path.
///
/// Returns `None` when the path has fewer than two points and therefore no
/// segments to measure against.
#[must_use]
pub fn min_distance_to_path(longitude: f64, latitude: f64, path: &LineString<f64>) -> Option<f64> {
    let point = Coord {
        x: longitude,
        y: latitude,
    };

    path.lines()
        .map(|segment| point_to_segment_distance(point, &segment))
        .fold(None, |best, d| match best {
            Some(b) if b <= d => Some(b),
            _ => Some(d),
        })
}

/// Planar distance from a point to a line segment.
///
/// Projects the point onto the segment's supporting line, clamps the
/// projection parameter to `[0, 1]`, and measures to the clamped point.
/// A zero-length segment degenerates to point-to-point distance.
fn point_to_segment_distance(point: Coord<f64>, segment: &Line<f64>) -> f64 {
    let dx = segment.end.x - segment.start.x;
    let dy = segment.end.y - segment.start.y;
    let length_squared = dx.mul_add(dx, dy * dy);

    if length_squared == 0.0 {
        return distance(point, segment.start);
    }

    let t = ((point.x - segment.start.x) * dx + (point.y - segment.start.y) * dy) / length_squared;
    let t = t.clamp(0.0, 1.0);

    let nearest = Coord {
        x: t.mul_add(dx, segment.start.x),
        y: t.mul_add(dy, segment.start.y),
    };

    distance(point, nearest)
}

fn distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx.hypot(dy)
}
