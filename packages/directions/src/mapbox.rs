//! Mapbox Directions v5 client.
//!
//! Requests the recommended driving route between two coordinates via
//! `GET {base_url}/{lon},{lat};{lon},{lat}` with GeoJSON geometry, and
//! returns the first candidate route's coordinate sequence.
//!
//! See <https://docs.mapbox.com/api/navigation/directions/>

use route_risk_models::{Coordinate, RoutePolyline};

use crate::DirectionsError;

/// Fetches the best driving route from `from` to `to` (order-significant).
///
/// Returns an empty polyline when the provider finds no candidate route.
///
/// # Errors
///
/// Returns [`DirectionsError`] if the HTTP request fails, the provider
/// responds with a non-success status, or the response cannot be parsed.
pub async fn driving_route(
    client: &reqwest::Client,
    base_url: &str,
    access_token: &str,
    from: Coordinate,
    to: Coordinate,
) -> Result<RoutePolyline, DirectionsError> {
    let url = format!(
        "{base_url}/{},{};{},{}",
        from.longitude, from.latitude, to.longitude, to.latitude
    );

    log::debug!("Requesting driving route via {base_url}");

    let resp = client
        .get(&url)
        .query(&[
            ("geometries", "geojson"),
            ("overview", "full"),
            ("access_token", access_token),
        ])
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(DirectionsError::Provider {
            status: resp.status(),
        });
    }

    let body: serde_json::Value = resp.json().await?;
    parse_response(&body)
}

/// Parses a directions response, taking the first route's GeoJSON geometry
/// as the polyline. Zero candidate routes parse to the empty polyline.
fn parse_response(body: &serde_json::Value) -> Result<RoutePolyline, DirectionsError> {
    let routes = body
        .get("routes")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| DirectionsError::Parse {
            message: "directions response missing 'routes' array".to_string(),
        })?;

    let Some(first) = routes.first() else {
        return Ok(RoutePolyline::empty());
    };

    let coordinates = first
        .pointer("/geometry/coordinates")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| DirectionsError::Parse {
            message: "directions route missing 'geometry.coordinates'".to_string(),
        })?;

    let mut points = Vec::with_capacity(coordinates.len());
    for pair in coordinates {
        let coords = pair.as_array();
        let (Some(longitude), Some(latitude)) = (
            coords
                .and_then(|c| c.first())
                .and_then(serde_json::Value::as_f64),
            coords
                .and_then(|c| c.get(1))
                .and_then(serde_json::Value::as_f64),
        ) else {
            return Err(DirectionsError::Parse {
                message: "directions geometry entry is not a [lon, lat] pair".to_string(),
            });
        };
        points.push(Coordinate::new(longitude, latitude));
    }

    Ok(RoutePolyline::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_route_geometry() {
        let body = serde_json::json!({
            "routes": [
                {
                    "geometry": {
                        "coordinates": [
                            [-86.781, 36.162],
                            [-86.779, 36.164],
                            [-86.775, 36.170]
                        ],
                        "type": "LineString"
                    },
                    "duration": 312.5
                },
                {
                    "geometry": {
                        "coordinates": [[-86.781, 36.162], [-86.770, 36.180]],
                        "type": "LineString"
                    }
                }
            ]
        });
        let route = parse_response(&body).unwrap();
        assert_eq!(route.len(), 3);
        assert!((route.points()[0].longitude - -86.781).abs() < 1e-9);
        assert!((route.points()[2].latitude - 36.170).abs() < 1e-9);
    }

    #[test]
    fn zero_candidate_routes_is_empty_polyline() {
        let body = serde_json::json!({ "routes": [] });
        let route = parse_response(&body).unwrap();
        assert!(route.is_empty());
        assert!(!route.is_routable());
    }

    #[test]
    fn missing_routes_is_parse_error() {
        let body = serde_json::json!({ "message": "Not Authorized" });
        assert!(matches!(
            parse_response(&body),
            Err(DirectionsError::Parse { .. })
        ));
    }

    #[test]
    fn malformed_geometry_entry_is_parse_error() {
        let body = serde_json::json!({
            "routes": [{ "geometry": { "coordinates": [[-86.781]] } }]
        });
        assert!(matches!(
            parse_response(&body),
            Err(DirectionsError::Parse { .. })
        ));
    }
}
