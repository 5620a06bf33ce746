//! Mapbox Geocoding v5 client.
//!
//! Forward-geocodes a free-text query via
//! `GET {base_url}/{query}.json?access_token=...` and takes the `center`
//! of the first returned feature.
//!
//! See <https://docs.mapbox.com/api/search/geocoding-v5/>

use route_risk_models::Coordinate;

use crate::GeocodeError;

/// Forward-geocodes a single free-text address.
///
/// Returns `Ok(None)` when the provider finds no candidate match.
///
/// # Errors
///
/// Returns [`GeocodeError`] if the HTTP request fails, the provider
/// responds with a non-success status, or the response cannot be parsed.
pub async fn geocode(
    client: &reqwest::Client,
    base_url: &str,
    access_token: &str,
    address: &str,
) -> Result<Option<Coordinate>, GeocodeError> {
    let url = format!("{base_url}/{}.json", encode_path_segment(address));

    log::debug!("Geocoding address via {base_url}");

    let resp = client
        .get(&url)
        .query(&[("access_token", access_token), ("limit", "1")])
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(GeocodeError::Provider {
            status: resp.status(),
        });
    }

    let body: serde_json::Value = resp.json().await?;
    parse_response(&body)
}

/// Parses a geocoding `FeatureCollection` response, taking the first
/// feature's `center` as the result.
fn parse_response(body: &serde_json::Value) -> Result<Option<Coordinate>, GeocodeError> {
    let features = body
        .get("features")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| GeocodeError::Parse {
            message: "geocoding response missing 'features' array".to_string(),
        })?;

    let Some(first) = features.first() else {
        return Ok(None);
    };

    let center = first
        .get("center")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| GeocodeError::Parse {
            message: "geocoding feature missing 'center'".to_string(),
        })?;

    let (Some(longitude), Some(latitude)) = (
        center.first().and_then(serde_json::Value::as_f64),
        center.get(1).and_then(serde_json::Value::as_f64),
    ) else {
        return Err(GeocodeError::Parse {
            message: "geocoding feature center is not a [lon, lat] pair".to_string(),
        });
    };

    Ok(Some(Coordinate::new(longitude, latitude)))
}

/// Percent-encodes an address for use as a URL path segment.
fn encode_path_segment(s: &str) -> String {
    s.replace('%', "%25")
        .replace(' ', "%20")
        .replace('&', "%26")
        .replace('#', "%23")
        .replace('?', "%3F")
        .replace('/', "%2F")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_feature_center() {
        let body = serde_json::json!({
            "features": [
                {
                    "center": [-86.781_602, 36.162_664],
                    "place_name": "Nashville, Tennessee, United States"
                },
                {
                    "center": [-77.036_87, 38.907_192],
                    "place_name": "Washington, District of Columbia, United States"
                }
            ]
        });
        let coord = parse_response(&body).unwrap().unwrap();
        assert!((coord.longitude - -86.781_602).abs() < 1e-9);
        assert!((coord.latitude - 36.162_664).abs() < 1e-9);
    }

    #[test]
    fn empty_features_is_no_match() {
        let body = serde_json::json!({ "features": [] });
        assert!(parse_response(&body).unwrap().is_none());
    }

    #[test]
    fn missing_features_is_parse_error() {
        let body = serde_json::json!({ "message": "Not Authorized" });
        assert!(matches!(
            parse_response(&body),
            Err(GeocodeError::Parse { .. })
        ));
    }

    #[test]
    fn malformed_center_is_parse_error() {
        let body = serde_json::json!({
            "features": [{ "center": [-86.78] }]
        });
        assert!(matches!(
            parse_response(&body),
            Err(GeocodeError::Parse { .. })
        ));
    }

    #[test]
    fn encodes_address_path_segment() {
        assert_eq!(
            encode_path_segment("100 Main St #4, Nashville"),
            "100%20Main%20St%20%234,%20Nashville"
        );
    }
}
