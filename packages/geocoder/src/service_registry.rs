//! Compile-time registry of geocoding service configurations.
//!
//! Each provider is defined in a TOML file under `services/` and embedded
//! at compile time. Credentials are never stored in the TOML: each service
//! names the environment variable holding its access token.

use serde::Deserialize;

use crate::GeocodeError;

/// A geocoding service configuration loaded from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingService {
    /// Unique identifier (e.g., `"mapbox"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Whether this service is active.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// API base URL, up to but not including the query path segment.
    pub base_url: String,
    /// Environment variable holding the access token.
    pub token_env: String,
}

const fn default_true() -> bool {
    true
}

impl GeocodingService {
    /// Reads this service's access token from its configured environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::MissingCredential`] when the variable is
    /// unset or empty.
    pub fn access_token(&self) -> Result<String, GeocodeError> {
        match std::env::var(&self.token_env) {
            Ok(token) if !token.is_empty() => Ok(token),
            _ => Err(GeocodeError::MissingCredential {
                env: self.token_env.clone(),
            }),
        }
    }
}

// ── Compile-time embedded TOML files ────────────────────────────────

const SERVICE_TOMLS: &[(&str, &str)] = &[("mapbox", include_str!("../services/mapbox.toml"))];

/// Returns all geocoding service configurations (enabled and disabled).
///
/// # Panics
///
/// Panics if any TOML config is malformed (this is a compile-time guarantee
/// since the configs are embedded).
#[must_use]
pub fn all_services() -> Vec<GeocodingService> {
    SERVICE_TOMLS
        .iter()
        .map(|(name, toml_str)| {
            toml::de::from_str(toml_str)
                .unwrap_or_else(|e| panic!("Failed to parse geocoding service '{name}': {e}"))
        })
        .collect()
}

/// Returns the first enabled geocoding service, if any.
#[must_use]
pub fn primary_service() -> Option<GeocodingService> {
    all_services().into_iter().find(|s| s.enabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_services_parse() {
        let services = all_services();
        assert_eq!(services.len(), SERVICE_TOMLS.len());
        for service in &services {
            assert!(!service.id.is_empty());
            assert!(!service.base_url.is_empty());
            assert!(!service.token_env.is_empty());
        }
    }

    #[test]
    fn primary_service_is_enabled() {
        let service = primary_service().expect("at least one enabled service");
        assert!(service.enabled);
    }
}
