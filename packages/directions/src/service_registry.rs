//! Compile-time registry of directions service configurations.
//!
//! Mirrors the geocoder registry: each provider is defined in a TOML file
//! under `services/`, embedded at compile time, with credentials supplied
//! through the environment variable the TOML names.

use serde::Deserialize;

use crate::DirectionsError;

/// A directions service configuration loaded from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsService {
    /// Unique identifier (e.g., `"mapbox"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Whether this service is active.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// API base URL, up to but not including the coordinate path segment.
    pub base_url: String,
    /// Environment variable holding the access token.
    pub token_env: String,
}

const fn default_true() -> bool {
    true
}

impl DirectionsService {
    /// Reads this service's access token from its configured environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns [`DirectionsError::MissingCredential`] when the variable is
    /// unset or empty.
    pub fn access_token(&self) -> Result<String, DirectionsError> {
        match std::env::var(&self.token_env) {
            Ok(token) if !token.is_empty() => Ok(token),
            _ => Err(DirectionsError::MissingCredential {
                env: self.token_env.clone(),
            }),
        }
    }
}

// ── Compile-time embedded TOML files ────────────────────────────────

const SERVICE_TOMLS: &[(&str, &str)] = &[("mapbox", include_str!("../services/mapbox.toml"))];

/// Returns all directions service configurations (enabled and disabled).
///
/// # Panics
///
/// Panics if any TOML config is malformed (this is a compile-time guarantee
/// since the configs are embedded).
#[must_use]
pub fn all_services() -> Vec<DirectionsService> {
    SERVICE_TOMLS
        .iter()
        .map(|(name, toml_str)| {
            toml::de::from_str(toml_str)
                .unwrap_or_else(|e| panic!("Failed to parse directions service '{name}': {e}"))
        })
        .collect()
}

/// Returns the first enabled directions service, if any.
#[must_use]
pub fn primary_service() -> Option<DirectionsService> {
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
}
