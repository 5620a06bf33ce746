#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Driving directions for route risk assessment.
//!
//! Resolves an ordered coordinate pair to a driving route polyline via an
//! external directions provider configured in `services/`. The geometry of
//! the first (best) candidate route wins.
//!
//! "No route found" is an empty [`route_risk_models::RoutePolyline`] and a
//! valid downstream signal; transport and HTTP failures are reported as
//! errors so callers can distinguish the two.

pub mod mapbox;
pub mod service_registry;

use thiserror::Error;

/// Errors from directions operations.
#[derive(Debug, Error)]
pub enum DirectionsError {
    /// HTTP request failed (transport-level).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider responded with a non-success status.
    #[error("directions provider returned status {status}")]
    Provider {
        /// The HTTP status code returned by the provider.
        status: reqwest::StatusCode,
    },

    /// Response parsing failed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },

    /// The access credential environment variable is unset or empty.
    #[error("missing directions credential: set the {env} environment variable")]
    MissingCredential {
        /// Name of the environment variable holding the token.
        env: String,
    },
}
