#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Forward geocoding for route risk assessment.
//!
//! Resolves a free-text address to a `(longitude, latitude)` pair via an
//! external geocoding provider configured in `services/`. The address is
//! sent as an encoded path segment and the access credential as a query
//! parameter; the first candidate feature wins.
//!
//! No normalization is performed here: callers supply a reasonable address
//! string. "No match" is `Ok(None)` and is a terminal, recoverable outcome
//! for the current route computation; transport and HTTP failures are
//! reported as errors so callers can distinguish the two.

pub mod mapbox;
pub mod service_registry;

use thiserror::Error;

/// Errors from geocoding operations.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed (transport-level).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider responded with a non-success status.
    #[error("geocoding provider returned status {status}")]
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
    #[error("missing geocoding credential: set the {env} environment variable")]
    MissingCredential {
        /// Name of the environment variable holding the token.
        env: String,
    },
}
