//! Geo error types.

use thiserror::Error;

/// Errors that can occur in address resolution.
#[derive(Error, Debug)]
pub enum GeoError {
    /// The mapping provider failed to load or is missing a credential.
    /// All address-resolution entry points are inert in this state.
    #[error("Map provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// A provider credential is required but was not supplied.
    #[error("Map provider API key is required")]
    MissingApiKey,

    /// A provider request failed in transit.
    #[error("Provider request failed: {0}")]
    Request(String),
}
