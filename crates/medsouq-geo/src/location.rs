//! Canonical location types.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Create a coordinate.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// The canonical structured address produced by the resolution engine.
///
/// Missing address components are empty strings, never nulls. Only the
/// engine constructs these, apart from the unset default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LocationData {
    /// Street number and route, space-separated in the order received;
    /// falls back to the provider's formatted address when no street
    /// components are present.
    pub street_address: String,
    /// City (locality or second-level administrative area).
    pub city: String,
    /// District (sublocality or neighborhood).
    pub district: String,
    /// Postal code.
    pub postal_code: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
    /// The provider's pre-formatted full address string.
    pub formatted_address: String,
}

impl LocationData {
    /// The "unset" default: all fields empty, coordinates at origin.
    pub fn unset() -> Self {
        Self::default()
    }

    /// The coordinate of this location.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}
