//! Typed adapter over the external mapping/geocoding provider.
//!
//! The provider's own place objects are loosely typed; everything this
//! system needs is narrowed to the records below, so provider-shape
//! assumptions live in one translation layer.

use crate::error::GeoError;
use crate::location::Coordinate;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Autocomplete and geocoding are restricted to this region.
pub const DEFAULT_REGION: &str = "sa";

/// The address-component tags the extraction logic understands.
///
/// Tags outside this set deserialize as [`ComponentKind::Other`] and are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    StreetNumber,
    Route,
    Locality,
    AdministrativeAreaLevel2,
    Sublocality,
    Neighborhood,
    PostalCode,
    #[serde(other)]
    Other,
}

impl ComponentKind {
    /// Parse a provider component tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "street_number" => ComponentKind::StreetNumber,
            "route" => ComponentKind::Route,
            "locality" => ComponentKind::Locality,
            "administrative_area_level_2" => ComponentKind::AdministrativeAreaLevel2,
            "sublocality" => ComponentKind::Sublocality,
            "neighborhood" => ComponentKind::Neighborhood,
            "postal_code" => ComponentKind::PostalCode,
            _ => ComponentKind::Other,
        }
    }
}

/// One structured component of a provider address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressComponent {
    /// The component's display text.
    pub long_name: String,
    /// The type tags the provider attached to this component.
    pub kinds: Vec<ComponentKind>,
}

impl AddressComponent {
    /// Create a component with a single kind.
    pub fn new(long_name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            long_name: long_name.into(),
            kinds: vec![kind],
        }
    }

    /// Whether this component carries the given tag.
    pub fn has(&self, kind: ComponentKind) -> bool {
        self.kinds.contains(&kind)
    }
}

/// An autocomplete suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    /// Opaque provider identifier for the place.
    pub place_id: String,
    /// Human-readable suggestion text.
    pub description: String,
}

/// A resolved place: structured components plus geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlaceRecord {
    /// Structured address components, in the order the provider returned them.
    pub address_components: Vec<AddressComponent>,
    /// The place's coordinate, when the provider supplied geometry.
    pub location: Option<Coordinate>,
    /// The provider's pre-formatted full address string.
    pub formatted_address: String,
}

/// Status of a reverse-geocode response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GeocodeStatus {
    Ok,
    ZeroResults,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    UnknownError,
}

impl GeocodeStatus {
    /// Whether the response carries usable results.
    pub fn is_ok(&self) -> bool {
        matches!(self, GeocodeStatus::Ok)
    }
}

/// A reverse-geocode response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResponse {
    /// Response status; anything but `Ok` is dropped by the engine.
    pub status: GeocodeStatus,
    /// Matching places, best match first.
    pub results: Vec<PlaceRecord>,
}

/// The external mapping/geocoding provider contract.
///
/// The real provider is an asynchronously-loaded mapping library; tests
/// substitute a scripted implementation.
#[async_trait]
pub trait MapProvider: Send + Sync {
    /// Load the provider. Fails when the script cannot load or the
    /// credential is missing/invalid.
    async fn load(&self) -> Result<(), GeoError>;

    /// Fetch autocomplete suggestions for a query, restricted to a region.
    async fn search_suggestions(
        &self,
        query: &str,
        region: &str,
    ) -> Result<Vec<PlaceCandidate>, GeoError>;

    /// Fetch the full place record for a suggestion.
    async fn place_details(&self, candidate: &PlaceCandidate) -> Result<PlaceRecord, GeoError>;

    /// Resolve a coordinate to structured addresses.
    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<GeocodeResponse, GeoError>;
}
