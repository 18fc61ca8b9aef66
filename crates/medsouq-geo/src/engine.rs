//! The address resolution engine.
//!
//! Four input signals — autocomplete selection, marker drag, map click,
//! and initial device geolocation — are normalized into one inbound
//! [`LocationEvent`] stream consumed by a single reconciliation function.
//! Every successful resolution emits one [`LocationData`] record through
//! the `on_change` sink; the engine keeps no location state between
//! resolutions.

use crate::error::GeoError;
use crate::extract::extract_location;
use crate::location::{Coordinate, LocationData};
use crate::provider::{MapProvider, PlaceCandidate, PlaceRecord, DEFAULT_REGION};

/// Fallback map center: Riyadh.
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 24.7136,
    lng: 46.6753,
};

/// Zoom level before a location is chosen.
pub const DEFAULT_ZOOM: u8 = 12;

/// Zoom level after an autocomplete selection.
pub const SELECTED_ZOOM: u8 = 16;

/// Map initialization parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Initial map center.
    pub center: Coordinate,
    /// Initial zoom level.
    pub zoom: u8,
    /// Zoom level applied after a selection.
    pub selected_zoom: u8,
    /// Region restriction for autocomplete and geocoding.
    pub region: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            selected_zoom: SELECTED_ZOOM,
            region: DEFAULT_REGION.to_string(),
        }
    }
}

/// A location input signal.
///
/// Device geolocation denial produces no event at all; the map keeps its
/// default center and zoom.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationEvent {
    /// The user picked an autocomplete suggestion.
    AutocompleteSelection(PlaceRecord),
    /// The user finished dragging the marker.
    MarkerDragEnd(Coordinate),
    /// The user clicked the map.
    MapClick(Coordinate),
    /// The browser granted device geolocation on first map load.
    DeviceGeolocation(Coordinate),
}

type OnChange = Box<dyn Fn(LocationData) + Send + Sync>;

/// The address resolution engine.
///
/// Constructed via [`AddressResolver::initialize`], which loads the
/// provider. When loading fails, the engine reports the error and every
/// entry point returns [`GeoError::ProviderUnavailable`] until rebuilt.
pub struct AddressResolver<P> {
    provider: P,
    config: MapConfig,
    load_error: Option<String>,
    on_change: Option<OnChange>,
}

impl<P: MapProvider> AddressResolver<P> {
    /// Load the provider and build the engine.
    pub async fn initialize(provider: P) -> Self {
        Self::initialize_with(provider, MapConfig::default()).await
    }

    /// Load the provider and build the engine with custom map parameters.
    pub async fn initialize_with(provider: P, config: MapConfig) -> Self {
        let load_error = match provider.load().await {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(error = %e, "map provider failed to load");
                Some(e.to_string())
            }
        };
        Self {
            provider,
            config,
            load_error,
            on_change: None,
        }
    }

    /// Register the sink that receives each resolved location.
    pub fn with_on_change(mut self, f: impl Fn(LocationData) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// The map configuration this engine was built with.
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// The load error, if the provider failed to come up.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Whether the provider loaded and the engine accepts events.
    pub fn is_ready(&self) -> bool {
        self.load_error.is_none()
    }

    fn ensure_ready(&self) -> Result<(), GeoError> {
        match &self.load_error {
            Some(e) => Err(GeoError::ProviderUnavailable(e.clone())),
            None => Ok(()),
        }
    }

    /// Fetch autocomplete suggestions for the search box.
    pub async fn suggestions(&self, query: &str) -> Result<Vec<PlaceCandidate>, GeoError> {
        self.ensure_ready()?;
        self.provider
            .search_suggestions(query, &self.config.region)
            .await
    }

    /// Resolve a picked suggestion to its full place record and apply it.
    pub async fn select(&self, candidate: &PlaceCandidate) -> Result<Option<LocationData>, GeoError> {
        self.ensure_ready()?;
        let place = self.provider.place_details(candidate).await?;
        self.resolve(LocationEvent::AutocompleteSelection(place)).await
    }

    /// Reconcile one location event into a canonical address.
    ///
    /// Returns `Ok(None)` when the event was silently dropped (non-OK
    /// reverse-geocode status, empty results, or a failed provider call):
    /// the last known location stands. Events are applied in arrival
    /// order; a stale in-flight reverse geocode that completes after a
    /// newer one still wins (last-callback-wins, as in the reference
    /// storefront).
    pub async fn resolve(&self, event: LocationEvent) -> Result<Option<LocationData>, GeoError> {
        self.ensure_ready()?;

        let resolved = match event {
            LocationEvent::AutocompleteSelection(place) => Some(extract_location(&place)),
            LocationEvent::MarkerDragEnd(coordinate)
            | LocationEvent::MapClick(coordinate)
            | LocationEvent::DeviceGeolocation(coordinate) => {
                self.reverse_resolve(coordinate).await
            }
        };

        if let Some(data) = &resolved {
            tracing::debug!(
                city = %data.city,
                district = %data.district,
                lat = data.lat,
                lng = data.lng,
                "location resolved"
            );
            if let Some(on_change) = &self.on_change {
                on_change(data.clone());
            }
        }
        Ok(resolved)
    }

    /// Reverse-geocode a coordinate and extract from the first result.
    ///
    /// The event coordinate overwrites the geocoder's returned position,
    /// so the marker does not jump after a drag or click.
    async fn reverse_resolve(&self, coordinate: Coordinate) -> Option<LocationData> {
        let response = match self.provider.reverse_geocode(coordinate).await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(error = %e, "reverse geocode failed, keeping last location");
                return None;
            }
        };

        if !response.status.is_ok() {
            tracing::debug!(status = ?response.status, "reverse geocode non-OK, dropped");
            return None;
        }

        let first = response.results.first()?;
        let mut data = extract_location(first);
        data.lat = coordinate.lat;
        data.lng = coordinate.lng;
        Some(data)
    }
}

impl<P> std::fmt::Debug for AddressResolver<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressResolver")
            .field("config", &self.config)
            .field("load_error", &self.load_error)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{
        AddressComponent, ComponentKind, GeocodeResponse, GeocodeStatus,
    };
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Scripted provider for tests.
    struct ScriptedProvider {
        load_result: Result<(), String>,
        geocode: GeocodeResponse,
        suggestions: Vec<PlaceCandidate>,
        details: Option<PlaceRecord>,
        geocode_calls: Mutex<Vec<Coordinate>>,
    }

    impl ScriptedProvider {
        fn ready() -> Self {
            Self {
                load_result: Ok(()),
                geocode: GeocodeResponse {
                    status: GeocodeStatus::Ok,
                    results: vec![riyadh_place()],
                },
                suggestions: Vec::new(),
                details: None,
                geocode_calls: Mutex::new(Vec::new()),
            }
        }

        fn with_geocode(mut self, response: GeocodeResponse) -> Self {
            self.geocode = response;
            self
        }

        fn failing_load(message: &str) -> Self {
            let mut p = Self::ready();
            p.load_result = Err(message.to_string());
            p
        }
    }

    #[async_trait]
    impl MapProvider for ScriptedProvider {
        async fn load(&self) -> Result<(), GeoError> {
            self.load_result
                .clone()
                .map_err(GeoError::ProviderUnavailable)
        }

        async fn search_suggestions(
            &self,
            _query: &str,
            _region: &str,
        ) -> Result<Vec<PlaceCandidate>, GeoError> {
            Ok(self.suggestions.clone())
        }

        async fn place_details(&self, _candidate: &PlaceCandidate) -> Result<PlaceRecord, GeoError> {
            self.details
                .clone()
                .ok_or_else(|| GeoError::Request("no details scripted".to_string()))
        }

        async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<GeocodeResponse, GeoError> {
            self.geocode_calls
                .lock()
                .unwrap()
                .push(coordinate);
            Ok(self.geocode.clone())
        }
    }

    fn riyadh_place() -> PlaceRecord {
        PlaceRecord {
            address_components: vec![
                AddressComponent::new("7910", ComponentKind::StreetNumber),
                AddressComponent::new("King Fahd Road", ComponentKind::Route),
                AddressComponent::new("Al Olaya", ComponentKind::Sublocality),
                AddressComponent::new("Riyadh", ComponentKind::Locality),
                AddressComponent::new("12212", ComponentKind::PostalCode),
            ],
            location: Some(Coordinate::new(24.7000, 46.6000)),
            formatted_address: "7910 King Fahd Rd, Al Olaya, Riyadh 12212".to_string(),
        }
    }

    #[tokio::test]
    async fn test_autocomplete_selection_uses_place_coordinates() {
        let resolver = AddressResolver::initialize(ScriptedProvider::ready()).await;
        let data = resolver
            .resolve(LocationEvent::AutocompleteSelection(riyadh_place()))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(data.street_address, "7910 King Fahd Road");
        assert_eq!(data.lat, 24.7000);
        assert_eq!(data.lng, 46.6000);
    }

    #[tokio::test]
    async fn test_drag_overwrites_coordinates_with_event_position() {
        let resolver = AddressResolver::initialize(ScriptedProvider::ready()).await;
        let dragged = Coordinate::new(24.7200, 46.6900);
        let data = resolver
            .resolve(LocationEvent::MarkerDragEnd(dragged))
            .await
            .unwrap()
            .unwrap();

        // Address comes from the geocoder, coordinates from the drag.
        assert_eq!(data.city, "Riyadh");
        assert_eq!(data.lat, 24.7200);
        assert_eq!(data.lng, 46.6900);
    }

    #[tokio::test]
    async fn test_map_click_and_geolocation_behave_like_drag() {
        let resolver = AddressResolver::initialize(ScriptedProvider::ready()).await;
        let clicked = Coordinate::new(24.75, 46.70);

        let click = resolver
            .resolve(LocationEvent::MapClick(clicked))
            .await
            .unwrap()
            .unwrap();
        let geo = resolver
            .resolve(LocationEvent::DeviceGeolocation(clicked))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(click, geo);
    }

    #[tokio::test]
    async fn test_non_ok_status_is_silently_dropped() {
        let provider = ScriptedProvider::ready().with_geocode(GeocodeResponse {
            status: GeocodeStatus::ZeroResults,
            results: vec![],
        });
        let resolver = AddressResolver::initialize(provider).await;

        let result = resolver
            .resolve(LocationEvent::MapClick(Coordinate::new(0.0, 0.0)))
            .await
            .unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_ok_status_with_empty_results_is_dropped() {
        let provider = ScriptedProvider::ready().with_geocode(GeocodeResponse {
            status: GeocodeStatus::Ok,
            results: vec![],
        });
        let resolver = AddressResolver::initialize(provider).await;

        let result = resolver
            .resolve(LocationEvent::MarkerDragEnd(Coordinate::new(1.0, 1.0)))
            .await
            .unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_failed_load_makes_entry_points_inert() {
        let resolver =
            AddressResolver::initialize(ScriptedProvider::failing_load("script blocked")).await;

        assert!(!resolver.is_ready());
        assert_eq!(resolver.load_error(), Some("Map provider unavailable: script blocked"));

        let resolve = resolver
            .resolve(LocationEvent::MapClick(DEFAULT_CENTER))
            .await;
        assert!(matches!(resolve, Err(GeoError::ProviderUnavailable(_))));

        let suggestions = resolver.suggestions("king fahd").await;
        assert!(matches!(suggestions, Err(GeoError::ProviderUnavailable(_))));
    }

    #[tokio::test]
    async fn test_on_change_fires_once_per_successful_resolution() {
        let seen: Arc<Mutex<Vec<LocationData>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let resolver = AddressResolver::initialize(ScriptedProvider::ready())
            .await
            .with_on_change(move |data| sink.lock().unwrap().push(data));

        resolver
            .resolve(LocationEvent::AutocompleteSelection(riyadh_place()))
            .await
            .unwrap();
        resolver
            .resolve(LocationEvent::MapClick(Coordinate::new(24.7, 46.7)))
            .await
            .unwrap();

        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_on_change_not_fired_on_drop() {
        let seen: Arc<Mutex<Vec<LocationData>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let provider = ScriptedProvider::ready().with_geocode(GeocodeResponse {
            status: GeocodeStatus::RequestDenied,
            results: vec![riyadh_place()],
        });
        let resolver = AddressResolver::initialize(provider)
            .await
            .with_on_change(move |data| sink.lock().unwrap().push(data));

        resolver
            .resolve(LocationEvent::MapClick(Coordinate::new(24.7, 46.7)))
            .await
            .unwrap();
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_map_defaults() {
        let config = MapConfig::default();
        assert_eq!(config.center, DEFAULT_CENTER);
        assert_eq!(config.zoom, 12);
        assert_eq!(config.selected_zoom, 16);
        assert_eq!(config.region, "sa");
    }
}
