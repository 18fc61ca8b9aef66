//! Address resolution engine for the medsouq storefront.
//!
//! Wraps an external mapping/geocoding provider behind a narrow typed
//! adapter and turns heterogeneous location input signals — autocomplete
//! selection, marker drag, map click, device geolocation — into one
//! canonical [`LocationData`] record.
//!
//! # Example
//!
//! ```rust,ignore
//! use medsouq_geo::prelude::*;
//!
//! let resolver = AddressResolver::initialize(provider)
//!     .await
//!     .with_on_change(|location| println!("{}", location.formatted_address));
//!
//! resolver
//!     .resolve(LocationEvent::MapClick(Coordinate::new(24.71, 46.67)))
//!     .await?;
//! ```

pub mod engine;
pub mod error;
pub mod extract;
pub mod location;
pub mod provider;

pub use engine::{AddressResolver, LocationEvent, MapConfig};
pub use error::GeoError;
pub use location::{Coordinate, LocationData};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::engine::{
        AddressResolver, LocationEvent, MapConfig, DEFAULT_CENTER, DEFAULT_ZOOM, SELECTED_ZOOM,
    };
    pub use crate::error::GeoError;
    pub use crate::extract::extract_location;
    pub use crate::location::{Coordinate, LocationData};
    pub use crate::provider::{
        AddressComponent, ComponentKind, GeocodeResponse, GeocodeStatus, MapProvider,
        PlaceCandidate, PlaceRecord, DEFAULT_REGION,
    };
}
