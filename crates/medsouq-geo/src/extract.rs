//! Address-component extraction.

use crate::location::LocationData;
use crate::provider::{ComponentKind, PlaceRecord};

/// Map a provider place record to the canonical structured address.
///
/// Component precedence:
/// - street_number / route concatenate into the street address,
///   space-separated in the order received
/// - locality / administrative_area_level_2 fill the city
/// - sublocality / neighborhood fill the district
/// - postal_code fills the postal code
///
/// Missing components leave the field empty, except the street address,
/// which falls back to the formatted address when no street components
/// are present.
pub fn extract_location(place: &PlaceRecord) -> LocationData {
    let mut street_address = String::new();
    let mut city = String::new();
    let mut district = String::new();
    let mut postal_code = String::new();

    for component in &place.address_components {
        if component.has(ComponentKind::StreetNumber) || component.has(ComponentKind::Route) {
            if !street_address.is_empty() {
                street_address.push(' ');
            }
            street_address.push_str(&component.long_name);
        }
        if component.has(ComponentKind::Locality)
            || component.has(ComponentKind::AdministrativeAreaLevel2)
        {
            city = component.long_name.clone();
        }
        if component.has(ComponentKind::Sublocality) || component.has(ComponentKind::Neighborhood) {
            district = component.long_name.clone();
        }
        if component.has(ComponentKind::PostalCode) {
            postal_code = component.long_name.clone();
        }
    }

    if street_address.is_empty() {
        street_address = place.formatted_address.clone();
    }

    let (lat, lng) = place.location.map(|c| (c.lat, c.lng)).unwrap_or((0.0, 0.0));

    LocationData {
        street_address,
        city,
        district,
        postal_code,
        lat,
        lng,
        formatted_address: place.formatted_address.clone(),
    }
}
