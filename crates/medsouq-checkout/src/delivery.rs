//! Delivery details: contact fields plus the editable address.

use medsouq_geo::LocationData;
use serde::{Deserialize, Serialize};

/// Delivery details captured on the first checkout step.
///
/// Address fields are filled both by hand and by locations pushed from
/// the resolution engine; whichever wrote last wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DeliveryDetails {
    /// Recipient full name.
    pub full_name: String,
    /// Contact phone number.
    pub phone: String,
    /// Street address (building number, street name).
    pub street_address: String,
    /// City.
    pub city: String,
    /// District.
    pub district: String,
    /// Postal code.
    pub postal_code: String,
    /// Free-text delivery notes (gate code, landmark, ...).
    pub additional_notes: String,
    /// Latitude of the chosen delivery point, when map-selected.
    pub lat: Option<f64>,
    /// Longitude of the chosen delivery point, when map-selected.
    pub lng: Option<f64>,
}

impl DeliveryDetails {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the address fields with a resolved location.
    ///
    /// Name, phone, and notes are left untouched.
    pub fn apply_location(&mut self, location: &LocationData) {
        self.street_address = if location.street_address.is_empty() {
            location.formatted_address.clone()
        } else {
            location.street_address.clone()
        };
        self.city = location.city.clone();
        self.district = location.district.clone();
        self.postal_code = location.postal_code.clone();
        self.lat = Some(location.lat);
        self.lng = Some(location.lng);
    }

    /// Validate the fields required to continue to payment.
    ///
    /// Checks run in a fixed order — name, phone, address, city — and the
    /// first failure wins. Returns the translation key of the
    /// field-specific message.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.full_name.trim().is_empty() {
            return Err("checkout.validation.fullName");
        }
        if self.phone.trim().is_empty() {
            return Err("checkout.validation.phone");
        }
        if self.street_address.trim().is_empty() {
            return Err("checkout.validation.address");
        }
        if self.city.trim().is_empty() {
            return Err("checkout.validation.city");
        }
        Ok(())
    }

    /// One-line address summary for the delivery recap.
    pub fn address_summary(&self) -> String {
        let mut parts = Vec::new();
        for part in [&self.street_address, &self.district, &self.city] {
            if !part.is_empty() {
                parts.push(part.clone());
            }
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> DeliveryDetails {
        DeliveryDetails {
            full_name: "Sara Al-Qahtani".to_string(),
            phone: "+966 55 123 4567".to_string(),
            street_address: "7910 King Fahd Road".to_string(),
            city: "Riyadh".to_string(),
            district: "Al Olaya".to_string(),
            postal_code: "12212".to_string(),
            additional_notes: String::new(),
            lat: None,
            lng: None,
        }
    }

    #[test]
    fn test_valid_details_pass() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_validation_order_first_failure_wins() {
        let mut details = DeliveryDetails::new();
        assert_eq!(details.validate(), Err("checkout.validation.fullName"));

        details.full_name = "Sara".to_string();
        assert_eq!(details.validate(), Err("checkout.validation.phone"));

        details.phone = "+966 55".to_string();
        assert_eq!(details.validate(), Err("checkout.validation.address"));

        details.street_address = "King Fahd Road".to_string();
        assert_eq!(details.validate(), Err("checkout.validation.city"));
    }

    #[test]
    fn test_whitespace_only_fields_fail() {
        let mut details = filled();
        details.full_name = "   ".to_string();
        assert_eq!(details.validate(), Err("checkout.validation.fullName"));
    }

    #[test]
    fn test_apply_location_keeps_contact_fields() {
        let mut details = filled();
        details.apply_location(&LocationData {
            street_address: "22 Olaya Street".to_string(),
            city: "Riyadh".to_string(),
            district: "Al Malaz".to_string(),
            postal_code: "11564".to_string(),
            lat: 24.68,
            lng: 46.72,
            formatted_address: "22 Olaya St, Al Malaz, Riyadh 11564".to_string(),
        });

        assert_eq!(details.full_name, "Sara Al-Qahtani");
        assert_eq!(details.phone, "+966 55 123 4567");
        assert_eq!(details.street_address, "22 Olaya Street");
        assert_eq!(details.district, "Al Malaz");
        assert_eq!(details.lat, Some(24.68));
    }

    #[test]
    fn test_apply_location_falls_back_to_formatted_address() {
        let mut details = filled();
        details.apply_location(&LocationData {
            street_address: String::new(),
            formatted_address: "Riyadh, Saudi Arabia".to_string(),
            ..LocationData::unset()
        });
        assert_eq!(details.street_address, "Riyadh, Saudi Arabia");
    }

    #[test]
    fn test_address_summary_skips_empty_parts() {
        let mut details = filled();
        details.district = String::new();
        assert_eq!(details.address_summary(), "7910 King Fahd Road, Riyadh");
    }
}
