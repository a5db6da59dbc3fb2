//! Cross-field dependencies: country → regions, city → postal code

use crate::reference::{ReferenceData, Region};

/// Cities with a known postal code, in canonical spelling
pub const CITY_POSTAL_CODES: &[(&str, &str)] = &[
    ("New York", "10001"),
    ("London", "SW1A"),
    ("Paris", "75000"),
    ("Tokyo", "100-0001"),
    ("Mumbai", "400001"),
];

/// Result of selecting a country
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryChange {
    pub region_options: Vec<Region>,
    /// Always empty: a region from the previous country never survives
    pub region: String,
}

/// Result of a city matching the postal code table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityMatch {
    pub city: String,
    pub postal_code: String,
}

/// Regions for the newly selected country, with the region field reset
pub fn on_country_change(reference: &dyn ReferenceData, country_name: &str) -> CountryChange {
    let region_options = reference
        .find_country_by_name(country_name)
        .map(|c| reference.regions_of_country(&c.iso_code).to_vec())
        .unwrap_or_default();

    CountryChange {
        region_options,
        region: String::new(),
    }
}

/// Canonical city and its postal code if the input names a known city
pub fn on_city_change(raw_city: &str) -> Option<CityMatch> {
    let city = raw_city.trim();
    if city.is_empty() {
        return None;
    }

    CITY_POSTAL_CODES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(city))
        .map(|(name, postal_code)| CityMatch {
            city: (*name).to_string(),
            postal_code: (*postal_code).to_string(),
        })
}

/// Postal code is read-only while the city resolves to a known entry
pub fn is_postal_code_locked(city: &str) -> bool {
    on_city_change(city).is_some()
}
