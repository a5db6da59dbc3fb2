//! Static reference data: countries, their regions and phone prefixes
//!
//! The dataset is bundled into the binary and parsed once at startup. The
//! form layer only sees it through [`ReferenceData`], so tests can swap in a
//! hand-built table.

use serde::Deserialize;
use thiserror::Error;

/// Bundled country dataset
const COUNTRIES_JSON: &str = include_str!("countries.json");

/// Errors raised while loading reference data
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    /// The bundled dataset could not be parsed
    #[error("invalid country dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A first-level subdivision of a country
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub iso_code: String,
    pub name: String,
}

/// A selectable country
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub iso_code: String,
    pub name: String,
    pub phone_prefix: String,
    #[serde(default)]
    pub regions: Vec<Region>,
}

impl Country {
    /// Label used in the phone code picker, e.g. `+1 (US)`
    pub fn phone_code_label(&self) -> String {
        format!("{} ({})", self.phone_prefix, self.iso_code)
    }
}

/// Read-only lookup over countries and regions
pub trait ReferenceData {
    /// All countries in display order
    fn all_countries(&self) -> &[Country];

    /// Regions of the country with the given ISO code (empty when unknown)
    fn regions_of_country(&self, iso_code: &str) -> &[Region];

    /// Find a country by its display name
    fn find_country_by_name(&self, name: &str) -> Option<&Country> {
        self.all_countries().iter().find(|c| c.name == name)
    }
}

/// Reference data backed by an in-memory country table
#[derive(Debug, Clone, Default)]
pub struct StaticReferenceData {
    countries: Vec<Country>,
}

impl StaticReferenceData {
    /// Build from an explicit country table
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    /// Parse the dataset shipped with the binary
    pub fn bundled() -> Result<Self, ReferenceDataError> {
        Self::from_json(COUNTRIES_JSON)
    }

    /// Parse a dataset in the bundled JSON layout
    pub fn from_json(json: &str) -> Result<Self, ReferenceDataError> {
        let countries: Vec<Country> = serde_json::from_str(json)?;
        tracing::debug!("Loaded {} countries", countries.len());
        Ok(Self::new(countries))
    }
}

impl ReferenceData for StaticReferenceData {
    fn all_countries(&self) -> &[Country] {
        &self.countries
    }

    fn regions_of_country(&self, iso_code: &str) -> &[Region] {
        self.countries
            .iter()
            .find(|c| c.iso_code == iso_code)
            .map(|c| c.regions.as_slice())
            .unwrap_or(&[])
    }
}
