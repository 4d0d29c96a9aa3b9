mod normalize;

pub use normalize::normalized_name;

use std::collections::BTreeMap;

use geodesy::LatLon;
use serde::{Deserialize, Serialize};

/// One entry of the country reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Display name; its normalized form is the unique identifier.
    pub name: String,
    /// ISO 3166-1 alpha-2 code, used for flag lookup.
    pub iso: String,
    /// Display only.
    pub capital: String,
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl Country {
    pub fn latlon(&self) -> LatLon {
        LatLon::new(self.lat_deg, self.lon_deg)
    }

    /// Lowercase ISO code, the shape flag assets are keyed by.
    pub fn flag_code(&self) -> String {
        self.iso.to_ascii_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GazetteerError {
    /// The dataset payload was not valid JSON for a country list.
    Parse(String),
    /// Two source entries collide after name normalization.
    DuplicateName(String),
}

impl std::fmt::Display for GazetteerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GazetteerError::Parse(msg) => write!(f, "country dataset parse error: {msg}"),
            GazetteerError::DuplicateName(name) => {
                write!(f, "country dataset has duplicate name: {name}")
            }
        }
    }
}

impl std::error::Error for GazetteerError {}

/// Indexed country reference list.
///
/// Keys are normalized names; iteration follows normalized-name order
/// (`BTreeMap`), which keeps resolution, suggestion and the fingerprint
/// deterministic regardless of source order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Gazetteer {
    by_name: BTreeMap<String, Country>,
}

impl Gazetteer {
    /// Builds the index, rejecting entries that collide after normalization.
    pub fn new(countries: Vec<Country>) -> Result<Self, GazetteerError> {
        let mut by_name = BTreeMap::new();
        for country in countries {
            let key = normalized_name(&country.name);
            if by_name.contains_key(&key) {
                return Err(GazetteerError::DuplicateName(country.name));
            }
            by_name.insert(key, country);
        }
        Ok(Self { by_name })
    }

    /// Loads the dataset from its JSON boundary format (an array of
    /// country records).
    pub fn from_json(raw: &str) -> Result<Self, GazetteerError> {
        let countries: Vec<Country> =
            serde_json::from_str(raw).map_err(|e| GazetteerError::Parse(e.to_string()))?;
        Self::new(countries)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Exact match on normalized name.
    pub fn resolve(&self, name: &str) -> Option<&Country> {
        self.by_name.get(&normalized_name(name))
    }

    /// Normalized substring match, in normalized-name order.
    ///
    /// An empty fragment matches nothing; the autocomplete host decides when
    /// a fragment is worth suggesting for.
    pub fn suggest(&self, fragment: &str, limit: usize) -> Vec<&Country> {
        let needle = normalized_name(fragment);
        if needle.is_empty() {
            return Vec::new();
        }
        self.by_name
            .iter()
            .filter(|(key, _)| key.contains(&needle))
            .map(|(_, country)| country)
            .take(limit)
            .collect()
    }

    /// Countries in normalized-name order.
    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.by_name.values()
    }

    /// Content id of the loaded dataset.
    ///
    /// Blake3 over a canonical byte encoding in normalized-name order, so two
    /// loads of the same data agree regardless of source key order.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for (key, country) in &self.by_name {
            hasher.update(key.as_bytes());
            hasher.update(&[0]);
            hasher.update(country.iso.as_bytes());
            hasher.update(&[0]);
            hasher.update(&country.lat_deg.to_le_bytes());
            hasher.update(&country.lon_deg.to_le_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }
}
