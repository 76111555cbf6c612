//! Coordinates and reverse-geocoded addresses

use serde::{Deserialize, Serialize};

/// Shown when reverse geocoding yields nothing usable.
pub const ADDRESS_PLACEHOLDER: &str = "Address not available";

const ADDRESS_SEPARATOR: &str = ", ";

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a pair only when both parts are present and finite.
    #[must_use]
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) if latitude.is_finite() && longitude.is_finite() => {
                Some(Self::new(latitude, longitude))
            }
            _ => None,
        }
    }
}

/// One structured result of reverse geocoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressCandidate {
    pub street: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

/// Render the first candidate as `street, city, region, country`.
///
/// Missing or blank parts are skipped. An empty candidate list, or a first
/// candidate with no usable parts, yields [`ADDRESS_PLACEHOLDER`].
#[must_use]
pub fn format_address(candidates: &[AddressCandidate]) -> String {
    let Some(first) = candidates.first() else {
        return ADDRESS_PLACEHOLDER.to_string();
    };

    let formatted = [&first.street, &first.city, &first.region, &first.country]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(ADDRESS_SEPARATOR);

    if formatted.is_empty() {
        ADDRESS_PLACEHOLDER.to_string()
    } else {
        formatted
    }
}
