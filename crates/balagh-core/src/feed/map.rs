//! Map markers for reports that carry coordinates.

use serde::Serialize;

use crate::models::{Coordinates, Report};
use crate::navigation::Route;

/// Visible map area, as center plus span in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

/// Region shown before the user pans.
pub const INITIAL_REGION: MapRegion = MapRegion {
    latitude: 34.68,
    longitude: -1.91,
    latitude_delta: 0.09,
    longitude_delta: 0.09,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    /// Report id, or `"<lat>-<lon>"` when the row has none.
    pub key: String,
    pub coordinates: Coordinates,
    /// Callout text.
    pub title: String,
    /// Where activating the marker leads.
    #[serde(skip)]
    pub route: Route,
}

/// One marker per report with both coordinates present and numeric.
///
/// Reports without a usable position are left out here but still appear in
/// the list.
#[must_use]
pub fn map_markers(reports: &[Report]) -> Vec<MapMarker> {
    reports
        .iter()
        .filter_map(|report| {
            let coordinates = report.coordinates()?;
            let key = report.id.as_ref().map_or_else(
                || format!("{}-{}", coordinates.latitude, coordinates.longitude),
                ToString::to_string,
            );
            Some(MapMarker {
                key,
                coordinates,
                title: report.title.clone(),
                route: Route::detail(report),
            })
        })
        .collect()
}
