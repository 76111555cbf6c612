use balagh_core::feed::{map_markers, FeedView, MapMarker, MapRegion, INITIAL_REGION};
use serde::Serialize;

use crate::commands::common::{format_marker_lines, load_reports, open_backend};
use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct MapOutput {
    pub region: MapRegion,
    pub markers: Vec<MapMarker>,
}

pub async fn run_map(as_json: bool, global_profile: Option<&str>) -> Result<(), CliError> {
    let client = open_backend(global_profile)?;
    let reports = load_reports(&client, FeedView::Map).await?;
    let output = MapOutput {
        region: INITIAL_REGION,
        markers: map_markers(&reports),
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "Region: {}, {} (±{}°, ±{}°)",
            output.region.latitude,
            output.region.longitude,
            output.region.latitude_delta,
            output.region.longitude_delta
        );
        for line in format_marker_lines(&output.markers) {
            println!("{line}");
        }
    }

    Ok(())
}
