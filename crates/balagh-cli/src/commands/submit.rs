use std::path::PathBuf;

use balagh_core::device::{FsPhotoReader, Geocoder, NominatimGeocoder};
use balagh_core::models::Coordinates;
use balagh_core::submission::{
    acquire_location, capture_photo, CaptureOutcome, Draft, ReportComposer,
};
use balagh_core::{Category, Notice};

use crate::commands::common::open_backend;
use crate::devices::{FileCamera, FixedGeocoder, FixedLocator};
use crate::error::CliError;

pub struct SubmitArgs {
    pub title: String,
    pub photo: PathBuf,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub coordinates: Option<Coordinates>,
    pub address: Option<String>,
    pub geocode: bool,
}

pub async fn run_submit(args: SubmitArgs, global_profile: Option<&str>) -> Result<(), CliError> {
    let client = open_backend(global_profile)?;
    let draft = compose_draft(args).await?;

    let photos = FsPhotoReader;
    let composer = ReportComposer::new(&client, &client, &photos);
    let (_, notice) = composer.submit(draft).await;
    report_outcome(notice)
}

/// Print a success notice; turn anything else into an error.
pub fn report_outcome(notice: Option<Notice>) -> Result<(), CliError> {
    match notice {
        Some(notice) if notice.is_success() => {
            println!(
                "{}: {}",
                notice.title.as_deref().unwrap_or_default(),
                notice.message
            );
            Ok(())
        }
        Some(notice) => Err(CliError::Notice(notice.message)),
        None => Ok(()),
    }
}

/// Fill a draft from the command line through the same transitions the
/// report form uses.
pub async fn compose_draft(args: SubmitArgs) -> Result<Draft, CliError> {
    let mut draft = Draft::new()
        .with_title(args.title)
        .with_category(args.category.unwrap_or_default());
    if let Some(description) = args.description {
        draft = draft.with_description(description);
    }

    let (mut draft, capture) = capture_photo(draft, &FileCamera::new(args.photo)).await;
    match capture {
        CaptureOutcome::Captured(_) => {}
        CaptureOutcome::Failed(message) => return Err(CliError::Capture(message)),
        CaptureOutcome::Cancelled | CaptureOutcome::PermissionRequested(_) => {
            return Err(CliError::Capture("no photo taken".to_string()));
        }
    }

    if let Some(coordinates) = args.coordinates {
        let geocoder: Box<dyn Geocoder> = if args.geocode {
            Box::new(NominatimGeocoder::public()?)
        } else {
            Box::new(FixedGeocoder::new(args.address))
        };
        draft = acquire_location(draft, &FixedLocator::new(coordinates), geocoder.as_ref()).await;
        if let Some(error) = draft.location_error() {
            tracing::warn!("{error}");
        }
    }

    Ok(draft)
}
