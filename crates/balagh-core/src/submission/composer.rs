//! Async drivers that run capability and backend calls between draft
//! transitions.

use super::draft::{Draft, LocateOutcome, Receipt, SubmitDecision, Submission};
use crate::device::{Camera, Geocoder, Locator, PermissionStatus, PhotoReader, PhotoRef};
use crate::models::format_address;
use crate::notice::Notice;
use crate::store::{BlobStore, RecordStore, UploadOptions};
use crate::util::unix_millis_now;
use crate::{Error, Result};

const PHOTO_PREFIX: &str = "reports";
const PHOTO_EXTENSION: &str = "jpg";

/// Object path for a photo uploaded at `timestamp_ms`.
#[must_use]
pub fn object_path_for(timestamp_ms: i64) -> String {
    format!("{PHOTO_PREFIX}/{timestamp_ms}.{PHOTO_EXTENSION}")
}

/// Commits drafts against the record and blob stores.
///
/// A commit is two ordered steps: upload the photo, then insert the row.
/// An upload failure stops before the insert. An insert failure after a
/// successful upload leaves the uploaded object in place; there is no
/// rollback and the orphan is only logged.
pub struct ReportComposer<'a> {
    records: &'a dyn RecordStore,
    blobs: &'a dyn BlobStore,
    photos: &'a dyn PhotoReader,
    clock: fn() -> i64,
}

impl<'a> ReportComposer<'a> {
    pub fn new(
        records: &'a dyn RecordStore,
        blobs: &'a dyn BlobStore,
        photos: &'a dyn PhotoReader,
    ) -> Self {
        Self {
            records,
            blobs,
            photos,
            clock: unix_millis_now,
        }
    }

    /// Replace the millisecond clock used to name uploads.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// Run a full submission for `draft`.
    ///
    /// Returns the next draft and the notice to show, if any. A draft that is
    /// already submitting comes back untouched with no notice.
    pub async fn submit(&self, draft: Draft) -> (Draft, Option<Notice>) {
        let (draft, decision) = draft.begin_submit();
        let submission = match decision {
            SubmitDecision::Ignored => return (draft, None),
            SubmitDecision::Rejected(notice) => return (draft, Some(notice)),
            SubmitDecision::Proceed(submission) => submission,
        };

        let outcome = self.commit(&submission).await;
        if let Err(error) = &outcome {
            tracing::error!("Report submission failed: {}", error);
        }
        let (draft, notice) = draft.finish_submit(&outcome);
        (draft, Some(notice))
    }

    /// Upload the photo, then insert the report row.
    pub async fn commit(&self, submission: &Submission) -> Result<Receipt> {
        tracing::info!(title = %submission.title, "Submitting report");

        let bytes = self
            .photos
            .read(&submission.photo)
            .await
            .map_err(|error| Error::Upload(error.detail()))?;

        let object_path = object_path_for((self.clock)());
        self.blobs
            .upload(&object_path, &bytes, UploadOptions::photo())
            .await
            .map_err(|error| Error::Upload(error.detail()))?;
        tracing::debug!(path = %object_path, size = bytes.len(), "Uploaded report photo");

        let image_url = self.blobs.public_url(&object_path);
        let payload = submission.to_new_report(image_url.clone());

        match self.records.insert(&payload).await {
            Ok(report_id) => {
                tracing::info!(id = ?report_id, "Report created");
                Ok(Receipt {
                    report_id,
                    object_path,
                    image_url,
                })
            }
            Err(error) => {
                tracing::warn!(
                    path = %object_path,
                    "Report insert failed after upload; photo left orphaned in storage"
                );
                Err(Error::Insert(error.detail()))
            }
        }
    }
}

/// What happened when the user tapped the photo area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Captured(PhotoRef),
    Cancelled,
    /// Permission was missing; it was requested and nothing else happened.
    PermissionRequested(PermissionStatus),
    Failed(String),
}

/// Capture a photo into the draft.
///
/// Without camera permission this only asks for it; the user has to tap
/// again once granted.
pub async fn capture_photo(draft: Draft, camera: &dyn Camera) -> (Draft, CaptureOutcome) {
    if !camera.permission_granted().await {
        return match camera.request_permission().await {
            Ok(status) => {
                tracing::info!(?status, "Requested camera permission");
                (draft, CaptureOutcome::PermissionRequested(status))
            }
            Err(error) => (draft, CaptureOutcome::Failed(error.detail())),
        };
    }

    match camera.capture().await {
        Ok(Some(photo)) => (
            draft.with_photo(photo.clone()),
            CaptureOutcome::Captured(photo),
        ),
        Ok(None) => (draft, CaptureOutcome::Cancelled),
        Err(error) => {
            tracing::warn!("Camera capture failed: {}", error);
            (draft, CaptureOutcome::Failed(error.detail()))
        }
    }
}

/// Read the device position and reverse-geocode it into the draft.
pub async fn acquire_location(
    draft: Draft,
    locator: &dyn Locator,
    geocoder: &dyn Geocoder,
) -> Draft {
    let draft = draft.begin_locating();
    let outcome = locate(locator, geocoder).await;
    draft.finish_locating(outcome)
}

async fn locate(locator: &dyn Locator, geocoder: &dyn Geocoder) -> LocateOutcome {
    match locator.request_foreground_permission().await {
        Ok(status) if status.is_granted() => {}
        Ok(status) => {
            tracing::info!(?status, "Location permission not granted");
            return LocateOutcome::PermissionDenied;
        }
        Err(error) => {
            tracing::warn!("Location permission request failed: {}", error);
            return LocateOutcome::Failed { coordinates: None };
        }
    }

    let coordinates = match locator.current_position().await {
        Ok(coordinates) => coordinates,
        Err(error) => {
            tracing::warn!("Reading current position failed: {}", error);
            return LocateOutcome::Failed { coordinates: None };
        }
    };

    match geocoder.reverse_geocode(coordinates).await {
        Ok(candidates) => LocateOutcome::Located {
            coordinates,
            address: format_address(&candidates),
        },
        Err(error) => {
            tracing::warn!("Reverse geocoding failed: {}", error);
            LocateOutcome::Failed {
                coordinates: Some(coordinates),
            }
        }
    }
}
