//! In-memory collaborators for pipeline tests. Every call is recorded.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::device::{Camera, Geocoder, Locator, PermissionStatus, PhotoReader, PhotoRef};
use crate::models::{AddressCandidate, Coordinates, NewReport, Report, ReportId};
use crate::store::{BlobStore, RecordStore, UploadOptions};
use crate::{Error, Result};

pub const PUBLIC_BASE: &str = "https://demo.supabase.co/storage/v1/object/public/reports";

#[derive(Default)]
pub struct FakeBackend {
    pub uploads: Mutex<Vec<(String, Vec<u8>, UploadOptions)>>,
    pub inserts: Mutex<Vec<NewReport>>,
    pub rows: Mutex<Vec<Report>>,
    pub fail_upload: Option<String>,
    pub fail_insert: Option<String>,
    pub fail_select: Option<String>,
    pub select_calls: AtomicUsize,
}

impl FakeBackend {
    pub fn with_rows(rows: Vec<Report>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Self::default()
        }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.lock().unwrap().len()
    }
}

#[async_trait]
impl RecordStore for FakeBackend {
    async fn insert(&self, report: &NewReport) -> Result<Option<ReportId>> {
        self.inserts.lock().unwrap().push(report.clone());
        if let Some(message) = &self.fail_insert {
            return Err(Error::Api(message.clone()));
        }
        Ok(Some(ReportId::new(self.insert_count().to_string())))
    }

    async fn select_recent(&self) -> Result<Vec<Report>> {
        self.select_calls.fetch_add(1, Ordering::Relaxed);
        if let Some(message) = &self.fail_select {
            return Err(Error::Api(message.clone()));
        }
        Ok(self.rows.lock().unwrap().clone())
    }
}

#[async_trait]
impl BlobStore for FakeBackend {
    async fn upload(&self, path: &str, bytes: &[u8], options: UploadOptions) -> Result<()> {
        self.uploads
            .lock()
            .unwrap()
            .push((path.to_string(), bytes.to_vec(), options));
        if let Some(message) = &self.fail_upload {
            return Err(Error::Api(message.clone()));
        }
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!("{PUBLIC_BASE}/{path}")
    }
}

pub struct FakeCamera {
    pub granted: bool,
    pub request_answer: PermissionStatus,
    pub shot: Option<PhotoRef>,
    pub permission_requests: AtomicUsize,
    pub captures: AtomicUsize,
}

impl FakeCamera {
    pub fn granted(shot: Option<PhotoRef>) -> Self {
        Self {
            granted: true,
            request_answer: PermissionStatus::Granted,
            shot,
            permission_requests: AtomicUsize::new(0),
            captures: AtomicUsize::new(0),
        }
    }

    pub fn not_granted() -> Self {
        Self {
            granted: false,
            request_answer: PermissionStatus::Granted,
            ..Self::granted(Some(PhotoRef::new("/tmp/never.jpg")))
        }
    }
}

#[async_trait]
impl Camera for FakeCamera {
    async fn permission_granted(&self) -> bool {
        self.granted
    }

    async fn request_permission(&self) -> Result<PermissionStatus> {
        self.permission_requests.fetch_add(1, Ordering::Relaxed);
        Ok(self.request_answer)
    }

    async fn capture(&self) -> Result<Option<PhotoRef>> {
        self.captures.fetch_add(1, Ordering::Relaxed);
        Ok(self.shot.clone())
    }
}

pub struct FakeLocator {
    pub permission: PermissionStatus,
    pub position: Option<Coordinates>,
}

#[async_trait]
impl Locator for FakeLocator {
    async fn request_foreground_permission(&self) -> Result<PermissionStatus> {
        Ok(self.permission)
    }

    async fn current_position(&self) -> Result<Coordinates> {
        self.position
            .ok_or_else(|| Error::Device("Location unavailable".to_string()))
    }
}

pub struct FakeGeocoder {
    pub candidates: Option<Vec<AddressCandidate>>,
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn reverse_geocode(&self, _coordinates: Coordinates) -> Result<Vec<AddressCandidate>> {
        self.candidates
            .clone()
            .ok_or_else(|| Error::Device("Geocoder offline".to_string()))
    }
}

/// Serves fixed bytes for any photo, or fails when `bytes` is `None`.
pub struct FakePhotoReader {
    pub bytes: Option<Vec<u8>>,
}

impl FakePhotoReader {
    pub fn jpeg() -> Self {
        Self {
            bytes: Some(vec![0xFF, 0xD8, 0xFF, 0xD9]),
        }
    }
}

#[async_trait]
impl PhotoReader for FakePhotoReader {
    async fn read(&self, photo: &PhotoRef) -> Result<Vec<u8>> {
        self.bytes.clone().ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{photo} not found"),
            ))
        })
    }
}
