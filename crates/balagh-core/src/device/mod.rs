//! Device capabilities: camera, geolocation, reverse geocoding, and photo
//! file access.

mod nominatim;

use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::models::{AddressCandidate, Coordinates};
use crate::Result;

pub use nominatim::NominatimGeocoder;

/// Answer to a permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

impl PermissionStatus {
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Local reference to a captured, cropped photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhotoRef(PathBuf);

impl PhotoRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for PhotoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[async_trait]
pub trait Camera: Send + Sync {
    async fn permission_granted(&self) -> bool;

    async fn request_permission(&self) -> Result<PermissionStatus>;

    /// Open the camera. `None` means the user backed out.
    async fn capture(&self) -> Result<Option<PhotoRef>>;
}

#[async_trait]
pub trait Locator: Send + Sync {
    async fn request_foreground_permission(&self) -> Result<PermissionStatus>;

    /// Single-shot read of the current position.
    async fn current_position(&self) -> Result<Coordinates>;
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Zero or more structured addresses for a coordinate pair.
    async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<Vec<AddressCandidate>>;
}

#[async_trait]
pub trait PhotoReader: Send + Sync {
    async fn read(&self, photo: &PhotoRef) -> Result<Vec<u8>>;
}

/// Reads photos straight from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPhotoReader;

#[async_trait]
impl PhotoReader for FsPhotoReader {
    async fn read(&self, photo: &PhotoRef) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(photo.path()).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn fs_photo_reader_reads_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

        let bytes = FsPhotoReader
            .read(&PhotoRef::new(file.path()))
            .await
            .unwrap();
        assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF, 0xE0]);
    }

    #[tokio::test]
    async fn fs_photo_reader_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = FsPhotoReader
            .read(&PhotoRef::new(dir.path().join("missing.jpg")))
            .await
            .unwrap_err();
        assert!(matches!(error, crate::Error::Io(_)));
    }
}
