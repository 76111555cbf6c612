//! Terminal stand-ins for the device capabilities: the camera is a photo
//! file on disk and the position comes from command-line flags.

use std::path::PathBuf;

use async_trait::async_trait;
use balagh_core::device::{Camera, Geocoder, Locator, PermissionStatus, PhotoRef};
use balagh_core::models::{AddressCandidate, Coordinates};
use balagh_core::{Error, Result};

/// "Captures" an existing photo file.
pub struct FileCamera {
    path: PathBuf,
}

impl FileCamera {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Camera for FileCamera {
    async fn permission_granted(&self) -> bool {
        true
    }

    async fn request_permission(&self) -> Result<PermissionStatus> {
        Ok(PermissionStatus::Granted)
    }

    async fn capture(&self) -> Result<Option<PhotoRef>> {
        match tokio::fs::metadata(&self.path).await {
            Ok(metadata) if metadata.is_file() => Ok(Some(PhotoRef::new(self.path.clone()))),
            Ok(_) => Err(Error::Device(format!(
                "{} is not a file",
                self.path.display()
            ))),
            Err(error) => Err(Error::Device(format!(
                "Cannot open photo {}: {error}",
                self.path.display()
            ))),
        }
    }
}

/// Position given on the command line. Passing coordinates grants permission.
pub struct FixedLocator {
    coordinates: Coordinates,
}

impl FixedLocator {
    pub const fn new(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }
}

#[async_trait]
impl Locator for FixedLocator {
    async fn request_foreground_permission(&self) -> Result<PermissionStatus> {
        Ok(PermissionStatus::Granted)
    }

    async fn current_position(&self) -> Result<Coordinates> {
        Ok(self.coordinates)
    }
}

/// Resolves every position to the address given on the command line, or to
/// nothing when none was given.
pub struct FixedGeocoder {
    address: Option<String>,
}

impl FixedGeocoder {
    pub const fn new(address: Option<String>) -> Self {
        Self { address }
    }
}

#[async_trait]
impl Geocoder for FixedGeocoder {
    async fn reverse_geocode(&self, _coordinates: Coordinates) -> Result<Vec<AddressCandidate>> {
        Ok(self
            .address
            .iter()
            .map(|address| AddressCandidate {
                street: Some(address.clone()),
                ..AddressCandidate::default()
            })
            .collect())
    }
}
