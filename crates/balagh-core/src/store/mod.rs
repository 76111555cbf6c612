//! Remote collaborators: the report record store and photo blob store.

mod supabase;

use async_trait::async_trait;

use crate::models::{NewReport, Report, ReportId};
use crate::Result;

pub use supabase::SupabaseClient;

/// Content type used for every report photo.
pub const PHOTO_CONTENT_TYPE: &str = "image/jpeg";

/// Structured storage holding report rows.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a report, returning the server-assigned id when echoed back.
    async fn insert(&self, report: &NewReport) -> Result<Option<ReportId>>;

    /// All reports, newest first by `created_at`.
    async fn select_recent(&self) -> Result<Vec<Report>>;
}

/// Object storage holding uploaded photos.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Upload bytes to `path`.
    async fn upload(&self, path: &str, bytes: &[u8], options: UploadOptions) -> Result<()>;

    /// Public retrieval address for `path`. Pure derivation, never fails.
    fn public_url(&self, path: &str) -> String;
}

/// Options for a blob upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    pub content_type: String,
    /// Replace an existing object at the same path.
    pub overwrite: bool,
}

impl UploadOptions {
    /// JPEG upload that refuses to replace an existing object.
    #[must_use]
    pub fn photo() -> Self {
        Self {
            content_type: PHOTO_CONTENT_TYPE.to_string(),
            overwrite: false,
        }
    }
}
