//! Supabase REST client for the reports table and photo bucket.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;

use super::{BlobStore, RecordStore, UploadOptions};
use crate::config::BackendConfig;
use crate::models::{NewReport, Report, ReportId};
use crate::util::compact_text;
use crate::{Error, Result};

/// Talks to PostgREST (`/rest/v1`) and Storage (`/storage/v1`) with the
/// project's anon key.
#[derive(Clone)]
pub struct SupabaseClient {
    config: BackendConfig,
    client: Client,
}

impl SupabaseClient {
    pub fn new(config: BackendConfig) -> Result<Self> {
        Ok(Self {
            config,
            client: Client::builder().build()?,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Object endpoint for an upload into the configured bucket.
    #[must_use]
    pub fn object_url(&self, path: &str) -> String {
        format!(
            "{}/object/{}/{}",
            self.config.storage_url(),
            self.config.storage_bucket,
            encode_object_path(path)
        )
    }

    fn public_request(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.config.supabase_anon_key)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.supabase_anon_key),
            )
    }
}

#[async_trait]
impl RecordStore for SupabaseClient {
    async fn insert(&self, report: &NewReport) -> Result<Option<ReportId>> {
        let request = self.public_request(
            self.client
                .post(self.config.rest_url())
                .header("Prefer", "return=representation")
                .json(report),
        );

        let response = ensure_success(request.send().await?).await?;
        let rows = response.json::<Vec<InsertedRow>>().await?;
        let id = rows.into_iter().next().and_then(|row| row.id);
        tracing::debug!(id = ?id, table = %self.config.reports_table, "Inserted report row");
        Ok(id)
    }

    async fn select_recent(&self) -> Result<Vec<Report>> {
        let request = self.public_request(
            self.client
                .get(self.config.rest_url())
                .query(&[("select", "*"), ("order", "created_at.desc")])
                .header("Accept", "application/json"),
        );

        let response = ensure_success(request.send().await?).await?;
        Ok(response.json::<Vec<Report>>().await?)
    }
}

#[async_trait]
impl BlobStore for SupabaseClient {
    async fn upload(&self, path: &str, bytes: &[u8], options: UploadOptions) -> Result<()> {
        let request = self.public_request(
            self.client
                .post(self.object_url(path))
                .header(reqwest::header::CONTENT_TYPE, options.content_type)
                .header("x-upsert", if options.overwrite { "true" } else { "false" })
                .body(bytes.to_vec()),
        );

        ensure_success(request.send().await?).await?;
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/object/public/{}/{}",
            self.config.storage_url(),
            self.config.storage_bucket,
            encode_object_path(path)
        )
    }
}

#[derive(Debug, Deserialize)]
struct InsertedRow {
    #[serde(default)]
    id: Option<ReportId>,
}

#[derive(Debug, Deserialize)]
struct SupabaseErrorResponse {
    error: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
    msg: Option<String>,
}

async fn ensure_success(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Api(parse_api_error(status, &body)))
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<SupabaseErrorResponse>(body) {
        if let Some(message) = payload
            .message
            .or(payload.msg)
            .or(payload.error_description)
            .or(payload.error)
        {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let trimmed = compact_text(body);
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}

fn encode_object_path(path: &str) -> String {
    path.trim_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
