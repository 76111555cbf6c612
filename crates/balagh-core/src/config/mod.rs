//! Backend configuration for client apps.
//!
//! Provides a unified `BackendConfig` used by every front end to reach the
//! Supabase project that holds the `reports` table and photo bucket.

use std::env;

use serde::{Deserialize, Serialize};

use crate::util::{is_http_url, normalize_text_option};
use crate::{Error, Result};

pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";
pub const ENV_SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";
pub const ENV_REPORTS_TABLE: &str = "BALAGH_REPORTS_TABLE";
pub const ENV_STORAGE_BUCKET: &str = "BALAGH_STORAGE_BUCKET";

pub const DEFAULT_REPORTS_TABLE: &str = "reports";
pub const DEFAULT_STORAGE_BUCKET: &str = "reports";

/// Public backend settings.
///
/// The anon key is a safe-to-ship public key; service-role secrets must never
/// be stored here.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    #[serde(default = "default_reports_table")]
    pub reports_table: String,
    #[serde(default = "default_storage_bucket")]
    pub storage_bucket: String,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("BackendConfig")
            .field("supabase_url", &self.supabase_url)
            .field("supabase_anon_key", &"[REDACTED]")
            .field("reports_table", &self.reports_table)
            .field("storage_bucket", &self.storage_bucket)
            .finish()
    }
}

impl BackendConfig {
    /// Build a config with the default table and bucket names.
    pub fn new(
        supabase_url: impl AsRef<str>,
        supabase_anon_key: impl Into<String>,
    ) -> Result<Self> {
        Self::from_parts(
            Some(supabase_url.as_ref().to_string()),
            Some(supabase_anon_key.into()),
            None,
            None,
        )?
        .ok_or(Error::NotConfigured)
    }

    /// Load configuration from environment variables.
    ///
    /// Returns `Ok(None)` when neither the URL nor the key is set.
    /// Returns an error when only a partial configuration is provided.
    pub fn from_env() -> Result<Option<Self>> {
        parse_config(|key| env::var(key).ok())
    }

    /// Assemble a config from optional parts, applying defaults.
    pub fn from_parts(
        supabase_url: Option<String>,
        supabase_anon_key: Option<String>,
        reports_table: Option<String>,
        storage_bucket: Option<String>,
    ) -> Result<Option<Self>> {
        let url = normalize_text_option(supabase_url);
        let anon_key = normalize_text_option(supabase_anon_key);

        let (url, anon_key) = match (url, anon_key) {
            (None, None) => return Ok(None),
            (Some(url), Some(anon_key)) => (url, anon_key),
            (url, _) => {
                let missing = if url.is_none() {
                    ENV_SUPABASE_URL
                } else {
                    ENV_SUPABASE_ANON_KEY
                };
                return Err(Error::InvalidInput(format!(
                    "Backend configuration is incomplete. Missing: {missing}"
                )));
            }
        };

        Ok(Some(Self {
            supabase_url: normalize_supabase_url(&url)?,
            supabase_anon_key: anon_key,
            reports_table: normalize_text_option(reports_table)
                .unwrap_or_else(default_reports_table),
            storage_bucket: normalize_text_option(storage_bucket)
                .unwrap_or_else(default_storage_bucket),
        }))
    }

    /// PostgREST endpoint for the reports table.
    #[must_use]
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1/{}", self.supabase_url, self.reports_table)
    }

    /// Storage API base for object operations.
    #[must_use]
    pub fn storage_url(&self) -> String {
        format!("{}/storage/v1", self.supabase_url)
    }
}

fn parse_config(lookup: impl Fn(&str) -> Option<String>) -> Result<Option<BackendConfig>> {
    BackendConfig::from_parts(
        lookup(ENV_SUPABASE_URL),
        lookup(ENV_SUPABASE_ANON_KEY),
        lookup(ENV_REPORTS_TABLE),
        lookup(ENV_STORAGE_BUCKET),
    )
}

/// Trim the project URL and strip a trailing slash or API suffix.
pub fn normalize_supabase_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::InvalidInput(
            "Supabase URL must not be empty".to_string(),
        ));
    }
    if !is_http_url(trimmed) {
        return Err(Error::InvalidInput(
            "Supabase URL must include http:// or https://".to_string(),
        ));
    }

    let base = trimmed
        .strip_suffix("/rest/v1")
        .or_else(|| trimmed.strip_suffix("/storage/v1"))
        .unwrap_or(trimmed);
    Ok(base.to_string())
}

fn default_reports_table() -> String {
    DEFAULT_REPORTS_TABLE.to_string()
}

fn default_storage_bucket() -> String {
    DEFAULT_STORAGE_BUCKET.to_string()
}
