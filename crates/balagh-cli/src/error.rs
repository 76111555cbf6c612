use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] balagh_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Report ID cannot be empty")]
    EmptyReportId,
    #[error("Report not found for id/prefix: {0}")]
    ReportNotFound(String),
    #[error("{0}")]
    AmbiguousReportId(String),
    #[error("Photo capture failed: {0}")]
    Capture(String),
    /// A pipeline step ended with an error notice.
    #[error("{0}")]
    Notice(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error(
        "Backend is not configured. Run `balagh config init --supabase-url <URL> --supabase-anon-key <KEY>`, or set SUPABASE_URL and SUPABASE_ANON_KEY."
    )]
    NotConfigured,
}
