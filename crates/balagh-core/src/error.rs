//! Error types for balagh-core

use std::fmt;

use thiserror::Error;

/// Result type alias using balagh-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Device capability guarded by a user permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Camera,
    Location,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Camera => write!(f, "camera"),
            Self::Location => write!(f, "location"),
        }
    }
}

/// Errors that can occur in balagh-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Draft failed local validation; nothing was sent
    #[error("{0}")]
    Validation(String),

    /// User refused a device permission
    #[error("Permission to access {0} was denied")]
    PermissionDenied(Capability),

    /// Photo upload to blob storage failed
    #[error("Upload failed: {0}")]
    Upload(String),

    /// Report insert into the record store failed
    #[error("Insert failed: {0}")]
    Insert(String),

    /// Loading the report collection failed
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Backend answered with a non-success status
    #[error("Backend error: {0}")]
    Api(String),

    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Device capability failed (camera, GPS, geocoder)
    #[error("Device error: {0}")]
    Device(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No backend settings were found
    #[error(
        "Backend is not configured. Set SUPABASE_URL and SUPABASE_ANON_KEY, or run `balagh config init`."
    )]
    NotConfigured,
}

impl Error {
    /// The underlying message without the variant prefix.
    ///
    /// Remote failures keep the backend's own wording so it can be shown to
    /// the user verbatim.
    pub fn detail(&self) -> String {
        match self {
            Self::Validation(message)
            | Self::Upload(message)
            | Self::Insert(message)
            | Self::Fetch(message)
            | Self::Api(message)
            | Self::Device(message)
            | Self::InvalidInput(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// Message for a user-facing notification, or `fallback` when the error
    /// carries no text.
    pub fn user_message(&self, fallback: &str) -> String {
        let detail = self.detail();
        if detail.trim().is_empty() {
            fallback.to_string()
        } else {
            detail
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_strips_variant_prefix() {
        let error = Error::Upload("The resource already exists (409)".to_string());
        assert_eq!(error.detail(), "The resource already exists (409)");
        assert_eq!(
            error.to_string(),
            "Upload failed: The resource already exists (409)"
        );
    }

    #[test]
    fn user_message_falls_back_when_detail_is_blank() {
        let error = Error::Insert("   ".to_string());
        assert_eq!(error.user_message("Something went wrong"), "Something went wrong");
    }

    #[test]
    fn permission_denied_names_capability() {
        let error = Error::PermissionDenied(Capability::Location);
        assert_eq!(error.detail(), "Permission to access location was denied");
    }
}
