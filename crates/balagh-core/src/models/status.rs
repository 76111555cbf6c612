//! Report processing status

use std::fmt;

use serde::{Deserialize, Serialize};

/// Processing state of a report, set by whoever resolves issues.
///
/// Values outside the known set are kept verbatim in `Unrecognized` so they
/// survive a round trip and still render with the default badge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportStatus {
    Pending,
    InProgress,
    Resolved,
    Rejected,
    Unrecognized(String),
}

impl ReportStatus {
    /// Parse a raw status value, matching the known set case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.to_uppercase().as_str() {
            "PENDING" => Self::Pending,
            "IN_PROGRESS" => Self::InProgress,
            "RESOLVED" => Self::Resolved,
            "REJECTED" => Self::Rejected,
            _ => Self::Unrecognized(raw.to_string()),
        }
    }

    /// Wire representation of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Resolved => "RESOLVED",
            Self::Rejected => "REJECTED",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for ReportStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ReportStatus> for String {
    fn from(value: ReportStatus) -> Self {
        match value {
            ReportStatus::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
