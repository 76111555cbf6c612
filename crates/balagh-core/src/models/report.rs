//! Report model

use std::cmp::Reverse;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::{Coordinates, ReportStatus};
use crate::display::parse_timestamp;

/// Server-assigned report identifier.
///
/// The backend may hand out numeric or textual keys; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ReportId(String);

impl ReportId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ReportId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(value) => Self(value),
            RawId::Signed(value) => Self(value.to_string()),
            RawId::Unsigned(value) => Self(value.to_string()),
        })
    }
}

/// A citizen-submitted issue as stored in the `reports` table.
///
/// Every column is tolerated as missing so rows edited directly in the
/// database still render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub id: Option<ReportId>,
    #[serde(default, deserialize_with = "text_or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "text_or_none")]
    pub description: Option<String>,
    /// Free text; server values outside [`crate::Category`] are kept as-is.
    #[serde(default, deserialize_with = "text_or_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "numeric_or_none")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "numeric_or_none")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "status_or_none")]
    pub status: Option<ReportStatus>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub created_at: Option<String>,
}

impl Report {
    /// Coordinates when both parts are present and numeric.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.latitude, self.longitude)
    }
}

/// Insert payload for a new report.
///
/// Absent optionals serialize as explicit `null` columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewReport {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub image_url: String,
}

/// Order reports newest first by `created_at`.
///
/// The sort is stable, so ties and unparseable timestamps keep the order the
/// server returned; rows without a readable timestamp go last.
pub fn sort_by_recency(reports: &mut [Report]) {
    reports.sort_by_key(|report| Reverse(report.created_at.as_deref().and_then(parse_timestamp)));
}

fn numeric_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| value.as_f64()).filter(|number| number.is_finite()))
}

fn text_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(text)) => Some(text),
        _ => None,
    })
}

fn text_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(text_or_none(deserializer)?.unwrap_or_default())
}

/// Strings go through [`ReportStatus::parse`]; any other non-null value is
/// kept as its JSON text so it renders with the unknown badge.
fn status_or_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<ReportStatus>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(raw)) => Some(ReportStatus::parse(&raw)),
        Some(other) => Some(ReportStatus::Unrecognized(other.to_string())),
    })
}
