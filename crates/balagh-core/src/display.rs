//! Presentation mapping shared by report cards and the detail view.
//!
//! Everything here is pure: status badges, category badges, and timestamp
//! rendering never fail and never return an unstyled value.

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;

use crate::models::ReportStatus;

const DISPLAY_FORMAT: &str = "%-d/%-m/%Y, %H:%M:%S";

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Background color and localized label for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub color: &'static str,
    pub label: &'static str,
}

impl StatusBadge {
    pub const PENDING: Self = Self {
        color: "#FFF4E5",
        label: "قيد الانتظار",
    };
    pub const IN_PROGRESS: Self = Self {
        color: "#E5F2FF",
        label: "جاري الإصلاح",
    };
    pub const RESOLVED: Self = Self {
        color: "#E3F8E6",
        label: "تم الحل",
    };
    pub const REJECTED: Self = Self {
        color: "#FDE8E8",
        label: "مرفوض",
    };
    pub const UNKNOWN: Self = Self {
        color: "#E7EAF0",
        label: "غير معروف",
    };
}

/// Badge for a status; absent and unrecognized values get [`StatusBadge::UNKNOWN`].
#[must_use]
pub fn status_badge(status: Option<&ReportStatus>) -> StatusBadge {
    match status {
        Some(ReportStatus::Pending) => StatusBadge::PENDING,
        Some(ReportStatus::InProgress) => StatusBadge::IN_PROGRESS,
        Some(ReportStatus::Resolved) => StatusBadge::RESOLVED,
        Some(ReportStatus::Rejected) => StatusBadge::REJECTED,
        Some(ReportStatus::Unrecognized(_)) | None => StatusBadge::UNKNOWN,
    }
}

/// Badge for a raw status string as it comes off the wire.
#[must_use]
pub fn raw_status_badge(raw: Option<&str>) -> StatusBadge {
    status_badge(raw.map(ReportStatus::parse).as_ref())
}

/// Category badge text, shown verbatim when present.
#[must_use]
pub fn category_badge(category: Option<&str>) -> Option<&str> {
    category.filter(|value| !value.is_empty())
}

/// Parse a stored timestamp, reading offset-less date-times as local time.
///
/// Accepts RFC 3339, Postgres-style offsets (`+00`), naive date-times and
/// bare dates (UTC midnight).
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    parse_timestamp_in(value, &Local)
}

/// Like [`parse_timestamp`], with naive date-times read as wall-clock time in
/// `zone`. Bare dates are always UTC midnight.
#[must_use]
pub fn parse_timestamp_in<Tz: TimeZone>(value: &str, zone: &Tz) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(value, format) {
            return Some(parsed.with_timezone(&Utc));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return zone
                .from_local_datetime(&parsed)
                .earliest()
                .map(|local| local.with_timezone(&Utc));
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|parsed| parsed.and_utc())
}

/// Render a stored timestamp in the local time zone.
///
/// Unparseable input is returned unchanged.
#[must_use]
pub fn format_timestamp(value: &str) -> String {
    format_timestamp_in(value, &Local)
}

/// Render a stored timestamp in the given time zone.
#[must_use]
pub fn format_timestamp_in<Tz>(value: &str, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    parse_timestamp_in(value, zone).map_or_else(
        || value.to_string(),
        |parsed| {
            parsed
                .with_timezone(zone)
                .format(DISPLAY_FORMAT)
                .to_string()
        },
    )
}
