//! Detail view of a single report.

use serde::Serialize;

use crate::display::{category_badge, format_timestamp, status_badge, StatusBadge};
use crate::models::Report;
use crate::util::non_empty;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailSection {
    pub label: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDetail {
    pub title: String,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub status: StatusBadge,
    /// Hidden when empty.
    pub date: Option<String>,
    pub sections: Vec<DetailSection>,
}

#[must_use]
pub fn report_detail(report: &Report) -> ReportDetail {
    let date = format_timestamp(report.created_at.as_deref().unwrap_or_default());

    let mut sections = Vec::new();
    if let Some(address) = non_empty(report.address.as_deref()) {
        sections.push(DetailSection {
            label: "Location",
            text: format!("📍 {address}"),
        });
    }
    if let Some(description) = non_empty(report.description.as_deref()) {
        sections.push(DetailSection {
            label: "Description",
            text: description,
        });
    }

    ReportDetail {
        title: report.title.clone(),
        image_url: non_empty(report.image_url.as_deref()),
        category: category_badge(report.category.as_deref()).map(ToString::to_string),
        status: status_badge(report.status.as_ref()),
        date: non_empty(Some(date.as_str())),
        sections,
    }
}
