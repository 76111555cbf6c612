//! Summary cards for the scrolling report list.

use serde::Serialize;

use crate::display::{category_badge, format_timestamp, status_badge, StatusBadge};
use crate::models::Report;
use crate::navigation::Route;
use crate::util::non_empty;

pub const EMPTY_LIST_MESSAGE: &str = "No reports yet";

#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    /// Nothing to show; render the "no reports yet" state.
    Empty,
    Cards(Vec<ReportCard>),
}

/// One summary card. Optional fields are `None` when there is nothing to show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportCard {
    /// Report id, or the card's position when the row has none.
    pub key: String,
    pub title: String,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub status: StatusBadge,
    pub address: Option<String>,
    pub description: Option<String>,
    pub timestamp: Option<String>,
    /// Where selecting the card leads.
    #[serde(skip)]
    pub route: Route,
}

impl ReportCard {
    #[must_use]
    pub fn new(position: usize, report: &Report) -> Self {
        let key = report
            .id
            .as_ref()
            .map_or_else(|| position.to_string(), ToString::to_string);

        Self {
            key,
            title: report.title.clone(),
            image_url: non_empty(report.image_url.as_deref()),
            category: category_badge(report.category.as_deref()).map(ToString::to_string),
            status: status_badge(report.status.as_ref()),
            address: non_empty(report.address.as_deref()),
            description: non_empty(report.description.as_deref()),
            timestamp: non_empty(report.created_at.as_deref()).map(|raw| format_timestamp(&raw)),
            route: Route::detail(report),
        }
    }
}

#[must_use]
pub fn list_view(reports: &[Report]) -> ListView {
    if reports.is_empty() {
        return ListView::Empty;
    }

    ListView::Cards(
        reports
            .iter()
            .enumerate()
            .map(|(position, report)| ReportCard::new(position, report))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{ReportId, ReportStatus};

    #[test]
    fn empty_collection_renders_empty_state() {
        assert_eq!(list_view(&[]), ListView::Empty);
    }

    #[test]
    fn cards_are_keyed_by_id_or_position() {
        let reports = vec![
            Report {
                id: Some(ReportId::new("17")),
                title: "With id".to_string(),
                ..Report::default()
            },
            Report {
                title: "Without id".to_string(),
                ..Report::default()
            },
        ];

        let ListView::Cards(cards) = list_view(&reports) else {
            panic!("expected cards");
        };
        assert_eq!(cards[0].key, "17");
        assert_eq!(cards[1].key, "1");
    }

    #[test]
    fn card_hides_empty_fields_and_maps_status() {
        let report = Report {
            title: "Overflowing bin".to_string(),
            category: Some(String::new()),
            address: Some(String::new()),
            description: None,
            status: Some(ReportStatus::Unrecognized("ARCHIVED".to_string())),
            created_at: Some("not a date".to_string()),
            ..Report::default()
        };

        let card = ReportCard::new(0, &report);
        assert_eq!(card.category, None);
        assert_eq!(card.address, None);
        assert_eq!(card.description, None);
        assert_eq!(card.status, StatusBadge::UNKNOWN);
        assert_eq!(card.timestamp.as_deref(), Some("not a date"));
        assert_eq!(card.route, Route::detail(&report));
    }

    #[test]
    fn card_shows_category_verbatim() {
        let report = Report {
            title: "Leak".to_string(),
            category: Some("Parks & Gardens".to_string()),
            status: Some(ReportStatus::Resolved),
            ..Report::default()
        };
        let card = ReportCard::new(0, &report);
        assert_eq!(card.category.as_deref(), Some("Parks & Gardens"));
        assert_eq!(card.status, StatusBadge::RESOLVED);
    }
}
