//! Read pipeline: fetch the report collection and adapt it for the list,
//! map, and detail views.

mod detail;
mod list;
mod map;

pub use detail::{report_detail, DetailSection, ReportDetail};
pub use list::{list_view, ListView, ReportCard, EMPTY_LIST_MESSAGE};
pub use map::{map_markers, MapMarker, MapRegion, INITIAL_REGION};

use crate::models::{sort_by_recency, Report};
use crate::notice::Notice;
use crate::store::RecordStore;
use crate::{Error, Result};

/// Which screen a fetch feeds; only the fallback error text differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedView {
    List,
    Map,
}

impl FeedView {
    #[must_use]
    pub const fn fetch_fallback(self) -> &'static str {
        match self {
            Self::List => "Failed to load reports",
            Self::Map => "Failed to load reports for map",
        }
    }
}

/// Per-screen copy of the report collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    view: FeedView,
    reports: Vec<Report>,
    loading: bool,
    refreshing: bool,
}

impl FeedState {
    /// State of a freshly mounted screen, before the first fetch lands.
    #[must_use]
    pub const fn mounting(view: FeedView) -> Self {
        Self {
            view,
            reports: Vec::new(),
            loading: true,
            refreshing: false,
        }
    }

    #[must_use]
    pub fn begin_refresh(mut self) -> Self {
        self.refreshing = true;
        self
    }

    /// Apply a fetch result. A failure keeps the previous collection.
    #[must_use]
    pub fn apply(mut self, result: Result<Vec<Report>>) -> (Self, Option<Notice>) {
        self.loading = false;
        self.refreshing = false;
        match result {
            Ok(reports) => {
                self.reports = reports;
                (self, None)
            }
            Err(error) => {
                let message = error.user_message(self.view.fetch_fallback());
                (self, Some(Notice::error(message)))
            }
        }
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub const fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn list_view(&self) -> ListView {
        list_view(&self.reports)
    }

    pub fn map_markers(&self) -> Vec<MapMarker> {
        map_markers(&self.reports)
    }
}

/// Fetches the full collection from the record store.
pub struct ReportFeed<'a> {
    records: &'a dyn RecordStore,
}

impl<'a> ReportFeed<'a> {
    pub fn new(records: &'a dyn RecordStore) -> Self {
        Self { records }
    }

    /// All reports, newest first.
    pub async fn fetch(&self) -> Result<Vec<Report>> {
        let mut reports = self.records.select_recent().await.map_err(|error| {
            tracing::error!("Fetch reports error: {}", error);
            Error::Fetch(error.detail())
        })?;
        sort_by_recency(&mut reports);
        tracing::debug!(count = reports.len(), "Fetched reports");
        Ok(reports)
    }

    /// Initial load for a mounted screen.
    pub async fn load(&self, state: FeedState) -> (FeedState, Option<Notice>) {
        state.apply(self.fetch().await)
    }

    /// User-initiated pull to refresh.
    pub async fn refresh(&self, state: FeedState) -> (FeedState, Option<Notice>) {
        let state = state.begin_refresh();
        state.apply(self.fetch().await)
    }
}
