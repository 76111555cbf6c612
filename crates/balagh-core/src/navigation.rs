//! Navigation surface: bottom tabs plus a stacked report detail view.

use crate::models::Report;

/// A destination the client can navigate to.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Report,
    List,
    Map,
    /// Detail view carrying the full record it was opened from.
    ReportDetail(Box<Report>),
}

impl Route {
    /// Bottom tabs in display order.
    pub const TABS: [Self; 4] = [Self::Home, Self::Report, Self::List, Self::Map];

    #[must_use]
    pub fn detail(report: &Report) -> Self {
        Self::ReportDetail(Box::new(report.clone()))
    }

    /// Header or tab title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "الرئيسية",
            Self::Report => "إبلاغ",
            Self::List => "البلاغات",
            Self::Map => "الخريطة",
            Self::ReportDetail(_) => "تفاصيل البلاغ",
        }
    }

    #[must_use]
    pub const fn is_tab(&self) -> bool {
        !matches!(self, Self::ReportDetail(_))
    }
}
