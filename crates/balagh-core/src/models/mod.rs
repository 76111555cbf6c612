//! Data models for Balagh

mod category;
mod location;
mod report;
mod status;

pub use category::Category;
pub use location::{format_address, AddressCandidate, Coordinates, ADDRESS_PLACEHOLDER};
pub use report::{sort_by_recency, NewReport, Report, ReportId};
pub use status::ReportStatus;
