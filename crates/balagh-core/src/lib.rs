//! balagh-core - Core library for Balagh
//!
//! This crate holds the report model, the status/category presentation
//! mapping, the submission and read pipelines, and the backend/device
//! collaborators used by every Balagh front end.

pub mod config;
pub mod device;
pub mod display;
pub mod error;
pub mod feed;
pub mod models;
pub mod navigation;
pub mod notice;
pub mod store;
pub mod submission;
pub mod util;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Capability, Error, Result};
pub use models::{Category, Coordinates, NewReport, Report, ReportId, ReportStatus};
pub use notice::{Notice, NoticeKind};
