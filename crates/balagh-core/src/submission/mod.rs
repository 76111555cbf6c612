//! Submission pipeline: compose a draft, then commit it as a report.
//!
//! Draft state changes go through pure transitions on [`Draft`]; the async
//! drivers in [`composer`] run the capability and backend calls between them.

mod composer;
mod draft;

pub use composer::{
    acquire_location, capture_photo, object_path_for, CaptureOutcome, ReportComposer,
};
pub use draft::{
    Draft, LocateOutcome, Receipt, SubmitDecision, Submission, LOCATION_DENIED_MESSAGE,
    LOCATION_FAILED_MESSAGE, SUBMIT_FALLBACK_MESSAGE, SUCCESS_MESSAGE, SUCCESS_TITLE,
    VALIDATION_MESSAGE,
};
