//! Draft state and its transitions.

use crate::device::PhotoRef;
use crate::models::{Category, Coordinates, NewReport, ReportId};
use crate::notice::Notice;
use crate::util::normalize_text_option;
use crate::{Error, Result};

pub const VALIDATION_MESSAGE: &str = "Please fill the title and take a photo";
pub const SUCCESS_TITLE: &str = "Success";
pub const SUCCESS_MESSAGE: &str = "Report sent to City Hall!";
pub const SUBMIT_FALLBACK_MESSAGE: &str = "Something went wrong while sending the report";
pub const LOCATION_DENIED_MESSAGE: &str = "Permission to access location was denied";
pub const LOCATION_FAILED_MESSAGE: &str = "Failed to get location";

/// In-progress composition of a report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    title: String,
    description: String,
    category: Category,
    photo: Option<PhotoRef>,
    location: Option<Coordinates>,
    address: Option<String>,
    locating: bool,
    submitting: bool,
    location_error: Option<String>,
}

/// What `begin_submit` decided.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitDecision {
    /// A submission is already in flight; nothing happens.
    Ignored,
    /// Local validation failed; nothing was sent.
    Rejected(Notice),
    /// Validated snapshot ready to commit.
    Proceed(Submission),
}

/// Validated snapshot of a draft, taken when a submission starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub photo: PhotoRef,
    pub location: Option<Coordinates>,
    pub address: Option<String>,
}

impl Submission {
    /// Insert payload once the photo's public address is known.
    #[must_use]
    pub fn to_new_report(&self, image_url: String) -> NewReport {
        NewReport {
            title: self.title.clone(),
            description: self.description.clone(),
            category: Some(self.category.label().to_string()),
            latitude: self.location.map(|location| location.latitude),
            longitude: self.location.map(|location| location.longitude),
            address: self.address.clone(),
            image_url,
        }
    }
}

/// Result of a fully committed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub report_id: Option<ReportId>,
    pub object_path: String,
    pub image_url: String,
}

/// Result of one location attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum LocateOutcome {
    Located {
        coordinates: Coordinates,
        address: String,
    },
    PermissionDenied,
    /// The position may already have been read before a later step failed.
    Failed { coordinates: Option<Coordinates> },
}

impl Draft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_photo(mut self, photo: PhotoRef) -> Self {
        self.photo = Some(photo);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    pub const fn photo(&self) -> Option<&PhotoRef> {
        self.photo.as_ref()
    }

    pub const fn location(&self) -> Option<Coordinates> {
        self.location
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub const fn is_locating(&self) -> bool {
        self.locating
    }

    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn location_error(&self) -> Option<&str> {
        self.location_error.as_deref()
    }

    /// Start a location attempt: clears the previous address and error.
    #[must_use]
    pub fn begin_locating(mut self) -> Self {
        self.locating = true;
        self.location_error = None;
        self.address = None;
        self
    }

    /// Record a location attempt. `locating` is cleared on every outcome.
    #[must_use]
    pub fn finish_locating(mut self, outcome: LocateOutcome) -> Self {
        self.locating = false;
        match outcome {
            LocateOutcome::Located {
                coordinates,
                address,
            } => {
                self.location = Some(coordinates);
                self.address = Some(address);
            }
            LocateOutcome::PermissionDenied => {
                self.location_error = Some(LOCATION_DENIED_MESSAGE.to_string());
            }
            LocateOutcome::Failed { coordinates } => {
                if coordinates.is_some() {
                    self.location = coordinates;
                }
                self.location_error = Some(LOCATION_FAILED_MESSAGE.to_string());
            }
        }
        self
    }

    /// Guard, validate, and snapshot the draft for commit.
    ///
    /// Only a `Proceed` decision marks the draft as submitting.
    #[must_use]
    pub fn begin_submit(mut self) -> (Self, SubmitDecision) {
        if self.submitting {
            return (self, SubmitDecision::Ignored);
        }

        let title = self.title.trim().to_string();
        let Some(photo) = self.photo.clone().filter(|_| !title.is_empty()) else {
            return (
                self,
                SubmitDecision::Rejected(Notice::validation(VALIDATION_MESSAGE)),
            );
        };

        let submission = Submission {
            title,
            description: normalize_text_option(Some(self.description.clone())),
            category: self.category,
            photo,
            location: self.location,
            address: self.address.clone(),
        };
        self.submitting = true;
        (self, SubmitDecision::Proceed(submission))
    }

    /// Apply a commit result. `submitting` is cleared on every outcome.
    ///
    /// Success clears title, description and photo; category, location and
    /// address are kept for a follow-up report. Failure keeps every field.
    #[must_use]
    pub fn finish_submit(mut self, outcome: &Result<Receipt>) -> (Self, Notice) {
        self.submitting = false;
        match outcome {
            Ok(_) => {
                self.title.clear();
                self.description.clear();
                self.photo = None;
                (self, Notice::success(SUCCESS_TITLE, SUCCESS_MESSAGE))
            }
            Err(error) => (self, failure_notice(error)),
        }
    }
}

fn failure_notice(error: &Error) -> Notice {
    Notice::error(error.user_message(SUBMIT_FALLBACK_MESSAGE))
}
