//! Fixed report categories offered during composition

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category chips offered on the report form, in display order.
///
/// Stored reports keep the category as free text; this enum only governs what
/// a new report can be tagged with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Roads,
    Lighting,
    Cleanliness,
    Water,
    Other,
}

impl Category {
    /// All selectable categories in chip order.
    pub const ALL: [Self; 5] = [
        Self::Roads,
        Self::Lighting,
        Self::Cleanliness,
        Self::Water,
        Self::Other,
    ];

    /// Label stored in the `category` column and shown on badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Roads => "طرق",
            Self::Lighting => "إنارة",
            Self::Cleanliness => "نظافة",
            Self::Water => "مياه",
            Self::Other => "أخرى",
        }
    }

    /// ASCII identifier accepted on the command line.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Roads => "roads",
            Self::Lighting => "lighting",
            Self::Cleanliness => "cleanliness",
            Self::Water => "water",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| {
                category.label() == value || category.slug().eq_ignore_ascii_case(value)
            })
            .ok_or_else(|| {
                let options = Self::ALL
                    .iter()
                    .map(|category| format!("{} ({})", category.slug(), category.label()))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Unknown category '{value}'. Expected one of: {options}")
            })
    }
}
