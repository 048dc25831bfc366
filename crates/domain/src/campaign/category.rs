//! Campaign categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The theme a campaign is filed under.
///
/// Serialized lower-case. Categories the UI does not know about fall back to
/// [`Category::Personal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Art,
    Education,
    Health,
    Environment,
    Community,
    Charity,
    Medical,
    Emergency,
    #[default]
    #[serde(other)]
    Personal,
}

impl Category {
    /// Every category, in the order the navigation lists them.
    pub const ALL: [Category; 10] = [
        Category::Technology,
        Category::Art,
        Category::Education,
        Category::Health,
        Category::Environment,
        Category::Community,
        Category::Charity,
        Category::Medical,
        Category::Emergency,
        Category::Personal,
    ];

    /// URL slug, identical to the serialized form.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Art => "art",
            Self::Education => "education",
            Self::Health => "health",
            Self::Environment => "environment",
            Self::Community => "community",
            Self::Charity => "charity",
            Self::Medical => "medical",
            Self::Emergency => "emergency",
            Self::Personal => "personal",
        }
    }

    /// Human readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Art => "Art",
            Self::Education => "Education",
            Self::Health => "Health",
            Self::Environment => "Environment",
            Self::Community => "Community",
            Self::Charity => "Charity",
            Self::Medical => "Medical",
            Self::Emergency => "Emergency",
            Self::Personal => "Personal",
        }
    }

    /// Badge style key. Only a handful of categories have their own colour;
    /// the rest share the `personal` badge.
    #[must_use]
    pub fn badge_style(self) -> &'static str {
        match self {
            Self::Charity => "badge-charity",
            Self::Medical => "badge-medical",
            Self::Education => "badge-education",
            Self::Emergency => "badge-emergency",
            _ => "badge-personal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string does not name a known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
