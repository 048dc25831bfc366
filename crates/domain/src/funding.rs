//! Funding metrics derived from a campaign's amounts and dates.

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Percentage of `goal` covered by `raised`, clamped to `[0, 100]`.
///
/// A zero (or otherwise unusable) goal yields `0`.
#[must_use]
pub fn funding_percentage(raised: f64, goal: f64) -> f64 {
    if !goal.is_finite() || goal <= 0.0 || !raised.is_finite() {
        return 0.0;
    }
    (raised / goal * 100.0).clamp(0.0, 100.0)
}

/// Percentage rounded to a whole number for labels and card footers.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rounded_percentage(percentage: f64) -> u8 {
    // clamped to [0, 100] so the cast is lossless
    percentage.clamp(0.0, 100.0).round() as u8
}

/// Whole days between `now` and `end`, rounded up and never negative.
#[must_use]
pub fn days_remaining(end: Timestamp, now: Timestamp) -> u32 {
    let millis = (end - now).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    let days = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Where a campaign stands, derived from progress and time left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    /// Still collecting donations.
    Active,
    /// Reached its goal. Takes precedence over [`CampaignStatus::Ended`].
    Funded,
    /// Out of time without reaching the goal.
    Ended,
}

impl CampaignStatus {
    /// Derive the status from a funding percentage and the days remaining.
    #[must_use]
    pub fn derive(percentage: f64, days_remaining: u32) -> Self {
        if percentage >= 100.0 {
            Self::Funded
        } else if days_remaining == 0 {
            Self::Ended
        } else {
            Self::Active
        }
    }

    /// Whether donations are accepted.
    #[must_use]
    pub fn accepts_donations(self) -> bool {
        self == Self::Active
    }

    /// URL/query slug.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Funded => "funded",
            Self::Ended => "ended",
        }
    }

    /// Parse a query slug, case-insensitively.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        [Self::Active, Self::Funded, Self::Ended]
            .into_iter()
            .find(|s| s.slug().eq_ignore_ascii_case(slug.trim()))
    }
}

/// Every derived number the campaign detail view renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundingSnapshot {
    pub raised: f64,
    pub goal: f64,
    pub percentage: f64,
    pub days_remaining: u32,
    pub status: CampaignStatus,
}

impl FundingSnapshot {
    #[must_use]
    pub fn new(raised: f64, goal: f64, end: Timestamp, now: Timestamp) -> Self {
        let percentage = funding_percentage(raised, goal);
        let days_remaining = days_remaining(end, now);
        Self {
            raised,
            goal,
            percentage,
            days_remaining,
            status: CampaignStatus::derive(percentage, days_remaining),
        }
    }

    /// Percentage rounded for display.
    #[must_use]
    pub fn percentage_label(&self) -> u8 {
        rounded_percentage(self.percentage)
    }
}
