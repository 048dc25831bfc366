//! Campaign: a fundraising project with a monetary goal and a raised total.

mod category;

pub use category::{Category, UnknownCategory};

use serde::{Deserialize, Serialize};

use crate::error::{CrowdfundError, ValidationError};
use crate::funding::{self, CampaignStatus, FundingSnapshot};
use crate::id::{CampaignId, UserId};
use crate::time::Timestamp;

/// Longest title accepted, matching the width of the backend column.
pub const MAX_TITLE_LEN: usize = 80;

/// A fundraising campaign as delivered by a data source.
///
/// Campaigns are read-only from the UI's point of view: they are created by
/// the mock set (or a future API) and never mutated by the views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(rename = "campaign_id")]
    pub id: CampaignId,
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub category: Category,
    /// Image URL or asset path.
    #[serde(default)]
    pub image: Option<String>,
    pub goal_amount: f64,
    #[serde(default)]
    pub raised_amount: f64,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub creator_id: UserId,
}

impl Campaign {
    /// Create a builder for constructing a [`Campaign`].
    #[must_use]
    pub fn builder() -> CampaignBuilder {
        CampaignBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// The end date preceding the start date is tolerated here; see
    /// [`Campaign::has_consistent_dates`].
    ///
    /// # Errors
    ///
    /// Returns [`CrowdfundError::Validation`] when the id or title is empty,
    /// the title is too long, an amount is negative or not finite, or the goal
    /// is zero.
    pub fn validate(&self) -> Result<(), CrowdfundError> {
        if self.id.as_str().trim().is_empty() || self.creator_id.as_str().trim().is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        let title_len = self.title.chars().count();
        if title_len > MAX_TITLE_LEN {
            return Err(ValidationError::TitleTooLong {
                max: MAX_TITLE_LEN,
                actual: title_len,
            }
            .into());
        }
        if !is_non_negative(self.raised_amount) {
            return Err(ValidationError::NegativeAmount {
                field: "raised_amount",
            }
            .into());
        }
        if !is_non_negative(self.goal_amount) {
            return Err(ValidationError::NegativeAmount {
                field: "goal_amount",
            }
            .into());
        }
        if self.goal_amount <= 0.0 {
            return Err(ValidationError::NonPositiveGoal.into());
        }
        Ok(())
    }

    /// Whether the campaign ends after it starts.
    #[must_use]
    pub fn has_consistent_dates(&self) -> bool {
        self.end_date > self.start_date
    }

    /// Funding progress in percent, clamped to `[0, 100]`.
    #[must_use]
    pub fn funding_percentage(&self) -> f64 {
        funding::funding_percentage(self.raised_amount, self.goal_amount)
    }

    /// Whole days left before the campaign ends, never negative.
    #[must_use]
    pub fn days_remaining(&self, now: Timestamp) -> u32 {
        funding::days_remaining(self.end_date, now)
    }

    /// Lifecycle state derived from progress and time left.
    #[must_use]
    pub fn status(&self, now: Timestamp) -> CampaignStatus {
        CampaignStatus::derive(self.funding_percentage(), self.days_remaining(now))
    }

    /// All derived metrics at once, as the detail view needs them.
    #[must_use]
    pub fn snapshot(&self, now: Timestamp) -> FundingSnapshot {
        FundingSnapshot::new(self.raised_amount, self.goal_amount, self.end_date, now)
    }
}

fn is_non_negative(amount: f64) -> bool {
    amount.is_finite() && amount >= 0.0
}

/// Step-by-step builder for [`Campaign`].
#[derive(Debug, Default)]
pub struct CampaignBuilder {
    id: Option<CampaignId>,
    title: Option<String>,
    short_description: Option<String>,
    long_description: Option<String>,
    category: Option<Category>,
    image: Option<String>,
    goal_amount: Option<f64>,
    raised_amount: Option<f64>,
    start_date: Option<Timestamp>,
    end_date: Option<Timestamp>,
    creator_id: Option<UserId>,
}

impl CampaignBuilder {
    #[must_use]
    pub fn id(mut self, id: CampaignId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn short_description(mut self, text: impl Into<String>) -> Self {
        self.short_description = Some(text.into());
        self
    }

    #[must_use]
    pub fn long_description(mut self, text: impl Into<String>) -> Self {
        self.long_description = Some(text.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn goal_amount(mut self, amount: f64) -> Self {
        self.goal_amount = Some(amount);
        self
    }

    #[must_use]
    pub fn raised_amount(mut self, amount: f64) -> Self {
        self.raised_amount = Some(amount);
        self
    }

    #[must_use]
    pub fn start_date(mut self, ts: Timestamp) -> Self {
        self.start_date = Some(ts);
        self
    }

    #[must_use]
    pub fn end_date(mut self, ts: Timestamp) -> Self {
        self.end_date = Some(ts);
        self
    }

    #[must_use]
    pub fn creator_id(mut self, id: UserId) -> Self {
        self.creator_id = Some(id);
        self
    }

    /// Consume the builder, validate, and return a [`Campaign`].
    ///
    /// Missing dates default to "now"; a missing id or creator fails
    /// validation.
    ///
    /// # Errors
    ///
    /// Returns [`CrowdfundError::Validation`] if an invariant fails.
    pub fn build(self) -> Result<Campaign, CrowdfundError> {
        let now = crate::time::now();
        let campaign = Campaign {
            id: self.id.ok_or(ValidationError::EmptyId)?,
            title: self.title.unwrap_or_default(),
            short_description: self.short_description.unwrap_or_default(),
            long_description: self.long_description.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            image: self.image,
            goal_amount: self.goal_amount.unwrap_or_default(),
            raised_amount: self.raised_amount.unwrap_or_default(),
            start_date: self.start_date.unwrap_or(now),
            end_date: self.end_date.unwrap_or(now),
            creator_id: self.creator_id.ok_or(ValidationError::EmptyId)?,
        };
        campaign.validate()?;
        Ok(campaign)
    }
}
