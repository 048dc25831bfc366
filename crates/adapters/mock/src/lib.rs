//! # crowdfund-adapter-mock
//!
//! In-memory campaign data source that stands in for the future backend.
//!
//! The repository is seeded from `seed/campaigns.json`, embedded at compile
//! time, and keeps records in their seed order so listings are stable.
//!
//! ## Dependency rule
//!
//! Depends on `crowdfund-app` (port traits) and `crowdfund-domain` only.

mod error;

use std::future::Future;

use crowdfund_app::ports::CampaignRepository;
use crowdfund_domain::campaign::Campaign;
use crowdfund_domain::error::CrowdfundError;
use crowdfund_domain::id::CampaignId;

pub use error::SeedError;

/// The embedded mock campaign set.
pub const SEED_JSON: &str = include_str!("../seed/campaigns.json");

/// Campaign repository backed by an in-memory list. Records are fixed once
/// seeded.
#[derive(Debug)]
pub struct MockCampaignRepository {
    campaigns: Vec<Campaign>,
}

impl MockCampaignRepository {
    /// Build a repository from the embedded seed set.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the embedded JSON is malformed or a record is
    /// invalid.
    pub fn seeded() -> Result<Self, SeedError> {
        Self::from_json(SEED_JSON)
    }

    /// Build a repository from a JSON array of campaign records.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Parse`] for malformed JSON, [`SeedError::Invalid`]
    /// when a record breaks a campaign invariant, and
    /// [`SeedError::Duplicate`] when two records share an id.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let campaigns: Vec<Campaign> = serde_json::from_str(json)?;
        Self::with_campaigns(campaigns)
    }

    /// Build a repository from already parsed campaigns.
    ///
    /// # Errors
    ///
    /// Same validation as [`MockCampaignRepository::from_json`].
    pub fn with_campaigns(campaigns: Vec<Campaign>) -> Result<Self, SeedError> {
        for (idx, campaign) in campaigns.iter().enumerate() {
            campaign.validate().map_err(|source| SeedError::Invalid {
                id: campaign.id.to_string(),
                source,
            })?;
            if campaigns[..idx].iter().any(|other| other.id == campaign.id) {
                return Err(SeedError::Duplicate(campaign.id.to_string()));
            }
            if !campaign.has_consistent_dates() {
                tracing::warn!(campaign_id = %campaign.id, "seed campaign ends before it starts");
            }
        }
        tracing::debug!(count = campaigns.len(), "mock campaign repository seeded");
        Ok(Self { campaigns })
    }

    /// An empty repository.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            campaigns: Vec::new(),
        }
    }

    /// Number of campaigns held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    /// Whether the repository holds no campaigns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }
}

impl CampaignRepository for MockCampaignRepository {
    fn get_by_id(
        &self,
        id: &CampaignId,
    ) -> impl Future<Output = Result<Option<Campaign>, CrowdfundError>> + Send {
        let found = self.campaigns.iter().find(|c| &c.id == id).cloned();
        async { Ok(found) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Campaign>, CrowdfundError>> + Send {
        let all = self.campaigns.clone();
        async { Ok(all) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crowdfund_domain::campaign::Category;

    fn id(raw: &str) -> CampaignId {
        CampaignId::new(raw).unwrap()
    }

    #[tokio::test]
    async fn should_load_embedded_seed() {
        let repo = MockCampaignRepository::seeded().unwrap();
        assert_eq!(repo.len(), 8);
        let all = repo.get_all().await.unwrap();
        assert_eq!(all[0].id.as_str(), "1");
        assert!(all.iter().all(Campaign::has_consistent_dates));
    }

    #[tokio::test]
    async fn should_find_seed_campaign_by_id() {
        let repo = MockCampaignRepository::seeded().unwrap();
        let found = repo.get_by_id(&id("2")).await.unwrap().unwrap();
        assert_eq!(found.category, Category::Medical);
        assert!((found.goal_amount - 80_000.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_return_none_for_unknown_id() {
        let repo = MockCampaignRepository::seeded().unwrap();
        assert!(repo.get_by_id(&id("404")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_start_empty() {
        let repo = MockCampaignRepository::empty();
        assert!(repo.is_empty());
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[test]
    fn should_reject_malformed_json() {
        let result = MockCampaignRepository::from_json("{ not json");
        assert!(matches!(result, Err(SeedError::Parse(_))));
    }

    #[test]
    fn should_reject_invalid_record() {
        let json = r#"[{
            "campaign_id": "x",
            "title": "Negative",
            "goal_amount": 100,
            "raised_amount": -1,
            "start_date": "2026-01-01T00:00:00Z",
            "end_date": "2026-02-01T00:00:00Z",
            "creator_id": "u"
        }]"#;
        let result = MockCampaignRepository::from_json(json);
        assert!(matches!(result, Err(SeedError::Invalid { ref id, .. }) if id == "x"));
    }

    #[test]
    fn should_reject_duplicate_ids() {
        let record = r#"{
            "campaign_id": "dup",
            "title": "Twice",
            "goal_amount": 100,
            "start_date": "2026-01-01T00:00:00Z",
            "end_date": "2026-02-01T00:00:00Z",
            "creator_id": "u"
        }"#;
        let json = format!("[{record},{record}]");
        let result = MockCampaignRepository::from_json(&json);
        assert!(matches!(result, Err(SeedError::Duplicate(ref id)) if id == "dup"));
    }
}
