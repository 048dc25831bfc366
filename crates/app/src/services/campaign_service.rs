//! Campaign service: use-cases behind the listing and detail views.

use crowdfund_domain::campaign::Campaign;
use crowdfund_domain::error::{CrowdfundError, NotFoundError};
use crowdfund_domain::id::CampaignId;
use crowdfund_domain::query::CampaignQuery;
use crowdfund_domain::time::Timestamp;

use crate::ports::CampaignRepository;

/// Application service for reading campaigns.
pub struct CampaignService<R> {
    repo: R,
}

impl<R: CampaignRepository> CampaignService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up a campaign by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CrowdfundError::NotFound`] when no campaign with `id` exists,
    /// or an error propagated from the repository.
    #[tracing::instrument(skip(self, id), fields(campaign_id = %id))]
    pub async fn get_campaign(&self, id: &CampaignId) -> Result<Campaign, CrowdfundError> {
        let found = self.repo.get_by_id(id).await?;
        found.ok_or_else(|| {
            tracing::debug!("campaign not found");
            NotFoundError {
                entity: "Campaign",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Look up a campaign from a raw route parameter.
    ///
    /// A blank parameter cannot name any campaign, so it is reported as not
    /// found rather than as a validation failure.
    ///
    /// # Errors
    ///
    /// Returns [`CrowdfundError::NotFound`] for blank or unknown ids.
    pub async fn get_campaign_by_param(&self, raw: &str) -> Result<Campaign, CrowdfundError> {
        match CampaignId::new(raw) {
            Ok(id) => self.get_campaign(&id).await,
            Err(_) => Err(NotFoundError {
                entity: "Campaign",
                id: raw.to_string(),
            }
            .into()),
        }
    }

    /// List campaigns matching `query`, evaluated at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the repository.
    #[tracing::instrument(skip(self, now))]
    pub async fn query_campaigns(
        &self,
        query: &CampaignQuery,
        now: Timestamp,
    ) -> Result<Vec<Campaign>, CrowdfundError> {
        let all = self.repo.get_all().await?;
        let total = all.len();
        let result = query.apply(all, now);
        tracing::debug!(total, matched = result.len(), "campaign query evaluated");
        Ok(result)
    }

    /// The first `limit` campaigns, for the home page.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the repository.
    pub async fn featured_campaigns(&self, limit: usize) -> Result<Vec<Campaign>, CrowdfundError> {
        let mut all = self.repo.get_all().await?;
        all.truncate(limit);
        Ok(all)
    }
}
