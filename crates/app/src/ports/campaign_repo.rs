//! Campaign repository port: where campaign records come from.

use std::future::Future;

use crowdfund_domain::campaign::Campaign;
use crowdfund_domain::error::CrowdfundError;
use crowdfund_domain::id::CampaignId;

/// Read-only source of [`Campaign`] records.
///
/// The UI never mutates campaigns, so the port only exposes lookups.
pub trait CampaignRepository {
    /// Get a campaign by its identifier.
    fn get_by_id(
        &self,
        id: &CampaignId,
    ) -> impl Future<Output = Result<Option<Campaign>, CrowdfundError>> + Send;

    /// Get all campaigns, in the source's order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Campaign>, CrowdfundError>> + Send;
}
