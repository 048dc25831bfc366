//! Shared application state for axum handlers.

use std::sync::Arc;

use crowdfund_app::ports::CampaignRepository;
use crowdfund_app::services::campaign_service::CampaignService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so `CR` itself does not need to be `Clone`.
pub struct AppState<CR> {
    /// Campaign read service.
    pub campaign_service: Arc<CampaignService<CR>>,
}

impl<CR> Clone for AppState<CR> {
    fn clone(&self) -> Self {
        Self {
            campaign_service: Arc::clone(&self.campaign_service),
        }
    }
}

impl<CR> AppState<CR>
where
    CR: CampaignRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(campaign_service: CampaignService<CR>) -> Self {
        Self {
            campaign_service: Arc::new(campaign_service),
        }
    }

    /// Create a new application state from a pre-wrapped service.
    pub fn from_arc(campaign_service: Arc<CampaignService<CR>>) -> Self {
        Self { campaign_service }
    }
}
