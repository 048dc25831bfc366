//! The campaign data source the pages read from, selected by configuration.

use std::sync::Arc;

use crowdfund_adapter_mock::MockCampaignRepository;
use crowdfund_app::services::campaign_service::CampaignService;
use crowdfund_domain::campaign::Campaign;
use crowdfund_domain::query::CampaignQuery;
use crowdfund_domain::time;
use leptos::prelude::*;

use crate::api::{ApiClient, ApiError};
use crate::config::{DashboardConfig, DataSourceKind};

/// Either the in-process mock set or the crowdfundd API.
#[derive(Clone)]
pub enum CampaignSource {
    Mock(Arc<CampaignService<MockCampaignRepository>>),
    Http(ApiClient),
}

impl CampaignSource {
    /// Build the source named by `config`.
    ///
    /// A mock set that fails to load is logged and replaced by an empty one,
    /// so pages still render their empty states.
    pub fn from_config(config: &DashboardConfig) -> Self {
        match config.data_source {
            DataSourceKind::Mock => {
                let repo = MockCampaignRepository::seeded().unwrap_or_else(|err| {
                    leptos::logging::error!("failed to load mock campaigns: {err}");
                    MockCampaignRepository::empty()
                });
                Self::mock(repo)
            }
            DataSourceKind::Http => Self::Http(ApiClient::new(config.api_base.clone())),
        }
    }

    pub fn mock(repo: MockCampaignRepository) -> Self {
        Self::Mock(Arc::new(CampaignService::new(repo)))
    }

    /// Look up the campaign named by a route parameter.
    pub async fn campaign(&self, id: &str) -> Result<Campaign, ApiError> {
        match self {
            Self::Mock(service) => Ok(service.get_campaign_by_param(id).await?),
            Self::Http(client) => {
                if id.trim().is_empty() {
                    return Err(ApiError {
                        message: format!("Campaign not found: {id}"),
                        not_found: true,
                    });
                }
                client.fetch_campaign(id).await
            }
        }
    }

    /// Campaigns matching `query`, evaluated now.
    pub async fn campaigns(&self, query: &CampaignQuery) -> Result<Vec<Campaign>, ApiError> {
        match self {
            Self::Mock(service) => Ok(service.query_campaigns(query, time::now()).await?),
            Self::Http(client) => client.fetch_campaigns(query).await,
        }
    }

    /// The first `limit` campaigns.
    pub async fn featured(&self, limit: usize) -> Result<Vec<Campaign>, ApiError> {
        match self {
            Self::Mock(service) => Ok(service.featured_campaigns(limit).await?),
            Self::Http(client) => {
                let query = CampaignQuery {
                    page: Some(1),
                    per_page: Some(limit.max(1)),
                    ..CampaignQuery::default()
                };
                let mut campaigns = client.fetch_campaigns(&query).await?;
                campaigns.truncate(limit);
                Ok(campaigns)
            }
        }
    }
}

/// The data source provided at the root of the app.
///
/// Falls back to the seeded mock set outside of `<App/>`.
pub fn use_campaign_source() -> CampaignSource {
    use_context::<CampaignSource>()
        .unwrap_or_else(|| CampaignSource::from_config(&DashboardConfig::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crowdfund_domain::campaign::Category;

    fn seeded() -> CampaignSource {
        CampaignSource::from_config(&DashboardConfig::default())
    }

    #[tokio::test]
    async fn should_resolve_known_campaign_from_mock() {
        let campaign = seeded().campaign("1").await.unwrap();
        assert_eq!(campaign.title, "Clean Water for Rural Schools");
        assert!((campaign.goal_amount - 40_000.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_report_unknown_campaign_as_not_found() {
        let err = seeded().campaign("999").await.unwrap_err();
        assert!(err.not_found);
        assert_eq!(err.message, "Campaign not found: 999");
    }

    #[tokio::test]
    async fn should_report_blank_id_as_not_found() {
        let err = seeded().campaign(" ").await.unwrap_err();
        assert!(err.not_found);
    }

    #[tokio::test]
    async fn should_filter_mock_campaigns() {
        let query = CampaignQuery {
            category: Some(Category::Medical),
            ..CampaignQuery::default()
        };
        let found = seeded().campaigns(&query).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_str(), "2");
    }

    #[tokio::test]
    async fn should_limit_featured_mock_campaigns() {
        let featured = seeded().featured(3).await.unwrap();
        assert_eq!(featured.len(), 3);
    }

    #[tokio::test]
    async fn should_serve_nothing_from_empty_mock() {
        let source = CampaignSource::mock(MockCampaignRepository::empty());
        assert!(source.campaigns(&CampaignQuery::default()).await.unwrap().is_empty());
        assert!(source.campaign("1").await.unwrap_err().not_found);
    }
}
