//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crowdfund_app::ports::CampaignRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the API under `/api`. When `assets_dir` is given, every other path
/// is served from the compiled dashboard with an `index.html` fallback.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<CR>(state: AppState<CR>, assets_dir: Option<&Path>) -> Router
where
    CR: CampaignRepository + Send + Sync + 'static,
{
    let router = Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes());

    let router = match assets_dir {
        Some(dir) => router.fallback_service(crate::assets::spa_service(dir)),
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{Duration, Utc};
    use crowdfund_app::services::campaign_service::CampaignService;
    use crowdfund_domain::campaign::{Campaign, Category};
    use crowdfund_domain::error::CrowdfundError;
    use crowdfund_domain::id::{CampaignId, UserId};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    struct StubCampaignRepo {
        campaigns: Vec<Campaign>,
    }

    impl CampaignRepository for StubCampaignRepo {
        async fn get_by_id(&self, id: &CampaignId) -> Result<Option<Campaign>, CrowdfundError> {
            Ok(self.campaigns.iter().find(|c| &c.id == id).cloned())
        }
        async fn get_all(&self) -> Result<Vec<Campaign>, CrowdfundError> {
            Ok(self.campaigns.clone())
        }
    }

    fn campaign(id: &str, title: &str, category: Category) -> Campaign {
        let now = Utc::now();
        Campaign::builder()
            .id(CampaignId::new(id).unwrap())
            .creator_id(UserId::new("creator").unwrap())
            .title(title)
            .category(category)
            .goal_amount(1_000.0)
            .raised_amount(400.0)
            .start_date(now - Duration::days(5))
            .end_date(now + Duration::days(5))
            .build()
            .unwrap()
    }

    fn app() -> Router {
        let repo = StubCampaignRepo {
            campaigns: vec![
                campaign("1", "Smart Eco Bottle", Category::Technology),
                campaign("2", "Rural Health Van", Category::Health),
            ],
        };
        build(AppState::new(CampaignService::new(repo)), None)
    }

    async fn get(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn should_list_campaigns_as_json() {
        let (status, body) = get("/api/campaigns").await;
        assert_eq!(status, StatusCode::OK);
        let list: Vec<Campaign> = serde_json::from_str(&body).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[tokio::test]
    async fn should_filter_campaigns_by_query() {
        let (status, body) = get("/api/campaigns?category=health&status=active").await;
        assert_eq!(status, StatusCode::OK);
        let list: Vec<Campaign> = serde_json::from_str(&body).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title, "Rural Health Van");
    }

    #[tokio::test]
    async fn should_return_campaign_by_id() {
        let (status, body) = get("/api/campaigns/1").await;
        assert_eq!(status, StatusCode::OK);
        let campaign: Campaign = serde_json::from_str(&body).unwrap();
        assert_eq!(campaign.title, "Smart Eco Bottle");
        assert!(body.contains("\"campaign_id\":\"1\""));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_campaign() {
        let (status, body) = get("/api/campaigns/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "Campaign not found: 999");
    }

    #[tokio::test]
    async fn should_answer_unknown_api_paths_with_json_not_found() {
        let (status, body) = get("/api/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "Route not found: /api/nope");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unrouted_path_without_assets() {
        let (status, _) = get("/campaigns/1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
