//! JSON handlers for campaigns.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};

use crowdfund_app::ports::CampaignRepository;
use crowdfund_domain::campaign::Campaign;
use crowdfund_domain::query::CampaignQuery;
use crowdfund_domain::time::now;

use crate::error::ApiError;
use crate::state::AppState;

/// Upper bound on `per_page` accepted from clients.
pub const MAX_PER_PAGE: usize = 100;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Campaign>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Campaign>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/campaigns?category=&q=&status=&page=&per_page=`
pub async fn list<CR>(
    State(state): State<AppState<CR>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<ListResponse, ApiError>
where
    CR: CampaignRepository + Send + Sync + 'static,
{
    let mut query = CampaignQuery::from_pairs(params);
    query.per_page = query.per_page.map(|n| n.min(MAX_PER_PAGE));
    let campaigns = state.campaign_service.query_campaigns(&query, now()).await?;
    Ok(ListResponse::Ok(Json(campaigns)))
}

/// `GET /api/campaigns/{id}`
pub async fn get<CR>(
    State(state): State<AppState<CR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    CR: CampaignRepository + Send + Sync + 'static,
{
    let campaign = state.campaign_service.get_campaign_by_param(&id).await?;
    Ok(GetResponse::Ok(Json(campaign)))
}
