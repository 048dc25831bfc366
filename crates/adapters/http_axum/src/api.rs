//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod campaigns;

use axum::Router;
use axum::extract::OriginalUri;
use axum::routing::get;

use crowdfund_app::ports::CampaignRepository;
use crowdfund_domain::error::{CrowdfundError, NotFoundError};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the `/api` sub-router.
///
/// Unmatched API paths answer with a JSON 404 so they never fall through to
/// the dashboard shell.
pub fn routes<CR>() -> Router<AppState<CR>>
where
    CR: CampaignRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/campaigns", get(campaigns::list::<CR>))
        .route("/campaigns/{id}", get(campaigns::get::<CR>))
        .fallback(unknown_route)
}

async fn unknown_route(OriginalUri(uri): OriginalUri) -> ApiError {
    tracing::debug!(path = %uri.path(), "no api route");
    ApiError::from(CrowdfundError::from(NotFoundError {
        entity: "Route",
        id: uri.path().to_string(),
    }))
}
