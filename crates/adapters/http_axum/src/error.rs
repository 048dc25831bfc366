//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crowdfund_domain::error::CrowdfundError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`CrowdfundError`] to an HTTP response with appropriate status code.
pub struct ApiError(CrowdfundError);

impl From<CrowdfundError> for ApiError {
    fn from(err: CrowdfundError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CrowdfundError::Validation(err) => {
                tracing::debug!(error = %err, "rejected request");
                StatusCode::BAD_REQUEST
            }
            CrowdfundError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
