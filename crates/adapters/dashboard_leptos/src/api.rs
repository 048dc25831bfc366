//! HTTP API client wrapping `gloo-net` for calls to crowdfundd's `/api/*`.

use gloo_net::http::{Request, Response};
use serde::Deserialize;

use crowdfund_domain::campaign::Campaign;
use crowdfund_domain::error::CrowdfundError;
use crowdfund_domain::query::CampaignQuery;

/// Error returned by data-source calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    /// Whether the requested record does not exist.
    pub not_found: bool,
}

impl ApiError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            not_found: false,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<CrowdfundError> for ApiError {
    fn from(err: CrowdfundError) -> Self {
        Self {
            not_found: matches!(err, CrowdfundError::NotFound(_)),
            message: err.to_string(),
        }
    }
}

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {status}"),
    };
    Err(ApiError {
        message,
        not_found: status == 404,
    })
}

/// Percent-encode a query value or a single path segment. Everything outside
/// the unreserved set is escaped, `/` included.
pub(crate) fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Render `pairs` as a `?a=b&c=d` suffix, or nothing when empty.
pub(crate) fn query_string(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let joined = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", encode_component(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{joined}")
}

/// Client for the campaign endpoints under `api_base`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn campaign_url(&self, id: &str) -> String {
        format!("{}/campaigns/{}", self.base, encode_component(id))
    }

    fn campaigns_url(&self, query: &CampaignQuery) -> String {
        format!("{}/campaigns{}", self.base, query_string(&query.to_pairs()))
    }

    /// Fetch a single campaign. A 404 yields an error with `not_found` set.
    pub async fn fetch_campaign(&self, id: &str) -> Result<Campaign, ApiError> {
        let resp = check_response(Request::get(&self.campaign_url(id)).send().await?).await?;
        let campaign: Campaign = resp.json().await?;
        Ok(campaign)
    }

    /// Fetch the campaigns matching `query`.
    pub async fn fetch_campaigns(&self, query: &CampaignQuery) -> Result<Vec<Campaign>, ApiError> {
        let resp = check_response(Request::get(&self.campaigns_url(query)).send().await?).await?;
        let campaigns: Vec<Campaign> = resp.json().await?;
        Ok(campaigns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crowdfund_domain::campaign::Category;
    use crowdfund_domain::error::NotFoundError;

    #[test]
    fn should_encode_reserved_characters() {
        assert_eq!(encode_component("a&b=c d"), "a%26b%3Dc%20d");
        assert_eq!(encode_component("100%"), "100%25");
    }

    #[test]
    fn should_keep_slashes_inside_one_path_segment() {
        let client = ApiClient::new("/api");
        assert_eq!(client.campaign_url("a/b"), "/api/campaigns/a%2Fb");
        assert_eq!(client.campaign_url("../health"), "/api/campaigns/..%2Fhealth");
    }

    #[test]
    fn should_build_campaign_url() {
        let client = ApiClient::new("/api");
        assert_eq!(client.campaign_url("7"), "/api/campaigns/7");
    }

    #[test]
    fn should_build_listing_url_with_filters() {
        let client = ApiClient::new("http://localhost:3000/api");
        let query = CampaignQuery {
            category: Some(Category::Art),
            search: Some("mural wall".to_string()),
            ..CampaignQuery::default()
        };
        assert_eq!(
            client.campaigns_url(&query),
            "http://localhost:3000/api/campaigns?category=art&q=mural%20wall"
        );
        assert_eq!(
            client.campaigns_url(&CampaignQuery::default()),
            "http://localhost:3000/api/campaigns"
        );
    }

    #[test]
    fn should_flag_not_found_errors() {
        let err: ApiError = CrowdfundError::from(NotFoundError {
            entity: "Campaign",
            id: "9".to_string(),
        })
        .into();
        assert!(err.not_found);
        assert_eq!(err.to_string(), "Campaign not found: 9");
    }
}
