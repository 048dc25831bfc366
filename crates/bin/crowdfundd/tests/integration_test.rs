//! End-to-end smoke tests for the full crowdfundd stack.
//!
//! Each test wires the seeded mock repository, the real campaign service and
//! the real axum router, then drives the HTTP layer via
//! `tower::ServiceExt::oneshot`, so no TCP port is bound.

use std::path::Path;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use crowdfund_adapter_http_axum::router;
use crowdfund_adapter_http_axum::state::AppState;
use crowdfund_adapter_mock::MockCampaignRepository;
use crowdfund_app::services::campaign_service::CampaignService;
use serde_json::Value;
use tower::ServiceExt;

fn app_with_assets(assets: Option<&Path>) -> axum::Router {
    let repo = MockCampaignRepository::seeded().expect("embedded seed set should be valid");
    router::build(AppState::new(CampaignService::new(repo)), assets)
}

fn app() -> axum::Router {
    app_with_assets(None)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, body)
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app(), uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn ids(list: &Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|c| c["campaign_id"].as_str().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

// ---------------------------------------------------------------------------
// Campaigns
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_whole_seed_set() {
    let (status, json) = get_json("/api/campaigns").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), ["1", "2", "3", "4", "5", "6", "7", "8"]);
}

#[tokio::test]
async fn should_filter_seed_set_by_category() {
    let (status, json) = get_json("/api/campaigns?category=medical").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), ["2"]);
}

#[tokio::test]
async fn should_list_funded_campaigns() {
    let (_, json) = get_json("/api/campaigns?status=funded").await;
    assert_eq!(ids(&json), ["4"]);
}

#[tokio::test]
async fn should_paginate_listing() {
    let (_, json) = get_json("/api/campaigns?page=2&per_page=3").await;
    assert_eq!(ids(&json), ["4", "5", "6"]);
}

#[tokio::test]
async fn should_ignore_unknown_category() {
    let (status, json) = get_json("/api/campaigns?category=gardening").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn should_return_campaign_by_id() {
    let (status, json) = get_json("/api/campaigns/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Clean Water for Rural Schools");
    assert_eq!(json["category"], "charity");
    assert_eq!(json["goal_amount"], 40_000.0);
}

#[tokio::test]
async fn should_return_404_for_unknown_campaign() {
    let (status, json) = get_json("/api/campaigns/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Campaign not found: 999");
}

// ---------------------------------------------------------------------------
// Dashboard assets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_index_for_client_side_routes() {
    let dir = std::env::temp_dir().join(format!("crowdfundd-assets-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<html>crowdfund</html>").unwrap();

    let (status, body) = get(app_with_assets(Some(&dir)), "/campaigns/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<html>crowdfund</html>");

    let (status, _) = get(app_with_assets(Some(&dir)), "/api/campaigns/3").await;
    assert_eq!(status, StatusCode::OK);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn should_keep_api_misses_out_of_the_dashboard_shell() {
    let dir = std::env::temp_dir().join(format!("crowdfundd-api-miss-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<html>shell</html>").unwrap();

    for uri in ["/api/nope", "/api/campaigns/a/b"] {
        let (status, body) = get(app_with_assets(Some(&dir)), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], format!("Route not found: {uri}"));
    }

    let (status, body) = get(app_with_assets(Some(&dir)), "/api/campaigns/a%2Fb").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Campaign not found: a/b");

    std::fs::remove_dir_all(&dir).unwrap();
}
