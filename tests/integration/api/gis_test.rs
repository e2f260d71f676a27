//! GIS proxy integration tests
//!
//! The ArcGIS server is a wiremock instance; the proxy must relay its body
//! untouched or answer with a structured 500.

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::assert_contains;
use crate::common::{
    mount_delayed, mount_json, TestApp, BOUNDARIES_GEOJSON, BOUNDARIES_PATH, ROADS_GEOJSON,
    ROADS_PATH,
};

#[tokio::test]
async fn test_boundaries_are_relayed_verbatim() {
    let app = TestApp::spawn().await;
    Mock::given(method("GET"))
        .and(path(BOUNDARIES_PATH))
        .and(query_param("where", "STATE='CO'"))
        .and(query_param("outFields", "*"))
        .and(query_param("f", "geojson"))
        .and(query_param("resultRecordCount", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(BOUNDARIES_GEOJSON, "application/json"))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let response = app.server.get("/api/forest_boundaries").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header("content-type").to_str().unwrap(), "application/json");
    assert_eq!(response.text(), BOUNDARIES_GEOJSON);
}

#[tokio::test]
async fn test_roads_query_carries_state_envelope() {
    let app = TestApp::spawn().await;
    Mock::given(method("GET"))
        .and(path(ROADS_PATH))
        .and(query_param("where", "1=1"))
        .and(query_param("geometry", "-109.06,36.99,-102.04,41"))
        .and(query_param("geometryType", "esriGeometryEnvelope"))
        .and(query_param("inSR", "4326"))
        .and(query_param("spatialRel", "esriSpatialRelIntersects"))
        .and(query_param("f", "geojson"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(ROADS_GEOJSON, "application/json"))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let response = app.server.get("/api/forest_roads").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), ROADS_GEOJSON);
}

#[tokio::test]
async fn test_configured_state_is_used() {
    let app = TestApp::spawn_with(|builder| builder.gis_state("UT").gis_result_count(50)).await;
    Mock::given(method("GET"))
        .and(path(BOUNDARIES_PATH))
        .and(query_param("where", "STATE='UT'"))
        .and(query_param("resultRecordCount", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(BOUNDARIES_GEOJSON, "application/json"))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let response = app.server.get("/api/forest_boundaries").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_upstream_error_status() {
    let app = TestApp::spawn().await;
    mount_json(&app.upstream, BOUNDARIES_PATH, 503, r#"{"message":"down"}"#).await;

    let response = app.server.get("/api/forest_boundaries").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body["error"], json!("Failed to fetch forest boundaries"));
    assert_contains!(body["details"].as_str().unwrap(), "503");
}

#[tokio::test]
async fn test_arcgis_error_envelope() {
    let app = TestApp::spawn().await;
    mount_json(
        &app.upstream,
        ROADS_PATH,
        200,
        r#"{"error":{"code":400,"message":"Unable to complete operation.","details":[]}}"#,
    )
    .await;

    let response = app.server.get("/api/forest_roads").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body["error"], json!("Failed to fetch forest roads"));
    assert_eq!(body["details"], json!("ArcGIS error: Unable to complete operation."));
}

#[tokio::test]
async fn test_non_json_body() {
    let app = TestApp::spawn().await;
    Mock::given(method("GET"))
        .and(path(BOUNDARIES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&app.upstream)
        .await;

    let response = app.server.get("/api/forest_boundaries").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_contains!(body["details"].as_str().unwrap(), "Invalid JSON from upstream");
}

#[tokio::test]
async fn test_timeout_then_next_request_is_served() {
    let app = TestApp::spawn().await;
    mount_delayed(&app.upstream, BOUNDARIES_PATH, Duration::from_secs(3)).await;

    let response = app.server.get("/api/forest_boundaries").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body["error"], json!("Failed to fetch forest boundaries"));
    assert_contains!(body["details"].as_str().unwrap(), "timed out");

    let response = app.server.get("/api/camping_spots").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_unreachable_upstream() {
    let app = TestApp::spawn_with(|builder| {
        builder
            .gis_boundaries_url("http://127.0.0.1:9/query")
            .gis_roads_url("http://127.0.0.1:9/query")
    })
    .await;

    let response = app.server.get("/api/forest_boundaries").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body["error"], json!("Failed to fetch forest boundaries"));
    assert!(body["details"].as_str().is_some_and(|d| !d.is_empty()));
}
