/**
 * GIS Client
 *
 * One `reqwest::Client` shared by all proxy requests, built once at startup
 * with the configured timeout.
 *
 * # Query Parameters
 *
 * Boundaries: `where=STATE='<state>'`
 * Roads:      `where=1=1` plus the state's envelope as an intersecting
 *             `esriGeometryEnvelope` in WGS84
 *
 * Both add `outFields=*`, `f=geojson` and `resultRecordCount`.
 *
 * # Failures
 *
 * Connection errors, timeouts, non-2xx statuses, bodies that are not JSON,
 * and ArcGIS error envelopes (`{"error": {...}}`, which the server sends
 * with status 200) all become `BackendError::Upstream`.
 */

use std::time::Duration;

use axum::body::Bytes;
use reqwest::Client;

use crate::backend::error::BackendError;
use crate::backend::gis::{state_envelope, GisLayer};
use crate::shared::GisConfig;

/// Client for the Forest Service ArcGIS layers
#[derive(Debug, Clone)]
pub struct GisClient {
    http: Client,
    config: GisConfig,
}

impl GisClient {
    pub fn new(config: GisConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GisConfig {
        &self.config
    }

    /// Endpoint URL for `layer`
    pub fn layer_url(&self, layer: GisLayer) -> &str {
        match layer {
            GisLayer::Boundaries => &self.config.boundaries_url,
            GisLayer::Roads => &self.config.roads_url,
        }
    }

    /// Query string pairs sent for `layer`
    pub fn query_params(&self, layer: GisLayer) -> Vec<(&'static str, String)> {
        let state = self.config.state.as_str();
        let mut params = Vec::with_capacity(8);

        match layer {
            GisLayer::Boundaries => {
                params.push(("where", format!("STATE='{}'", state)));
            }
            GisLayer::Roads => {
                params.push(("where", "1=1".to_string()));
                match state_envelope(state) {
                    Some((xmin, ymin, xmax, ymax)) => {
                        params.push(("geometry", format!("{},{},{},{}", xmin, ymin, xmax, ymax)));
                        params.push(("geometryType", "esriGeometryEnvelope".to_string()));
                        params.push(("inSR", "4326".to_string()));
                        params.push(("spatialRel", "esriSpatialRelIntersects".to_string()));
                    }
                    None => {
                        tracing::warn!("No envelope for state {}, roads query is unbounded", state);
                    }
                }
            }
        }

        params.push(("outFields", "*".to_string()));
        params.push(("f", "geojson".to_string()));
        params.push(("resultRecordCount", self.config.result_count.to_string()));
        params
    }

    /// Fetch one layer and return the upstream body unchanged
    pub async fn fetch_layer(&self, layer: GisLayer) -> Result<Bytes, BackendError> {
        let failed = |details: String| BackendError::upstream(layer.failure_message(), details);

        let url = self.layer_url(layer);
        tracing::debug!("Fetching {:?} from {}", layer, url);

        let response = self
            .http
            .get(url)
            .query(&self.query_params(layer))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    failed(format!("Request timed out after {}s", self.config.timeout_secs))
                } else {
                    failed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(failed(format!("Upstream returned {}", status)));
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                failed(format!("Request timed out after {}s", self.config.timeout_secs))
            } else {
                failed(e.to_string())
            }
        })?;

        check_body(&body).map_err(failed)?;

        tracing::info!("Fetched {:?} ({} bytes)", layer, body.len());
        Ok(body)
    }
}

/// Reject bodies that are not JSON or that carry an ArcGIS error envelope
fn check_body(body: &[u8]) -> Result<(), String> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| format!("Invalid JSON from upstream: {}", e))?;

    if let Some(error) = value.get("error") {
        let message = error
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(format!("ArcGIS error: {}", message));
    }

    Ok(())
}
