use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "api")]
use crate::alert::PollutionAlert;
#[cfg(feature = "api")]
use crate::pollution::PollutionReading;
#[cfg(feature = "api")]
use crate::request::RouteRequest;
#[cfg(feature = "api")]
use crate::route::RouteResponse;
#[cfg(feature = "api")]
use crate::saved::{SaveRouteRequest, SavedRoute};
#[cfg(feature = "api")]
use anyhow::{bail, Context};
#[cfg(feature = "api")]
use log::info;
#[cfg(feature = "api")]
use reqwest::Client;

/// Default API base for local development. The backend mounts all of its
/// endpoints under `/api`.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// `GET /health` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// `DELETE /routes/saved/{route_id}` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteAck {
    pub message: String,
}

/// Native HTTP client for the route planning backend, used by the CLI.
/// One attempt per call, no retries; a failed call carries the path and
/// status in its error chain.
#[cfg(feature = "api")]
pub struct BackendClient {
    base: String,
    http: Client,
}

#[cfg(feature = "api")]
impl BackendClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        BackendClient {
            base: base.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub async fn health(&self) -> anyhow::Result<HealthStatus> {
        self.get_json("/health").await
    }

    pub async fn calculate_routes(&self, request: &RouteRequest) -> anyhow::Result<RouteResponse> {
        self.post_json("/routes/calculate", request).await
    }

    pub async fn current_pollution(&self, lat: f64, lng: f64) -> anyhow::Result<PollutionReading> {
        self.get_json(&format!("/pollution/current?lat={lat}&lng={lng}"))
            .await
    }

    pub async fn save_route(&self, request: &SaveRouteRequest) -> anyhow::Result<SavedRoute> {
        self.post_json("/routes/save", request).await
    }

    pub async fn saved_routes(&self, user_id: &str) -> anyhow::Result<Vec<SavedRoute>> {
        self.get_json(&format!("/routes/saved/{user_id}")).await
    }

    pub async fn delete_saved_route(&self, route_id: &str) -> anyhow::Result<DeleteAck> {
        let path = format!("/routes/saved/{route_id}");
        let url = format!("{}{}", self.base, path);
        info!("DELETE {url}");
        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .with_context(|| format!("request failed: DELETE {path}"))?;
        Self::decode(response, &path).await
    }

    pub async fn alerts(&self, user_id: &str) -> anyhow::Result<Vec<PollutionAlert>> {
        self.get_json(&format!("/alerts/{user_id}")).await
    }

    async fn get_json<T>(&self, path: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base, path);
        info!("GET {url}");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request failed: GET {path}"))?;
        Self::decode(response, path).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> anyhow::Result<T>
    where
        B: Serialize,
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base, path);
        info!("POST {url}");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("request failed: POST {path}"))?;
        Self::decode(response, path).await
    }

    async fn decode<T>(response: reqwest::Response, path: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            bail!("{path} returned {status}");
        }
        response
            .json::<T>()
            .await
            .with_context(|| format!("bad response body from {path}"))
    }
}

#[cfg(test)]
mod tests {
    use super::HealthStatus;

    #[test]
    fn test_health_status_parses_and_reports() {
        let healthy: HealthStatus =
            serde_json::from_str(r#"{"status": "healthy", "timestamp": "2025-06-01T00:00:00Z"}"#)
                .unwrap();
        assert!(healthy.is_healthy());

        let degraded: HealthStatus = serde_json::from_str(r#"{"status": "degraded"}"#).unwrap();
        assert!(!degraded.is_healthy());
        assert_eq!(degraded.timestamp, None);
    }

    #[cfg(feature = "api")]
    #[test]
    fn test_client_trims_trailing_slash() {
        let client = super::BackendClient::new("http://localhost:8000/api/");
        assert_eq!(client.base(), "http://localhost:8000/api");
    }
}
