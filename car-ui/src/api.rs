//! Browser-side HTTP client for the route planning backend.
//!
//! Built on `web_sys` fetch rather than a native HTTP crate so the WASM
//! bundle stays on the browser's own networking. Bodies are decoded as
//! text and parsed with `serde_json`; JS-side failures are folded into
//! `anyhow` errors carrying the path and status.

use anyhow::{anyhow, Context};
use car_core::alert::PollutionAlert;
use car_core::api::{DeleteAck, HealthStatus};
use car_core::pollution::PollutionReading;
use car_core::request::RouteRequest;
use car_core::route::RouteResponse;
use car_core::saved::{SaveRouteRequest, SavedRoute};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Same-origin default; the backend mounts everything under `/api`.
const SAME_ORIGIN_BASE: &str = "/api";

/// Host-page override for the API base, read once per client.
const BASE_GLOBAL: &str = "CLEAN_AIR_API_BASE";

/// Thin fetch wrapper bound to one API base. Cheap to clone; holds no
/// connection state.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    /// Build a client from the host page configuration:
    /// `window.CLEAN_AIR_API_BASE` when the page sets it, same-origin
    /// `/api` otherwise.
    pub fn from_window() -> Self {
        let base = web_sys::window()
            .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str(BASE_GLOBAL)).ok())
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| SAME_ORIGIN_BASE.to_string());
        ApiClient {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub async fn health(&self) -> anyhow::Result<HealthStatus> {
        self.fetch_json("GET", "/health", None).await
    }

    pub async fn calculate_routes(&self, request: &RouteRequest) -> anyhow::Result<RouteResponse> {
        let body = serde_json::to_string(request)?;
        self.fetch_json("POST", "/routes/calculate", Some(body)).await
    }

    pub async fn current_pollution(&self, lat: f64, lng: f64) -> anyhow::Result<PollutionReading> {
        self.fetch_json("GET", &format!("/pollution/current?lat={lat}&lng={lng}"), None)
            .await
    }

    pub async fn save_route(&self, request: &SaveRouteRequest) -> anyhow::Result<SavedRoute> {
        let body = serde_json::to_string(request)?;
        self.fetch_json("POST", "/routes/save", Some(body)).await
    }

    pub async fn saved_routes(&self, user_id: &str) -> anyhow::Result<Vec<SavedRoute>> {
        self.fetch_json("GET", &format!("/routes/saved/{user_id}"), None)
            .await
    }

    pub async fn delete_saved_route(&self, route_id: &str) -> anyhow::Result<DeleteAck> {
        self.fetch_json("DELETE", &format!("/routes/saved/{route_id}"), None)
            .await
    }

    pub async fn alerts(&self, user_id: &str) -> anyhow::Result<Vec<PollutionAlert>> {
        self.fetch_json("GET", &format!("/alerts/{user_id}"), None)
            .await
    }

    async fn fetch_json<T>(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
    ) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base, path);
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        let has_body = body.is_some();
        if let Some(body) = body {
            opts.set_body(&JsValue::from_str(&body));
        }

        let request = Request::new_with_str_and_init(&url, &opts)
            .map_err(|e| js_error(e, "building request"))?;
        if has_body {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(|e| js_error(e, "setting content type"))?;
        }

        let window = web_sys::window().ok_or_else(|| anyhow!("no window object"))?;
        let response_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| js_error(e, path))?;
        let response: Response = response_value
            .dyn_into()
            .map_err(|_| anyhow!("fetch did not yield a Response for {path}"))?;

        if !response.ok() {
            return Err(anyhow!("{path} returned {}", response.status()));
        }

        let text_promise = response.text().map_err(|e| js_error(e, path))?;
        let text_value = JsFuture::from(text_promise)
            .await
            .map_err(|e| js_error(e, path))?;
        let text = text_value
            .as_string()
            .ok_or_else(|| anyhow!("response body from {path} was not text"))?;
        serde_json::from_str(&text).with_context(|| format!("bad response body from {path}"))
    }
}

fn js_error(value: JsValue, what: &str) -> anyhow::Error {
    let detail = value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"));
    anyhow!("{what}: {detail}")
}
