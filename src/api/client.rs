//! HTTP API Client
//!
//! Functions for communicating with the analytics backend. Non-2xx
//! responses and transport failures are normalized into
//! [`DashboardError::Network`]; the failure is logged, surfaced as a toast
//! naming the endpoint, and re-raised so callers abort their own flow.
//! No retries, no timeouts, no caching.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::error::DashboardError;
use crate::state::global::{AnalyticsSnapshot, DashboardState, StatsSummary};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api";

/// Local storage key for the base URL override
const API_BASE_STORAGE_KEY: &str = "pulseboard_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_STORAGE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct ChartDataResponse {
    data: AnalyticsSnapshot,
}

#[derive(Debug, serde::Deserialize)]
struct AnalyticsResponse {
    data: StatsSummary,
}

#[derive(Debug, serde::Serialize)]
struct AskRequest {
    question: String,
}

#[derive(Debug, serde::Deserialize)]
struct AskResponse {
    response: String,
}

// ============ API Functions ============

/// Fetch the engagement/distribution chart payload
pub async fn fetch_chart_data(state: &DashboardState) -> Result<AnalyticsSnapshot, DashboardError> {
    let response: ChartDataResponse = get_json(state, "chart-data").await?;
    Ok(response.data)
}

/// Fetch the stats summary
pub async fn fetch_analytics(state: &DashboardState) -> Result<StatsSummary, DashboardError> {
    let response: AnalyticsResponse = get_json(state, "analytics").await?;
    Ok(response.data)
}

/// Forward a free-text question to the AI endpoint.
///
/// The caller owns the user-visible failure message; this only logs.
pub async fn ask_ai(question: &str) -> Result<String, DashboardError> {
    let endpoint = "ask-ai";

    let response = Request::post(&format!("{}/{}", get_api_base(), endpoint))
        .json(&AskRequest {
            question: question.to_string(),
        })
        .map_err(|e| log_network_error(endpoint, &e.to_string()))?
        .send()
        .await
        .map_err(|e| log_network_error(endpoint, &e.to_string()))?;

    if !response.ok() {
        return Err(log_network_error(
            endpoint,
            &format!("HTTP status {}", response.status()),
        ));
    }

    let parsed: AskResponse = response
        .json()
        .await
        .map_err(|e| log_network_error(endpoint, &e.to_string()))?;

    Ok(parsed.response)
}

/// GET an endpoint and parse its JSON body.
///
/// On any failure, surfaces a toast naming the endpoint and re-raises.
async fn get_json<T: DeserializeOwned>(
    state: &DashboardState,
    endpoint: &str,
) -> Result<T, DashboardError> {
    let response = Request::get(&format!("{}/{}", get_api_base(), endpoint))
        .send()
        .await
        .map_err(|e| surface_network_error(state, endpoint, &e.to_string()))?;

    if !response.ok() {
        return Err(surface_network_error(
            state,
            endpoint,
            &format!("HTTP status {}", response.status()),
        ));
    }

    response
        .json()
        .await
        .map_err(|e| surface_network_error(state, endpoint, &e.to_string()))
}

fn log_network_error(endpoint: &str, detail: &str) -> DashboardError {
    web_sys::console::error_1(&format!("Failed to fetch {}: {}", endpoint, detail).into());
    DashboardError::Network {
        endpoint: endpoint.to_string(),
        detail: detail.to_string(),
    }
}

fn surface_network_error(state: &DashboardState, endpoint: &str, detail: &str) -> DashboardError {
    let err = log_network_error(endpoint, detail);
    state.show_message(&err.to_string());
    err
}
