//! REST API helpers for communicating with the inventory service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only called from the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use catalog::{Entity, EntityKind, InventoryRecord, LoginRequest, TokenResponse};
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config::ClientConfig;

#[cfg(any(test, feature = "hydrate"))]
fn login_url(config: &ClientConfig) -> String {
    config.url(catalog::LOGIN_PATH)
}

#[cfg(any(test, feature = "hydrate"))]
fn list_url(config: &ClientConfig, kind: EntityKind) -> String {
    config.url(kind.list_path())
}

#[cfg(any(test, feature = "hydrate"))]
fn inventory_url(config: &ClientConfig, kind: EntityKind, id: i64) -> String {
    config.url(&kind.inventory_path(id))
}

/// Exchange credentials for a token via `POST /auth/token`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] when the credentials are rejected, and
/// [`ApiError::Network`]/[`ApiError::Decode`] for transport problems.
pub async fn login(config: &ClientConfig, request: &LoginRequest) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = login_url(config);
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if let Err(e) = ApiError::check_status(resp.status()) {
            log::warn!("login rejected: {e}");
            return Err(e);
        }
        resp.json::<TokenResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the complete list for `T` (`GET /products` or `GET /locations`).
///
/// # Errors
///
/// See [`ApiError`].
pub async fn fetch_list<T: Entity>(config: &ClientConfig, authorization: &str) -> Result<Vec<T>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&list_url(config, T::KIND), authorization).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, authorization);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the inventory breakdown for one product or location.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn fetch_inventory(
    config: &ClientConfig,
    authorization: &str,
    kind: EntityKind,
    id: i64,
) -> Result<Vec<InventoryRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&inventory_url(config, kind, id), authorization).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, authorization, kind, id);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(url: &str, authorization: &str) -> Result<T, ApiError> {
    log::debug!("GET {url}");
    let resp = gloo_net::http::Request::get(url)
        .header("Authorization", authorization)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if let Err(e) = ApiError::check_status(resp.status()) {
        log::warn!("GET {url} failed: {e}");
        return Err(e);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
