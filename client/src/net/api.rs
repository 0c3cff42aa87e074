//! REST API helpers for the directory backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since fetches only run from
//! `LocalResource`s in the browser.
//!
//! All paths are relative to the page origin; the host server forwards
//! `/api/*` to the configured backend.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<T, String>`; the string carries the cause for console
//! diagnostics only. Pages collapse every error into [`FETCH_ERROR_MESSAGE`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{Establishment, TrendPoint, UniversityHeadcount, User};

/// The single user-facing error shown when any fetch fails.
pub const FETCH_ERROR_MESSAGE: &str = "Erreur lors du chargement des données.";

pub const ESTABLISHMENTS_ENDPOINT: &str = "/api/etablissements/";
pub const USERS_ENDPOINT: &str = "/api/utilisateurs";
pub const TRENDS_ENDPOINT: &str = "/api/statistiques/tendances";
pub const UNIVERSITIES_ENDPOINT: &str = "/api/statistiques/universites";

/// Detail path for one establishment; the trailing slash matches the backend router.
pub fn establishment_endpoint(id: &str) -> String {
    format!("{ESTABLISHMENTS_ENDPOINT}{id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_failed_message(url: &str, status: u16) -> String {
    format!("GET {url} failed: {status}")
}

/// GET `url` and decode the JSON body as `T`.
///
/// # Errors
///
/// Returns an error string on transport failure, non-2xx status, or a body
/// that does not decode as `T`.
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_failed_message(url, resp.status()));
        }
        resp.json::<T>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err("not available on server".to_owned())
    }
}

/// Fetch every establishment from `/api/etablissements/`.
///
/// # Errors
///
/// See [`get_json`].
pub async fn fetch_establishments() -> Result<Vec<Establishment>, String> {
    get_json(ESTABLISHMENTS_ENDPOINT).await
}

/// Fetch one establishment from `/api/etablissements/{id}/`.
///
/// # Errors
///
/// See [`get_json`].
pub async fn fetch_establishment(id: &str) -> Result<Establishment, String> {
    get_json(&establishment_endpoint(id)).await
}

/// Fetch the user list from `/api/utilisateurs`.
///
/// # Errors
///
/// See [`get_json`].
pub async fn fetch_users() -> Result<Vec<User>, String> {
    get_json(USERS_ENDPOINT).await
}

/// Fetch the yearly inscription trend from `/api/statistiques/tendances`.
///
/// # Errors
///
/// See [`get_json`].
pub async fn fetch_trends() -> Result<Vec<TrendPoint>, String> {
    get_json(TRENDS_ENDPOINT).await
}

/// Fetch per-university headcounts from `/api/statistiques/universites`.
///
/// # Errors
///
/// See [`get_json`].
pub async fn fetch_university_headcounts() -> Result<Vec<UniversityHeadcount>, String> {
    get_json(UNIVERSITIES_ENDPOINT).await
}
