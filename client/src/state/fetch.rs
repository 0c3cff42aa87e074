//! Loading / error / success tri-state for page-level fetches.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every data page owns one `LocalResource<Result<T, String>>`. This module
//! turns the resource's current value into the three render branches and is
//! the single place where fetch causes are logged and then discarded.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use crate::net::api::FETCH_ERROR_MESSAGE;

/// Placeholder shown while a request is outstanding.
pub const LOADING_MESSAGE: &str = "Chargement...";

/// Render-time view of a page fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchState<T> {
    /// Request still in flight (resource has no value yet).
    Loading,
    /// Request failed; carries the fixed user-facing message.
    Failed(&'static str),
    /// Request succeeded with the decoded payload.
    Loaded(T),
}

impl<T> FetchState<T> {
    /// Build from a resource value: `None` is loading, `Some(Err)` always
    /// becomes the fixed error message regardless of cause.
    pub fn from_resource(value: Option<Result<T, String>>) -> Self {
        match value {
            None => Self::Loading,
            Some(Ok(data)) => Self::Loaded(data),
            Some(Err(_)) => Self::Failed(FETCH_ERROR_MESSAGE),
        }
    }

    /// Text to render in place of the data, or `None` once loaded.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(LOADING_MESSAGE),
            Self::Failed(message) => Some(*message),
            Self::Loaded(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Transform the loaded payload, keeping loading/failed as-is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            Self::Loading => FetchState::Loading,
            Self::Failed(message) => FetchState::Failed(message),
            Self::Loaded(data) => FetchState::Loaded(f(data)),
        }
    }
}

/// Pass a fetch result through, writing the cause of a failure to the console.
///
/// Called once per completed request inside the resource future so the
/// warning is not repeated on every re-render.
pub fn log_failure<T>(context: &str, result: Result<T, String>) -> Result<T, String> {
    if let Err(cause) = &result {
        leptos::logging::warn!("{context}: {cause}");
    }
    result
}
