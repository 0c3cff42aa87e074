//! Shared tri-state rendering for data pages.

#[cfg(test)]
#[path = "fetch_view_test.rs"]
mod fetch_view_test;

use leptos::prelude::*;

use crate::state::fetch::FetchState;

/// Render the loading placeholder, the fixed error message, or `loaded(data)`.
pub fn fetch_view<T, V>(state: FetchState<T>, loaded: impl FnOnce(T) -> V) -> AnyView
where
    V: IntoView + 'static,
{
    if let FetchState::Loaded(data) = state {
        return loaded(data).into_any();
    }
    let class = if state.is_loading() { "fetch-status" } else { "fetch-status fetch-status--error" };
    let text = state.placeholder().unwrap_or_default();
    view! { <p class=class>{text}</p> }.into_any()
}
