//! Establishment detail page (`/etablissement/:id`).
//!
//! ARCHITECTURE
//! ============
//! The fetch resource reads the route `id`, so navigating between two detail
//! URLs refetches without remounting the page. The response is rendered
//! verbatim; missing fields show a dash.

#[cfg(test)]
#[path = "etablissement_test.rs"]
mod etablissement_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::fetch_view::fetch_view;
use crate::net::types::Establishment;
use crate::state::fetch::{FetchState, log_failure};

const MISSING_VALUE: &str = "—";

/// Labelled rows shown under the heading, in display order.
fn detail_rows(establishment: &Establishment) -> Vec<(&'static str, String)> {
    let text = |value: Option<&str>| value.unwrap_or(MISSING_VALUE).to_owned();
    vec![
        ("Adresse :", text(establishment.adresse.as_deref())),
        ("Type :", text(establishment.kind.as_deref())),
        ("Description :", text(establishment.description.as_deref())),
        (
            "Nombre d'étudiants :",
            establishment
                .nombre_etudiants
                .map_or_else(|| MISSING_VALUE.to_owned(), |n| n.to_string()),
        ),
    ]
}

#[component]
pub fn EtablissementPage() -> impl IntoView {
    let params = use_params_map();
    let establishment_id = move || params.read().get("id").unwrap_or_default();

    let establishment = LocalResource::new(move || {
        let id = establishment_id();
        async move {
            log_failure(
                "Erreur chargement établissement",
                crate::net::api::fetch_establishment(&id).await,
            )
        }
    });

    view! {
        <div class="details-container">
            {move || {
                fetch_view(FetchState::from_resource(establishment.get()), |establishment| {
                    view! { <EtablissementDetails establishment=establishment/> }
                })
            }}
        </div>
    }
}

/// Static rendering of one establishment record.
#[component]
pub fn EtablissementDetails(establishment: Establishment) -> impl IntoView {
    let rows = detail_rows(&establishment);
    let image = establishment.image_url.clone().map(|src| {
        let alt = establishment.nom.clone();
        view! { <img src=src alt=alt class="etablissement-image"/> }
    });

    view! {
        <h1>{establishment.nom}</h1>
        {image}
        {rows
            .into_iter()
            .map(|(label, value)| view! { <p><strong>{label}</strong>" "{value}</p> })
            .collect::<Vec<_>>()}
    }
}
