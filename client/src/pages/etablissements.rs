//! Establishment listing (`/etablissements`).

#[cfg(test)]
#[path = "etablissements_test.rs"]
mod etablissements_test;

use leptos::prelude::*;

use crate::components::fetch_view::fetch_view;
use crate::net::types::Establishment;
use crate::state::fetch::{FetchState, log_failure};

const EMPTY_MESSAGE: &str = "Aucun établissement enregistré.";

fn detail_href(establishment: &Establishment) -> String {
    format!("/etablissement/{}", establishment.id)
}

#[component]
pub fn EtablissementsPage() -> impl IntoView {
    let establishments = LocalResource::new(|| async {
        log_failure(
            "Erreur chargement établissements",
            crate::net::api::fetch_establishments().await,
        )
    });

    view! {
        <div class="etablissements-page">
            <h2>"Établissements"</h2>
            {move || {
                fetch_view(FetchState::from_resource(establishments.get()), |list| {
                    view! { <EtablissementList establishments=list/> }
                })
            }}
        </div>
    }
}

#[component]
fn EtablissementList(establishments: Vec<Establishment>) -> impl IntoView {
    if establishments.is_empty() {
        return view! { <p class="etablissements-page__empty">{EMPTY_MESSAGE}</p> }.into_any();
    }

    view! {
        <ul class="etablissements-page__list">
            {establishments
                .into_iter()
                .map(|establishment| {
                    let href = detail_href(&establishment);
                    let kind = establishment.kind.unwrap_or_default();
                    view! {
                        <li class="etablissement-item">
                            <a href=href>{establishment.nom}</a>
                            <span class="etablissement-item__type">{kind}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
        .into_any()
}
