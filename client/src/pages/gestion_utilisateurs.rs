//! User management listing (`/gestion-utilisateurs`).

#[cfg(test)]
#[path = "gestion_utilisateurs_test.rs"]
mod gestion_utilisateurs_test;

use leptos::prelude::*;

use crate::components::fetch_view::fetch_view;
use crate::net::types::User;
use crate::state::fetch::{FetchState, log_failure};

fn user_line(user: &User) -> String {
    format!("{} - {}", user.nom, user.email)
}

#[component]
pub fn GestionUtilisateursPage() -> impl IntoView {
    let users = LocalResource::new(|| async {
        log_failure("Erreur chargement utilisateurs", crate::net::api::fetch_users().await)
    });

    view! {
        <div class="utilisateurs-page">
            <h2>"Gestion des Utilisateurs"</h2>
            {move || {
                fetch_view(FetchState::from_resource(users.get()), |list: Vec<User>| {
                    view! {
                        <ul>
                            {list
                                .iter()
                                .map(|user| view! { <li>{user_line(user)}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                })
            }}
        </div>
    }
}
