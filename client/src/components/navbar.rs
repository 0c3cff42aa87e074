//! Persistent header navigation.

use leptos::prelude::*;

/// `(href, label)` pairs in display order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Accueil"),
    ("/etablissements", "Établissements"),
    ("/gestion-utilisateurs", "Utilisateurs"),
    ("/statistiques", "Statistiques"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <ul>
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| view! { <li><a href=*href>{*label}</a></li> })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}
