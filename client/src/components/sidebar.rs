//! Secondary navigation shown beside the statistics views.

use leptos::prelude::*;

pub const SIDEBAR_LINKS: &[(&str, &str)] = &[
    ("/", "Accueil"),
    ("/etablissements", "Établissements"),
    ("/statistiques", "Statistiques"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <ul>
                {SIDEBAR_LINKS
                    .iter()
                    .map(|(href, label)| view! { <li><a href=*href>{*label}</a></li> })
                    .collect::<Vec<_>>()}
            </ul>
        </aside>
    }
}
