//! Home page: welcome banner, interactive map, statistics teaser.

use leptos::prelude::*;

use crate::components::carte::CarteMadagascar;

#[component]
pub fn AccueilPage() -> impl IntoView {
    view! {
        <div class="accueil-page">
            <header class="accueil-page__header">
                <h1>"Bienvenue sur le Portail des Universités"</h1>
                <p>"Trouvez facilement les établissements et formations à Madagascar"</p>
            </header>
            <main>
                <section>
                    <h2>"Carte Interactive des Universités"</h2>
                    <CarteMadagascar/>
                </section>
                <section>
                    <h2>"Statistiques"</h2>
                    <p>"Découvrez les tendances des inscriptions et effectifs étudiants"</p>
                    <a href="/statistiques">"Voir les statistiques"</a>
                </section>
            </main>
        </div>
    }
}
