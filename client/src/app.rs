//! Root application component with routing and the persistent page chrome.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar};
use crate::pages::{
    accueil::AccueilPage, connexion::ConnexionPage, etablissement::EtablissementPage,
    etablissements::EtablissementsPage, gestion_utilisateurs::GestionUtilisateursPage,
    inscription::InscriptionPage, profil::ProfilPage, statistiques::StatistiquesPage,
};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// HTML shell rendered on the server for SSR + hydration.
///
/// Leaflet and Chart.js are loaded as page globals (`L`, `Chart`) ahead of the
/// hydration script so the `util::leaflet` / `util::chartjs` bindings resolve.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=LEAFLET_CSS/>
                <script src=LEAFLET_JS></script>
                <script src=CHART_JS></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Header and footer wrap every route. Unmatched paths render no page body.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/portail.css"/>
        <Title text="Portail des Universités"/>

        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| ()>
                    <Route path=StaticSegment("") view=AccueilPage/>
                    <Route path=StaticSegment("etablissements") view=EtablissementsPage/>
                    <Route path=(StaticSegment("etablissement"), ParamSegment("id")) view=EtablissementPage/>
                    <Route path=StaticSegment("connexion") view=ConnexionPage/>
                    <Route path=StaticSegment("inscription") view=InscriptionPage/>
                    <Route path=StaticSegment("profil") view=ProfilPage/>
                    <Route path=StaticSegment("gestion-utilisateurs") view=GestionUtilisateursPage/>
                    <Route path=StaticSegment("statistiques") view=StatistiquesPage/>
                </Routes>
                <Footer/>
            </div>
        </Router>
    }
}
