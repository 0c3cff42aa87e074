//! Statistics page (`/statistiques`): inscription trend and per-university
//! headcounts, each fetched independently and drawn with Chart.js.

use leptos::prelude::*;

use crate::components::chart_canvas::ChartCanvas;
use crate::components::fetch_view::fetch_view;
use crate::components::sidebar::Sidebar;
use crate::state::fetch::{FetchState, log_failure};
use crate::util::chart::{ChartKind, trend_chart_data, university_chart_data};

#[component]
pub fn StatistiquesPage() -> impl IntoView {
    view! {
        <div class="statistiques-page">
            <Sidebar/>
            <main class="statistiques-page__charts">
                <AnalyseTendances/>
                <GraphiquesUniversites/>
            </main>
        </div>
    }
}

/// Line chart of inscriptions per year.
#[component]
pub fn AnalyseTendances() -> impl IntoView {
    let trends = LocalResource::new(|| async {
        log_failure("Erreur de chargement des tendances", crate::net::api::fetch_trends().await)
    });

    view! {
        <section class="statistiques-page__section">
            <h2>"Analyse des Tendances d'Inscriptions"</h2>
            {move || {
                let state = FetchState::from_resource(trends.get()).map(|points| trend_chart_data(&points));
                fetch_view(state, |data| view! { <ChartCanvas kind=ChartKind::Line data=Signal::stored(data)/> })
            }}
        </section>
    }
}

/// Bar chart of students per university.
#[component]
pub fn GraphiquesUniversites() -> impl IntoView {
    let headcounts = LocalResource::new(|| async {
        log_failure(
            "Erreur de chargement des statistiques",
            crate::net::api::fetch_university_headcounts().await,
        )
    });

    view! {
        <section class="statistiques-page__section">
            <h2>"Effectifs des Universités"</h2>
            {move || {
                let state = FetchState::from_resource(headcounts.get()).map(|rows| university_chart_data(&rows));
                fetch_view(state, |data| view! { <ChartCanvas kind=ChartKind::Bar data=Signal::stored(data)/> })
            }}
        </section>
    }
}
