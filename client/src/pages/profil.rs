//! Profile page. There is no session layer, so it only points at the forms.

use leptos::prelude::*;

#[component]
pub fn ProfilPage() -> impl IntoView {
    view! {
        <div class="profil-page">
            <h2>"Profil"</h2>
            <p>"Aucun utilisateur connecté."</p>
            <p>
                <a href="/connexion">"Se connecter"</a>
                " ou "
                <a href="/inscription">"créer un compte"</a>
            </p>
        </div>
    }
}
