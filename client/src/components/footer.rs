//! Persistent page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© Portail des Universités de Madagascar"</p>
            <p class="footer__links">
                <a href="/connexion">"Connexion"</a>
                " · "
                <a href="/inscription">"Inscription"</a>
                " · "
                <a href="/profil">"Profil"</a>
            </p>
        </footer>
    }
}
