//! Login page (`/connexion`). Same shape as registration: submit is
//! intercepted and only logged, no session is opened.

use leptos::prelude::*;

use crate::state::forms::{LoginForm, intercept_submit};

#[cfg(test)]
#[path = "connexion_test.rs"]
mod connexion_test;

#[component]
pub fn ConnexionPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let mot_de_passe = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        let form = LoginForm { email: email.get_untracked(), mot_de_passe: mot_de_passe.get_untracked() };
        intercept_submit(&ev, &form.log_line());
    };

    view! {
        <div class="connexion-page">
            <h2>"Connexion"</h2>
            <form class="form" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Email"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Mot de passe"
                    required=true
                    prop:value=move || mot_de_passe.get()
                    on:input=move |ev| mot_de_passe.set(event_target_value(&ev))
                />
                <button type="submit">"Se connecter"</button>
            </form>
            <p>
                "Pas encore de compte ? "
                <a href="/inscription">"S'inscrire"</a>
            </p>
        </div>
    }
}
