//! Registration page (`/inscription`).
//!
//! Submit is intercepted so the page never navigates. No account is created:
//! the values are written to the console and the fields are left as typed.

use leptos::prelude::*;

use crate::state::forms::{RegistrationForm, intercept_submit};

#[cfg(test)]
#[path = "inscription_test.rs"]
mod inscription_test;

#[component]
pub fn InscriptionPage() -> impl IntoView {
    let nom = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let mot_de_passe = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        let form = RegistrationForm {
            nom: nom.get_untracked(),
            email: email.get_untracked(),
            mot_de_passe: mot_de_passe.get_untracked(),
        };
        intercept_submit(&ev, &form.log_line());
    };

    view! {
        <div class="inscription-page">
            <h2>"Inscription"</h2>
            <form class="form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Nom"
                    required=true
                    prop:value=move || nom.get()
                    on:input=move |ev| nom.set(event_target_value(&ev))
                />
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
                <button type="submit">"S'inscrire"</button>
            </form>
        </div>
    }
}
