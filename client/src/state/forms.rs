//! Field snapshots for the registration and login forms.
//!
//! Both forms are uncontrolled from the backend's point of view: submit is
//! intercepted and the values only reach the console. Passwords never appear
//! in the log line.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

const MASKED_PASSWORD: &str = "[masqué]";

/// The part of a form submit event the pages act on.
pub trait Submission {
    fn prevent_default(&self);
}

impl Submission for leptos::ev::SubmitEvent {
    fn prevent_default(&self) {
        let event: &leptos::ev::Event = self;
        event.prevent_default();
    }
}

/// Keep the browser on the page and write `line` to the console.
pub fn intercept_submit(ev: &impl Submission, line: &str) {
    ev.prevent_default();
    leptos::logging::log!("{line}");
}

/// Values captured from the `/inscription` form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub nom: String,
    pub email: String,
    pub mot_de_passe: String,
}

impl RegistrationForm {
    /// Diagnostic line written on submit.
    pub fn log_line(&self) -> String {
        format!("Inscription avec: {} {} {MASKED_PASSWORD}", self.nom, self.email)
    }
}

/// Values captured from the `/connexion` form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub mot_de_passe: String,
}

impl LoginForm {
    pub fn log_line(&self) -> String {
        format!("Connexion avec: {} {MASKED_PASSWORD}", self.email)
    }
}
