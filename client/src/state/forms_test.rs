use super::*;

#[test]
fn registration_log_line_includes_name_and_email() {
    let form = RegistrationForm {
        nom: "Rasoa".to_owned(),
        email: "rasoa@example.mg".to_owned(),
        mot_de_passe: "hunter2".to_owned(),
    };
    let line = form.log_line();
    assert!(line.starts_with("Inscription avec: Rasoa rasoa@example.mg"));
}

#[test]
fn registration_log_line_never_contains_password() {
    let form = RegistrationForm {
        nom: "Rasoa".to_owned(),
        email: "rasoa@example.mg".to_owned(),
        mot_de_passe: "hunter2".to_owned(),
    };
    assert!(!form.log_line().contains("hunter2"));
    assert!(form.log_line().ends_with("[masqué]"));
}

#[test]
fn login_log_line_masks_password() {
    let form = LoginForm { email: "a@b.mg".to_owned(), mot_de_passe: "secret".to_owned() };
    assert_eq!(form.log_line(), "Connexion avec: a@b.mg [masqué]");
}

#[test]
fn forms_default_to_empty_fields() {
    assert_eq!(RegistrationForm::default().nom, "");
    assert_eq!(LoginForm::default().email, "");
}

#[derive(Default)]
struct RecordingSubmit {
    prevented: std::cell::Cell<bool>,
}

impl Submission for RecordingSubmit {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}

#[test]
fn intercepted_submit_prevents_navigation() {
    let ev = RecordingSubmit::default();
    let form = RegistrationForm {
        nom: "Rasoa".to_owned(),
        email: "rasoa@example.mg".to_owned(),
        mot_de_passe: "hunter2".to_owned(),
    };
    intercept_submit(&ev, &form.log_line());
    assert!(ev.prevented.get());
}
