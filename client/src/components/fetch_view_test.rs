use super::*;

#[cfg(feature = "ssr")]
#[test]
fn loading_renders_placeholder() {
    let owner = Owner::new();
    owner.with(|| {
        let html = fetch_view(FetchState::<String>::Loading, |text| view! { <span>{text}</span> }).to_html();
        assert!(html.contains("Chargement..."));
        assert!(!html.contains("fetch-status--error"));
    });
}

#[cfg(feature = "ssr")]
#[test]
fn failure_renders_error_class_and_message() {
    let owner = Owner::new();
    owner.with(|| {
        let state = FetchState::<String>::from_resource(Some(Err("timeout".to_owned())));
        let html = fetch_view(state, |text| view! { <span>{text}</span> }).to_html();
        assert!(html.contains("fetch-status--error"));
        assert!(html.contains("Erreur lors du chargement des données."));
        assert!(!html.contains("timeout"));
    });
}

#[cfg(feature = "ssr")]
#[test]
fn loaded_renders_only_the_data() {
    let owner = Owner::new();
    owner.with(|| {
        let html = fetch_view(FetchState::Loaded("Ankatso".to_owned()), |text| view! { <span>{text}</span> }).to_html();
        assert!(html.contains("Ankatso"));
        assert!(!html.contains("fetch-status"));
    });
}
