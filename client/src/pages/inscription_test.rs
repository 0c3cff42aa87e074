use super::*;

#[cfg(feature = "ssr")]
#[test]
fn form_renders_three_required_inputs() {
    let owner = Owner::new();
    owner.with(|| {
        let html = view! { <InscriptionPage/> }.to_html();
        assert_eq!(html.matches("<input").count(), 3);
        assert_eq!(html.matches("required").count(), 3);
        assert!(html.contains(r#"placeholder="Nom""#));
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"type="password""#));
    });
}

#[cfg(feature = "ssr")]
#[test]
fn form_has_no_submit_target() {
    let owner = Owner::new();
    owner.with(|| {
        let html = view! { <InscriptionPage/> }.to_html();
        assert!(!html.contains("action="));
        assert!(html.contains(r#"type="submit""#));
    });
}
