use super::*;

// =============================================================
// Establishment
// =============================================================

#[test]
fn establishment_decodes_full_payload() {
    let json = serde_json::json!({
        "id": 7,
        "nom": "Université d'Antananarivo",
        "adresse": "Ankatso, Antananarivo",
        "type": "Université publique",
        "description": "Plus ancienne université du pays.",
        "nombre_etudiants": 42000,
        "image_url": "https://example.test/ua.jpg",
        "latitude": -18.9186,
        "longitude": 47.5664
    });
    let est: Establishment = serde_json::from_value(json).unwrap();
    assert_eq!(est.id, "7");
    assert_eq!(est.nom, "Université d'Antananarivo");
    assert_eq!(est.adresse.as_deref(), Some("Ankatso, Antananarivo"));
    assert_eq!(est.kind.as_deref(), Some("Université publique"));
    assert_eq!(est.nombre_etudiants, Some(42000));
    assert_eq!(est.latitude, Some(-18.9186));
}

#[test]
fn establishment_missing_optional_fields_default_to_none() {
    let est: Establishment = serde_json::from_str(r#"{"id":"3","nom":"ISPM"}"#).unwrap();
    assert_eq!(est.id, "3");
    assert!(est.adresse.is_none());
    assert!(est.kind.is_none());
    assert!(est.description.is_none());
    assert!(est.nombre_etudiants.is_none());
    assert!(est.image_url.is_none());
}

#[test]
fn establishment_null_student_count_is_none() {
    let est: Establishment = serde_json::from_str(r#"{"id":1,"nombre_etudiants":null}"#).unwrap();
    assert!(est.nombre_etudiants.is_none());
    assert_eq!(est.nom, "");
}

#[test]
fn establishment_integral_float_student_count_accepted() {
    let est: Establishment = serde_json::from_str(r#"{"id":1,"nombre_etudiants":1200.0}"#).unwrap();
    assert_eq!(est.nombre_etudiants, Some(1200));
}

#[test]
fn establishment_without_id_is_rejected() {
    assert!(serde_json::from_str::<Establishment>(r#"{"nom":"ISPM"}"#).is_err());
}

// =============================================================
// User
// =============================================================

#[test]
fn user_list_decodes_in_order() {
    let json = r#"[
        {"id":1,"nom":"Rakoto","email":"rakoto@example.mg"},
        {"id":2,"nom":"Rabe","prenom":"Hery","email":"rabe@example.mg","role":null}
    ]"#;
    let users: Vec<User> = serde_json::from_str(json).unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].nom, "Rakoto");
    assert!(users[0].prenom.is_none());
    assert_eq!(users[1].prenom.as_deref(), Some("Hery"));
    assert_eq!(users[1].email, "rabe@example.mg");
}

// =============================================================
// Statistics
// =============================================================

#[test]
fn trend_point_accepts_numeric_and_string_years() {
    let points: Vec<TrendPoint> =
        serde_json::from_str(r#"[{"annee":2021,"inscriptions":100},{"annee":"2022-2023","inscriptions":150}]"#)
            .unwrap();
    assert_eq!(points[0].annee, "2021");
    assert_eq!(points[1].annee, "2022-2023");
    assert_eq!(points[1].inscriptions, 150);
}

#[test]
fn trend_point_rejects_fractional_count() {
    assert!(serde_json::from_str::<TrendPoint>(r#"{"annee":2021,"inscriptions":1.5}"#).is_err());
}

#[test]
fn university_headcount_decodes() {
    let row: UniversityHeadcount = serde_json::from_str(r#"{"nom":"Université de Toamasina","effectif":9000}"#).unwrap();
    assert_eq!(row.nom, "Université de Toamasina");
    assert_eq!(row.effectif, 9000);
}

#[test]
fn university_headcount_rejects_string_count() {
    assert!(serde_json::from_str::<UniversityHeadcount>(r#"{"nom":"X","effectif":"9000"}"#).is_err());
}

// =============================================================
// Missing and null fields
// =============================================================

#[test]
fn trend_point_missing_fields_default() {
    let points: Vec<TrendPoint> = serde_json::from_str(r#"[{"annee":2021},{"inscriptions":40}]"#).unwrap();
    assert_eq!(points[0].annee, "2021");
    assert_eq!(points[0].inscriptions, 0);
    assert_eq!(points[1].annee, "");
    assert_eq!(points[1].inscriptions, 40);
}

#[test]
fn trend_point_null_fields_default() {
    let point: TrendPoint = serde_json::from_str(r#"{"annee":null,"inscriptions":null}"#).unwrap();
    assert_eq!(point.annee, "");
    assert_eq!(point.inscriptions, 0);
}

#[test]
fn university_headcount_missing_fields_default() {
    let rows: Vec<UniversityHeadcount> = serde_json::from_str(r#"[{"effectif":10},{"nom":"ENS"}]"#).unwrap();
    assert_eq!(rows[0].nom, "");
    assert_eq!(rows[0].effectif, 10);
    assert_eq!(rows[1].nom, "ENS");
    assert_eq!(rows[1].effectif, 0);
}

#[test]
fn university_headcount_null_fields_default() {
    let row: UniversityHeadcount = serde_json::from_str(r#"{"nom":null,"effectif":null}"#).unwrap();
    assert_eq!(row.nom, "");
    assert_eq!(row.effectif, 0);
}

#[test]
fn user_missing_and_null_fields_default() {
    let users: Vec<User> =
        serde_json::from_str(r#"[{"id":1,"email":null},{"id":2,"nom":null},{"id":3}]"#).unwrap();
    assert_eq!(users[0].email, "");
    assert_eq!(users[1].nom, "");
    assert_eq!(users[2].nom, "");
    assert_eq!(users[2].email, "");
}

#[test]
fn establishment_null_name_defaults_to_empty() {
    let est: Establishment = serde_json::from_str(r#"{"id":1,"nom":null}"#).unwrap();
    assert_eq!(est.nom, "");
}
