use super::*;

fn trend(annee: &str, inscriptions: i64) -> TrendPoint {
    TrendPoint { annee: annee.to_owned(), inscriptions }
}

fn headcount(nom: &str, effectif: i64) -> UniversityHeadcount {
    UniversityHeadcount { nom: nom.to_owned(), effectif }
}

// =============================================================
// trend_chart_data
// =============================================================

#[test]
fn trend_data_has_one_label_and_value_per_point_in_order() {
    let points = vec![trend("2019", 100), trend("2020", 80), trend("2021", 130)];
    let data = trend_chart_data(&points);
    assert_eq!(data.labels, vec!["2019", "2020", "2021"]);
    assert_eq!(data.datasets.len(), 1);
    assert_eq!(data.datasets[0].data, vec![100, 80, 130]);
}

#[test]
fn trend_data_keeps_input_order_even_when_unsorted() {
    let points = vec![trend("2022", 1), trend("2018", 2)];
    let data = trend_chart_data(&points);
    assert_eq!(data.labels, vec!["2022", "2018"]);
    assert_eq!(data.datasets[0].data, vec![1, 2]);
}

#[test]
fn trend_data_for_empty_input_is_empty() {
    let data = trend_chart_data(&[]);
    assert!(data.labels.is_empty());
    assert!(data.datasets[0].data.is_empty());
}

#[test]
fn trend_dataset_is_unfilled_line() {
    let data = trend_chart_data(&[trend("2020", 1)]);
    let dataset = &data.datasets[0];
    assert_eq!(dataset.label, TREND_DATASET_LABEL);
    assert_eq!(dataset.fill, Some(false));
    assert_eq!(dataset.border_color.as_deref(), Some("rgba(255,99,132,1)"));
}

// =============================================================
// university_chart_data
// =============================================================

#[test]
fn university_data_has_one_label_and_value_per_row_in_order() {
    let rows: Vec<_> = (0..5).map(|i| headcount(&format!("U{i}"), i * 1000)).collect();
    let data = university_chart_data(&rows);
    assert_eq!(data.labels.len(), 5);
    assert_eq!(data.datasets[0].data.len(), 5);
    assert_eq!(data.labels[3], "U3");
    assert_eq!(data.datasets[0].data[3], 3000);
}

#[test]
fn university_dataset_serializes_in_chartjs_shape() {
    let data = university_chart_data(&[headcount("Université de Mahajanga", 7000)]);
    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "labels": ["Université de Mahajanga"],
            "datasets": [{
                "label": "Effectifs étudiants",
                "data": [7000],
                "backgroundColor": "rgba(75,192,192,0.6)"
            }]
        })
    );
}

// =============================================================
// chart_config
// =============================================================

#[test]
fn chart_config_sets_type_and_data() {
    let data = trend_chart_data(&[trend("2020", 5)]);
    let config = chart_config(ChartKind::Line, &data);
    assert_eq!(config["type"], "line");
    assert_eq!(config["data"]["labels"], serde_json::json!(["2020"]));
    assert_eq!(config["options"]["responsive"], true);
}

#[test]
fn chart_kind_names_match_chartjs() {
    assert_eq!(ChartKind::Line.as_str(), "line");
    assert_eq!(ChartKind::Bar.as_str(), "bar");
}
