//! Statistic points → Chart.js data objects.
//!
//! The output serializes to the `{ labels, datasets: [{ label, data, ... }] }`
//! shape Chart.js expects, one label and one value per input point, in input
//! order.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use serde::Serialize;

use crate::net::types::{TrendPoint, UniversityHeadcount};

pub const TREND_DATASET_LABEL: &str = "Évolution des inscriptions";
pub const UNIVERSITY_DATASET_LABEL: &str = "Effectifs étudiants";

const TREND_BORDER_COLOR: &str = "rgba(255,99,132,1)";
const UNIVERSITY_BACKGROUND_COLOR: &str = "rgba(75,192,192,0.6)";

/// Chart.js chart type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
        }
    }
}

/// Top-level Chart.js `data` object.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// One Chart.js dataset.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

/// Line-chart data for the yearly inscription trend.
pub fn trend_chart_data(points: &[TrendPoint]) -> ChartData {
    ChartData {
        labels: points.iter().map(|p| p.annee.clone()).collect(),
        datasets: vec![Dataset {
            label: TREND_DATASET_LABEL.to_owned(),
            data: points.iter().map(|p| p.inscriptions).collect(),
            background_color: None,
            border_color: Some(TREND_BORDER_COLOR.to_owned()),
            fill: Some(false),
        }],
    }
}

/// Bar-chart data for per-university headcounts.
pub fn university_chart_data(rows: &[UniversityHeadcount]) -> ChartData {
    ChartData {
        labels: rows.iter().map(|r| r.nom.clone()).collect(),
        datasets: vec![Dataset {
            label: UNIVERSITY_DATASET_LABEL.to_owned(),
            data: rows.iter().map(|r| r.effectif).collect(),
            background_color: Some(UNIVERSITY_BACKGROUND_COLOR.to_owned()),
            border_color: None,
            fill: None,
        }],
    }
}

/// Full `new Chart(canvas, config)` configuration object.
pub fn chart_config(kind: ChartKind, data: &ChartData) -> serde_json::Value {
    serde_json::json!({
        "type": kind.as_str(),
        "data": data,
        "options": { "responsive": true },
    })
}
