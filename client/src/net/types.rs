//! Wire DTOs for the directory REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's French JSON keys. Everything except `id`
//! is optional on the wire, so missing keys decode to `None`/defaults instead
//! of failing the whole page. Identifiers and year labels are normalized to
//! strings because the backend emits them as either numbers or strings.
//! Explicit `null` is treated like a missing key: empty string or zero.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A university or school record shown in listing and detail pages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Establishment {
    /// Backend primary key, normalized to a string for route building.
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub id: String,
    /// Display name.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub nom: String,
    /// Postal address, if known.
    #[serde(default)]
    pub adresse: Option<String>,
    /// Establishment type (e.g. `"Université publique"`).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Enrolled student count.
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub nombre_etudiants: Option<i64>,
    /// Image URL shown on the detail page.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Latitude in decimal degrees.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees.
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// A registered user as listed on the management page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub id: String,
    /// Family name.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub nom: String,
    /// Given name, when the backend exposes it.
    #[serde(default)]
    pub prenom: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub email: String,
}

/// One point of the yearly inscription trend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Academic year label (`2021` or `"2021-2022"`).
    #[serde(default, deserialize_with = "deserialize_label")]
    pub annee: String,
    /// Number of inscriptions for that year.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub inscriptions: i64,
}

/// Student headcount for one university.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UniversityHeadcount {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub nom: String,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub effectif: i64,
}

fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}

/// Like [`deserialize_string_or_number`], but `null` becomes an empty label.
fn deserialize_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string, number or null")),
    }
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_opt_i64_from_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    i64_from_value(&value).map(Some).map_err(D::Error::custom)
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(0);
    }
    i64_from_value(&value).map_err(D::Error::custom)
}

fn i64_from_value(value: &serde_json::Value) -> Result<i64, &'static str> {
    let serde_json::Value::Number(number) = value else {
        return Err("expected number");
    };
    if let Some(int) = number.as_i64() {
        return Ok(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= i64::MIN as f64
        && float <= i64::MAX as f64
    {
        return Ok(float as i64);
    }
    Err("expected integer-compatible number")
}
