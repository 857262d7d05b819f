use std::collections::{
    HashMap,
    HashSet,
};

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};

use super::Year;

/// Universities and their careers for one admission year, fetched as a unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionsBundle {
    universities: Vec<String>,
    careers_by_university: HashMap<String, Vec<String>>,
}

impl OptionsBundle {
    pub fn new(
        universities: Vec<String>,
        careers_by_university: HashMap<String, Vec<String>>,
    ) -> Self {
        let mut seen = HashSet::new();
        let universities =
            universities.into_iter().filter(|name| seen.insert(name.clone())).collect();

        Self { universities, careers_by_university }
    }

    pub fn universities(&self) -> &[String] {
        &self.universities
    }

    /// Careers offered by `university`; empty when it is not part of this bundle.
    pub fn careers_for(&self, university: &str) -> &[String] {
        self.careers_by_university.get(university).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_university(&self, university: &str) -> bool {
        self.careers_by_university.contains_key(university)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
    pub year: Year,
    #[serde(rename = "universidad")]
    pub university: String,
    #[serde(rename = "carrera")]
    pub career: String,
}

impl QueryRequest {
    pub fn new(year: Year, university: impl Into<String>, career: impl Into<String>) -> Self {
        Self { year, university: university.into(), career: career.into() }
    }
}

/// One career code's outcome. A `found == false` item is valid data, not a failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryResultItem {
    #[serde(rename = "codigo_carrera", deserialize_with = "code_as_string")]
    pub code: String,
    #[serde(rename = "encontrado")]
    pub found: bool,
    #[serde(rename = "puntaje_min", default)]
    pub score_min: Option<f64>,
    #[serde(rename = "puntaje_max", default)]
    pub score_max: Option<f64>,
    #[serde(rename = "columna_usada", default)]
    pub source_column: Option<String>,
    #[serde(rename = "mensaje", default)]
    pub message: Option<String>,
}

impl QueryResultItem {
    pub fn found(code: impl Into<String>, min: f64, max: f64, column: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            found: true,
            score_min: Some(min),
            score_max: Some(max),
            source_column: Some(column.into()),
            message: None,
        }
    }

    pub fn not_found(code: impl Into<String>, message: Option<String>) -> Self {
        Self {
            code: code.into(),
            found: false,
            score_min: None,
            score_max: None,
            source_column: None,
            message,
        }
    }
}

pub type ResultSet = Vec<QueryResultItem>;

// The service emits career codes as integers; older exports used strings.
fn code_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Code::deserialize(deserializer)? {
        Code::Text(text) => text,
        Code::Number(number) => number.to_string(),
    })
}
