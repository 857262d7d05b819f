use std::collections::HashMap;

use serde::Deserialize;

use crate::core::{
    OptionsBundle,
    QueryResultItem,
};

/// Only the `error` field, read before anything else so a service message survives a
/// body that is otherwise not what we expect.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().map(str::trim).filter(|m| !m.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct OptionsResponse {
    pub universidades: Vec<String>,
    pub carreras_por_universidad: HashMap<String, Vec<String>>,
}

impl From<OptionsResponse> for OptionsBundle {
    fn from(response: OptionsResponse) -> Self {
        OptionsBundle::new(response.universidades, response.carreras_por_universidad)
    }
}

#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub resultados: Vec<QueryResultItem>,
}
