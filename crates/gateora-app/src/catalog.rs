//! Scenario catalogs: named intents evaluated side by side.

use crate::intent::{intent_from_value, IntentError};
use gateora_domain::model::TransactionIntent;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("scenario catalog is not valid JSON")]
    Parse(#[source] serde_json::Error),

    #[error("scenario catalog has no scenarios")]
    Empty,

    #[error("scenario `{id}` has an invalid intent")]
    InvalidIntent {
        id: String,
        #[source]
        source: IntentError,
    },
}

/// `{"scenarios": [{"id", "name", "tx"}]}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioCatalog {
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub tx: serde_json::Value,
}

impl Scenario {
    pub fn intent(&self) -> Result<TransactionIntent, CatalogError> {
        intent_from_value(self.tx.clone()).map_err(|source| CatalogError::InvalidIntent {
            id: self.id.clone(),
            source,
        })
    }
}

impl ScenarioCatalog {
    /// Scenarios to run: all of them, or the one matching `id`.
    ///
    /// An unknown id selects the first scenario.
    pub fn select(&self, id: Option<&str>) -> Result<Vec<&Scenario>, CatalogError> {
        let first = self.scenarios.first().ok_or(CatalogError::Empty)?;
        Ok(match id {
            None => self.scenarios.iter().collect(),
            Some(id) => vec![self.scenarios.iter().find(|s| s.id == id).unwrap_or(first)],
        })
    }
}

pub fn parse_catalog(text: &str) -> Result<ScenarioCatalog, CatalogError> {
    serde_json::from_str(text).map_err(CatalogError::Parse)
}
