//! JSON fixtures - Load a dataset into an in-memory store

use std::path::Path;

use pinnwand_domain::model::record::{Record, RecordKind};
use pinnwand_domain::repository::record_mapper::RepositoryError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use super::in_memory::InMemoryRecordStore;

/// Errors while loading a dataset
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// A complete set of records, one list per kind
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub users: Vec<Record>,
    #[serde(default)]
    pub messages: Vec<Record>,
    #[serde(default)]
    pub subscriptions: Vec<Record>,
}

impl Dataset {
    /// Load a dataset from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        let dataset: Self = serde_json::from_str(&content)?;
        Ok(dataset)
    }

    /// Put every record into a fresh store, keeping fixture ids
    pub fn into_store(self) -> Result<InMemoryRecordStore, FixtureError> {
        let store = InMemoryRecordStore::new();

        for (kind, records) in [
            (RecordKind::User, self.users),
            (RecordKind::Message, self.messages),
            (RecordKind::Subscription, self.subscriptions),
        ] {
            let count = records.len();
            for record in records {
                store.seed(kind, record)?;
            }
            info!(%kind, count, "Loaded records");
        }

        Ok(store)
    }
}
