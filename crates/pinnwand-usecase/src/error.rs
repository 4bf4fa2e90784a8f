//! Use case errors

use pinnwand_domain::model::record::{RecordId, RecordKind};
use pinnwand_domain::repository::record_mapper::RepositoryError;
use thiserror::Error;

/// Errors while assembling a report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// No user with this id, either requested directly or referenced
    #[error("Unknown user: {id}")]
    UnknownUser { id: RecordId },

    /// A record lacks a field the report needs
    #[error("{kind} record {id} has no field '{field}'")]
    MissingField {
        kind: RecordKind,
        id: String,
        field: &'static str,
    },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
