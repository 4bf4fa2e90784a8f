//! Record Mapper - Abstract CRUD persistence for one record kind
//!
//! One mapper per table (users, messages, subscriptions). The domain
//! only needs this contract; where the rows actually live is the
//! adapter's concern.

use thiserror::Error;

use crate::model::record::{Record, RecordId, RecordKind};

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No record with this id
    #[error("{kind} record not found: {id}")]
    NotFound { kind: RecordKind, id: RecordId },

    /// Failed to persist or read
    #[error("Persistence error: {message}")]
    PersistenceError { message: String },

    /// The record cannot be stored as given
    #[error("Invalid {kind} record: {reason}")]
    InvalidRecord { kind: RecordKind, reason: String },
}

/// Record Mapper Trait
///
/// This is a PORT in hexagonal architecture.
/// Mappers are constructed explicitly and passed to whoever needs them;
/// there is no process-wide instance.
pub trait RecordMapper {
    /// The table this mapper works on
    fn kind(&self) -> RecordKind;

    /// Find a record by primary key
    fn find_by_id(&self, id: RecordId) -> Result<Option<Record>, RepositoryError>;

    /// All records, ordered by id
    fn find_all(&self) -> Result<Vec<Record>, RepositoryError>;

    /// Insert a record; the returned copy carries the assigned id
    /// (highest existing id + 1)
    fn insert(&mut self, record: Record) -> Result<Record, RepositoryError>;

    /// Overwrite an existing record
    fn update(&mut self, record: Record) -> Result<Record, RepositoryError>;

    /// Delete a record; unknown ids are ignored
    fn delete(&mut self, record: &Record) -> Result<(), RepositoryError>;

    /// Check if a record exists
    fn exists(&self, id: RecordId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id)?.is_some())
    }
}
