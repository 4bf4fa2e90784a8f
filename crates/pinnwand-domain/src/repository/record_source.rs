//! Record Source - Read-only query port used by the report generator
//!
//! The generator only ever asks "give me the records of this kind that
//! match this filter". It performs no I/O of its own.

use crate::model::record::{FieldValue, Record, RecordKind};
use crate::repository::record_mapper::RepositoryError;

/// Which records to fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFilter {
    /// Every record of the kind
    All,
    /// Records whose field equals the value
    FieldEquals { field: String, value: FieldValue },
}

impl RecordFilter {
    pub fn field_equals(field: impl Into<String>, value: FieldValue) -> Self {
        RecordFilter::FieldEquals {
            field: field.into(),
            value,
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self {
            RecordFilter::All => true,
            RecordFilter::FieldEquals { field, value } => record.get(field) == Some(value),
        }
    }
}

/// Record Source Trait
///
/// This is a PORT in hexagonal architecture.
/// Results are ordered by record id.
pub trait RecordSource {
    fn fetch_records_for(
        &self,
        kind: RecordKind,
        filter: &RecordFilter,
    ) -> Result<Vec<Record>, RepositoryError>;
}
