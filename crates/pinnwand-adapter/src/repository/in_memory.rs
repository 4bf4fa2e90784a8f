//! In-Memory Record Store
//!
//! Keeps one ordered table per record kind. The store is the
//! [`RecordSource`] for the report generator; [`InMemoryRecordMapper`]
//! hands out CRUD access to a single table. Both share the same tables,
//! so writes through a mapper are visible to the source immediately.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use pinnwand_domain::model::record::{Record, RecordId, RecordKind};
use pinnwand_domain::repository::record_mapper::{RecordMapper, RepositoryError};
use pinnwand_domain::repository::record_source::{RecordFilter, RecordSource};
use tracing::debug;

type Table = BTreeMap<RecordId, Record>;
type Tables = HashMap<RecordKind, Table>;

fn read_tables(tables: &RwLock<Tables>) -> Result<RwLockReadGuard<'_, Tables>, RepositoryError> {
    tables.read().map_err(|_| RepositoryError::PersistenceError {
        message: "Failed to acquire read lock".to_string(),
    })
}

fn write_tables(tables: &RwLock<Tables>) -> Result<RwLockWriteGuard<'_, Tables>, RepositoryError> {
    tables.write().map_err(|_| RepositoryError::PersistenceError {
        message: "Failed to acquire write lock".to_string(),
    })
}

/// In-memory record store
///
/// Thread-safe implementation using RwLock. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// CRUD mapper for one table of this store
    pub fn mapper(&self, kind: RecordKind) -> InMemoryRecordMapper {
        InMemoryRecordMapper {
            kind,
            tables: Arc::clone(&self.tables),
        }
    }

    pub fn users(&self) -> InMemoryRecordMapper {
        self.mapper(RecordKind::User)
    }

    pub fn messages(&self) -> InMemoryRecordMapper {
        self.mapper(RecordKind::Message)
    }

    pub fn subscriptions(&self) -> InMemoryRecordMapper {
        self.mapper(RecordKind::Subscription)
    }

    /// Store a record under its own id, assigning one only if it has none.
    ///
    /// Used for loading fixtures whose records reference each other by id.
    pub fn seed(&self, kind: RecordKind, mut record: Record) -> Result<Record, RepositoryError> {
        let mut tables = write_tables(&self.tables)?;
        let table = tables.entry(kind).or_default();

        let id = match record.id() {
            Some(id) if table.contains_key(&id) => {
                return Err(RepositoryError::InvalidRecord {
                    kind,
                    reason: format!("duplicate id {}", id),
                });
            }
            Some(id) => id,
            None => next_id(kind, table)?,
        };

        record.set_id(id);
        table.insert(id, record.clone());
        Ok(record)
    }

    /// Number of records of a kind
    pub fn count(&self, kind: RecordKind) -> Result<usize, RepositoryError> {
        let tables = read_tables(&self.tables)?;
        Ok(tables.get(&kind).map_or(0, BTreeMap::len))
    }
}

impl RecordSource for InMemoryRecordStore {
    fn fetch_records_for(
        &self,
        kind: RecordKind,
        filter: &RecordFilter,
    ) -> Result<Vec<Record>, RepositoryError> {
        let tables = read_tables(&self.tables)?;
        let records: Vec<Record> = tables
            .get(&kind)
            .map(|table| {
                table
                    .values()
                    .filter(|r| filter.matches(r))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        debug!(%kind, ?filter, found = records.len(), "Fetched records");
        Ok(records)
    }
}

/// Highest id in the table + 1, or 1 for an empty table
fn next_id(kind: RecordKind, table: &Table) -> Result<RecordId, RepositoryError> {
    match table.keys().next_back() {
        None => Ok(RecordId::new(1)),
        Some(last) => last.next().ok_or_else(|| RepositoryError::PersistenceError {
            message: format!("no {} id left after {}", kind, last),
        }),
    }
}

/// In-memory mapper for one record kind
#[derive(Debug, Clone)]
pub struct InMemoryRecordMapper {
    kind: RecordKind,
    tables: Arc<RwLock<Tables>>,
}

impl RecordMapper for InMemoryRecordMapper {
    fn kind(&self) -> RecordKind {
        self.kind
    }

    fn find_by_id(&self, id: RecordId) -> Result<Option<Record>, RepositoryError> {
        let tables = read_tables(&self.tables)?;
        Ok(tables.get(&self.kind).and_then(|t| t.get(&id)).cloned())
    }

    fn find_all(&self) -> Result<Vec<Record>, RepositoryError> {
        let tables = read_tables(&self.tables)?;
        Ok(tables
            .get(&self.kind)
            .map(|t| t.values().cloned().collect())
            .unwrap_or_default())
    }

    fn insert(&mut self, mut record: Record) -> Result<Record, RepositoryError> {
        let mut tables = write_tables(&self.tables)?;
        let table = tables.entry(self.kind).or_default();

        // Any id the caller set is replaced
        let id = next_id(self.kind, table)?;
        record.set_id(id);
        table.insert(id, record.clone());

        debug!(kind = %self.kind, %id, "Inserted record");
        Ok(record)
    }

    fn update(&mut self, record: Record) -> Result<Record, RepositoryError> {
        let id = record.id().ok_or_else(|| RepositoryError::InvalidRecord {
            kind: self.kind,
            reason: "cannot update a record without id".to_string(),
        })?;

        let mut tables = write_tables(&self.tables)?;
        let slot = tables
            .get_mut(&self.kind)
            .and_then(|t| t.get_mut(&id))
            .ok_or(RepositoryError::NotFound {
                kind: self.kind,
                id,
            })?;
        *slot = record.clone();

        debug!(kind = %self.kind, %id, "Updated record");
        Ok(record)
    }

    fn delete(&mut self, record: &Record) -> Result<(), RepositoryError> {
        let Some(id) = record.id() else {
            return Ok(());
        };

        let mut tables = write_tables(&self.tables)?;
        if let Some(table) = tables.get_mut(&self.kind) {
            table.remove(&id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinnwand_domain::model::record::{fields, FieldValue};

    fn user(nickname: &str) -> Record {
        Record::new()
            .with_text(fields::NICKNAME, nickname)
            .with_text(fields::FIRST_NAME, "Max")
            .with_text(fields::LAST_NAME, "Mustermann")
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let store = InMemoryRecordStore::new();
        let mut users = store.users();

        let first = users.insert(user("max")).unwrap();
        let second = users
            .insert(user("erika").with_id(RecordId::new(99)))
            .unwrap();

        assert_eq!(first.id(), Some(RecordId::new(1)));
        // Caller-supplied ids are corrected to max + 1
        assert_eq!(second.id(), Some(RecordId::new(2)));
        assert_eq!(store.count(RecordKind::User).unwrap(), 2);
    }

    #[test]
    fn test_find_all_ordered_by_id() {
        let store = InMemoryRecordStore::new();
        store
            .seed(RecordKind::User, user("c").with_id(RecordId::new(3)))
            .unwrap();
        store
            .seed(RecordKind::User, user("a").with_id(RecordId::new(1)))
            .unwrap();

        let all = store.users().find_all().unwrap();
        let nicknames: Vec<_> = all.iter().filter_map(|r| r.text(fields::NICKNAME)).collect();
        assert_eq!(nicknames, vec!["a", "c"]);
    }

    #[test]
    fn test_update_and_delete() {
        let store = InMemoryRecordStore::new();
        let mut users = store.users();

        let mut stored = users.insert(user("max")).unwrap();
        stored.set(fields::EMAIL, FieldValue::Text("max@example.org".into()));
        users.update(stored.clone()).unwrap();

        let found = users.find_by_id(stored.id().unwrap()).unwrap().unwrap();
        assert_eq!(found.text(fields::EMAIL), Some("max@example.org"));

        users.delete(&stored).unwrap();
        assert!(users.find_by_id(stored.id().unwrap()).unwrap().is_none());

        // Deleting again is a no-op
        users.delete(&stored).unwrap();
    }

    #[test]
    fn test_update_unknown_record() {
        let store = InMemoryRecordStore::new();
        let mut messages = store.messages();

        let err = messages
            .update(Record::new().with_id(RecordId::new(5)))
            .unwrap_err();
        assert_eq!(
            err,
            RepositoryError::NotFound {
                kind: RecordKind::Message,
                id: RecordId::new(5),
            }
        );

        let err = messages.update(Record::new()).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidRecord { .. }));
    }

    #[test]
    fn test_seed_rejects_duplicate_ids() {
        let store = InMemoryRecordStore::new();
        store
            .seed(RecordKind::User, user("max").with_id(RecordId::new(1)))
            .unwrap();

        let err = store
            .seed(RecordKind::User, user("other").with_id(RecordId::new(1)))
            .unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidRecord { .. }));
    }

    #[test]
    fn test_id_space_exhausted() {
        let store = InMemoryRecordStore::new();
        store
            .seed(RecordKind::User, user("last").with_id(RecordId::new(u64::MAX)))
            .unwrap();

        let err = store.users().insert(user("max")).unwrap_err();
        assert!(matches!(err, RepositoryError::PersistenceError { .. }));

        let err = store.seed(RecordKind::User, user("erika")).unwrap_err();
        assert!(matches!(err, RepositoryError::PersistenceError { .. }));
        assert_eq!(store.count(RecordKind::User).unwrap(), 1);

        // Other tables are unaffected
        assert!(store.messages().insert(Record::new()).is_ok());
    }

    #[test]
    fn test_fetch_records_with_filter() {
        let store = InMemoryRecordStore::new();
        let mut messages = store.messages();
        for (author, text) in [(1, "Hallo"), (2, "Servus"), (1, "Tschüss")] {
            messages
                .insert(
                    Record::new()
                        .with_ref(fields::AUTHOR_ID, RecordId::new(author))
                        .with_text(fields::TEXT, text),
                )
                .unwrap();
        }

        let filter =
            RecordFilter::field_equals(fields::AUTHOR_ID, FieldValue::Id(RecordId::new(1)));
        let found = store.fetch_records_for(RecordKind::Message, &filter).unwrap();

        let texts: Vec<_> = found.iter().filter_map(|r| r.text(fields::TEXT)).collect();
        assert_eq!(texts, vec!["Hallo", "Tschüss"]);

        // Empty table
        let none = store
            .fetch_records_for(RecordKind::Subscription, &RecordFilter::All)
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_mappers_share_store() {
        let store = InMemoryRecordStore::new();
        let mut users = store.clone().users();
        users.insert(user("max")).unwrap();

        assert_eq!(store.count(RecordKind::User).unwrap(), 1);
        assert_eq!(store.count(RecordKind::Message).unwrap(), 0);
    }
}
