//! Built-in demo dataset, used when no `--data` file is given

use chrono::{NaiveDate, NaiveDateTime};
use pinnwand_adapter::InMemoryRecordStore;
use pinnwand_domain::model::record::{fields, Record, RecordId};
use pinnwand_domain::{RecordMapper, RepositoryError};

fn at(month: u32, day: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2024, month, day)?.and_hms_opt(hour, minute, 0)
}

fn timestamp(
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Result<NaiveDateTime, RepositoryError> {
    at(month, day, hour, minute).ok_or_else(|| RepositoryError::PersistenceError {
        message: format!("invalid demo date 2024-{:02}-{:02}", month, day),
    })
}

/// Three users, a handful of messages and subscriptions
pub fn demo_store() -> Result<InMemoryRecordStore, RepositoryError> {
    let store = InMemoryRecordStore::new();

    let mut users = store.users();
    for (nickname, first, last, email) in [
        ("max", "Max", "Mustermann", "max@example.org"),
        ("erika", "Erika", "Musterfrau", "erika@example.org"),
        ("jonas", "Jonas", "Beispiel", "jonas@example.org"),
    ] {
        users.insert(
            Record::new()
                .with_text(fields::NICKNAME, nickname)
                .with_text(fields::FIRST_NAME, first)
                .with_text(fields::LAST_NAME, last)
                .with_text(fields::EMAIL, email),
        )?;
    }

    let mut messages = store.messages();
    for (author, text, created) in [
        (1, "Hallo Pinnwand!", timestamp(3, 1, 9, 15)?),
        (2, "Wer kommt heute zur Vorlesung?", timestamp(3, 1, 10, 2)?),
        (1, "Projektabgabe ist am Freitag.", timestamp(3, 4, 16, 40)?),
        (3, "Mensa hat heute Maultaschen.", timestamp(3, 5, 11, 30)?),
    ] {
        messages.insert(
            Record::new()
                .with_ref(fields::AUTHOR_ID, RecordId::new(author))
                .with_text(fields::TEXT, text)
                .with_timestamp(fields::CREATED, created),
        )?;
    }

    let mut subscriptions = store.subscriptions();
    for (subscriber, target, created) in [
        (2, 1, timestamp(2, 20, 8, 0)?),
        (3, 1, timestamp(2, 21, 19, 45)?),
        (1, 2, timestamp(2, 22, 12, 10)?),
    ] {
        subscriptions.insert(
            Record::new()
                .with_ref(fields::SUBSCRIBER_ID, RecordId::new(subscriber))
                .with_ref(fields::TARGET_USER_ID, RecordId::new(target))
                .with_timestamp(fields::CREATED, created),
        )?;
    }

    Ok(store)
}
