//! Record - A row fetched from the collaborator
//!
//! Records are what the data-access layer hands back: an optional id plus
//! a map from field name to value. Reports are assembled from records;
//! they never talk to storage themselves.

use core::fmt;
use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Primary key of a record, unique per [`RecordKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The id following this one, `None` past `u64::MAX`
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which table a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    User,
    Message,
    Subscription,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::User => write!(f, "user"),
            RecordKind::Message => write!(f, "message"),
            RecordKind::Subscription => write!(f, "subscription"),
        }
    }
}

/// Field names used by the collaborator, per record kind
pub mod fields {
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const NICKNAME: &str = "nickname";
    pub const EMAIL: &str = "email";

    pub const AUTHOR_ID: &str = "author_id";
    pub const TEXT: &str = "text";
    pub const CREATED: &str = "created";

    pub const SUBSCRIBER_ID: &str = "subscriber_id";
    pub const TARGET_USER_ID: &str = "target_user_id";
}

/// A single field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    Timestamp(NaiveDateTime),
    /// Reference to another record
    Id(RecordId),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S")),
            FieldValue::Id(id) => write!(f, "{}", id),
        }
    }
}

/// A fetched record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default)]
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Create a record without id (not yet inserted)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the id
    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = Some(id);
        self
    }

    /// Builder: set a text field
    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), FieldValue::Text(value.into()));
        self
    }

    /// Builder: set a timestamp field
    pub fn with_timestamp(mut self, name: impl Into<String>, value: NaiveDateTime) -> Self {
        self.fields.insert(name.into(), FieldValue::Timestamp(value));
        self
    }

    /// Builder: set a reference field
    pub fn with_ref(mut self, name: impl Into<String>, id: RecordId) -> Self {
        self.fields.insert(name.into(), FieldValue::Id(id));
        self
    }

    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    pub fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    pub fn set(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Text field, `None` if missing or of another type
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(FieldValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn timestamp(&self, name: &str) -> Option<NaiveDateTime> {
        match self.fields.get(name) {
            Some(FieldValue::Timestamp(ts)) => Some(*ts),
            _ => None,
        }
    }

    pub fn reference(&self, name: &str) -> Option<RecordId> {
        match self.fields.get(name) {
            Some(FieldValue::Id(id)) => Some(*id),
            _ => None,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_typed_accessors() {
        let record = Record::new()
            .with_id(RecordId::new(7))
            .with_text(fields::TEXT, "Hallo")
            .with_timestamp(fields::CREATED, ts())
            .with_ref(fields::AUTHOR_ID, RecordId::new(1));

        assert_eq!(record.id(), Some(RecordId::new(7)));
        assert_eq!(record.text(fields::TEXT), Some("Hallo"));
        assert_eq!(record.timestamp(fields::CREATED), Some(ts()));
        assert_eq!(record.reference(fields::AUTHOR_ID), Some(RecordId::new(1)));

        // Wrong type reads as missing
        assert_eq!(record.text(fields::CREATED), None);
        assert_eq!(record.reference(fields::TEXT), None);
    }

    #[test]
    fn test_next_id() {
        assert_eq!(RecordId::new(7).next(), Some(RecordId::new(8)));
        assert_eq!(RecordId::new(u64::MAX).next(), None);
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Text("x".into()).to_string(), "x");
        assert_eq!(FieldValue::Timestamp(ts()).to_string(), "2024-03-05 09:30:00");
        assert_eq!(FieldValue::Id(RecordId::new(42)).to_string(), "42");
    }

    #[test]
    fn test_record_json_shape() {
        let json = r#"{
            "id": 3,
            "fields": {
                "text": { "text": "Guten Morgen" },
                "author_id": { "id": 1 },
                "created": { "timestamp": "2024-03-05T09:30:00" }
            }
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id(), Some(RecordId::new(3)));
        assert_eq!(record.text(fields::TEXT), Some("Guten Morgen"));
        assert_eq!(record.reference(fields::AUTHOR_ID), Some(RecordId::new(1)));
        assert_eq!(record.timestamp(fields::CREATED), Some(ts()));
    }
}
