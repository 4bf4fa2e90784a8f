//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define how the domain wants to read and write records,
//! but NOT how it's actually done. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait RecordMapper    │  InMemoryRecordMapper
//!   fn insert()         │
//!   fn find_by_id()     │
//! trait RecordSource    │  InMemoryRecordStore
//!   fn fetch_records_for│
//! ```

pub mod record_mapper;
pub mod record_source;
