//! # Pinnwand Domain Layer
//!
//! The report model and the renderer contract of Pinnwand.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/      - Row, Report, CompositeReport, variants,      ││
//! │  │                Record                                       ││
//! │  │  writer/     - ReportWriter contract + render()             ││
//! │  │  repository/ - Mapper & record source traits                ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reports are built from already fetched records and rendered by a
//! writer. Nothing in here touches storage.

pub mod error;
pub mod model;
pub mod repository;
pub mod writer;

// Re-export commonly used types
pub use error::ReportError;

pub use model::{
    record::{FieldValue, Record, RecordId, RecordKind},
    report::{CompositeReport, Report},
    row::Row,
    variant::{
        AllUsersActivityReport, MessagesOfUserReport, ReportKind, ReportVariant,
        SubscribersOfUserReport, SubscriptionsOfUserReport, UserActivityReport,
    },
};

pub use repository::{
    record_mapper::{RecordMapper, RepositoryError},
    record_source::{RecordFilter, RecordSource},
};

pub use writer::{render, ReportWriter};
