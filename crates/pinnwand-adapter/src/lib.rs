//! # Pinnwand Adapter Layer
//!
//! Implementations of the domain ports (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `repository/` - Record store: mappers, record source, JSON fixtures
//! - `writer/` - Report writers (plain text, HTML)

pub mod repository;
pub mod writer;

pub use repository::fixture::{Dataset, FixtureError};
pub use repository::in_memory::{InMemoryRecordMapper, InMemoryRecordStore};
pub use writer::html::HtmlReportWriter;
pub use writer::plain_text::PlainTextReportWriter;
