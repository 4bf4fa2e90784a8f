//! Domain Models - The vocabulary of Pinnwand reporting
//!
//! Rows and reports form the report tree; records are what the
//! collaborator hands back before a report is assembled.

pub mod record;
pub mod report;
pub mod row;
pub mod variant;
