//! # Pinnwand Use Case Layer
//!
//! Application-specific business rules.
//! This layer pulls records from the collaborator and assembles them
//! into the report variants of the domain. Rendering stays with the
//! writers.

pub mod error;
pub mod report_generator;

pub use pinnwand_domain;

pub use error::GeneratorError;
pub use report_generator::ReportGenerator;
