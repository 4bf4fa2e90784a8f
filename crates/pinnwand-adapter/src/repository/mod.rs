//! Persistence Adapters - Repository implementations
//!
//! These implement the mapper and record source traits from
//! pinnwand-domain.

pub mod fixture;
pub mod in_memory;
