//! seeshu-core
//!
//! Pure domain types for the Seeshu newborn pneumonia-care system.
//! No I/O and no scoring logic — this is the shared vocabulary every
//! other crate speaks.

pub mod error;
pub mod models;
