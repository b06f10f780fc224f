//! Compiled-in reference tables of the Dodona Thessalian corpus.
//!
//! The data is immutable for the process lifetime. [`dataset()`] hands out a
//! shared reference; [`validate`] checks the cross-table invariants that the
//! tables are expected to satisfy.

mod dataset;
mod validate;

pub use dataset::dataset;
pub use validate::{validate, ValidationIssue, ValidationReport};
