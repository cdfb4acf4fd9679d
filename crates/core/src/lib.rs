//! Domain building blocks shared by the persistence and HTTP layers.
//!
//! Nothing in this crate performs I/O: it holds the common id/time types,
//! the domain error enum, field validation, the date rules applied on
//! create, and search-filter normalisation.

pub mod error;
pub mod schedule;
pub mod search;
pub mod types;
pub mod validation;
