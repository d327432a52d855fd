#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # dcf-entities
//!
//! Reusable, agnostic domain entities for dcfinder.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod location;
pub mod proximity;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
