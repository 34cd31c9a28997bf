//! Core types for the thermocube heat-conduction engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the identifiers and error types shared by the lattice, field, and
//! engine crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::FieldError;
pub use id::{Coord3, StepId};
