//! Cubic lattice topology for thermocube simulations.
//!
//! [`CubeLattice`] describes a cube of `N × N × N` cells addressed as
//! `[x][y][z]`. It owns no temperatures: it answers indexing, bounds,
//! boundary/interior classification, and face-neighbour queries for the
//! field crate that stores the data.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cube;

pub use cube::CubeLattice;
