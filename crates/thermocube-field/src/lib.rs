//! Explicit heat diffusion on a cube with a fixed-temperature bath.
//!
//! [`DiffusionField`] owns the temperature grid of a [`CubeLattice`] and
//! advances it with the 7-point Jacobi stencil
//!
//! ```text
//! T'(x,y,z) = T + alpha * (T(x±1) + T(y±1) + T(z±1) - 6T)
//! ```
//!
//! reading only the pre-step time level. Boundary cells hold the bath
//! temperature for the field's whole lifetime.
//!
//! [`compute_alpha`] lumps material properties, time step, and mesh
//! spacing into the per-step coefficient. The field takes `alpha` on
//! every [`step`](DiffusionField::step), so callers may change physical
//! parameters mid-run without rebuilding the grid.
//!
//! # Example
//!
//! ```
//! use thermocube_field::{compute_alpha, DiffusionField, MAX_STABLE_ALPHA};
//!
//! let alpha = compute_alpha(2.0, 2400.0, 1000.0, 0.1, 0.2).unwrap();
//! assert!(alpha <= MAX_STABLE_ALPHA);
//!
//! let mut field = DiffusionField::new(5, 20.0, 100.0).unwrap();
//! for _ in 0..10 {
//!     field.step(alpha).unwrap();
//! }
//! assert_eq!(field.temperature_at(0, 2, 2).unwrap(), 100.0);
//! assert!(field.temperature_at(2, 2, 2).unwrap() >= 20.0);
//! ```
//!
//! [`CubeLattice`]: thermocube_space::CubeLattice

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alpha;
mod buffer;
pub mod field;
mod stencil;

pub use alpha::{compute_alpha, is_stable, MAX_STABLE_ALPHA};
pub use field::{DiffusionField, FieldSnapshot, InteriorStats};
