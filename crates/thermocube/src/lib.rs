//! Thermocube: transient heat conduction through a cube held in a bath.
//!
//! This is the facade crate that re-exports the public API of the
//! thermocube sub-crates. Most users only need this one dependency.
//!
//! # Quick start
//!
//! ```rust
//! use thermocube::prelude::*;
//!
//! // Direct use of the field: 1 m concrete cube, 5 cells per side.
//! let alpha = compute_alpha(2.0, 2400.0, 1000.0, 0.1, 0.2).unwrap();
//! let mut field = DiffusionField::new(5, 20.0, 100.0).unwrap();
//! field.step(alpha).unwrap();
//! assert_eq!(field.size(), 5);
//! assert!(matches!(
//!     field.temperature_at(5, 0, 0),
//!     Err(FieldError::OutOfRange { .. })
//! ));
//!
//! // The same cube through the driver, switching to copper mid-run.
//! let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
//! sim.advance_frame().unwrap();
//! sim.update_physics(PhysicalParams {
//!     material: Material::copper(),
//!     ..PhysicalParams::default()
//! })
//! .unwrap();
//! sim.step().unwrap();
//! assert_eq!(sim.steps_taken(), StepId(2));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `thermocube-core` | `FieldError`, `Coord3`, `StepId` |
//! | [`space`] | `thermocube-space` | `CubeLattice` indexing and neighbours |
//! | [`field`] | `thermocube-field` | `DiffusionField`, `compute_alpha` |
//! | [`engine`] | `thermocube-engine` | `Simulation`, configuration, materials |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Error type and identifiers (`thermocube-core`).
pub use thermocube_core as types;

/// Cubic lattice topology (`thermocube-space`).
///
/// [`space::CubeLattice`] maps `[x, y, z]` to flat indices and classifies
/// boundary and interior cells.
pub use thermocube_space as space;

/// The temperature field and its stencil (`thermocube-field`).
pub use thermocube_field as field;

/// Simulation driver, configuration, and materials (`thermocube-engine`).
///
/// [`engine::Simulation`] separates a reset (new grid) from a continue
/// (new physics, same grid).
pub use thermocube_engine as engine;

/// Common imports for typical thermocube usage.
///
/// ```rust
/// use thermocube::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use thermocube_core::{Coord3, FieldError, StepId};

    // Space
    pub use thermocube_space::CubeLattice;

    // Field
    pub use thermocube_field::{
        compute_alpha, is_stable, DiffusionField, FieldSnapshot, InteriorStats, MAX_STABLE_ALPHA,
    };

    // Engine
    pub use thermocube_engine::{
        ConfigError, GridConfig, Material, MaterialLibrary, PhysicalParams, Simulation,
        SimulationConfig, StepMetrics,
    };
}
