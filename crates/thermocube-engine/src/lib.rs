//! Simulation driver for a heated cube.
//!
//! Wraps a [`DiffusionField`](thermocube_field::DiffusionField) with the
//! physical parameters that produce its `alpha`, validated configuration,
//! and per-step metrics. The [`Simulation`] distinguishes a *reset*
//! (new grid) from a *continue* (new physics on the existing grid).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod physics;
pub mod simulation;

pub use config::{ConfigError, GridConfig, SimulationConfig};
pub use metrics::StepMetrics;
pub use physics::{Material, MaterialLibrary, PhysicalParams};
pub use simulation::Simulation;
