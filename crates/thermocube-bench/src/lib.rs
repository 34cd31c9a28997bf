//! Benchmark profiles for the thermocube diffusion engine.
//!
//! - [`reference_profile`]: 32³ cube (~33K cells), concrete, alpha = 0.1
//! - [`stress_profile`]: 128³ cube (~2.1M cells), same physics
//! - [`profile_with_alpha`]: any size with `dt` chosen for a target alpha

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use thermocube_engine::{GridConfig, PhysicalParams, SimulationConfig};

/// Concrete cube of side `size` with `dt` picked so that `alpha == target`.
pub fn profile_with_alpha(size: usize, target: f64) -> SimulationConfig {
    let mut physics = PhysicalParams::default();
    let l = physics.cell_length(size);
    physics.dt = target * l * l / physics.material.diffusivity();
    SimulationConfig {
        grid: GridConfig {
            size,
            initial_temperature: 20.0,
            bath_temperature: 100.0,
        },
        physics,
        steps_per_frame: 1,
    }
}

/// Reference profile: 32³ cube, alpha = 0.1.
pub fn reference_profile() -> SimulationConfig {
    profile_with_alpha(32, 0.1)
}

/// Stress profile: 128³ cube, alpha = 0.1.
pub fn stress_profile() -> SimulationConfig {
    profile_with_alpha(128, 0.1)
}
