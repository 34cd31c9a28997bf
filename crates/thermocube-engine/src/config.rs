//! Simulation configuration, validation, and error types.
//!
//! [`SimulationConfig`] is the input for constructing a
//! [`Simulation`](crate::Simulation). It splits into a [`GridConfig`]
//! (changing it requires a reset) and [`PhysicalParams`] (changing it
//! only re-derives `alpha`).

use std::error::Error;
use std::fmt;

use thermocube_core::FieldError;
use thermocube_space::CubeLattice;

use crate::physics::PhysicalParams;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimulationConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid side length leaves no interior cell.
    GridTooSmall {
        /// The configured size.
        size: usize,
    },
    /// A temperature is NaN or infinite.
    NonFiniteTemperature {
        /// Which temperature (`"initial"` or `"bath"`).
        which: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// A material property is out of range.
    InvalidMaterial {
        /// Description of the violated constraint.
        reason: String,
    },
    /// `dt` is NaN, infinite, zero, or negative.
    InvalidTimeStep {
        /// The invalid value.
        value: f64,
    },
    /// `edge_length` is NaN, infinite, zero, or negative.
    InvalidEdgeLength {
        /// The invalid value.
        value: f64,
    },
    /// `steps_per_frame` is zero.
    ZeroStepsPerFrame,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { size } => write!(
                f,
                "grid size {size} is below minimum of {}",
                CubeLattice::MIN_SIZE
            ),
            Self::NonFiniteTemperature { which, value } => {
                write!(f, "{which} temperature must be finite, got {value}")
            }
            Self::InvalidMaterial { reason } => write!(f, "invalid material: {reason}"),
            Self::InvalidTimeStep { value } => {
                write!(f, "dt must be finite and positive, got {value}")
            }
            Self::InvalidEdgeLength { value } => {
                write!(f, "edge_length must be finite and positive, got {value}")
            }
            Self::ZeroStepsPerFrame => write!(f, "steps_per_frame must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

impl From<ConfigError> for FieldError {
    fn from(e: ConfigError) -> Self {
        FieldError::InvalidConfiguration {
            reason: e.to_string(),
        }
    }
}

// ── GridConfig ─────────────────────────────────────────────────────

/// Resolution and temperatures of the cube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Cells per side. Default: 5.
    pub size: usize,
    /// Initial temperature of every interior cell. Default: 20.0.
    pub initial_temperature: f64,
    /// Fixed temperature of every boundary cell. Default: 100.0.
    pub bath_temperature: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 5,
            initial_temperature: 20.0,
            bath_temperature: 100.0,
        }
    }
}

impl GridConfig {
    /// Check the size and that both temperatures are finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < CubeLattice::MIN_SIZE {
            return Err(ConfigError::GridTooSmall { size: self.size });
        }
        if !self.initial_temperature.is_finite() {
            return Err(ConfigError::NonFiniteTemperature {
                which: "initial",
                value: self.initial_temperature,
            });
        }
        if !self.bath_temperature.is_finite() {
            return Err(ConfigError::NonFiniteTemperature {
                which: "bath",
                value: self.bath_temperature,
            });
        }
        Ok(())
    }
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Complete configuration for a [`Simulation`](crate::Simulation).
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Grid resolution and temperatures.
    pub grid: GridConfig,
    /// Material, time step, and cube dimensions.
    pub physics: PhysicalParams,
    /// Steps run by each [`advance_frame`](crate::Simulation::advance_frame).
    /// Default: 1.
    pub steps_per_frame: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            physics: PhysicalParams::default(),
            steps_per_frame: 1,
        }
    }
}

impl SimulationConfig {
    /// Check grid, physics, and cadence.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        self.physics.validate()?;
        if self.steps_per_frame == 0 {
            return Err(ConfigError::ZeroStepsPerFrame);
        }
        Ok(())
    }
}
