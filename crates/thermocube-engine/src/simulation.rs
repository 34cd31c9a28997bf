//! Lockstep driver for a heated cube.
//!
//! [`Simulation`] owns a [`DiffusionField`] together with the `alpha`
//! derived from its [`SimulationConfig`]. Each [`step()`](Simulation::step)
//! advances the field once and records [`StepMetrics`].
//!
//! # Reset vs continue
//!
//! Changing the grid (resolution, initial or bath temperature) means a new
//! field: [`reset()`](Simulation::reset) discards the old grid. Changing
//! the physics (material, `dt`, cube edge length) keeps the grid:
//! [`update_physics()`](Simulation::update_physics) only re-derives
//! `alpha`, and the run continues from the current temperatures.
//!
//! # Ownership model
//!
//! `Simulation` is [`Send`]. All mutating methods take `&mut self`, and
//! [`field()`](Simulation::field) borrows from `self`, so a host cannot
//! read the grid while a step runs.

use std::time::Instant;

use thermocube_core::{FieldError, StepId};
use thermocube_field::{is_stable, DiffusionField, MAX_STABLE_ALPHA};

use crate::config::{ConfigError, GridConfig, SimulationConfig};
use crate::metrics::StepMetrics;
use crate::physics::PhysicalParams;

// Compile-time assertion: Simulation can move to a worker thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

fn derive_alpha(physics: &PhysicalParams, size: usize) -> Result<f64, FieldError> {
    let alpha = physics.alpha(size)?;
    if !is_stable(alpha) {
        tracing::warn!(
            alpha,
            max = MAX_STABLE_ALPHA,
            size,
            dt = physics.dt,
            max_stable_dt = physics.max_stable_dt(size),
            "alpha exceeds the explicit stability bound; the run will diverge"
        );
    }
    Ok(alpha)
}

/// Single-threaded heat-diffusion simulation.
///
/// # Example
///
/// ```
/// use thermocube_engine::{Simulation, SimulationConfig};
///
/// let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
/// let metrics = sim.step().unwrap();
/// assert_eq!(metrics.step, 1);
/// assert_eq!(sim.field().temperature_at(0, 0, 0).unwrap(), 100.0);
/// ```
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    field: DiffusionField,
    alpha: f64,
    metrics: StepMetrics,
    elapsed: f64,
}

impl Simulation {
    /// Create a simulation from a [`SimulationConfig`].
    ///
    /// Validates the configuration, builds the field, and derives `alpha`.
    /// An unstable `alpha` is logged but not rejected.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if validation fails, `ResourceExhausted` if
    /// the grid cannot be allocated.
    pub fn new(config: SimulationConfig) -> Result<Self, FieldError> {
        config.validate()?;
        let grid = config.grid;
        let field = DiffusionField::new(grid.size, grid.initial_temperature, grid.bath_temperature)?;
        let alpha = derive_alpha(&config.physics, grid.size)?;
        tracing::debug!(size = grid.size, alpha, "simulation created");
        Ok(Self {
            config,
            field,
            alpha,
            metrics: StepMetrics::default(),
            elapsed: 0.0,
        })
    }

    /// Advance the field by one step with the current `alpha`.
    ///
    /// # Errors
    ///
    /// `ResourceExhausted` if the field's second buffer cannot be
    /// allocated on the first step. Nothing changes in that case.
    pub fn step(&mut self) -> Result<&StepMetrics, FieldError> {
        let start = Instant::now();
        self.field.step(self.alpha)?;
        let step_us = start.elapsed().as_micros() as u64;

        let stats = self.field.interior_stats();
        self.metrics = StepMetrics {
            step: self.field.steps_taken().0,
            alpha: self.alpha,
            step_us,
            interior_min: stats.min,
            interior_max: stats.max,
        };
        self.elapsed += self.config.physics.dt;
        Ok(&self.metrics)
    }

    /// Run `steps_per_frame` steps and return the metrics of the last.
    ///
    /// Stops at the first failing step.
    pub fn advance_frame(&mut self) -> Result<&StepMetrics, FieldError> {
        for _ in 0..self.config.steps_per_frame {
            self.step()?;
        }
        Ok(&self.metrics)
    }

    /// Replace the physical parameters and keep the current grid.
    ///
    /// Only `alpha` is re-derived; temperatures, the step counter, and the
    /// elapsed simulated time carry on.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `physics` fails validation. The previous
    /// parameters stay in effect.
    pub fn update_physics(&mut self, physics: PhysicalParams) -> Result<(), FieldError> {
        physics.validate()?;
        let alpha = derive_alpha(&physics, self.field.size())?;
        tracing::debug!(
            old_alpha = self.alpha,
            new_alpha = alpha,
            step = self.field.steps_taken().0,
            "physics updated, continuing"
        );
        self.config.physics = physics;
        self.alpha = alpha;
        Ok(())
    }

    /// Rebuild the field from `grid` and restart from step 0.
    ///
    /// `alpha` is re-derived for the new resolution with the current
    /// physics. Metrics and elapsed time are cleared.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `grid` fails validation,
    /// `ResourceExhausted` if the new grid cannot be allocated. The
    /// existing simulation is untouched on error.
    pub fn reset(&mut self, grid: GridConfig) -> Result<(), FieldError> {
        grid.validate()?;
        let field = DiffusionField::new(grid.size, grid.initial_temperature, grid.bath_temperature)?;
        let alpha = derive_alpha(&self.config.physics, grid.size)?;
        tracing::debug!(
            size = grid.size,
            alpha,
            discarded_steps = self.field.steps_taken().0,
            "simulation reset"
        );
        self.config.grid = grid;
        self.field = field;
        self.alpha = alpha;
        self.metrics = StepMetrics::default();
        self.elapsed = 0.0;
        Ok(())
    }

    /// Change how many steps [`advance_frame()`](Self::advance_frame) runs.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `steps` is zero.
    pub fn set_steps_per_frame(&mut self, steps: u32) -> Result<(), FieldError> {
        if steps == 0 {
            return Err(ConfigError::ZeroStepsPerFrame.into());
        }
        self.config.steps_per_frame = steps;
        Ok(())
    }

    /// The temperature field.
    pub fn field(&self) -> &DiffusionField {
        &self.field
    }

    /// Coefficient used by the next step.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The configuration currently in effect.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.metrics
    }

    /// Steps since construction or the last reset.
    pub fn steps_taken(&self) -> StepId {
        self.field.steps_taken()
    }

    /// Simulated seconds since construction or the last reset.
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed
    }
}
