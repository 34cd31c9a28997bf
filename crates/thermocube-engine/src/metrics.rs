//! Per-step metrics for the simulation driver.

/// Timing and temperature range recorded after a single step.
///
/// Populated by [`Simulation::step`](crate::Simulation::step); all zero
/// before the first step and after a reset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Step count after this step (1 for the first step).
    pub step: u64,
    /// Coefficient the step ran with.
    pub alpha: f64,
    /// Wall-clock time of the stencil pass, in microseconds.
    pub step_us: u64,
    /// Coldest interior cell after the step.
    pub interior_min: f64,
    /// Hottest interior cell after the step.
    pub interior_max: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.step, 0);
        assert_eq!(m.alpha, 0.0);
        assert_eq!(m.step_us, 0);
        assert_eq!(m.interior_min, 0.0);
        assert_eq!(m.interior_max, 0.0);
    }
}
