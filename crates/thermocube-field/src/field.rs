//! The temperature field of a cube immersed in a bath.
//!
//! [`DiffusionField`] is the single owner of the grid. It is [`Send`] but
//! every mutating method takes `&mut self`, so a host cannot read the
//! grid while a step is in progress. Hosts that render on another thread
//! take a [`FieldSnapshot`] per frame and keep stepping.

use thermocube_core::{FieldError, StepId};
use thermocube_space::CubeLattice;

use crate::buffer::{try_filled, try_with_capacity, PingPongBuffer};
use crate::stencil;

// Compile-time assertion: fields can be moved to a simulation thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<DiffusionField>();
        assert_send::<FieldSnapshot>();
    }
};

fn ensure_finite(name: &str, value: f64) -> Result<(), FieldError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FieldError::invalid(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

// ── InteriorStats ───────────────────────────────────────────────

/// Summary of the interior (evolving) temperatures.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteriorStats {
    /// Coldest interior cell.
    pub min: f64,
    /// Hottest interior cell.
    pub max: f64,
    /// Arithmetic mean over all interior cells.
    pub mean: f64,
}

// ── DiffusionField ──────────────────────────────────────────────

/// A cubic temperature grid with fixed-temperature (Dirichlet) faces.
///
/// Every boundary cell holds the bath temperature from construction
/// onward; [`step`](Self::step) only ever writes interior cells, and
/// computes all of them from the pre-step time level.
///
/// # Example
///
/// ```
/// use thermocube_field::DiffusionField;
///
/// // One interior cell at 0°, bath at 10°.
/// let mut field = DiffusionField::new(3, 0.0, 10.0).unwrap();
/// field.step(1.0 / 6.0).unwrap();
/// let centre = field.temperature_at(1, 1, 1).unwrap();
/// assert!((centre - 10.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct DiffusionField {
    lattice: CubeLattice,
    bath_temperature: f64,
    buffers: PingPongBuffer,
    step: StepId,
    last_alpha: Option<f64>,
}

impl DiffusionField {
    /// Create a field of side `size` with a uniform interior.
    ///
    /// Boundary cells are set to `bath_temperature`, interior cells to
    /// `initial_temperature`.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` if `size < 3` or either temperature is
    ///   NaN or infinite.
    /// - `ResourceExhausted` if the grid cannot be allocated.
    pub fn new(
        size: usize,
        initial_temperature: f64,
        bath_temperature: f64,
    ) -> Result<Self, FieldError> {
        ensure_finite("initial temperature", initial_temperature)?;
        Self::from_interior_fn(size, bath_temperature, |_, _, _| initial_temperature)
    }

    /// Create a field of side `size` whose interior cell `[x, y, z]`
    /// starts at `init(x, y, z)`.
    ///
    /// `init` is called once per interior cell in `[x][y][z]` order and
    /// never for boundary cells.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new); a non-finite value returned by `init`
    /// is `InvalidConfiguration`.
    pub fn from_interior_fn<F>(
        size: usize,
        bath_temperature: f64,
        mut init: F,
    ) -> Result<Self, FieldError>
    where
        F: FnMut(usize, usize, usize) -> f64,
    {
        let lattice = CubeLattice::new(size)?;
        ensure_finite("bath temperature", bath_temperature)?;

        let mut grid = try_filled(lattice.cell_count(), bath_temperature)?;
        for i in lattice.interior_indices() {
            let [x, y, z] = lattice.coords(i);
            let value = init(x, y, z);
            if !value.is_finite() {
                return Err(FieldError::invalid(format!(
                    "interior temperature at {:?} must be finite, got {value}",
                    [x, y, z]
                )));
            }
            grid[i] = value;
        }

        tracing::debug!(
            size,
            cells = lattice.cell_count(),
            bath_temperature,
            "temperature field created"
        );

        Ok(Self {
            lattice,
            bath_temperature,
            buffers: PingPongBuffer::new(grid),
            step: StepId(0),
            last_alpha: None,
        })
    }

    /// Advance every interior cell by one explicit time step.
    ///
    /// All reads come from the grid as it was when the call began. The
    /// first call allocates the second time-level buffer; later calls
    /// reuse it and never allocate.
    ///
    /// `alpha` is not validated: values above
    /// [`MAX_STABLE_ALPHA`](crate::MAX_STABLE_ALPHA) are accepted and
    /// diverge. A NaN or infinite `alpha` is accepted too and turns every
    /// interior cell non-finite; boundary cells keep the bath temperature.
    ///
    /// # Errors
    ///
    /// `ResourceExhausted` if the second buffer cannot be allocated. The
    /// grid, step counter, and last alpha are then unchanged.
    pub fn step(&mut self, alpha: f64) -> Result<(), FieldError> {
        self.step_with(alpha, try_with_capacity)
    }

    fn step_with<A>(&mut self, alpha: f64, alloc: A) -> Result<(), FieldError>
    where
        A: FnOnce(usize) -> Result<Vec<f64>, FieldError>,
    {
        self.buffers.prepare_back_with(alloc)?;
        {
            let (prev, next) = self.buffers.split();
            stencil::jacobi_step(&self.lattice, prev, next, alpha);
        }
        self.buffers.swap();
        self.step = self.step.next();
        self.last_alpha = Some(alpha);
        tracing::trace!(step = self.step.0, alpha, "field stepped");
        Ok(())
    }

    /// Temperature of cell `[x, y, z]`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if any coordinate is outside `[0, size)`.
    pub fn temperature_at(&self, x: usize, y: usize, z: usize) -> Result<f64, FieldError> {
        let i = self.lattice.checked_index(x, y, z)?;
        Ok(self.buffers.front()[i])
    }

    /// Side length of the cube.
    pub fn size(&self) -> usize {
        self.lattice.size()
    }

    /// The lattice this field is laid out on.
    pub fn lattice(&self) -> &CubeLattice {
        &self.lattice
    }

    /// Temperature held by every boundary cell.
    pub fn bath_temperature(&self) -> f64 {
        self.bath_temperature
    }

    /// Number of completed steps since construction.
    pub fn steps_taken(&self) -> StepId {
        self.step
    }

    /// The `alpha` passed to the most recent step, `None` before the first.
    pub fn last_alpha(&self) -> Option<f64> {
        self.last_alpha
    }

    /// The current time level as a flat `[x][y][z]` slice.
    pub fn as_slice(&self) -> &[f64] {
        self.buffers.front()
    }

    /// Owned copy of the current time level.
    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            lattice: self.lattice,
            step: self.step,
            data: self.buffers.front().to_vec(),
        }
    }

    /// Copy of the current time level as nested `[x][y][z]` vectors.
    pub fn to_nested(&self) -> Vec<Vec<Vec<f64>>> {
        let n = self.size();
        self.buffers
            .front()
            .chunks_exact(n * n)
            .map(|plane| plane.chunks_exact(n).map(<[f64]>::to_vec).collect())
            .collect()
    }

    /// Minimum, maximum, and mean of the interior temperatures.
    pub fn interior_stats(&self) -> InteriorStats {
        let data = self.buffers.front();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for i in self.lattice.interior_indices() {
            let t = data[i];
            min = min.min(t);
            max = max.max(t);
            sum += t;
        }
        InteriorStats {
            min,
            max,
            mean: sum / self.lattice.interior_count() as f64,
        }
    }

    /// Largest absolute discrete Laplacian over the interior.
    ///
    /// Zero at steady state; one step changes any cell by at most
    /// `alpha * residual()`.
    pub fn residual(&self) -> f64 {
        let data = self.buffers.front();
        self.lattice
            .interior_indices()
            .map(|i| {
                let [x, y, z] = self.lattice.coords(i);
                stencil::laplacian_at(&self.lattice, data, x, y, z).abs()
            })
            .fold(0.0, f64::max)
    }
}

// ── FieldSnapshot ───────────────────────────────────────────────

/// An owned, immutable copy of one time level of a [`DiffusionField`].
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSnapshot {
    lattice: CubeLattice,
    step: StepId,
    data: Vec<f64>,
}

impl FieldSnapshot {
    /// Temperature of cell `[x, y, z]` at the captured step.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if any coordinate is outside `[0, size)`.
    pub fn temperature_at(&self, x: usize, y: usize, z: usize) -> Result<f64, FieldError> {
        let i = self.lattice.checked_index(x, y, z)?;
        Ok(self.data[i])
    }

    /// Side length of the cube.
    pub fn size(&self) -> usize {
        self.lattice.size()
    }

    /// Step at which the snapshot was taken.
    pub fn step(&self) -> StepId {
        self.step
    }

    /// The captured grid as a flat `[x][y][z]` slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}
