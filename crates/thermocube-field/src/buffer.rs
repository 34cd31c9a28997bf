//! Double-buffered temperature storage.
//!
//! [`PingPongBuffer`] keeps two grids of equal length. The *front* grid
//! is the current time level and the only one callers ever see; the
//! *back* grid receives the next time level during a step. After the
//! step the roles swap, so no grid is ever copied or reallocated once
//! both exist.
//!
//! The back grid is allocated lazily, on the first step, as a copy of
//! the front grid. Cells that a step never writes (the Dirichlet
//! boundary) therefore hold the same values in both grids forever.

use thermocube_core::FieldError;

/// Reserve an empty grid with room for exactly `len` cells.
pub(crate) fn try_with_capacity(len: usize) -> Result<Vec<f64>, FieldError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| FieldError::ResourceExhausted { requested: len })?;
    Ok(buf)
}

/// Allocate a grid of `len` cells filled with `value`, reporting
/// allocation failure instead of aborting.
pub(crate) fn try_filled(len: usize, value: f64) -> Result<Vec<f64>, FieldError> {
    let mut buf = try_with_capacity(len)?;
    buf.resize(len, value);
    Ok(buf)
}

/// Front/back pair of flat temperature grids.
#[derive(Clone, Debug)]
pub(crate) struct PingPongBuffer {
    front: Vec<f64>,
    back: Vec<f64>,
}

impl PingPongBuffer {
    /// Wrap an initial time level. The back grid stays unallocated.
    pub(crate) fn new(front: Vec<f64>) -> Self {
        Self {
            front,
            back: Vec::new(),
        }
    }

    /// The current time level.
    pub(crate) fn front(&self) -> &[f64] {
        &self.front
    }

    /// Whether the back grid has been allocated.
    pub(crate) fn has_back(&self) -> bool {
        self.back.len() == self.front.len()
    }

    /// Allocate the back grid as a copy of the front grid if it does not
    /// exist yet. `alloc` returns an empty grid with room for `len` cells
    /// and is only called when allocation is needed. On failure nothing
    /// changes.
    pub(crate) fn prepare_back_with<A>(&mut self, alloc: A) -> Result<(), FieldError>
    where
        A: FnOnce(usize) -> Result<Vec<f64>, FieldError>,
    {
        if self.has_back() {
            return Ok(());
        }
        let mut back = alloc(self.front.len())?;
        back.extend_from_slice(&self.front);
        self.back = back;
        Ok(())
    }

    /// Borrow the front grid for reading and the back grid for writing.
    ///
    /// Call [`prepare_back_with`](Self::prepare_back_with) first.
    pub(crate) fn split(&mut self) -> (&[f64], &mut [f64]) {
        debug_assert!(self.has_back(), "back grid not prepared");
        (self.front.as_slice(), self.back.as_mut_slice())
    }

    /// Publish the back grid as the new current time level.
    pub(crate) fn swap(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }
}
