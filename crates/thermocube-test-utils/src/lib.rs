//! Test utilities for thermocube development.
//!
//! Provides a deliberately naive reference implementation of one explicit
//! heat-equation step ([`reference_step`]) that shares no code with the
//! engine's kernel, plus deterministic initial-condition fixtures.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{boundary_coords, distinct_interior, hot_core};

/// Compute one explicit step over a flat `[x][y][z]` grid of side `size`.
///
/// Every interior cell is recomputed from the untouched `prev` slice;
/// boundary cells are copied through. The result is a freshly allocated
/// grid so it can be compared against any in-place or double-buffered
/// implementation.
///
/// # Panics
///
/// Panics if `prev.len() != size³`.
pub fn reference_step(prev: &[f64], size: usize, alpha: f64) -> Vec<f64> {
    assert_eq!(prev.len(), size * size * size, "grid length mismatch");
    let at = |x: usize, y: usize, z: usize| prev[(x * size + y) * size + z];

    let mut next = prev.to_vec();
    for x in 1..size - 1 {
        for y in 1..size - 1 {
            for z in 1..size - 1 {
                let t = at(x, y, z);
                let sum = at(x - 1, y, z)
                    + at(x + 1, y, z)
                    + at(x, y - 1, z)
                    + at(x, y + 1, z)
                    + at(x, y, z - 1)
                    + at(x, y, z + 1);
                next[(x * size + y) * size + z] = t + alpha * (sum - 6.0 * t);
            }
        }
    }
    next
}

/// Largest absolute element-wise difference between two equal-length grids.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "grid length mismatch");
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_step_single_interior_cell() {
        let mut grid = vec![10.0; 27];
        grid[13] = 0.0;
        let next = reference_step(&grid, 3, 1.0 / 6.0);
        assert!((next[13] - 10.0).abs() < 1e-12, "got {}", next[13]);
        for (i, &v) in next.iter().enumerate() {
            if i != 13 {
                assert_eq!(v, 10.0, "boundary cell {i} changed");
            }
        }
    }

    #[test]
    fn reference_step_does_not_mutate_input() {
        let grid: Vec<f64> = (0..64).map(|i| i as f64).collect();
        let copy = grid.clone();
        let _ = reference_step(&grid, 4, 0.1);
        assert_eq!(grid, copy);
    }

    #[test]
    fn max_abs_diff_picks_largest() {
        assert_eq!(max_abs_diff(&[1.0, 2.0, 3.0], &[1.0, 2.5, 1.0]), 2.0);
        assert_eq!(max_abs_diff(&[], &[]), 0.0);
    }
}
