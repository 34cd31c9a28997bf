//! The 7-point explicit heat-equation kernel.

use thermocube_space::CubeLattice;

/// Write one explicit step of every interior cell of `prev` into `next`.
///
/// Reads only `prev`; boundary cells of `next` are not touched. Uses
/// stride arithmetic on the flat grid instead of per-cell neighbour
/// lookups.
pub(crate) fn jacobi_step(lattice: &CubeLattice, prev: &[f64], next: &mut [f64], alpha: f64) {
    let n = lattice.size();
    let sx = lattice.stride_x();
    let sy = lattice.stride_y();
    debug_assert_eq!(prev.len(), lattice.cell_count());
    debug_assert_eq!(next.len(), lattice.cell_count());

    for x in 1..n - 1 {
        for y in 1..n - 1 {
            let row = lattice.index(x, y, 0);
            for i in row + 1..row + n - 1 {
                let t = prev[i];
                let sum = prev[i - sx]
                    + prev[i + sx]
                    + prev[i - sy]
                    + prev[i + sy]
                    + prev[i - 1]
                    + prev[i + 1];
                next[i] = t + alpha * (sum - 6.0 * t);
            }
        }
    }
}

/// Discrete Laplacian (unit spacing) at interior cell `[x, y, z]`.
pub(crate) fn laplacian_at(lattice: &CubeLattice, data: &[f64], x: usize, y: usize, z: usize) -> f64 {
    let nbs = lattice.face_neighbours(x, y, z);
    let centre = data[lattice.index(x, y, z)];
    let sum: f64 = nbs.iter().map(|&j| data[j]).sum();
    sum - nbs.len() as f64 * centre
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermocube_test_utils::{distinct_interior, max_abs_diff, reference_step};

    fn distinct_grid(lattice: &CubeLattice) -> Vec<f64> {
        (0..lattice.cell_count())
            .map(|i| {
                let [x, y, z] = lattice.coords(i);
                distinct_interior(x, y, z)
            })
            .collect()
    }

    #[test]
    fn matches_reference_pass() {
        let lattice = CubeLattice::new(6).unwrap();
        let prev = distinct_grid(&lattice);
        let mut next = prev.clone();
        jacobi_step(&lattice, &prev, &mut next, 0.1);
        let expected = reference_step(&prev, 6, 0.1);
        assert!(max_abs_diff(&next, &expected) < 1e-9);
    }

    #[test]
    fn boundary_of_next_untouched() {
        let lattice = CubeLattice::new(4).unwrap();
        let prev = vec![1.0; lattice.cell_count()];
        let mut next = vec![-7.0; lattice.cell_count()];
        jacobi_step(&lattice, &prev, &mut next, 0.1);
        for i in lattice.boundary_indices() {
            assert_eq!(next[i], -7.0, "boundary cell {i} was written");
        }
        for i in lattice.interior_indices() {
            assert_eq!(next[i], 1.0);
        }
    }

    #[test]
    fn laplacian_of_linear_profile_is_zero() {
        let lattice = CubeLattice::new(5).unwrap();
        let data: Vec<f64> = (0..lattice.cell_count())
            .map(|i| lattice.coords(i)[0] as f64 * 3.0)
            .collect();
        assert!(laplacian_at(&lattice, &data, 2, 2, 2).abs() < 1e-12);
    }

    #[test]
    fn laplacian_of_cold_centre() {
        let lattice = CubeLattice::new(3).unwrap();
        let mut data = vec![10.0; 27];
        data[13] = 0.0;
        assert_eq!(laplacian_at(&lattice, &data, 1, 1, 1), 60.0);
    }
}
