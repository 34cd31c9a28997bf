//! Deterministic initial conditions for field tests.
//!
//! - [`distinct_interior`]: a different temperature for every interior cell.
//! - [`hot_core`]: a single hot cell at the centre, cold elsewhere.
//! - [`boundary_coords`]: every face coordinate of a cube.

use thermocube_core::Coord3;
use thermocube_space::CubeLattice;

/// Interior temperature that is unique per coordinate for cubes up to
/// side 1000.
///
/// Pass to `DiffusionField::from_interior_fn` to build a grid where any
/// read of an already-updated neighbour would change the result.
pub fn distinct_interior(x: usize, y: usize, z: usize) -> f64 {
    (x * 1_000_000 + y * 1_000 + z) as f64 * 0.001
}

/// Returns an initializer that puts `hot` at the centre cell and `cold`
/// in every other interior cell.
pub fn hot_core(size: usize, hot: f64, cold: f64) -> impl Fn(usize, usize, usize) -> f64 {
    let mid = size / 2;
    move |x, y, z| {
        if x == mid && y == mid && z == mid {
            hot
        } else {
            cold
        }
    }
}

/// All boundary coordinates of a cube of side `size`.
///
/// # Panics
///
/// Panics if `size < 3`.
pub fn boundary_coords(size: usize) -> Vec<Coord3> {
    let lattice = CubeLattice::new(size).expect("fixture size must be at least 3");
    lattice
        .boundary_indices()
        .map(|i| lattice.coords(i))
        .collect()
}
