//! Integration test: flat indexing agrees with coordinates and strides.

use proptest::prelude::*;
use thermocube_space::CubeLattice;

proptest! {
    #[test]
    fn coords_invert_index(size in 3usize..40, x in 0usize..40, y in 0usize..40, z in 0usize..40) {
        let cube = CubeLattice::new(size).unwrap();
        let (x, y, z) = (x % size, y % size, z % size);
        let i = cube.checked_index(x, y, z).unwrap();
        prop_assert!(i < cube.cell_count());
        prop_assert_eq!(cube.coords(i), [x, y, z]);
    }

    #[test]
    fn interior_neighbours_sit_one_stride_away(size in 3usize..20, seed in 0usize..10_000) {
        let cube = CubeLattice::new(size).unwrap();
        let interior: Vec<usize> = cube.interior_indices().collect();
        let i = interior[seed % interior.len()];
        let [x, y, z] = cube.coords(i);
        let expected = [
            i - cube.stride_x(),
            i + cube.stride_x(),
            i - cube.stride_y(),
            i + cube.stride_y(),
            i - 1,
            i + 1,
        ];
        let nbs = cube.face_neighbours(x, y, z);
        prop_assert_eq!(nbs.as_slice(), &expected[..]);
    }
}

#[test]
fn out_of_range_never_indexes() {
    let cube = CubeLattice::new(4).unwrap();
    for coord in [[4, 0, 0], [0, 4, 0], [0, 0, 4], [usize::MAX, 0, 0]] {
        assert!(cube.checked_index(coord[0], coord[1], coord[2]).is_err());
        assert!(!cube.contains(coord[0], coord[1], coord[2]));
        assert!(!cube.is_interior(coord[0], coord[1], coord[2]));
    }
}
