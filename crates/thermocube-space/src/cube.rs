//! 3D cubic lattice with 6-connected (face) neighbourhood.

use smallvec::SmallVec;
use thermocube_core::{Coord3, FieldError};

/// A cube of `size × size × size` cells with face-connected neighbours.
///
/// Cells are addressed as `[x, y, z]` with `0 <= x, y, z < size` and
/// stored row-major: `index = (x * size + y) * size + z`, so `z` is the
/// fastest-varying axis.
///
/// Cells on any face of the cube (some coordinate equal to `0` or
/// `size - 1`) are *boundary* cells; all others are *interior* cells.
/// Construction rejects sizes below [`MIN_SIZE`](Self::MIN_SIZE) so at
/// least one interior cell always exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubeLattice {
    size: usize,
    cell_count: usize,
}

impl CubeLattice {
    /// Smallest side length with a non-empty interior.
    pub const MIN_SIZE: usize = 3;

    /// Create a lattice with side length `size`.
    ///
    /// Returns `Err(FieldError::InvalidConfiguration)` if `size < 3` or if
    /// `size³` does not fit in `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use thermocube_space::CubeLattice;
    ///
    /// let cube = CubeLattice::new(5).unwrap();
    /// assert_eq!(cube.cell_count(), 125);
    /// assert_eq!(cube.interior_count(), 27);
    /// assert!(cube.is_boundary(0, 2, 2));
    /// assert!(!cube.is_boundary(1, 2, 3));
    /// ```
    pub fn new(size: usize) -> Result<Self, FieldError> {
        if size < Self::MIN_SIZE {
            return Err(FieldError::invalid(format!(
                "cube size must be at least {}, got {size}",
                Self::MIN_SIZE
            )));
        }
        let cell_count = size
            .checked_mul(size)
            .and_then(|sq| sq.checked_mul(size))
            .ok_or_else(|| {
                FieldError::invalid(format!("cube size {size} overflows the cell count"))
            })?;
        Ok(Self { size, cell_count })
    }

    /// Side length of the cube.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells, `size³`.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Number of interior cells, `(size - 2)³`.
    pub fn interior_count(&self) -> usize {
        let inner = self.size - 2;
        inner * inner * inner
    }

    /// Flat-index distance between `[x, y, z]` and `[x + 1, y, z]`.
    pub fn stride_x(&self) -> usize {
        self.size * self.size
    }

    /// Flat-index distance between `[x, y, z]` and `[x, y + 1, z]`.
    pub fn stride_y(&self) -> usize {
        self.size
    }

    /// Flat index of `[x, y, z]`. Coordinates must be in range.
    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < self.size && y < self.size && z < self.size);
        (x * self.size + y) * self.size + z
    }

    /// Flat index of `[x, y, z]`, or `OutOfRange` if any axis is outside
    /// `[0, size)`.
    pub fn checked_index(&self, x: usize, y: usize, z: usize) -> Result<usize, FieldError> {
        if self.contains(x, y, z) {
            Ok(self.index(x, y, z))
        } else {
            Err(FieldError::OutOfRange {
                coord: [x, y, z],
                size: self.size,
            })
        }
    }

    /// Coordinate of a flat index. The index must be below `cell_count()`.
    pub fn coords(&self, index: usize) -> Coord3 {
        debug_assert!(index < self.cell_count);
        let z = index % self.size;
        let y = (index / self.size) % self.size;
        let x = index / (self.size * self.size);
        [x, y, z]
    }

    /// Whether `[x, y, z]` lies inside the cube.
    pub fn contains(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.size && y < self.size && z < self.size
    }

    /// Whether `[x, y, z]` lies on a face of the cube.
    pub fn is_boundary(&self, x: usize, y: usize, z: usize) -> bool {
        let last = self.size - 1;
        x == 0 || y == 0 || z == 0 || x == last || y == last || z == last
    }

    /// Whether `[x, y, z]` is an interior (evolving) cell.
    pub fn is_interior(&self, x: usize, y: usize, z: usize) -> bool {
        self.contains(x, y, z) && !self.is_boundary(x, y, z)
    }

    /// Flat indices of the face neighbours of `[x, y, z]` that lie inside
    /// the cube, in `-x, +x, -y, +y, -z, +z` order.
    ///
    /// Interior cells always have six; edge and corner cells have fewer.
    pub fn face_neighbours(&self, x: usize, y: usize, z: usize) -> SmallVec<[usize; 6]> {
        let last = self.size - 1;
        let mut result = SmallVec::new();
        if x > 0 {
            result.push(self.index(x - 1, y, z));
        }
        if x < last {
            result.push(self.index(x + 1, y, z));
        }
        if y > 0 {
            result.push(self.index(x, y - 1, z));
        }
        if y < last {
            result.push(self.index(x, y + 1, z));
        }
        if z > 0 {
            result.push(self.index(x, y, z - 1));
        }
        if z < last {
            result.push(self.index(x, y, z + 1));
        }
        result
    }

    /// Flat indices of all interior cells in `[x][y][z]` order.
    pub fn interior_indices(&self) -> impl Iterator<Item = usize> {
        let n = self.size;
        (1..n - 1).flat_map(move |x| {
            (1..n - 1).flat_map(move |y| (1..n - 1).map(move |z| (x * n + y) * n + z))
        })
    }

    /// Flat indices of all boundary cells in ascending order.
    pub fn boundary_indices(&self) -> impl Iterator<Item = usize> {
        let lattice = *self;
        (0..self.cell_count).filter(move |&i| {
            let [x, y, z] = lattice.coords(i);
            lattice.is_boundary(x, y, z)
        })
    }
}
