//! Grid dimensions.

/// The dimensions of a sudoku grid.
///
/// A grid is a square of `side x side` cells where `side = box_size²`,
/// subdivided into `box_size x box_size` boxes. Standard sudoku has
/// `box_size == 3`. The geometry is fixed at board construction and
/// threaded through everything that needs it; there is no global grid size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Geometry {
    box_size: u8,
}

impl Geometry {
    /// The standard 9x9 grid with 3x3 boxes.
    pub const STANDARD: Geometry = Geometry { box_size: 3 };

    /// Creates a geometry with the given box edge length.
    ///
    /// Returns `None` unless `1 <= box_size <= 3`. Larger grids would need
    /// cell values beyond a single ascii digit, which the line format
    /// cannot express.
    pub fn new(box_size: u8) -> Option<Geometry> {
        match box_size {
            1..=3 => Some(Geometry { box_size }),
            _ => None,
        }
    }

    /// Edge length of a box.
    pub fn box_size(self) -> u8 {
        self.box_size
    }

    /// Edge length of the full grid. Also the largest digit.
    pub fn side(self) -> u8 {
        self.box_size * self.box_size
    }

    /// Total number of cells in the grid.
    pub fn n_cells(self) -> usize {
        self.side() as usize * self.side() as usize
    }

    /// Coordinates of the box containing the cell at `(x, y)`.
    pub fn box_of(self, x: u8, y: u8) -> (u8, u8) {
        (x / self.box_size, y / self.box_size)
    }

    pub(crate) fn coords_of(self, index: usize) -> (u8, u8) {
        let side = self.side() as usize;
        ((index % side) as u8, (index / side) as u8)
    }

    pub(crate) fn index_of(self, x: u8, y: u8) -> usize {
        y as usize * self.side() as usize + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::Geometry;

    #[test]
    fn standard_geometry() {
        let geometry = Geometry::STANDARD;
        assert_eq!(geometry.box_size(), 3);
        assert_eq!(geometry.side(), 9);
        assert_eq!(geometry.n_cells(), 81);
    }

    #[test]
    fn box_size_bounds() {
        assert!(Geometry::new(0).is_none());
        assert!(Geometry::new(2).is_some());
        assert!(Geometry::new(4).is_none());
    }

    #[test]
    fn boxes() {
        let geometry = Geometry::STANDARD;
        assert_eq!(geometry.box_of(0, 0), (0, 0));
        assert_eq!(geometry.box_of(2, 3), (0, 1));
        assert_eq!(geometry.box_of(8, 8), (2, 2));
    }

    #[test]
    fn index_coords_round_trip() {
        let geometry = Geometry::STANDARD;
        for index in 0..geometry.n_cells() {
            let (x, y) = geometry.coords_of(index);
            assert_eq!(geometry.index_of(x, y), index);
        }
        assert_eq!(geometry.coords_of(40), (4, 4));
    }
}
