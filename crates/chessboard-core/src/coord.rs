//! Board coordinate representation.

use std::fmt;

/// A coordinate on the board, as a (row, column) pair.
///
/// A `Coord` is always within bounds: construction goes through
/// [`Coord::new`], which rejects anything outside the 8x8 grid. "Not placed
/// on any board" is therefore `Option<Coord>`, not a special coordinate
/// value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Number of rows on the board.
    pub const ROWS: i32 = 8;

    /// Number of columns on the board.
    pub const COLS: i32 = 8;

    /// Creates a coordinate from raw components, returning `None` if either
    /// component falls outside the board.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Option<Self> {
        if row >= 0 && row < Self::ROWS && col >= 0 && col < Self::COLS {
            Some(Coord {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> i32 {
        self.row as i32
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> i32 {
        self.col as i32
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_in_bounds() {
        let c = Coord::new(6, 3).unwrap();
        assert_eq!(c.row(), 6);
        assert_eq!(c.col(), 3);
    }

    #[test]
    fn new_rejects_out_of_bounds() {
        assert_eq!(Coord::new(-1, 0), None);
        assert_eq!(Coord::new(0, -1), None);
        assert_eq!(Coord::new(8, 0), None);
        assert_eq!(Coord::new(0, 8), None);
        assert_eq!(Coord::new(-1, -1), None);
        assert_eq!(Coord::new(11, 5), None);
    }

    #[test]
    fn corners() {
        assert!(Coord::new(0, 0).is_some());
        assert!(Coord::new(0, 7).is_some());
        assert!(Coord::new(7, 0).is_some());
        assert!(Coord::new(7, 7).is_some());
    }

    #[test]
    fn display() {
        let c = Coord::new(2, 5).unwrap();
        assert_eq!(format!("{}", c), "(2, 5)");
        assert_eq!(format!("{:?}", c), "Coord(2, 5)");
    }

    proptest! {
        #[test]
        fn new_matches_bounds(row in -16i32..24, col in -16i32..24) {
            let in_bounds =
                (0..Coord::ROWS).contains(&row) && (0..Coord::COLS).contains(&col);
            prop_assert_eq!(Coord::new(row, col).is_some(), in_bounds);
        }
    }
}
