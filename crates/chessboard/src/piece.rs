//! Piece representation.

use std::fmt;

use chessboard_core::{Color, Coord, PieceKind};

/// Handle to a piece held by a [`Board`](crate::Board).
///
/// Issued by [`Board::place`](crate::Board::place); only meaningful for the
/// board that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(pub(crate) usize);

/// A single piece: its kind, its color, and where it stands.
///
/// A piece is constructed detached. Handing it to
/// [`Board::place`](crate::Board::place) attaches it to that board — even
/// when the placement is rejected — and from then on it is read through the
/// [`PieceId`] the board issued. An unplaced piece has no position; its
/// integer accessors report -1 for both components.
#[derive(Debug, Clone)]
pub struct Piece {
    pub(crate) kind: PieceKind,
    pub(crate) color: Color,
    pub(crate) pos: Option<Coord>,
}

impl Piece {
    /// Creates a detached piece of the given kind and color.
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            pos: None,
        }
    }

    /// Returns the piece kind.
    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Returns the piece color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the piece's position, or `None` if it is not placed.
    #[inline]
    pub fn position(&self) -> Option<Coord> {
        self.pos
    }

    /// Returns the piece's row, or -1 if it is not placed.
    #[inline]
    pub fn row(&self) -> i32 {
        match self.pos {
            Some(c) => c.row(),
            None => -1,
        }
    }

    /// Returns the piece's column, or -1 if it is not placed.
    #[inline]
    pub fn col(&self) -> i32 {
        match self.pos {
            Some(c) => c.col(),
            None => -1,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Current row: {}\nCurrent column: {}\nPiece color: {}",
            self.row(),
            self.col(),
            self.color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_piece_reports_sentinel() {
        let piece = Piece::new(PieceKind::Pawn, Color::Black);
        assert_eq!(piece.position(), None);
        assert_eq!(piece.row(), -1);
        assert_eq!(piece.col(), -1);
    }

    #[test]
    fn display_label() {
        let mut piece = Piece::new(PieceKind::Pawn, Color::Black);
        piece.pos = Coord::new(6, 3);
        assert_eq!(
            piece.to_string(),
            "Current row: 6\nCurrent column: 3\nPiece color: Black"
        );
    }

    #[test]
    fn display_label_unplaced() {
        let piece = Piece::new(PieceKind::Queen, Color::White);
        assert_eq!(
            piece.to_string(),
            "Current row: -1\nCurrent column: -1\nPiece color: White"
        );
    }
}
