//! Piece kind representation and movement shapes.

use crate::{Color, Coord};

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the index of this piece kind (0-5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true if this kind's movement shape permits moving from
    /// `from` to `to` for a piece of the given color.
    ///
    /// This is pure geometry: occupancy of the destination or of any square
    /// in between is not considered. Pawns advance along the row axis, one
    /// step in their color's direction, or two steps from their starting
    /// row.
    pub fn can_move(self, color: Color, from: Coord, to: Coord) -> bool {
        let dr = to.row() - from.row();
        let dc = to.col() - from.col();
        match self {
            PieceKind::Pawn => {
                let dir = color.advance_direction();
                dc == 0 && (dr == dir || (dr == 2 * dir && from.row() == color.pawn_rank()))
            }
            PieceKind::Knight => {
                (dr.abs() == 1 && dc.abs() == 2) || (dr.abs() == 2 && dc.abs() == 1)
            }
            PieceKind::Bishop => dr.abs() == dc.abs() && dr != 0,
            PieceKind::Rook => (dr == 0) != (dc == 0),
            PieceKind::Queen => {
                (dr.abs() == dc.abs() && dr != 0) || ((dr == 0) != (dc == 0))
            }
            PieceKind::King => dr.abs().max(dc.abs()) == 1,
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}
