//! Board state and the move protocol.

use chessboard_core::{Color, Coord, MovementKind};

use crate::{MoveError, Piece, PieceId};

/// An 8x8 board tracking piece placement.
///
/// The board owns every piece ever handed to [`Board::place`] in an internal
/// arena and records grid occupancy as [`PieceId`] handles into it, so a cell
/// never aliases a piece directly. At most one piece occupies a cell, and the
/// grid size is fixed for the board's lifetime.
#[derive(Debug, Clone, Default)]
pub struct Board {
    /// Grid cells indexed by row, then column.
    grid: [[Option<PieceId>; Coord::COLS as usize]; Coord::ROWS as usize],
    /// Every piece attached to this board, placed or not.
    pieces: Vec<Piece>,
}

impl Board {
    /// Number of columns on the board.
    pub const WIDTH: usize = Coord::COLS as usize;

    /// Number of rows on the board.
    pub const HEIGHT: usize = Coord::ROWS as usize;

    /// Most pieces of one color allowed on the grid at once.
    ///
    /// Defined as the board width and applied uniformly to every piece kind.
    pub const MAX_PER_COLOR: usize = Self::WIDTH;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if (row, col) lies on the board.
    ///
    /// Accepts any integers; negative components and components past the
    /// board edge are rejected independently on each axis.
    #[inline]
    pub fn is_legal_position(&self, row: i32, col: i32) -> bool {
        Coord::new(row, col).is_some()
    }

    /// Returns true if a piece currently occupies `coord`.
    #[inline]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.cell(coord).is_some()
    }

    /// Returns the piece occupying `coord`, if any.
    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<PieceId> {
        self.cell(coord)
    }

    /// Returns the piece behind a handle issued by [`Board::place`].
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this board.
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }

    /// Counts the pieces of `color` currently on the grid.
    ///
    /// Computed by scanning every cell. Pieces parked off the board after a
    /// rejected placement are attached to the board but occupy no cell, so
    /// they do not count.
    pub fn count_pieces(&self, color: Color) -> usize {
        self.grid
            .iter()
            .flatten()
            .flatten()
            .filter(|id| self.pieces[id.0].color == color)
            .count()
    }

    /// Places `piece` at (row, col) with the given color.
    ///
    /// The piece joins the board and takes on `color` in every outcome. The
    /// placement itself is rejected when the coordinate is off the board,
    /// the square is occupied, or `color` already has
    /// [`Board::MAX_PER_COLOR`] pieces on the grid; a rejected piece stays
    /// unplaced (its accessors report -1, -1) and the grid is untouched.
    /// There is no error signal: callers detect rejection through the
    /// piece's resulting coordinates.
    pub fn place(&mut self, mut piece: Piece, row: i32, col: i32, color: Color) -> PieceId {
        let dest = Coord::new(row, col)
            .filter(|&c| !self.is_occupied(c) && self.count_pieces(color) < Self::MAX_PER_COLOR);
        piece.color = color;
        piece.pos = dest;
        let id = PieceId(self.pieces.len());
        self.pieces.push(piece);
        if let Some(c) = dest {
            self.grid[c.row() as usize][c.col() as usize] = Some(id);
        }
        id
    }

    /// Moves a piece to (row, col).
    ///
    /// A destination off the board is silently ignored: the call returns
    /// `Ok(())` and nothing changes. For an on-board destination, a
    /// [`MovementKind::Plain`] move succeeds when the destination square is
    /// empty and the piece's movement shape allows it, and otherwise fails
    /// with [`MoveError::InvalidMove`]; [`MovementKind::Capture`] fails with
    /// [`MoveError::UnsupportedMovement`] without touching any state.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this board.
    pub fn move_piece(
        &mut self,
        id: PieceId,
        movement: MovementKind,
        row: i32,
        col: i32,
    ) -> Result<(), MoveError> {
        let dest = match Coord::new(row, col) {
            Some(dest) => dest,
            None => return Ok(()),
        };
        match movement {
            MovementKind::Plain => {
                let piece = &self.pieces[id.0];
                let shape_ok = match piece.pos {
                    Some(from) => piece.kind.can_move(piece.color, from, dest),
                    None => false,
                };
                if !self.is_occupied(dest) && shape_ok {
                    self.change_position(id, dest);
                    self.pieces[id.0].pos = Some(dest);
                    Ok(())
                } else {
                    Err(MoveError::InvalidMove { row, col })
                }
            }
            // TODO: implement capture movement
            MovementKind::Capture => Err(MoveError::UnsupportedMovement),
        }
    }

    /// Vacates the grid cell at the piece's current coordinate, then the
    /// cell at `to`. The destination cell is cleared, not filled, so grid
    /// occupancy stops tracking a piece once it moves; the piece's own
    /// coordinate is maintained by [`Board::move_piece`].
    fn change_position(&mut self, id: PieceId, to: Coord) {
        if let Some(from) = self.pieces[id.0].pos {
            self.grid[from.row() as usize][from.col() as usize] = None;
        }
        self.grid[to.row() as usize][to.col() as usize] = None;
    }

    #[inline]
    fn cell(&self, coord: Coord) -> Option<PieceId> {
        self.grid[coord.row() as usize][coord.col() as usize]
    }
}
