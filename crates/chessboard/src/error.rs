//! Move protocol errors.

use thiserror::Error;

/// Errors raised by the move protocol.
///
/// A destination off the board raises neither of these: such a move is
/// silently ignored by [`Board::move_piece`](crate::Board::move_piece).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The destination is on the board, but the square is occupied or the
    /// piece's movement shape forbids the move.
    #[error("invalid move to ({row}, {col})")]
    InvalidMove { row: i32, col: i32 },

    /// Capture movements are recognized but not implemented.
    #[error("capture moves are not implemented")]
    UnsupportedMovement,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = MoveError::InvalidMove { row: 6, col: 4 };
        assert_eq!(err.to_string(), "invalid move to (6, 4)");
        assert_eq!(
            MoveError::UnsupportedMovement.to_string(),
            "capture moves are not implemented"
        );
    }
}
