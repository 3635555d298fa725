//! Chessboard placement and movement model.
//!
//! This crate provides:
//! - [`Board`] - an 8x8 grid with occupancy tracking and per-color piece
//!   limits
//! - [`Piece`] and [`PieceId`] - pieces and the handles a board issues for
//!   them
//! - [`MoveError`] - the move protocol's failure signals
//!
//! # Example
//!
//! ```
//! use chessboard::{Board, Piece};
//! use chessboard_core::{Color, MovementKind, PieceKind};
//!
//! let mut board = Board::new();
//! let pawn = Piece::new(PieceKind::Pawn, Color::White);
//! let id = board.place(pawn, 1, 4, Color::White);
//! assert_eq!(board.piece(id).row(), 1);
//! assert_eq!(board.piece(id).col(), 4);
//!
//! board.move_piece(id, MovementKind::Plain, 2, 4).unwrap();
//! assert_eq!(board.piece(id).row(), 2);
//! ```

mod board;
mod error;
mod piece;

pub use board::Board;
pub use error::MoveError;
pub use piece::{Piece, PieceId};
