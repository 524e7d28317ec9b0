//! Board representation and chess rules.
//!
//! The board is a plain 8x8 mailbox value; the rules (attack detection,
//! move generation, outcome classification) are pure functions borrowing a
//! board together with the match metadata they need. Full chess rules are
//! supported: castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use chess_rules::board::{movegen, Board, CastlingRights, Color};
//!
//! let board = Board::new();
//! let moves = movegen::generate_legal(&board, Color::White, CastlingRights::all(), None);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

pub mod attacks;
mod error;
mod fen;
pub mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{NotationError, SquareError};
pub use fen::FenData;
pub use state::Board;
pub use types::{CastlingRights, Color, GameStatus, Move, Piece, Square};
