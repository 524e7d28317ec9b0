//! Match state and transitions.
//!
//! A [`MatchState`] is the persisted aggregate for one game: the board, the
//! side to move, castling rights, the en-passant target, both clocks, and
//! the derived check flag and outcome. Applying a move is a pure function
//! from one state to the next; all I/O (storage, the network layer, the
//! external engine process) lives with collaborators.

mod error;
mod state;
mod transition;

pub use error::{MatchError, MoveError};
pub use state::MatchState;
