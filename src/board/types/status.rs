//! Game outcome classification.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Terminal / non-terminal classification of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// The side to move has at least one legal move.
    InProgress,
    /// Black is to move, has no legal move, and is in check.
    WhiteWins,
    /// White is to move, has no legal move, and is in check.
    BlackWins,
    /// Representable for callers that adjudicate draws (fifty-move rule,
    /// repetition, agreement); never produced by [`classify`].
    ///
    /// [`classify`]: crate::board::movegen::classify
    Draw,
    /// The side to move has no legal move and is not in check.
    Stalemate,
}

impl GameStatus {
    /// True once the game has ended.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::InProgress => "IN_PROGRESS",
            GameStatus::WhiteWins => "WHITE_WINS",
            GameStatus::BlackWins => "BLACK_WINS",
            GameStatus::Draw => "DRAW",
            GameStatus::Stalemate => "STALEMATE",
        };
        write!(f, "{s}")
    }
}
