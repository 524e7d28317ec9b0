//! The persisted match aggregate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    attacks, movegen, Board, CastlingRights, Color, FenData, GameStatus, Move, NotationError,
    Square,
};

/// One chess match: the authoritative board plus the auxiliary state the
/// board alone cannot carry.
///
/// A match state is created once at game start, advanced exactly once per
/// applied move (transitions are pure and return a new value), and handed to
/// the persistence layer as notation fields. Concurrent transitions on the
/// same match identifier must be serialized by the caller; two racing
/// load-apply-store sequences will lose one update.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchState {
    pub(crate) id: String,
    pub(crate) board: Board,
    pub(crate) active: Color,
    pub(crate) bot_color: Option<Color>,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) in_check: bool,
    pub(crate) status: GameStatus,
}

impl MatchState {
    /// A fresh match: standard layout, full rights, no en-passant target,
    /// clocks at (0, 1), White to move.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        MatchState {
            id: id.into(),
            board: Board::new(),
            active: Color::White,
            bot_color: None,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            in_check: false,
            status: GameStatus::InProgress,
        }
    }

    /// Assign the computer opponent a color.
    #[must_use]
    pub fn with_bot(mut self, color: Color) -> Self {
        self.bot_color = Some(color);
        self
    }

    /// Rebuild a match from its persisted notation line.
    ///
    /// The check flag and outcome are derived state and are recomputed here
    /// rather than trusted from storage.
    pub fn from_fen(id: impl Into<String>, fen: &str) -> Result<Self, NotationError> {
        let data = FenData::decode(fen)?;
        let in_check = attacks::is_in_check(&data.board, data.active);
        let status = movegen::classify(&data.board, data.active, data.castling, data.en_passant);
        Ok(MatchState {
            id: id.into(),
            board: data.board,
            active: data.active,
            bot_color: None,
            castling: data.castling,
            en_passant: data.en_passant,
            halfmove_clock: data.halfmove_clock,
            fullmove_number: data.fullmove_number,
            in_check,
            status,
        })
    }

    /// The persisted notation line for this position.
    #[must_use]
    pub fn to_fen(&self) -> String {
        FenData {
            board: self.board.clone(),
            active: self.active,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
        .encode()
    }

    /// Match identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The authoritative board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[must_use]
    pub fn active_color(&self) -> Color {
        self.active
    }

    /// The computer opponent's color, if one is assigned.
    #[must_use]
    pub fn bot_color(&self) -> Option<Color> {
        self.bot_color
    }

    /// Remaining castling rights.
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// The en-passant target square, valid for exactly one move.
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    /// Half moves since the last pawn move or capture.
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Full-move number, starting at 1 and incremented after Black moves.
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Is the side to move currently in check?
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    /// Current outcome classification.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True when a computer opponent is assigned and it is its turn.
    #[must_use]
    pub fn is_bot_turn(&self) -> bool {
        self.bot_color == Some(self.active)
    }

    /// Every legal move for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        movegen::generate_legal(&self.board, self.active, self.castling, self.en_passant)
    }

    /// Legal moves of the piece standing on `square`.
    #[must_use]
    pub fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        movegen::legal_moves_from(&self.board, self.active, self.castling, self.en_passant, square)
    }
}
