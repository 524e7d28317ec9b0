//! Applying a move to a match state.
//!
//! The transition is a pure function: it validates the submitted move
//! against the generated legal set, applies the generator's own copy of the
//! move (caller metadata is never trusted), and recomputes every piece of
//! auxiliary state — rights, en-passant target, clocks, check flag and
//! outcome — on a new `MatchState`.

use log::debug;

use crate::board::{attacks, movegen, CastlingRights, Color, Move, Piece, Square};
use crate::engine::{MoveEngine, DEFAULT_DEPTH};

use super::error::{MatchError, MoveError};
use super::state::MatchState;

impl MatchState {
    /// Apply a validated move, producing the next match state.
    ///
    /// The move is matched against the legal set by its from/to pair (and
    /// promotion piece, so an underpromotion is never silently upgraded);
    /// `WrongTurn` is raised before legality when the move belongs to the
    /// side not to move. On failure the current state is untouched.
    pub fn apply_move(&self, mv: &Move) -> Result<MatchState, MatchError> {
        if mv.color != self.active {
            return Err(MatchError::WrongTurn);
        }
        let chosen = self
            .legal_moves()
            .into_iter()
            .find(|candidate| candidate == mv && candidate.promotion == mv.promotion)
            .ok_or_else(|| MoveError::Illegal {
                notation: mv.to_string(),
            })?;
        Ok(self.transition(&chosen))
    }

    /// Apply a move submitted in coordinate notation ("e2e4", "e7e8q") on
    /// behalf of `color`.
    pub fn apply_uci(&self, color: Color, uci: &str) -> Result<MatchState, MatchError> {
        if color != self.active {
            return Err(MatchError::WrongTurn);
        }
        let chosen = self.resolve_uci(uci)?;
        debug!("match {}: accepted move {uci}", self.id);
        Ok(self.transition(&chosen))
    }

    /// Ask the external engine for the bot's move and apply it.
    ///
    /// `depth` 0 falls back to the default search depth. An engine failure
    /// is surfaced as [`MatchError::Engine`]; it is never treated as "no
    /// move".
    pub fn apply_engine_move(
        &self,
        engine: &dyn MoveEngine,
        depth: u32,
    ) -> Result<MatchState, MatchError> {
        if !self.is_bot_turn() {
            return Err(MatchError::NotBotTurn);
        }
        let depth = if depth == 0 { DEFAULT_DEPTH } else { depth };
        let uci = engine.best_move(&self.to_fen(), depth).map_err(|err| {
            log::error!("match {}: engine move failed: {err}", self.id);
            err
        })?;
        self.apply_uci(self.active, &uci)
    }

    /// Resolve a 4-5 character move string against the current legal set.
    fn resolve_uci(&self, uci: &str) -> Result<Move, MoveError> {
        let chars: Vec<char> = uci.chars().collect();
        if chars.len() < 4 || chars.len() > 5 {
            return Err(MoveError::InvalidLength { len: chars.len() });
        }

        let square = |file_ch: char, rank_ch: char| {
            if ('a'..='h').contains(&file_ch) && ('1'..='8').contains(&rank_ch) {
                Ok(Square(
                    rank_ch as usize - '1' as usize,
                    file_ch as usize - 'a' as usize,
                ))
            } else {
                Err(MoveError::InvalidSquare {
                    notation: uci.to_string(),
                })
            }
        };
        let from = square(chars[0], chars[1])?;
        let to = square(chars[2], chars[3])?;

        let promotion = if chars.len() == 5 {
            let piece = Piece::from_char(chars[4])
                .ok_or(MoveError::InvalidPromotion { char: chars[4] })?;
            if matches!(piece, Piece::Pawn | Piece::King) {
                return Err(MoveError::InvalidPromotion { char: chars[4] });
            }
            Some(piece)
        } else {
            None
        };

        self.legal_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
            .ok_or_else(|| MoveError::Illegal {
                notation: uci.to_string(),
            })
    }

    /// Build the successor state from a move taken out of the legal set.
    fn transition(&self, mv: &Move) -> MatchState {
        let mut board = self.board.clone();
        board.apply_move(mv);

        let mut castling = self.castling;
        shrink_castling_rights(&mut castling, mv);

        let en_passant = en_passant_target_after(mv);
        let active = self.active.opponent();
        let halfmove_clock = if mv.piece == Piece::Pawn || mv.is_capture() {
            0
        } else {
            self.halfmove_clock + 1
        };
        let fullmove_number = if self.active == Color::Black {
            self.fullmove_number + 1
        } else {
            self.fullmove_number
        };

        let in_check = attacks::is_in_check(&board, active);
        let status = movegen::classify(&board, active, castling, en_passant);

        MatchState {
            id: self.id.clone(),
            board,
            active,
            bot_color: self.bot_color,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            in_check,
            status,
        }
    }
}

/// Rights only ever shrink: a king move drops both of its color's rights, a
/// rook leaving its original corner drops that side, and capturing a rook
/// standing on its original corner drops that side for the victim's color.
fn shrink_castling_rights(rights: &mut CastlingRights, mv: &Move) {
    match mv.piece {
        Piece::King => rights.remove_color(mv.color),
        Piece::Rook => {
            let rank = mv.color.back_rank();
            if mv.from == Square(rank, 7) {
                rights.remove(mv.color, true);
            } else if mv.from == Square(rank, 0) {
                rights.remove(mv.color, false);
            }
        }
        _ => {}
    }

    if mv.captured == Some(Piece::Rook) {
        let victim = mv.color.opponent();
        let rank = victim.back_rank();
        if mv.to == Square(rank, 7) {
            rights.remove(victim, true);
        } else if mv.to == Square(rank, 0) {
            rights.remove(victim, false);
        }
    }
}

/// The square passed over by a double pawn push, capturable for exactly one
/// subsequent move; cleared after anything else.
fn en_passant_target_after(mv: &Move) -> Option<Square> {
    if mv.is_double_pawn_push() {
        Some(Square(
            (mv.from.rank() + mv.to.rank()) / 2,
            mv.from.file(),
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GameStatus;

    fn start() -> MatchState {
        MatchState::new("test-match")
    }

    #[test]
    fn test_double_push_sets_en_passant_target() {
        let state = start().apply_uci(Color::White, "e2e4").unwrap();
        assert_eq!(state.en_passant_target(), Some(Square(2, 4))); // e3
    }

    #[test]
    fn test_single_push_leaves_en_passant_unset() {
        let state = start().apply_uci(Color::White, "e2e3").unwrap();
        assert_eq!(state.en_passant_target(), None);
    }

    #[test]
    fn test_en_passant_target_lives_one_move() {
        let state = start()
            .apply_uci(Color::White, "e2e4")
            .unwrap()
            .apply_uci(Color::Black, "g8f6")
            .unwrap();
        assert_eq!(state.en_passant_target(), None);
    }

    #[test]
    fn test_halfmove_clock_resets_on_pawn_move() {
        let state = start()
            .apply_uci(Color::White, "g1f3")
            .unwrap()
            .apply_uci(Color::Black, "g8f6")
            .unwrap();
        assert_eq!(state.halfmove_clock(), 2);
        let state = state.apply_uci(Color::White, "e2e4").unwrap();
        assert_eq!(state.halfmove_clock(), 0);
    }

    #[test]
    fn test_halfmove_clock_resets_on_capture() {
        let state = start()
            .apply_uci(Color::White, "e2e4")
            .unwrap()
            .apply_uci(Color::Black, "d7d5")
            .unwrap()
            .apply_uci(Color::White, "b1c3")
            .unwrap()
            .apply_uci(Color::Black, "g8f6")
            .unwrap();
        assert_eq!(state.halfmove_clock(), 2);
        let state = state.apply_uci(Color::White, "e4d5").unwrap();
        assert_eq!(state.halfmove_clock(), 0);
    }

    #[test]
    fn test_fullmove_number_increments_after_black() {
        let state = start().apply_uci(Color::White, "e2e4").unwrap();
        assert_eq!(state.fullmove_number(), 1);
        let state = state.apply_uci(Color::Black, "e7e5").unwrap();
        assert_eq!(state.fullmove_number(), 2);
    }

    #[test]
    fn test_king_move_drops_both_rights() {
        let state =
            MatchState::from_fen("m", "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let state = state.apply_uci(Color::White, "e1e2").unwrap();
        assert!(!state.castling_rights().has(Color::White, true));
        assert!(!state.castling_rights().has(Color::White, false));
        assert!(state.castling_rights().has(Color::Black, true));
        assert!(state.castling_rights().has(Color::Black, false));
    }

    #[test]
    fn test_rook_move_drops_one_side() {
        let state =
            MatchState::from_fen("m", "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let state = state.apply_uci(Color::White, "h1g1").unwrap();
        assert!(!state.castling_rights().has(Color::White, true));
        assert!(state.castling_rights().has(Color::White, false));
    }

    #[test]
    fn test_capturing_corner_rook_drops_victims_right() {
        let state =
            MatchState::from_fen("m", "r3k2r/8/8/8/8/8/6B1/R3K2R w KQkq - 0 1").unwrap();
        // Bg2 takes the a8 rook along the long diagonal.
        let state = state.apply_uci(Color::White, "g2a8").unwrap();
        assert!(!state.castling_rights().has(Color::Black, false));
        assert!(state.castling_rights().has(Color::Black, true));
    }

    #[test]
    fn test_castling_relocates_rook() {
        let state =
            MatchState::from_fen("m", "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let state = state.apply_uci(Color::White, "e1g1").unwrap();
        assert_eq!(
            state.board().piece_at(Square(0, 6)),
            Some((Color::White, Piece::King))
        );
        assert_eq!(
            state.board().piece_at(Square(0, 5)),
            Some((Color::White, Piece::Rook))
        );
        assert!(state.board().is_empty(Square(0, 7)));
        assert!(state.board().is_empty(Square(0, 4)));
    }

    #[test]
    fn test_en_passant_capture_removes_bystander_pawn() {
        let state = MatchState::from_fen(
            "m",
            "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
        )
        .unwrap();
        let state = state.apply_uci(Color::White, "e5d6").unwrap();
        assert!(state.board().is_empty(Square(4, 3))); // d5 victim gone
        assert_eq!(
            state.board().piece_at(Square(5, 3)),
            Some((Color::White, Piece::Pawn))
        );
    }

    #[test]
    fn test_promotion_places_chosen_piece() {
        let state = MatchState::from_fen("m", "8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let state = state.apply_uci(Color::White, "a7a8n").unwrap();
        assert_eq!(
            state.board().piece_at(Square(7, 0)),
            Some((Color::White, Piece::Knight))
        );
    }

    #[test]
    fn test_wrong_turn_rejected() {
        let result = start().apply_uci(Color::Black, "e7e5");
        assert!(matches!(result, Err(MatchError::WrongTurn)));
    }

    #[test]
    fn test_illegal_move_rejected_state_unchanged() {
        let state = start();
        let before = state.to_fen();
        let result = state.apply_uci(Color::White, "e2e5");
        assert!(matches!(
            result,
            Err(MatchError::Move(MoveError::Illegal { .. }))
        ));
        assert_eq!(state.to_fen(), before);
    }

    #[test]
    fn test_underpromotion_not_upgraded() {
        let state = MatchState::from_fen("m", "8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let rook = state
            .legal_moves()
            .into_iter()
            .find(|m| m.promotion == Some(Piece::Rook))
            .unwrap();
        let next = state.apply_move(&rook).unwrap();
        assert_eq!(next.board().piece_on(Square(7, 0)), Some(Piece::Rook));
    }

    #[test]
    fn test_check_flag_follows_new_active_color() {
        let state = start()
            .apply_uci(Color::White, "e2e4")
            .unwrap()
            .apply_uci(Color::Black, "f7f6")
            .unwrap()
            .apply_uci(Color::White, "d1h5")
            .unwrap();
        assert!(state.is_in_check());
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_scholars_mate_classified() {
        let state = start()
            .apply_uci(Color::White, "e2e4")
            .unwrap()
            .apply_uci(Color::Black, "e7e5")
            .unwrap()
            .apply_uci(Color::White, "f1c4")
            .unwrap()
            .apply_uci(Color::Black, "b8c6")
            .unwrap()
            .apply_uci(Color::White, "d1h5")
            .unwrap()
            .apply_uci(Color::Black, "g8f6")
            .unwrap()
            .apply_uci(Color::White, "h5f7")
            .unwrap();
        assert_eq!(state.status(), GameStatus::WhiteWins);
        assert!(state.is_in_check());
        assert!(state.legal_moves().is_empty());
    }
}
