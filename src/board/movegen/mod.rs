//! Legal move generation.
//!
//! Pseudo-legal candidates are produced per piece kind through a dispatch
//! table, castling is generated separately, and legality is settled by the
//! one filter the engine has: apply the candidate to a board copy and ask
//! the attack detector whether the mover's king is exposed. Pinned pieces
//! fall out of that filter; there is no separate pin analysis.

mod castling;
mod pawns;
mod sliders;
mod steppers;

use super::types::PROMOTION_PIECES;
use super::{attacks, Board, CastlingRights, Color, GameStatus, Move, Piece, Square};

pub(crate) use castling::castling_moves;

/// Candidate generator for one piece kind.
type Mover = fn(&Board, Square, Color, Option<Square>, &mut Vec<Move>);

/// Dispatch table indexed by `Piece::index()`; one entry per kind keeps the
/// per-piece branching in a single place.
const PIECE_MOVERS: [Mover; 6] = [
    pawns::pawn_moves,
    steppers::knight_moves,
    sliders::bishop_moves,
    sliders::rook_moves,
    sliders::queen_moves,
    steppers::king_moves,
];

/// Append the pseudo-legal moves of the `color` `piece` standing on `from`.
///
/// Board occupancy and movement patterns only; whether the mover's king is
/// left attacked is the legality filter's concern.
pub fn pseudo_moves(
    board: &Board,
    from: Square,
    color: Color,
    piece: Piece,
    en_passant: Option<Square>,
    out: &mut Vec<Move>,
) {
    PIECE_MOVERS[piece.index()](board, from, color, en_passant, out);
}

/// Every legal move for `color` in this position.
#[must_use]
pub fn generate_legal(
    board: &Board,
    color: Color,
    rights: CastlingRights,
    en_passant: Option<Square>,
) -> Vec<Move> {
    let mut pseudo = Vec::with_capacity(64);
    for rank in 0..8 {
        for file in 0..8 {
            let from = Square(rank, file);
            if let Some((owner, piece)) = board.piece_at(from) {
                if owner == color {
                    pseudo_moves(board, from, color, piece, en_passant, &mut pseudo);
                }
            }
        }
    }
    castling_moves(board, color, rights, &mut pseudo);

    pseudo
        .into_iter()
        .filter(|mv| !leaves_king_exposed(board, mv, color))
        .collect()
}

/// Legal moves whose source square is `square`.
#[must_use]
pub fn legal_moves_from(
    board: &Board,
    color: Color,
    rights: CastlingRights,
    en_passant: Option<Square>,
    square: Square,
) -> Vec<Move> {
    generate_legal(board, color, rights, en_passant)
        .into_iter()
        .filter(|mv| mv.from == square)
        .collect()
}

/// Classify the position for the side to move.
///
/// Any legal move means the game is still running; otherwise a checked king
/// is mate (the opponent wins) and an unchecked one is stalemate. The
/// classifier never yields [`GameStatus::Draw`]; draw adjudication is the
/// caller's concern.
#[must_use]
pub fn classify(
    board: &Board,
    color: Color,
    rights: CastlingRights,
    en_passant: Option<Square>,
) -> GameStatus {
    if !generate_legal(board, color, rights, en_passant).is_empty() {
        return GameStatus::InProgress;
    }
    if attacks::is_in_check(board, color) {
        match color {
            Color::White => GameStatus::BlackWins,
            Color::Black => GameStatus::WhiteWins,
        }
    } else {
        GameStatus::Stalemate
    }
}

/// Simulate `mv` on a copy and test whether `color`'s king ends up attacked.
fn leaves_king_exposed(board: &Board, mv: &Move, color: Color) -> bool {
    attacks::is_in_check(&board.with_move_applied(mv), color)
}
