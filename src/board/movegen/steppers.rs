use super::super::attacks::{KING_TARGETS, KNIGHT_TARGETS};
use super::{Board, Color, Move, Piece, Square};

pub(super) fn knight_moves(
    board: &Board,
    from: Square,
    color: Color,
    _en_passant: Option<Square>,
    out: &mut Vec<Move>,
) {
    step_moves(board, from, color, Piece::Knight, &KNIGHT_TARGETS[from.index()], out);
}

/// One-square king moves only; castling is generated separately.
pub(super) fn king_moves(
    board: &Board,
    from: Square,
    color: Color,
    _en_passant: Option<Square>,
    out: &mut Vec<Move>,
) {
    step_moves(board, from, color, Piece::King, &KING_TARGETS[from.index()], out);
}

fn step_moves(
    board: &Board,
    from: Square,
    color: Color,
    piece: Piece,
    targets: &[Square],
    out: &mut Vec<Move>,
) {
    for &to in targets {
        match board.piece_at(to) {
            None => out.push(Move::quiet(from, to, color, piece)),
            Some((owner, victim)) => {
                if owner != color {
                    out.push(Move::capture(from, to, color, piece, victim));
                }
            }
        }
    }
}
