use super::super::attacks::{BISHOP_DIRS, QUEEN_DIRS, ROOK_DIRS};
use super::{Board, Color, Move, Piece, Square};

pub(super) fn bishop_moves(
    board: &Board,
    from: Square,
    color: Color,
    _en_passant: Option<Square>,
    out: &mut Vec<Move>,
) {
    ray_moves(board, from, color, Piece::Bishop, &BISHOP_DIRS, out);
}

pub(super) fn rook_moves(
    board: &Board,
    from: Square,
    color: Color,
    _en_passant: Option<Square>,
    out: &mut Vec<Move>,
) {
    ray_moves(board, from, color, Piece::Rook, &ROOK_DIRS, out);
}

pub(super) fn queen_moves(
    board: &Board,
    from: Square,
    color: Color,
    _en_passant: Option<Square>,
    out: &mut Vec<Move>,
) {
    ray_moves(board, from, color, Piece::Queen, &QUEEN_DIRS, out);
}

/// Walk each ray until the board edge or the first occupied square; an
/// enemy occupant is a capture and always ends the ray.
fn ray_moves(
    board: &Board,
    from: Square,
    color: Color,
    piece: Piece,
    directions: &[(isize, isize)],
    out: &mut Vec<Move>,
) {
    for &(dr, df) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(dr, df) {
            cursor = to;
            match board.piece_at(to) {
                None => out.push(Move::quiet(from, to, color, piece)),
                Some((owner, victim)) => {
                    if owner != color {
                        out.push(Move::capture(from, to, color, piece, victim));
                    }
                    break;
                }
            }
        }
    }
}
