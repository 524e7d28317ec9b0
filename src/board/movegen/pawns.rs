use super::{Board, Color, Move, Piece, Square, PROMOTION_PIECES};

/// Pawn pushes, double pushes, captures, en passant, and promotions.
pub(super) fn pawn_moves(
    board: &Board,
    from: Square,
    color: Color,
    en_passant: Option<Square>,
    out: &mut Vec<Move>,
) {
    let dir = color.pawn_direction();

    if let Some(forward) = from.offset(dir, 0) {
        if board.is_empty(forward) {
            push_pawn(out, from, forward, color, None);
            if from.rank() == color.pawn_start_rank() {
                // offset stays on the board: the double push starts from the
                // second rank.
                if let Some(double) = from.offset(2 * dir, 0) {
                    if board.is_empty(double) {
                        out.push(Move::quiet(from, double, color, Piece::Pawn));
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        let Some(to) = from.offset(dir, df) else {
            continue;
        };
        if let Some((owner, victim)) = board.piece_at(to) {
            if owner != color {
                push_pawn(out, from, to, color, Some(victim));
            }
        } else if Some(to) == en_passant {
            out.push(Move::en_passant(from, to, color));
        }
    }
}

/// Record a pawn arrival, expanding it into one candidate per promotion
/// piece when `to` is the farthest rank.
fn push_pawn(out: &mut Vec<Move>, from: Square, to: Square, color: Color, victim: Option<Piece>) {
    if to.rank() == color.pawn_promotion_rank() {
        for promoted in PROMOTION_PIECES {
            out.push(Move::promotion(from, to, color, promoted, victim));
        }
    } else if let Some(victim) = victim {
        out.push(Move::capture(from, to, color, Piece::Pawn, victim));
    } else {
        out.push(Move::quiet(from, to, color, Piece::Pawn));
    }
}
