//! Attack detection.
//!
//! Answers "is this square attacked by that color" by scanning outward from
//! the target square, the inverse of move generation: two pawn squares, the
//! knight offset table, then the eight rays where the first occupied square
//! settles the question. This one primitive backs both check detection and
//! castling-path safety, so the two can never disagree.

use once_cell::sync::Lazy;

use super::{Board, Color, Piece, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const ROOK_DIRS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub(crate) const BISHOP_DIRS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub(crate) const QUEEN_DIRS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

fn step_table(offsets: [(isize, isize); 8]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square(idx / 8, idx % 8);
        offsets
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect()
    })
}

/// In-bounds knight destinations per square.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| step_table(KNIGHT_OFFSETS));

/// In-bounds king destinations per square.
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| step_table(KING_OFFSETS));

/// Is `square` attacked by any piece of color `by`?
#[must_use]
pub fn is_attacked(board: &Board, square: Square, by: Color) -> bool {
    // Pawns: an attacking pawn stands one rank behind the target, relative
    // to its own pushing direction.
    let dir = by.pawn_direction();
    for df in [-1, 1] {
        if let Some(origin) = square.offset(-dir, df) {
            if board.piece_at(origin) == Some((by, Piece::Pawn)) {
                return true;
            }
        }
    }

    // Knights.
    for &origin in &KNIGHT_TARGETS[square.index()] {
        if board.piece_at(origin) == Some((by, Piece::Knight)) {
            return true;
        }
    }

    // Sliders and the enemy king: walk each ray until a piece blocks it.
    for &(dr, df) in &QUEEN_DIRS {
        let straight = dr == 0 || df == 0;
        let mut steps = 0;
        let mut cursor = square;
        while let Some(next) = cursor.offset(dr, df) {
            cursor = next;
            steps += 1;
            if let Some((color, piece)) = board.piece_at(cursor) {
                if color == by {
                    if straight && piece.attacks_straight() {
                        return true;
                    }
                    if !straight && piece.attacks_diagonally() {
                        return true;
                    }
                    if piece == Piece::King && steps == 1 {
                        return true;
                    }
                }
                break;
            }
        }
    }

    false
}

/// Is `color`'s king currently attacked?
///
/// A board with no king for `color` is reported as not in check; the rules
/// functions stay total on arbitrary decoded positions.
#[must_use]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king_sq) => is_attacked(board, king_sq, color.opponent()),
        None => false,
    }
}
