//! Attack-detection tests.

use crate::board::{attacks, movegen, Board, Color, FenData, Piece, Square};

fn board(fen: &str) -> Board {
    FenData::decode(fen).unwrap().board
}

#[test]
fn test_pawn_attacks_diagonals_only() {
    let board = board("8/8/8/8/4P3/8/8/8 w - - 0 1");
    assert!(attacks::is_attacked(&board, Square(4, 3), Color::White)); // d5
    assert!(attacks::is_attacked(&board, Square(4, 5), Color::White)); // f5
    assert!(!attacks::is_attacked(&board, Square(4, 4), Color::White)); // e5 push square
    assert!(!attacks::is_attacked(&board, Square(2, 4), Color::White)); // behind
}

#[test]
fn test_black_pawn_attacks_downward() {
    let board = board("8/8/8/3p4/8/8/8/8 w - - 0 1");
    assert!(attacks::is_attacked(&board, Square(3, 2), Color::Black)); // c4
    assert!(attacks::is_attacked(&board, Square(3, 4), Color::Black)); // e4
    assert!(!attacks::is_attacked(&board, Square(5, 2), Color::Black));
}

#[test]
fn test_knight_attack_pattern() {
    let board = board("8/8/8/8/8/2N5/8/8 w - - 0 1");
    assert!(attacks::is_attacked(&board, Square(4, 3), Color::White)); // d5
    assert!(attacks::is_attacked(&board, Square(0, 1), Color::White)); // b1
    assert!(!attacks::is_attacked(&board, Square(3, 2), Color::White)); // c4
}

#[test]
fn test_rook_ray_blocked_by_first_piece() {
    let board = board("8/8/8/p7/p7/8/8/R7 w - - 0 1");
    assert!(attacks::is_attacked(&board, Square(3, 0), Color::White)); // a4 blocker
    assert!(!attacks::is_attacked(&board, Square(4, 0), Color::White)); // a5 shadowed
    assert!(attacks::is_attacked(&board, Square(0, 7), Color::White)); // h1
}

#[test]
fn test_bishop_attacks_diagonal_not_straight() {
    let board = board("8/8/8/3B4/8/8/8/8 w - - 0 1");
    assert!(attacks::is_attacked(&board, Square(7, 0), Color::White)); // a8
    assert!(attacks::is_attacked(&board, Square(0, 7), Color::White)); // h1
    assert!(!attacks::is_attacked(&board, Square(4, 0), Color::White)); // same rank
}

#[test]
fn test_queen_attacks_both_ray_kinds() {
    let board = board("8/8/8/3Q4/8/8/8/8 w - - 0 1");
    assert!(attacks::is_attacked(&board, Square(4, 0), Color::White)); // along rank 5
    assert!(attacks::is_attacked(&board, Square(0, 7), Color::White)); // h1 diagonal
}

#[test]
fn test_king_attacks_adjacent_squares_only() {
    let board = board("8/8/8/8/8/8/8/4K3 w - - 0 1");
    assert!(attacks::is_attacked(&board, Square(1, 4), Color::White)); // e2
    assert!(attacks::is_attacked(&board, Square(1, 5), Color::White)); // f2
    assert!(!attacks::is_attacked(&board, Square(2, 4), Color::White)); // e3
}

#[test]
fn test_is_in_check_detects_attacked_king() {
    let quiet = board("4k3/8/8/8/8/8/8/4KR2 w - - 0 1");
    assert!(!attacks::is_in_check(&quiet, Color::White));
    assert!(!attacks::is_in_check(&quiet, Color::Black)); // f1 rook does not see e8

    let off_file = board("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    assert!(!attacks::is_in_check(&off_file, Color::Black));

    let checked = board("4k3/8/8/8/8/8/8/4R3 w - - 0 1");
    assert!(attacks::is_in_check(&checked, Color::Black));
}

#[test]
fn test_kingless_board_is_never_in_check() {
    let board = board("8/8/8/8/8/8/8/4R3 w - - 0 1");
    assert!(!attacks::is_in_check(&board, Color::Black));
}

/// For every piece kind except pawns, a square is attacked exactly when
/// some piece of that color lists it among its pseudo-move destinations.
#[test]
fn test_attack_move_symmetry_for_non_pawns() {
    let board = board("r3k3/8/8/3q4/8/2N5/8/R3K1N1 w - - 0 1");

    for color in [Color::White, Color::Black] {
        let mut destinations = Vec::new();
        for rank in 0..8 {
            for file in 0..8 {
                let from = Square(rank, file);
                if let Some((owner, piece)) = board.piece_at(from) {
                    if owner == color {
                        assert_ne!(piece, Piece::Pawn, "fixture must stay pawn-free");
                        movegen::pseudo_moves(&board, from, color, piece, None, &mut destinations);
                    }
                }
            }
        }

        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                // Own-occupied squares are defended but never move targets.
                if board.color_on(sq) == Some(color) {
                    continue;
                }
                let reachable = destinations.iter().any(|mv| mv.to == sq);
                assert_eq!(
                    attacks::is_attacked(&board, sq, color),
                    reachable,
                    "symmetry violated on {sq} for {color}"
                );
            }
        }
    }
}

/// Pawns break the symmetry: the diagonal is attacked even when no capture
/// is available there.
#[test]
fn test_pawn_attack_without_capture_target() {
    let board = board("8/8/8/8/4P3/8/8/8 w - - 0 1");
    let mut moves = Vec::new();
    movegen::pseudo_moves(&board, Square(3, 4), Color::White, Piece::Pawn, None, &mut moves);
    assert!(moves.iter().all(|mv| mv.to != Square(4, 3)));
    assert!(attacks::is_attacked(&board, Square(4, 3), Color::White));
}
