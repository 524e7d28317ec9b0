//! Board value type: piece placement plus the log of applied moves.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Move, Piece, Square};

/// An 8x8 mailbox mapping squares to pieces, plus the ordered move log.
///
/// A board is a value: cloning yields an independent copy, which is how the
/// legality filter simulates candidate moves without touching the original.
/// The board knows nothing about whose turn it is or which rights remain;
/// that metadata lives with the match state and is passed to the rules
/// functions explicitly.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Option<(Color, Piece)>; 8]; 8], // [rank][file]
    log: Vec<Move>,
}

impl Board {
    /// Board with the standard initial layout and an empty log.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Color::White, *piece);
            board.set_piece(Square(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square(7, file), Color::Black, *piece);
            board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }
        board
    }

    /// Board with no pieces and an empty log.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            log: Vec::new(),
        }
    }

    /// The piece standing on `sq`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.rank()][sq.file()]
    }

    /// Just the piece kind on `sq` (without color).
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Just the color of the piece on `sq`.
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    /// True when `sq` holds no piece.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.rank()][sq.file()] = Some((color, piece));
    }

    pub(crate) fn remove_piece(&mut self, sq: Square) {
        self.squares[sq.rank()][sq.file()] = None;
    }

    /// Locate `color`'s king, if present.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                if self.piece_at(sq) == Some((color, Piece::King)) {
                    return Some(sq);
                }
            }
        }
        None
    }

    /// The ordered log of moves applied to this board.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.log
    }

    /// The last applied move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.log.last()
    }

    /// Apply `mv` to this board in place and record it in the log.
    ///
    /// The move must come from the generator for this position; the board
    /// trusts its metadata. En passant removes the victim pawn beside the
    /// destination, and castling relocates the rook as well as the king.
    pub fn apply_move(&mut self, mv: &Move) {
        if mv.is_en_passant {
            // The victim pawn sits on the from-rank, under the destination.
            self.remove_piece(Square(mv.from.rank(), mv.to.file()));
        } else if mv.captured.is_some() {
            self.remove_piece(mv.to);
        }

        self.remove_piece(mv.from);
        let landed = mv.promotion.unwrap_or(mv.piece);
        self.set_piece(mv.to, mv.color, landed);

        if mv.is_castling {
            let rank = mv.from.rank();
            let (rook_from, rook_to) = if mv.to.file() == 6 {
                (Square(rank, 7), Square(rank, 5))
            } else {
                (Square(rank, 0), Square(rank, 3))
            };
            self.remove_piece(rook_from);
            self.set_piece(rook_to, mv.color, Piece::Rook);
        }

        self.log.push(*mv);
    }

    /// Independent copy of this board with `mv` applied.
    ///
    /// This is the simulation primitive behind the legality filter: the
    /// original board is never aliased or mutated.
    #[must_use]
    pub fn with_move_applied(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
